use crate::pipeline::Operation;

/// Alphabet the shift cipher rotates over
pub const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Caesar-shift every ASCII letter in `message` by `key` positions
///
/// Letters keep their case. Anything that is not `a-z` or `A-Z` (digits,
/// punctuation, whitespace, non-ASCII letters) is copied through unchanged.
/// The rotated index is reduced with a Euclidean remainder, so keys of any
/// size and sign wrap correctly and `Add`/`Subtract` with the same key
/// always undo each other.
pub fn shift(message: &str, key: i32, operation: Operation) -> String {
    message
        .chars()
        .map(|ch| shift_char(ch, key, operation))
        .collect()
}

fn shift_char(ch: char, key: i32, operation: Operation) -> char {
    if !ch.is_ascii_alphabetic() {
        return ch;
    }

    let len = ALPHABET.len() as i64;
    let index = i64::from(ch.to_ascii_lowercase() as u8 - b'a');
    let rotated = operation.apply(index, i64::from(key)).rem_euclid(len);
    // rem_euclid keeps rotated in 0..26
    let letter = ALPHABET[rotated as usize] as char;

    if ch.is_ascii_uppercase() {
        letter.to_ascii_uppercase()
    } else {
        letter
    }
}
