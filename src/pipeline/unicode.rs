use crate::error::{CipherError, Result};
use crate::pipeline::Operation;

/// Shift the code point of every character in `message` by `key`
///
/// No alphabet restriction. A result that is not a Unicode scalar value
/// (negative, a surrogate, or above U+10FFFF) fails with
/// [`CipherError::InvalidCodePoint`].
pub fn unicode(message: &str, key: i32, operation: Operation) -> Result<String> {
    message
        .chars()
        .map(|ch| {
            let code = operation.apply(i64::from(u32::from(ch)), i64::from(key));
            u32::try_from(code)
                .ok()
                .and_then(char::from_u32)
                .ok_or(CipherError::InvalidCodePoint(code))
        })
        .collect()
}
