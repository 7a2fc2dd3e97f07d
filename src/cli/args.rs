use crate::cli::resolve_input;
use crate::config::{Algorithm, Config, Mode};
use crate::error::{CipherError, Result};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Build a [`Config`] from `-flag value` pairs
///
/// Pairs are applied in order and later flags override earlier ones.
/// `-data` and `-in` both set the text, so whichever comes last wins.
/// `-in` reads its file as soon as the flag is reached, which means a
/// missing file reports to `out` even when a later `-data` replaces it.
/// Unknown flags are ignored. Any `-mode` other than `dec` encrypts, and
/// an unknown `-alg` leaves no algorithm selected.
pub fn parse_args<S: AsRef<str>, W: Write>(args: &[S], out: &mut W) -> Result<Config> {
    if args.len() % 2 != 0 {
        return Err(CipherError::OddArgumentCount(args.len()));
    }

    let mut config = Config::default();
    for pair in args.chunks_exact(2) {
        let (flag, value) = (pair[0].as_ref(), pair[1].as_ref());
        match flag {
            "-mode" => config.mode = Mode::from_flag(value),
            "-alg" => config.algorithm = Algorithm::from_flag(value),
            "-key" => config.key = parse_key(value)?,
            "-data" => config.text = value.to_string(),
            "-in" => config.text = resolve_input(Path::new(value), out)?,
            "-out" => {
                config.output = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                }
            }
            other => log::debug!("ignoring unknown flag {:?}", other),
        }
    }

    Ok(config)
}

fn parse_key(value: &str) -> Result<i32> {
    value
        .parse()
        .map_err(|_| CipherError::InvalidKey(value.to_string()))
}
