use crate::cli::{parse_args, write_output};
use crate::error::Result;
use crate::pipeline::transform;
use std::io::Write;

/// Run the whole pipeline for one invocation
///
/// parse (reading any `-in` file) → transform → write. Messages and
/// stdout output go to `out`. An odd argument count fails before
/// anything is written, and an unknown algorithm skips the transform
/// and writes no result.
pub fn run<S: AsRef<str>, W: Write>(args: &[S], out: &mut W) -> Result<()> {
    let config = parse_args(args, out)?;
    log::debug!("config: {}", serde_json::to_string(&config)?);

    match transform(&config, &config.text)? {
        Some(result) => write_output(&result, config.output.as_deref(), out),
        None => {
            log::debug!("no known algorithm selected, nothing to write");
            Ok(())
        }
    }
}
