pub mod operation;
pub mod shift;
pub mod unicode;

pub use operation::*;
pub use shift::*;
pub use unicode::*;

use crate::config::{Algorithm, Config};
use crate::error::Result;

/// Apply the configured algorithm and direction to `text`
///
/// Returns `None` when the configuration names no known algorithm.
pub fn transform(config: &Config, text: &str) -> Result<Option<String>> {
    let operation = config.operation();
    match config.algorithm {
        Some(Algorithm::Shift) => Ok(Some(shift(text, config.key, operation))),
        Some(Algorithm::Unicode) => unicode(text, config.key, operation).map(Some),
        None => Ok(None),
    }
}
