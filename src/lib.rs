//! encdec - Shift and Unicode Substitution Cipher
//!
//! Encrypts or decrypts text with one of two substitution ciphers. Neither
//! offers any real secrecy.
//!
//! - **shift**: Caesar rotation of ASCII letters, case preserving; every
//!   other character passes through
//! - **unicode**: adds or subtracts the key from each character's code point
//!
//! ## Pipeline
//!
//! ```text
//! Args → Config (text from -data or -in) → Transform → stdout / -out file
//! ```
//!
//! Arguments are `-flag value` pairs: `-mode enc|dec`, `-alg shift|unicode`,
//! `-key N`, `-data TEXT`, `-in FILE`, `-out FILE`.
//!
//! ## Example
//!
//! ```
//! use encdec::cli::run;
//!
//! let mut out = Vec::<u8>::new();
//! run(&["-mode", "enc", "-key", "5", "-data", "abc"], &mut out).unwrap();
//! assert_eq!(out, b"fgh\n");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;

pub use config::{Algorithm, Config, Mode};
pub use error::{CipherError, Result};
pub use pipeline::{shift, transform, unicode, Operation};
