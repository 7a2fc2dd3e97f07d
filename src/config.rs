use crate::pipeline::Operation;
use serde::Serialize;
use std::path::PathBuf;

/// Direction of the transform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Enc,
    Dec,
}

impl Mode {
    /// Integer operation applied to every character in this mode
    pub fn operation(self) -> Operation {
        match self {
            Self::Enc => Operation::Add,
            Self::Dec => Operation::Subtract,
        }
    }

    /// Only the exact value `dec` decrypts; anything else encrypts
    pub fn from_flag(value: &str) -> Self {
        match value {
            "dec" => Self::Dec,
            _ => Self::Enc,
        }
    }
}

/// Cipher algorithm options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Caesar rotation over a-z, case preserving
    #[default]
    Shift,
    /// Raw code point shift
    Unicode,
}

impl Algorithm {
    /// Exact, case-sensitive lookup; `None` for an unknown name
    pub fn from_flag(value: &str) -> Option<Self> {
        match value {
            "shift" => Some(Self::Shift),
            "unicode" => Some(Self::Unicode),
            _ => None,
        }
    }
}

/// Configuration for a single run, built once from the argument pairs
/// and not modified afterwards
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    pub mode: Mode,
    /// `None` when `-alg` named an unknown algorithm; nothing is transformed
    pub algorithm: Option<Algorithm>,
    pub key: i32,
    /// Text to transform, from `-data` or the contents of `-in`
    pub text: String,
    /// Output file; `None` writes to stdout
    pub output: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            algorithm: Some(Algorithm::default()),
            key: 0,
            text: String::new(),
            output: None,
        }
    }
}

impl Config {
    pub fn operation(&self) -> Operation {
        self.mode.operation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.mode, Mode::Enc);
        assert_eq!(config.algorithm, Some(Algorithm::Shift));
        assert_eq!(config.key, 0);
        assert!(config.text.is_empty());
        assert!(config.output.is_none());
    }

    #[test]
    fn test_mode_only_exact_dec_decrypts() {
        assert_eq!(Mode::from_flag("dec"), Mode::Dec);
        assert_eq!(Mode::from_flag("enc"), Mode::Enc);
        assert_eq!(Mode::from_flag("DEC"), Mode::Enc);
        assert_eq!(Mode::from_flag("decrypt"), Mode::Enc);
        assert_eq!(Mode::from_flag(""), Mode::Enc);
    }

    #[test]
    fn test_algorithm_lookup() {
        assert_eq!(Algorithm::from_flag("shift"), Some(Algorithm::Shift));
        assert_eq!(Algorithm::from_flag("unicode"), Some(Algorithm::Unicode));
        assert_eq!(Algorithm::from_flag("Unicode"), None);
        assert_eq!(Algorithm::from_flag("rot13"), None);
    }

    #[test]
    fn test_mode_selects_operation() {
        assert_eq!(Mode::Enc.operation(), Operation::Add);
        assert_eq!(Mode::Dec.operation(), Operation::Subtract);
    }

    #[test]
    fn test_config_serializes_lowercase() {
        let config = Config {
            mode: Mode::Dec,
            algorithm: Some(Algorithm::Unicode),
            key: -3,
            text: "Hi".into(),
            output: Some(PathBuf::from("out.txt")),
        };
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["mode"], "dec");
        assert_eq!(json["algorithm"], "unicode");
        assert_eq!(json["key"], -3);
        assert_eq!(json["text"], "Hi");
        assert_eq!(json["output"], "out.txt");

        let unknown = Config {
            algorithm: None,
            ..Default::default()
        };
        assert!(serde_json::to_value(&unknown).unwrap()["algorithm"].is_null());
    }
}
