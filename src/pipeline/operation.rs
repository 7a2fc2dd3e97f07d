/// Binary integer operation applied between a character value and the key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Encryption
    Add,
    /// Decryption
    Subtract,
}

impl Operation {
    pub fn apply(self, value: i64, key: i64) -> i64 {
        match self {
            Self::Add => value + key,
            Self::Subtract => value - key,
        }
    }
}
