use thiserror::Error;

/// An enum for possible errors that might occur while calculating hash values.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
pub enum PearsonError {
    /// The variant needs at least one byte of input.
    #[error("Key must not be empty.")]
    EmptyKey,
    /// RFC 3074 seeds the hash with the key length, which must fit in one byte.
    #[error("Key is {len} bytes long. RFC 3074 hashing accepts at most 255 bytes.")]
    KeyTooLong { len: usize },
}

impl PearsonError {
    /// Both variants are violations of an input length precondition.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, PearsonError::EmptyKey | PearsonError::KeyTooLong { .. })
    }
}

pub type Result<T> = std::result::Result<T, PearsonError>;
