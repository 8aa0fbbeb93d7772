use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Hex string must have an even length (got {len} digits)")]
    InvalidHexLength { len: usize },

    #[error("Invalid hex digit {found:?} at position {position}")]
    InvalidHexDigit { position: usize, found: char },
}

pub type Result<T> = std::result::Result<T, Error>;
