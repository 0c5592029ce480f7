use thiserror::Error;

pub type Result<T> = std::result::Result<T, ParseError>;

/// Why a brick record could not be read. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("line {line}: expected two corners separated by '~'")]
    MissingDelimiter { line: usize },

    #[error("line {line}: expected 3 coordinates per corner, found {found}")]
    WrongArity { line: usize, found: usize },

    #[error("line {line}: invalid coordinate {value:?}")]
    InvalidInteger { line: usize, value: String },

    #[error("line {line}: z = {z} is below ground level")]
    BelowGround { line: usize, z: i32 },
}
