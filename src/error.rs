use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharSetError {
    #[error("Target character set cannot be empty")]
    Empty,
}
