use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("'email' should not be empty or blank")]
    EmptyEmail,

    #[error("size needs to be between 1 and 512 pixels, got {0}")]
    SizeOutOfRange(u32),
}
