#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("container has no names")]
    MissingName,
    #[error("invalid container name: {0:?}")]
    InvalidName(String),
}
pub type Result<T> = std::result::Result<T, Error>;
