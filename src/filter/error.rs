use crate::fsutil;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to check project ownership: {0}")]
    ExistenceCheck(#[from] fsutil::ExistenceCheckError),
    #[error(transparent)]
    ReadDir(#[from] fsutil::ReadDirError),
}

pub type Result<T> = std::result::Result<T, Error>;
