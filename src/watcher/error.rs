use crate::runtime;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{name} container not ready")]
    NotReady { name: String },
    #[error(transparent)]
    Runtime(#[from] runtime::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
