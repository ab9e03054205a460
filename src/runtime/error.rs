#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to initialize async runtime: {0}")]
    AsyncRuntime(#[source] std::io::Error),
    #[error("failed to connect to container runtime: {0}")]
    Connect(#[source] bollard::errors::Error),
    #[error("failed to list containers: {0}")]
    ListContainers(#[source] bollard::errors::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
