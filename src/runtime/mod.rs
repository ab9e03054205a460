//! Access to the container runtime.
//!
//! The rest of the crate only ever reads the list of running containers through
//! [`ContainerSource`]. [`DockerSource`] is the implementation backed by the Docker Engine API.
mod docker;
mod error;

pub use docker::DockerSource;
pub use error::{Error, Result};

use crate::container::ContainerFact;

pub trait ContainerSource {
    /// Returns a fresh snapshot of the running containers, unfiltered.
    fn list_containers(&self) -> Result<Vec<ContainerFact>>;
}

impl<S: ContainerSource + ?Sized> ContainerSource for &S {
    fn list_containers(&self) -> Result<Vec<ContainerFact>> {
        (**self).list_containers()
    }
}
