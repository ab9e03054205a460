use bollard::Docker;
use bollard::query_parameters::ListContainersOptions;

use crate::container::{self, ContainerFact, PublishedPort};
use crate::error::ResultOkLogExt;

use super::{ContainerSource, Error, Result};

/// Lists containers through the Docker Engine API.
///
/// The API client is async, so the source owns a current-thread runtime and blocks on every
/// request. Callers stay synchronous.
pub struct DockerSource {
    runtime: tokio::runtime::Runtime,
    client: Docker,
}

impl DockerSource {
    /// Connects to the local Docker daemon, honoring `DOCKER_HOST`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AsyncRuntime`] if the runtime can't be started, or [`Error::Connect`]
    /// if no client can be configured for the daemon.
    pub fn connect() -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(Error::AsyncRuntime)?;
        let client = {
            let _guard = runtime.enter();
            Docker::connect_with_local_defaults().map_err(Error::Connect)?
        };
        log::debug!("Connected to container runtime");

        Ok(Self { runtime, client })
    }
}

impl std::fmt::Debug for DockerSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DockerSource").finish_non_exhaustive()
    }
}

impl ContainerSource for DockerSource {
    fn list_containers(&self) -> Result<Vec<ContainerFact>> {
        let summaries = self
            .runtime
            .block_on(self.client.list_containers(None::<ListContainersOptions>))
            .map_err(Error::ListContainers)?;
        log::trace!("Container runtime reported {} containers", summaries.len());

        Ok(summaries
            .into_iter()
            .filter_map(|summary| {
                let ports = summary
                    .ports
                    .unwrap_or_default()
                    .into_iter()
                    .map(|port| (port.private_port, port.public_port));
                fact_from_parts(
                    summary.names,
                    ports,
                    summary.state.map(|state| state.to_string()),
                )
                .ok_log()
            })
            .collect())
    }
}

/// Builds a [`ContainerFact`] from the optional fields of a container summary.
fn fact_from_parts(
    names: Option<Vec<String>>,
    ports: impl Iterator<Item = (u16, Option<u16>)>,
    state: Option<String>,
) -> container::Result<ContainerFact> {
    let ports = ports
        .map(|(container_port, public_port)| {
            PublishedPort::new(container_port, public_port.unwrap_or(0))
        })
        .collect();

    ContainerFact::new(names.unwrap_or_default(), ports, state.unwrap_or_default())
}
