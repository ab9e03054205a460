use std::fmt;

mod error;

pub use error::{Error, Result};

/// Character the container runtime prepends to every container name.
pub const NAME_PREFIX: char = '/';

/// A single port mapping of a container.
///
/// A `public_port` of `0` means the container port is not published on the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublishedPort {
    pub container_port: u16,
    pub public_port: u16,
}

impl PublishedPort {
    pub fn new(container_port: u16, public_port: u16) -> Self {
        Self {
            container_port,
            public_port,
        }
    }

    pub fn is_published(&self) -> bool {
        self.public_port != 0
    }
}

/// A point-in-time view of one running container as reported by the runtime.
///
/// # Examples
///
/// ```
/// # use drud_local::container::{ContainerFact, PublishedPort};
/// let fact = ContainerFact::new(
///     vec!["/legacy-acme-prod-web".to_owned()],
///     vec![PublishedPort::new(80, 0), PublishedPort::new(80, 8080)],
///     "running",
/// )
/// .unwrap();
/// assert_eq!(fact.canonical_name(), "legacy-acme-prod-web");
/// assert_eq!(fact.public_port(), Some(8080));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerFact {
    names: Vec<String>,
    published_ports: Vec<PublishedPort>,
    state: String,
}

impl ContainerFact {
    /// Creates a new `ContainerFact`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingName`] if `names` is empty, or [`Error::InvalidName`] if the
    /// canonical name is empty once the runtime prefix is stripped.
    pub fn new(
        names: Vec<String>,
        published_ports: Vec<PublishedPort>,
        state: impl Into<String>,
    ) -> Result<Self> {
        let Some(first) = names.first() else {
            return Err(Error::MissingName);
        };
        if strip_prefix(first).is_empty() {
            return Err(Error::InvalidName(first.clone()));
        }

        Ok(Self {
            names,
            published_ports,
            state: state.into(),
        })
    }

    /// All names of the container exactly as reported by the runtime.
    pub fn raw_names(&self) -> &[String] {
        &self.names
    }

    /// The first name of the container with the runtime prefix stripped.
    pub fn canonical_name(&self) -> &str {
        strip_prefix(&self.names[0])
    }

    pub fn published_ports(&self) -> &[PublishedPort] {
        &self.published_ports
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == "running"
    }

    /// Returns the first published host port of the container.
    ///
    /// Later published ports are ignored, even if there are several.
    pub fn public_port(&self) -> Option<u16> {
        self.published_ports
            .iter()
            .find(|port| port.is_published())
            .map(|port| port.public_port)
    }
}

impl fmt::Display for ContainerFact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.canonical_name(), self.state)
    }
}

/// Strips a single leading [`NAME_PREFIX`] from a raw container name.
pub fn strip_prefix(raw: &str) -> &str {
    raw.strip_prefix(NAME_PREFIX).unwrap_or(raw)
}
