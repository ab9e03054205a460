//! Waiting for a container to publish a port.
//!
//! [`PortWatcher::get_port`] is a single query against the live container list.
//! [`PortWatcher::await_port`] repeats that query under a [`RetryPolicy`] until a port shows
//! up or the policy gives up, in which case the error of the final query is returned.
mod error;
mod retry;

pub use error::{Error, Result};
pub use retry::{DEFAULT_DELAY, DEFAULT_MAX_ATTEMPTS, RetryPolicy, Sleeper, ThreadSleeper};

use crate::runtime::ContainerSource;

#[derive(Debug)]
pub struct PortWatcher<S, C = ThreadSleeper> {
    source: S,
    policy: RetryPolicy,
    sleeper: C,
}

impl<S: ContainerSource> PortWatcher<S> {
    pub fn new(source: S, policy: RetryPolicy) -> Self {
        Self::with_sleeper(source, policy, ThreadSleeper)
    }
}

impl<S: ContainerSource, C: Sleeper> PortWatcher<S, C> {
    pub fn with_sleeper(source: S, policy: RetryPolicy, sleeper: C) -> Self {
        Self {
            source,
            policy,
            sleeper,
        }
    }

    /// Looks up the published port of a container once.
    ///
    /// Containers are checked in runtime order. Among those whose canonical name contains
    /// `name`, the first one with a published port and its first published port win.
    ///
    /// # Errors
    ///
    /// - [`Error::Runtime`] if the container list can't be fetched.
    /// - [`Error::NotReady`] if no matching container publishes a port.
    pub fn get_port(&self, name: &str) -> Result<u16> {
        let containers = self.source.list_containers()?;

        containers
            .iter()
            .filter(|fact| fact.canonical_name().contains(name))
            .find_map(|fact| fact.public_port())
            .ok_or_else(|| Error::NotReady {
                name: name.to_owned(),
            })
    }

    /// Waits until a container whose name contains `name` publishes a port.
    ///
    /// Every attempt queries a fresh container list. The calling thread sleeps for the
    /// policy's delay between failed attempts.
    ///
    /// # Errors
    ///
    /// Returns the error of the final attempt once the policy's attempts are used up.
    pub fn await_port(&self, name: &str) -> Result<u16> {
        let max_attempts = self.policy.max_attempts();
        let result = self.policy.run(&self.sleeper, |attempt| {
            let result = self.get_port(name);
            if let Err(err) = &result {
                log::debug!("Port lookup {attempt}/{max_attempts} for `{name}` failed: {err}");
            }
            result
        });

        match &result {
            Ok(port) => log::info!("Container `{name}` published port {port}"),
            Err(err) => {
                log::warn!("Gave up waiting for `{name}` after {max_attempts} attempts: {err}")
            }
        }
        result
    }
}
