//! Folds container facts into per-application records.
//!
//! Every site consists of several containers. Each container contributes its published
//! port and its state to the record of the application it belongs to:
//!
//! - the first published port of a `web` container becomes the record's web port,
//!   the first published port of a `db` container its database port;
//! - any container that is not `running` overwrites the record's status with its own state,
//!   a running container never writes the status.
//!
//! An [`Inventory`] is built from a single snapshot and holds no state across calls.
mod record;

use std::collections::BTreeMap;

pub use record::{ApplicationId, ApplicationRecord};

use crate::container::ContainerFact;
use crate::naming::{self, ContainerName, NamingScheme, Role};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Inventory {
    records: BTreeMap<ApplicationId, ApplicationRecord>,
}

impl Inventory {
    /// Builds an inventory from a snapshot of container facts.
    ///
    /// Each fact contributes through the first of its names that follows a known naming
    /// scheme. Facts without such a name are skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// # use drud_local::container::{ContainerFact, PublishedPort};
    /// # use drud_local::inventory::{ApplicationId, Inventory};
    /// let facts = vec![
    ///     ContainerFact::new(vec!["/legacy-acme-prod-web".into()], vec![PublishedPort::new(80, 8080)], "running").unwrap(),
    ///     ContainerFact::new(vec!["/legacy-acme-prod-db".into()], vec![PublishedPort::new(3306, 3306)], "running").unwrap(),
    /// ];
    /// let inventory = Inventory::aggregate(&facts);
    /// let record = inventory.get(&ApplicationId::legacy("acme", "prod")).unwrap();
    /// assert_eq!(record.web_public_port, Some(8080));
    /// assert_eq!(record.db_public_port, Some(3306));
    /// assert_eq!(record.status, "running");
    /// ```
    pub fn aggregate<'a>(facts: impl IntoIterator<Item = &'a ContainerFact>) -> Self {
        let mut inventory = Self::default();
        for fact in facts {
            match fact.raw_names().iter().find_map(|raw| naming::classify(raw)) {
                Some(name) => inventory.upsert(&name, fact),
                None => log::trace!("Skipping unrecognized container {}", fact),
            }
        }
        inventory
    }

    /// Merges a single classified container fact into the inventory.
    pub fn upsert(&mut self, name: &ContainerName<'_>, fact: &ContainerFact) {
        let record = self
            .records
            .entry(ApplicationId::from_name(name))
            .or_insert_with(|| ApplicationRecord::new(name, fact.state()));

        match name.role {
            Role::Web => record.web_public_port = fact.public_port(),
            Role::Db => record.db_public_port = fact.public_port(),
            Role::Other(_) => {}
        }

        if !fact.is_running() {
            record.status = fact.state().to_owned();
        }
    }

    pub fn get(&self, id: &ApplicationId) -> Option<&ApplicationRecord> {
        self.records.get(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over all records, ordered by scheme and then by key.
    pub fn iter(&self) -> impl Iterator<Item = (&ApplicationId, &ApplicationRecord)> {
        self.records.iter()
    }

    /// Iterates over the records of a single naming scheme.
    pub fn scheme(&self, scheme: NamingScheme) -> impl Iterator<Item = &ApplicationRecord> {
        self.records
            .iter()
            .filter(move |(id, _)| id.scheme() == scheme)
            .map(|(_, record)| record)
    }

    pub fn count(&self, scheme: NamingScheme) -> usize {
        self.scheme(scheme).count()
    }
}
