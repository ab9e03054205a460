use std::path::Path;

use crate::filter::{self, ContainerFilter, LegacySchemeFilter, OwnershipFilter};
use crate::inventory::Inventory;
use crate::runtime::{self, ContainerSource};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Runtime(#[from] runtime::Error),
    #[error(transparent)]
    Filter(#[from] filter::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Which containers of a snapshot make it into a site listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Include containers without a local project directory.
    pub all: bool,
    /// Only include legacy containers.
    pub legacy_only: bool,
}

/// Takes a snapshot from `source`, filters it and aggregates it into an [`Inventory`].
///
/// # Errors
///
/// Returns an error if the snapshot can't be taken or an ownership check fails.
pub fn collect_inventory(
    source: &impl ContainerSource,
    base_dir: &Path,
    options: ListOptions,
) -> Result<Inventory> {
    let containers = source.list_containers()?;
    let total = containers.len();

    let containers = match (options.all, options.legacy_only) {
        (true, false) => containers,
        (true, true) => LegacySchemeFilter.apply(containers)?,
        (false, false) => OwnershipFilter::new(base_dir).apply(containers)?,
        (false, true) => OwnershipFilter::new(base_dir)
            .and(LegacySchemeFilter)
            .apply(containers)?,
    };
    log::debug!("Kept {} of {} containers", containers.len(), total);

    Ok(Inventory::aggregate(&containers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::{ContainerFact, PublishedPort};
    use crate::inventory::ApplicationId;
    use crate::naming::NamingScheme;

    struct Snapshot(Vec<ContainerFact>);

    impl ContainerSource for Snapshot {
        fn list_containers(&self) -> runtime::Result<Vec<ContainerFact>> {
            Ok(self.0.clone())
        }
    }

    fn fact(name: &str, port: u16, state: &str) -> ContainerFact {
        ContainerFact::new(
            vec![name.to_owned()],
            vec![PublishedPort::new(80, port)],
            state,
        )
        .unwrap()
    }

    fn snapshot() -> Snapshot {
        Snapshot(vec![
            fact("/legacy-acme-prod-web", 8080, "running"),
            fact("/legacy-acme-prod-db", 3306, "running"),
            fact("/shop-web", 8000, "running"),
            fact("/stranger-web", 9000, "running"),
            fact("/router", 80, "running"),
        ])
    }

    fn base_dir() -> tempfile::TempDir {
        let base = tempfile::tempdir().unwrap();
        std::fs::create_dir(base.path().join("legacy")).unwrap();
        std::fs::create_dir(base.path().join("shop")).unwrap();
        base
    }

    #[test]
    fn test_owned_sites_only() {
        let base = base_dir();
        let inventory =
            collect_inventory(&snapshot(), base.path(), ListOptions::default()).unwrap();

        assert_eq!(inventory.count(NamingScheme::Legacy), 1);
        assert_eq!(inventory.count(NamingScheme::Standard), 1);
        assert!(inventory.get(&ApplicationId::standard("shop")).is_some());
        assert!(inventory.get(&ApplicationId::standard("stranger")).is_none());

        let acme = inventory.get(&ApplicationId::legacy("acme", "prod")).unwrap();
        assert_eq!(acme.web_public_port, Some(8080));
        assert_eq!(acme.db_public_port, Some(3306));
        assert_eq!(acme.status, "running");
    }

    #[test]
    fn test_all_sites() {
        let base = base_dir();
        let options = ListOptions {
            all: true,
            legacy_only: false,
        };
        let inventory = collect_inventory(&snapshot(), base.path(), options).unwrap();
        assert_eq!(inventory.count(NamingScheme::Standard), 2);
    }

    #[test]
    fn test_legacy_only() {
        let base = base_dir();
        for all in [false, true] {
            let options = ListOptions {
                all,
                legacy_only: true,
            };
            let inventory = collect_inventory(&snapshot(), base.path(), options).unwrap();
            assert_eq!(inventory.len(), 1);
            assert_eq!(inventory.count(NamingScheme::Legacy), 1);
        }
    }
}
