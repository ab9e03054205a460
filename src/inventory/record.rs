use std::fmt;
use std::path::{Path, PathBuf};

use crate::naming::{ContainerName, NamingScheme};

/// Key of an [`ApplicationRecord`] within an [`Inventory`](super::Inventory).
///
/// Legacy applications are keyed by `<name>-<environment>`, standard applications by their
/// name. The scheme is part of the key, so legacy and standard sites never merge.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ApplicationId {
    scheme: NamingScheme,
    key: String,
}

impl ApplicationId {
    pub fn legacy(name: &str, environment: &str) -> Self {
        Self {
            scheme: NamingScheme::Legacy,
            key: format!("{name}-{environment}"),
        }
    }

    pub fn standard(name: &str) -> Self {
        Self {
            scheme: NamingScheme::Standard,
            key: name.to_owned(),
        }
    }

    pub(crate) fn from_name(name: &ContainerName<'_>) -> Self {
        match (name.scheme, name.environment) {
            (NamingScheme::Legacy, Some(environment)) => Self::legacy(name.app, environment),
            _ => Self::standard(name.app),
        }
    }

    pub fn scheme(&self) -> NamingScheme {
        self.scheme
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}

/// Aggregated view of one logical multi-container application.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ApplicationRecord {
    pub name: String,
    /// Empty for [`NamingScheme::Standard`] applications.
    pub environment: String,
    pub scheme: NamingScheme,
    pub web_public_port: Option<u16>,
    pub db_public_port: Option<u16>,
    pub status: String,
}

impl ApplicationRecord {
    pub(crate) fn new(name: &ContainerName<'_>, status: &str) -> Self {
        Self {
            name: name.app.to_owned(),
            environment: name.environment.unwrap_or_default().to_owned(),
            scheme: name.scheme,
            web_public_port: None,
            db_public_port: None,
            status: status.to_owned(),
        }
    }

    /// Directory of the application's local working copy, relative to the base directory.
    pub fn relative_path(&self) -> PathBuf {
        match self.scheme {
            NamingScheme::Legacy => Path::new(NamingScheme::Legacy.label())
                .join(format!("{}-{}", self.name, self.environment)),
            NamingScheme::Standard => PathBuf::from(&self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_order_legacy_before_standard() {
        let mut ids = vec![
            ApplicationId::standard("alpha"),
            ApplicationId::legacy("zeta", "prod"),
            ApplicationId::legacy("acme", "prod"),
        ];
        ids.sort();
        let keys: Vec<_> = ids.iter().map(|id| id.key()).collect();
        assert_eq!(keys, vec!["acme-prod", "zeta-prod", "alpha"]);
    }

    #[test]
    fn test_same_key_different_scheme_is_distinct() {
        assert_ne!(
            ApplicationId::legacy("acme", "prod"),
            ApplicationId::standard("acme-prod")
        );
    }

    #[test]
    fn test_relative_path() {
        let record = ApplicationRecord {
            name: "acme".to_owned(),
            environment: "production".to_owned(),
            scheme: NamingScheme::Legacy,
            web_public_port: None,
            db_public_port: None,
            status: "running".to_owned(),
        };
        assert_eq!(record.relative_path(), PathBuf::from("legacy/acme-production"));

        let record = ApplicationRecord {
            scheme: NamingScheme::Standard,
            environment: String::new(),
            ..record
        };
        assert_eq!(record.relative_path(), PathBuf::from("acme"));
    }
}
