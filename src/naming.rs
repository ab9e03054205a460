//! Container naming conventions.
//!
//! Sites are made up of a `web` and a `db` container. Two generations of the tooling named
//! those containers differently:
//!
//! - [`NamingScheme::Legacy`]: `legacy-<app>-<environment>-<role>`, exactly four segments.
//! - [`NamingScheme::Standard`]: `<app>-web` / `<app>-db`, no environment segment.
//!
//! Legacy is checked first. A legacy-prefixed name that does not split into four segments is
//! unrecognized and is never reconsidered as a standard name.
use std::fmt;

use crate::container;

/// Tag prefix carried by every legacy container name.
pub const LEGACY_PREFIX: &str = "legacy-";

/// Separator between the segments of a container name.
pub const SEPARATOR: char = '-';

const LEGACY_SEGMENTS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NamingScheme {
    Legacy,
    Standard,
}

impl NamingScheme {
    /// Label used when listing the sites of this scheme.
    pub fn label(&self) -> &'static str {
        match self {
            NamingScheme::Legacy => "legacy",
            NamingScheme::Standard => "local",
        }
    }
}

impl fmt::Display for NamingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role<'a> {
    Web,
    Db,
    /// A legacy service container that is neither `web` nor `db`.
    Other(&'a str),
}

impl<'a> Role<'a> {
    fn from_segment(segment: &'a str) -> Self {
        match segment {
            "web" => Role::Web,
            "db" => Role::Db,
            other => Role::Other(other),
        }
    }
}

impl fmt::Display for Role<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Web => f.write_str("web"),
            Role::Db => f.write_str("db"),
            Role::Other(other) => f.write_str(other),
        }
    }
}

/// A container name decomposed according to its [`NamingScheme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerName<'a> {
    pub scheme: NamingScheme,
    pub app: &'a str,
    /// Always `None` for [`NamingScheme::Standard`].
    pub environment: Option<&'a str>,
    pub role: Role<'a>,
}

/// Classifies a raw container name.
///
/// Returns `None` if the name follows neither naming scheme.
///
/// # Examples
///
/// ```
/// # use drud_local::naming::{classify, NamingScheme, Role};
/// let name = classify("/legacy-acme-prod-web").unwrap();
/// assert_eq!(name.scheme, NamingScheme::Legacy);
/// assert_eq!((name.app, name.environment, name.role), ("acme", Some("prod"), Role::Web));
///
/// let name = classify("/acme-db").unwrap();
/// assert_eq!(name.scheme, NamingScheme::Standard);
/// assert_eq!((name.app, name.environment, name.role), ("acme", None, Role::Db));
///
/// assert!(classify("/legacy-acme-web").is_none());
/// assert!(classify("/redis").is_none());
/// ```
pub fn classify(raw: &str) -> Option<ContainerName<'_>> {
    let name = container::strip_prefix(raw);

    if name.starts_with(LEGACY_PREFIX) {
        return classify_legacy(name);
    }

    classify_standard(name)
}

fn classify_legacy(name: &str) -> Option<ContainerName<'_>> {
    let segments: Vec<&str> = name.split(SEPARATOR).collect();
    if segments.len() != LEGACY_SEGMENTS {
        return None;
    }

    Some(ContainerName {
        scheme: NamingScheme::Legacy,
        app: segments[1],
        environment: Some(segments[2]),
        role: Role::from_segment(segments[3]),
    })
}

fn classify_standard(name: &str) -> Option<ContainerName<'_>> {
    let (app, role) = if let Some(app) = name.strip_suffix("-db") {
        (app, Role::Db)
    } else if let Some(app) = name.strip_suffix("-web") {
        (app, Role::Web)
    } else {
        return None;
    };

    if app.is_empty() {
        return None;
    }

    Some(ContainerName {
        scheme: NamingScheme::Standard,
        app,
        environment: None,
        role,
    })
}

/// Returns the first `-`-delimited segment of a name, i.e., the owning project.
pub fn project_segment(name: &str) -> &str {
    let name = container::strip_prefix(name);
    name.split(SEPARATOR).next().unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_legacy_roles() {
        let db = classify("/legacy-acme-staging-db").unwrap();
        assert_eq!(db.scheme, NamingScheme::Legacy);
        assert_eq!(db.app, "acme");
        assert_eq!(db.environment, Some("staging"));
        assert_eq!(db.role, Role::Db);

        let other = classify("/legacy-acme-staging-solr").unwrap();
        assert_eq!(other.role, Role::Other("solr"));
    }

    #[test]
    fn test_classify_legacy_requires_four_segments() {
        assert!(classify("/legacy-acme-web").is_none());
        assert!(classify("/legacy-acme-prod-extra-web").is_none());
        assert!(classify("/legacy-").is_none());
    }

    #[test]
    fn test_classify_legacy_takes_precedence_over_standard() {
        let name = classify("/legacy-acme-prod-web").unwrap();
        assert_eq!(name.scheme, NamingScheme::Legacy);

        // Would be a valid standard name, but the legacy tag wins.
        assert!(classify("/legacy-acme-web").is_none());
    }

    #[test]
    fn test_classify_standard() {
        let web = classify("/my-shop-web").unwrap();
        assert_eq!(web.scheme, NamingScheme::Standard);
        assert_eq!(web.app, "my-shop");
        assert_eq!(web.environment, None);
        assert_eq!(web.role, Role::Web);

        let db = classify("my-shop-db").unwrap();
        assert_eq!(db.app, "my-shop");
        assert_eq!(db.role, Role::Db);
    }

    #[test]
    fn test_classify_unrecognized() {
        assert!(classify("/x-y-z").is_none());
        assert!(classify("/nginx-proxy").is_none());
        assert!(classify("/-web").is_none());
        assert!(classify("/webserver").is_none());
    }

    #[test]
    fn test_project_segment() {
        assert_eq!(project_segment("/acme-prod-web"), "acme");
        assert_eq!(project_segment("/legacy-acme-prod-web"), "legacy");
        assert_eq!(project_segment("/router"), "router");
    }

    #[test]
    fn test_scheme_labels() {
        assert_eq!(NamingScheme::Legacy.to_string(), "legacy");
        assert_eq!(NamingScheme::Standard.to_string(), "local");
    }
}
