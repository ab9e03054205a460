//! Predicates that narrow down a container snapshot before it is aggregated.
//!
//! - [`OwnershipFilter`] keeps containers whose project has a local directory.
//! - [`LegacySchemeFilter`] keeps containers of the legacy naming scheme.
//! - [`is_whitelisted_snapshot`] and [`legacy_snapshots`] select locally stored legacy
//!   environment snapshots.
//!
//! Container filters compose with [`ContainerFilter::and`].
mod error;

use std::path::{Path, PathBuf};

pub use error::{Error, Result};

use crate::container::ContainerFact;
use crate::fsutil;
use crate::naming;

/// Environments a legacy snapshot may belong to.
pub const LEGACY_ENVIRONMENTS: [&str; 3] = ["default", "staging", "production"];

pub trait ContainerFilter {
    /// Returns whether the fact should be kept.
    fn keep(&self, fact: &ContainerFact) -> Result<bool>;

    /// Keeps only facts that pass both `self` and `other`.
    fn and<F>(self, other: F) -> And<Self, F>
    where
        Self: Sized,
        F: ContainerFilter,
    {
        And(self, other)
    }

    /// Applies the filter to a snapshot, preserving its order.
    ///
    /// # Errors
    ///
    /// Returns the first error of [`ContainerFilter::keep`].
    fn apply(&self, facts: Vec<ContainerFact>) -> Result<Vec<ContainerFact>> {
        let mut kept = Vec::with_capacity(facts.len());
        for fact in facts {
            if self.keep(&fact)? {
                kept.push(fact);
            } else {
                log::debug!("Filtered out container {}", fact);
            }
        }
        Ok(kept)
    }
}

/// Conjunction of two filters, see [`ContainerFilter::and`].
#[derive(Debug, Clone)]
pub struct And<A, B>(A, B);

impl<A: ContainerFilter, B: ContainerFilter> ContainerFilter for And<A, B> {
    fn keep(&self, fact: &ContainerFact) -> Result<bool> {
        Ok(self.0.keep(fact)? && self.1.keep(fact)?)
    }
}

/// Keeps containers whose project, i.e., the first segment of the canonical name, has a
/// directory below the base directory.
#[derive(Debug, Clone)]
pub struct OwnershipFilter {
    base_dir: PathBuf,
}

impl OwnershipFilter {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }
}

impl ContainerFilter for OwnershipFilter {
    fn keep(&self, fact: &ContainerFact) -> Result<bool> {
        let project = naming::project_segment(fact.canonical_name());
        Ok(fsutil::path_exists(self.base_dir.join(project))?)
    }
}

/// Keeps containers whose canonical name carries the legacy tag.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacySchemeFilter;

impl ContainerFilter for LegacySchemeFilter {
    fn keep(&self, fact: &ContainerFact) -> Result<bool> {
        Ok(fact.canonical_name().starts_with(naming::LEGACY_PREFIX))
    }
}

/// Returns whether a snapshot entry is named `<site>-<environment>` with a whitelisted
/// environment.
///
/// The name is split once, so the environment is everything after the first `-`.
///
/// # Examples
///
/// ```
/// # use drud_local::filter::is_whitelisted_snapshot;
/// assert!(is_whitelisted_snapshot("proj-staging"));
/// assert!(!is_whitelisted_snapshot("proj-qa"));
/// assert!(!is_whitelisted_snapshot("no-dashes-missing"));
/// assert!(!is_whitelisted_snapshot("proj"));
/// ```
pub fn is_whitelisted_snapshot(name: &str) -> bool {
    match name.split_once(naming::SEPARATOR) {
        Some((_, environment)) => LEGACY_ENVIRONMENTS.contains(&environment),
        None => false,
    }
}

/// Keeps the whitelisted entries of a list of snapshot names.
pub fn filter_snapshots<I, S>(names: I) -> Vec<S>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .filter(|name| is_whitelisted_snapshot(name.as_ref()))
        .collect()
}

/// Lists the whitelisted legacy snapshots stored in a directory, sorted by name.
///
/// # Errors
///
/// Returns [`Error::ReadDir`] if the directory can't be read.
pub fn legacy_snapshots(dir: impl AsRef<Path>) -> Result<Vec<String>> {
    Ok(filter_snapshots(fsutil::read_dir_names(dir)?))
}
