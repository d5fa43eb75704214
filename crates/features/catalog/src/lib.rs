//! # Content Registry
//!
//! The immutable, ordered list of application records the site showcases.
//! Records are compiled in, so every lookup is a pure read over a `static`.
//!
//! ```rust
//! use vapps_catalog::{list_ids, lookup};
//!
//! assert_eq!(list_ids().first(), Some(&"viona"));
//! assert!(lookup("nonexistent").is_none());
//! ```

#[cfg(feature = "server")]
pub mod api;
mod data;
mod error;

pub use crate::error::{CatalogError, CatalogErrorExt};
use fxhash::FxHashSet;
use vapps_domain::constants::FEATURED_APP;
use vapps_domain::content::AppRecord;
use vapps_kernel::domain::registry::InitializedSlice;

/// Every record, in presentation order.
#[must_use]
pub fn all() -> &'static [AppRecord] {
    &data::APPS
}

/// Finds the record whose slug equals `id`. `None` is the normal not-found outcome.
#[must_use]
pub fn lookup(id: &str) -> Option<&'static AppRecord> {
    data::APPS.iter().find(|app| app.slug == id)
}

/// Slugs of every record, in registry order.
#[must_use]
pub fn list_ids() -> Vec<&'static str> {
    data::APPS.iter().map(|app| app.slug).collect()
}

/// The record highlighted on the home page, or the first record if it is absent.
#[must_use]
pub fn featured() -> &'static AppRecord {
    lookup(FEATURED_APP).unwrap_or(&data::APPS[0])
}

/// Checks the registry invariants: unique slugs and non-empty identity fields.
///
/// # Errors
/// Returns [`CatalogError::DuplicateSlug`] or [`CatalogError::InvalidRecord`] on the
/// first violation found.
pub fn validate() -> Result<(), CatalogError> {
    validate_records(all())
}

pub(crate) fn validate_records(records: &[AppRecord]) -> Result<(), CatalogError> {
    let mut slugs = FxHashSet::default();
    slugs.reserve(records.len());

    for record in records {
        if record.slug.is_empty() || record.name.is_empty() {
            return Err(CatalogError::InvalidRecord {
                message: format!("record `{}` has an empty slug or name", record.slug).into(),
                context: None,
            });
        }
        if !slugs.insert(record.slug) {
            return Err(CatalogError::DuplicateSlug { message: record.slug.into(), context: None });
        }
    }

    Ok(())
}

/// Catalog feature state
#[vapps_derive::site_slice]
pub struct Catalog {
    pub records: &'static [AppRecord],
}

impl Catalog {
    #[must_use]
    pub fn lookup(&self, id: &str) -> Option<&'static AppRecord> {
        self.records.iter().find(|app| app.slug == id)
    }
}

/// Initialize the catalog feature.
///
/// # Errors
/// Returns an error if the compiled-in records violate the registry invariants.
pub fn init() -> Result<InitializedSlice, CatalogError> {
    validate().context("Validating compiled-in records")?;
    tracing::info!(records = data::APPS.len(), "Catalog slice initialized");

    Ok(InitializedSlice::new(Catalog::new(CatalogInner { records: all() })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use vapps_domain::content::AppStatus;

    #[test]
    fn duplicate_slugs_are_rejected() {
        let records = [data::APPS[0].clone(), data::APPS[0].clone()];
        let err = validate_records(&records).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateSlug { ref message, .. } if message == "viona"));
    }

    #[test]
    fn empty_names_are_rejected() {
        let mut record = data::APPS[1].clone();
        record.name = "";
        assert!(matches!(validate_records(&[record]), Err(CatalogError::InvalidRecord { .. })));
    }

    #[test]
    fn beta_records_are_the_newest_two() {
        let beta: Vec<_> =
            all().iter().filter(|app| app.status == AppStatus::Beta).map(|app| app.slug).collect();
        assert_eq!(beta, ["posture-pal", "ai-poster"]);
    }
}
