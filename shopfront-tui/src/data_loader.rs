//! Catalog bootstrap — CSV file when given, sample data otherwise.

use std::path::Path;

use shopfront_core::catalog::Catalog;

use crate::sample_data::sample_catalog;

/// Load the catalog. Returns the catalog plus an optional warning for the
/// status surface when the CSV could not be used.
pub fn load_catalog(path: Option<&Path>) -> (Catalog, Option<String>) {
    let Some(path) = path else {
        return (sample_catalog(), None);
    };
    match Catalog::load_csv(path) {
        Ok(catalog) if !catalog.is_empty() => (catalog, None),
        Ok(_) => (
            sample_catalog(),
            Some(format!("{} is empty; using sample data", path.display())),
        ),
        Err(err) => (
            sample_catalog(),
            Some(format!("{err}; using sample data")),
        ),
    }
}
