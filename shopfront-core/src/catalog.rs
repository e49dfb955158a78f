//! Product catalog — types, CSV loading, facet matching.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::facets::FacetQuery;
use crate::money::Money;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub handle: String,
    pub title: String,
    pub vendor: String,
    /// Price in cents.
    pub price: Money,
    /// Pre-discount price in cents, when the product is on sale.
    pub compare_at_price: Option<Money>,
    pub available: bool,
    /// Option values, e.g. finishes or sizes.
    pub options: Vec<String>,
}

impl Product {
    pub fn on_sale(&self) -> bool {
        self.compare_at_price.is_some_and(|c| c > self.price)
    }

    pub fn url(&self) -> String {
        format!("/products/{}", self.handle)
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to open catalog: {0}")]
    Open(#[source] csv::Error),
    #[error("bad catalog row {row}: {source}")]
    Row {
        row: usize,
        #[source]
        source: csv::Error,
    },
}

/// CSV row shape: `id,handle,title,vendor,price_cents,compare_at_cents,available,options`
/// with `options` pipe-separated and `compare_at_cents` optionally empty.
#[derive(Debug, Deserialize)]
struct CsvRecord {
    id: String,
    handle: String,
    title: String,
    vendor: String,
    price_cents: i64,
    compare_at_cents: Option<i64>,
    available: bool,
    options: Option<String>,
}

impl From<CsvRecord> for Product {
    fn from(r: CsvRecord) -> Self {
        let options = r
            .options
            .unwrap_or_default()
            .split('|')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        Product {
            id: r.id,
            handle: r.handle,
            title: r.title,
            vendor: r.vendor,
            price: Money(r.price_cents),
            compare_at_price: r.compare_at_cents.map(Money),
            available: r.available,
            options,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Catalog { products }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Load a catalog from a headered CSV file.
    pub fn load_csv(path: &Path) -> Result<Catalog, CatalogError> {
        let mut reader = csv::Reader::from_path(path).map_err(CatalogError::Open)?;
        let mut products = Vec::new();
        for (i, record) in reader.deserialize::<CsvRecord>().enumerate() {
            let record = record.map_err(|source| CatalogError::Row {
                row: i + 1,
                source,
            })?;
            products.push(record.into());
        }
        Ok(Catalog::new(products))
    }

    /// Cheapest and dearest price across the catalog. `None` when empty —
    /// the slider mounts inert in that case.
    pub fn price_bounds(&self) -> Option<(Money, Money)> {
        let min = self.products.iter().map(|p| p.price).min()?;
        let max = self.products.iter().map(|p| p.price).max()?;
        Some((min, max))
    }

    /// Indices of products passing the query, in catalog order.
    pub fn matching(&self, query: &FacetQuery) -> Vec<usize> {
        self.products
            .iter()
            .enumerate()
            .filter(|(_, p)| query.matches(p))
            .map(|(i, _)| i)
            .collect()
    }

    /// Sorted unique vendor names, for the vendor facet.
    pub fn vendors(&self) -> Vec<String> {
        let mut vendors: Vec<String> = self.products.iter().map(|p| p.vendor.clone()).collect();
        vendors.sort();
        vendors.dedup();
        vendors
    }
}
