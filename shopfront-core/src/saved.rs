//! Snapshot of a product stored in the compare and recently-viewed lists.
//!
//! A snapshot, not a reference: the lists persist across sessions and must
//! survive the catalog changing underneath them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::money::Money;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedProduct {
    pub id: String,
    pub handle: String,
    pub title: String,
    pub vendor: String,
    pub price: Money,
    pub compare_at_price: Option<Money>,
    pub available: bool,
    pub added_at: DateTime<Utc>,
}

impl SavedProduct {
    /// Snapshot a catalog product, stamped now.
    pub fn snapshot(product: &Product) -> Self {
        SavedProduct {
            id: product.id.clone(),
            handle: product.handle.clone(),
            title: product.title.clone(),
            vendor: product.vendor.clone(),
            price: product.price,
            compare_at_price: product.compare_at_price,
            available: product.available,
            added_at: Utc::now(),
        }
    }

    /// A snapshot is usable only with an id and a handle.
    pub fn is_valid(&self) -> bool {
        !self.id.is_empty() && !self.handle.is_empty()
    }
}
