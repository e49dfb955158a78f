//! Recently-viewed list — most recent first, capped, re-views move to front.

use serde::{Deserialize, Serialize};

use crate::saved::SavedProduct;

pub const MAX_RECENT: usize = 12;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecentlyViewed {
    items: Vec<SavedProduct>,
}

impl RecentlyViewed {
    pub fn items(&self) -> &[SavedProduct] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Record a view. An already-listed product moves to the front; the list
    /// truncates to [`MAX_RECENT`]. Invalid snapshots are ignored.
    pub fn record(&mut self, product: SavedProduct) {
        if !product.is_valid() {
            return;
        }
        self.items.retain(|p| p.id != product.id);
        self.items.insert(0, product);
        self.items.truncate(MAX_RECENT);
    }

    pub fn remove(&mut self, id: &str) {
        self.items.retain(|p| p.id != id);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Entries excluding one product id, capped at `limit`. Used on a product
    /// page so the product itself is not suggested.
    pub fn excluding<'a>(&'a self, exclude_id: &str, limit: usize) -> Vec<&'a SavedProduct> {
        self.items
            .iter()
            .filter(|p| p.id != exclude_id)
            .take(limit)
            .collect()
    }
}
