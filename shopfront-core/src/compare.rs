//! Compare list — up to four products, duplicates rejected.

use serde::{Deserialize, Serialize};

use crate::saved::SavedProduct;

pub const MAX_COMPARE: usize = 4;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompareList {
    items: Vec<SavedProduct>,
}

impl CompareList {
    pub fn items(&self) -> &[SavedProduct] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= MAX_COMPARE
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|p| p.id == id)
    }

    /// Add a product. Returns false — not an error — when the snapshot is
    /// invalid, already listed, or the list is full.
    pub fn add(&mut self, product: SavedProduct) -> bool {
        if !product.is_valid() || self.contains(&product.id) || self.is_full() {
            return false;
        }
        self.items.push(product);
        true
    }

    /// Remove by id. Returns false when the product was not listed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|p| p.id != id);
        self.items.len() != before
    }

    /// Add or remove. Returns true when the product is now in the list.
    pub fn toggle(&mut self, product: SavedProduct) -> bool {
        if self.contains(&product.id) {
            self.remove(&product.id);
            false
        } else {
            self.add(product)
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::money::Money;

    fn saved(id: &str) -> SavedProduct {
        SavedProduct::snapshot(&Product {
            id: id.into(),
            handle: format!("product-{id}"),
            title: format!("Product {id}"),
            vendor: "Forma".into(),
            price: Money(4_200),
            compare_at_price: None,
            available: true,
            options: Vec::new(),
        })
    }

    #[test]
    fn add_and_contains() {
        let mut list = CompareList::default();
        assert!(list.add(saved("a")));
        assert!(list.contains("a"));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn duplicates_rejected() {
        let mut list = CompareList::default();
        assert!(list.add(saved("a")));
        assert!(!list.add(saved("a")));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn capped_at_four() {
        let mut list = CompareList::default();
        for id in ["a", "b", "c", "d"] {
            assert!(list.add(saved(id)));
        }
        assert!(list.is_full());
        assert!(!list.add(saved("e")));
        assert_eq!(list.len(), MAX_COMPARE);
    }

    #[test]
    fn invalid_snapshot_rejected() {
        let mut list = CompareList::default();
        let mut p = saved("a");
        p.id.clear();
        assert!(!list.add(p));
        assert!(list.is_empty());
    }

    #[test]
    fn toggle_roundtrips() {
        let mut list = CompareList::default();
        assert!(list.toggle(saved("a")));
        assert!(list.contains("a"));
        assert!(!list.toggle(saved("a")));
        assert!(!list.contains("a"));
    }

    #[test]
    fn remove_reports_absence() {
        let mut list = CompareList::default();
        assert!(!list.remove("ghost"));
        list.add(saved("a"));
        assert!(list.remove("a"));
        assert!(list.is_empty());
    }
}
