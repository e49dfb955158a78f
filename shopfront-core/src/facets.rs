//! Facet query — the filter state the slider and toggles publish into.
//!
//! The price params are the form-field pair of the storefront: optional
//! two-decimal strings, absent when a thumb rests on its bound. Writing new
//! params and re-running the catalog match is the whole commit contract.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::money::Money;
use crate::range::RangeParams;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetQuery {
    /// Two-decimal price params; absent means no filter on that side.
    pub price_min: Option<String>,
    pub price_max: Option<String>,
    pub vendor: Option<String>,
    pub in_stock_only: bool,
}

impl FacetQuery {
    /// Write a committed range into the price params.
    pub fn apply_range(&mut self, params: RangeParams) {
        self.price_min = params.price_min;
        self.price_max = params.price_max;
    }

    /// Parse the price params back into cents. Junk params read as absent.
    pub fn price_band(&self) -> (Option<Money>, Option<Money>) {
        let lo = self.price_min.as_deref().and_then(Money::from_param);
        let hi = self.price_max.as_deref().and_then(Money::from_param);
        (lo, hi)
    }

    pub fn is_empty(&self) -> bool {
        self.price_min.is_none()
            && self.price_max.is_none()
            && self.vendor.is_none()
            && !self.in_stock_only
    }

    pub fn clear(&mut self) {
        *self = FacetQuery::default();
    }

    /// Whether a product passes every active facet.
    pub fn matches(&self, product: &Product) -> bool {
        let (lo, hi) = self.price_band();
        if let Some(lo) = lo {
            if product.price < lo {
                return false;
            }
        }
        if let Some(hi) = hi {
            if product.price > hi {
                return false;
            }
        }
        if let Some(vendor) = &self.vendor {
            if &product.vendor != vendor {
                return false;
            }
        }
        if self.in_stock_only && !product.available {
            return false;
        }
        true
    }

    /// Short human summary for the status surface, e.g. `price 40.00–90.00 · vendor Forma`.
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        match (&self.price_min, &self.price_max) {
            (Some(lo), Some(hi)) => parts.push(format!("price {lo}–{hi}")),
            (Some(lo), None) => parts.push(format!("price ≥ {lo}")),
            (None, Some(hi)) => parts.push(format!("price ≤ {hi}")),
            (None, None) => {}
        }
        if let Some(vendor) = &self.vendor {
            parts.push(format!("vendor {vendor}"));
        }
        if self.in_stock_only {
            parts.push("in stock".to_string());
        }
        if parts.is_empty() {
            "none".to_string()
        } else {
            parts.join(" · ")
        }
    }
}
