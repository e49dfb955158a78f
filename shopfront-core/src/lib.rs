//! Shopfront core — domain types and state machines for the catalog browser.
//!
//! This crate holds everything the TUI drives but that has no terminal
//! dependency:
//! - Money values in cents with shop-configurable formatting
//! - Product catalog with CSV loading and facet matching
//! - Dual-thumb range selection (the price filter's state machine)
//! - Facet query — the side channel the slider commits into
//! - Compare and recently-viewed lists
//! - Quantity stepper
//! - Shop settings from TOML

pub mod catalog;
pub mod compare;
pub mod facets;
pub mod money;
pub mod quantity;
pub mod range;
pub mod recent;
pub mod saved;
pub mod settings;
