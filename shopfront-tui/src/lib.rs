//! Shopfront TUI — terminal storefront catalog browser.
//!
//! Panels:
//! 1. Catalog — the filtered product list with detail overlay
//! 2. Filters — price slider (mouse-draggable), vendor facet, stock toggle
//! 3. Compare — shortlist of up to four products
//! 4. Recent — recently-viewed products
//! 5. Help — keyboard and mouse reference

pub mod app;
pub mod data_loader;
pub mod input;
pub mod mouse;
pub mod persistence;
pub mod sample_data;
pub mod theme;
pub mod timing;
pub mod toast;
pub mod ui;
