//! Application state — single-owner, main-thread only.
//!
//! All TUI state lives here; input and mouse dispatch mutate it, rendering
//! reads it (except the slider track rect, which rendering records for
//! hit-testing).

use std::path::PathBuf;
use std::time::Duration;

use ratatui::layout::Rect;
use serde::{Deserialize, Serialize};

use shopfront_core::catalog::{Catalog, Product};
use shopfront_core::compare::{CompareList, MAX_COMPARE};
use shopfront_core::facets::FacetQuery;
use shopfront_core::quantity::QuantityStepper;
use shopfront_core::range::{RangeSelection, Thumb};
use shopfront_core::recent::RecentlyViewed;
use shopfront_core::saved::SavedProduct;
use shopfront_core::settings::ShopSettings;

use crate::mouse::DragGesture;
use crate::timing::Debouncer;
use crate::toast::{ToastLevel, ToastQueue};

/// How long filter/list changes may sit unsaved.
const SAVE_QUIET_PERIOD: Duration = Duration::from_secs(1);

/// Which panel is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Panel {
    Catalog,
    Filters,
    Compare,
    Recent,
    Help,
}

impl Panel {
    pub fn index(self) -> usize {
        match self {
            Panel::Catalog => 0,
            Panel::Filters => 1,
            Panel::Compare => 2,
            Panel::Recent => 3,
            Panel::Help => 4,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Panel::Catalog),
            1 => Some(Panel::Filters),
            2 => Some(Panel::Compare),
            3 => Some(Panel::Recent),
            4 => Some(Panel::Help),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Panel::Catalog => "Catalog",
            Panel::Filters => "Filters",
            Panel::Compare => "Compare",
            Panel::Recent => "Recent",
            Panel::Help => "Help",
        }
    }

    pub fn next(self) -> Panel {
        Panel::from_index((self.index() + 1) % 5).unwrap()
    }

    pub fn prev(self) -> Panel {
        Panel::from_index((self.index() + 4) % 5).unwrap()
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Welcome,
    /// Product detail; the index points into the catalog.
    Detail(usize),
}

/// Catalog panel state — the filtered product list.
#[derive(Debug)]
pub struct CatalogPanelState {
    pub catalog: Catalog,
    /// Indices of products passing the current query, in catalog order.
    pub visible: Vec<usize>,
    pub cursor: usize,
    /// Quantity in the detail overlay; reset each time a detail opens.
    pub quantity: QuantityStepper,
}

impl CatalogPanelState {
    pub fn new(catalog: Catalog) -> Self {
        let visible = (0..catalog.len()).collect();
        CatalogPanelState {
            catalog,
            visible,
            cursor: 0,
            quantity: QuantityStepper::default(),
        }
    }

    pub fn refresh(&mut self, query: &FacetQuery) {
        self.visible = self.catalog.matching(query);
        if self.cursor >= self.visible.len() {
            self.cursor = self.visible.len().saturating_sub(1);
        }
    }

    /// The product under the cursor, if any row is visible.
    pub fn selected(&self) -> Option<&Product> {
        let idx = *self.visible.get(self.cursor)?;
        self.catalog.products.get(idx)
    }

    /// The catalog index under the cursor.
    pub fn selected_index(&self) -> Option<usize> {
        self.visible.get(self.cursor).copied()
    }
}

/// Keyboard focus inside the filters panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterControl {
    MinThumb,
    MaxThumb,
    Vendor,
    InStock,
}

impl FilterControl {
    pub fn next(self) -> FilterControl {
        match self {
            FilterControl::MinThumb => FilterControl::MaxThumb,
            FilterControl::MaxThumb => FilterControl::Vendor,
            FilterControl::Vendor => FilterControl::InStock,
            FilterControl::InStock => FilterControl::MinThumb,
        }
    }

    pub fn prev(self) -> FilterControl {
        match self {
            FilterControl::MinThumb => FilterControl::InStock,
            FilterControl::MaxThumb => FilterControl::MinThumb,
            FilterControl::Vendor => FilterControl::MaxThumb,
            FilterControl::InStock => FilterControl::Vendor,
        }
    }

    pub fn thumb(self) -> Option<Thumb> {
        match self {
            FilterControl::MinThumb => Some(Thumb::Min),
            FilterControl::MaxThumb => Some(Thumb::Max),
            _ => None,
        }
    }
}

/// Filters panel state — the price slider and the facet toggles.
#[derive(Debug)]
pub struct FiltersPanelState {
    pub selection: RangeSelection,
    pub query: FacetQuery,
    pub focused: FilterControl,
    /// Active mouse drag; present only between press and release.
    pub gesture: Option<DragGesture>,
    /// Track rect recorded by the last render. `None` until the slider has
    /// been drawn once; mouse input is inert until then.
    pub track_area: Option<Rect>,
    pub vendors: Vec<String>,
}

impl FiltersPanelState {
    pub fn new(catalog: &Catalog) -> Self {
        // Slider bounds come from the catalog's price extremes; an empty
        // catalog mounts a degenerate (inert) slider.
        let (min, max) = catalog
            .price_bounds()
            .map(|(lo, hi)| (lo.cents() as f64, hi.cents() as f64))
            .unwrap_or((0.0, 0.0));
        FiltersPanelState {
            selection: RangeSelection::new(min, max),
            query: FacetQuery::default(),
            focused: FilterControl::MinThumb,
            gesture: None,
            track_area: None,
            vendors: catalog.vendors(),
        }
    }

    /// Cycle the vendor facet: Any -> first -> ... -> last -> Any.
    pub fn cycle_vendor(&mut self, forward: bool) {
        if self.vendors.is_empty() {
            return;
        }
        let current = self
            .query
            .vendor
            .as_ref()
            .and_then(|v| self.vendors.iter().position(|x| x == v));
        let next = if forward {
            match current {
                None => Some(0),
                Some(i) if i + 1 < self.vendors.len() => Some(i + 1),
                Some(_) => None,
            }
        } else {
            match current {
                None => Some(self.vendors.len() - 1),
                Some(0) => None,
                Some(i) => Some(i - 1),
            }
        };
        self.query.vendor = next.map(|i| self.vendors[i].clone());
    }
}

/// Compare panel state.
#[derive(Debug, Default)]
pub struct ComparePanelState {
    pub list: CompareList,
    pub cursor: usize,
}

/// Recently-viewed panel state.
#[derive(Debug, Default)]
pub struct RecentPanelState {
    pub list: RecentlyViewed,
    pub cursor: usize,
}

/// Top-level application state.
pub struct AppState {
    // Navigation
    pub active_panel: Panel,
    pub running: bool,
    pub overlay: Overlay,

    // Panel states
    pub catalog: CatalogPanelState,
    pub filters: FiltersPanelState,
    pub compare: ComparePanelState,
    pub recent: RecentPanelState,

    // Cross-cutting
    pub status_message: Option<(String, StatusLevel)>,
    pub toasts: ToastQueue,
    pub settings: ShopSettings,
    pub save_pending: Debouncer,

    // Paths
    pub state_path: PathBuf,
}

impl AppState {
    pub fn new(catalog: Catalog, settings: ShopSettings, state_path: PathBuf) -> Self {
        let filters = FiltersPanelState::new(&catalog);
        AppState {
            active_panel: Panel::Catalog,
            running: true,
            overlay: Overlay::None,
            catalog: CatalogPanelState::new(catalog),
            filters,
            compare: ComparePanelState::default(),
            recent: RecentPanelState::default(),
            status_message: None,
            toasts: ToastQueue::default(),
            settings,
            save_pending: Debouncer::new(SAVE_QUIET_PERIOD),
            state_path,
        }
    }

    /// Switch panels. This is a teardown point for the slider: an in-progress
    /// drag is released so stray move events cannot mutate a hidden control.
    pub fn switch_panel(&mut self, panel: Panel) {
        self.abort_gesture();
        self.active_panel = panel;
    }

    /// Release any in-progress drag without committing.
    pub fn abort_gesture(&mut self) {
        self.filters.gesture = None;
    }

    /// Commit the slider selection into the facet params and re-run the
    /// catalog match — the once-per-gesture side effect.
    pub fn commit_range(&mut self) {
        let params = self.filters.selection.commit();
        self.filters.query.apply_range(params);
        self.refresh_catalog();
    }

    /// Re-run the catalog match against the current query.
    pub fn refresh_catalog(&mut self) {
        self.catalog.refresh(&self.filters.query);
        self.set_status(format!(
            "{} of {} products match",
            self.catalog.visible.len(),
            self.catalog.catalog.len()
        ));
        self.save_pending.mark();
    }

    /// Reset every facet and the slider to its full interval.
    pub fn reset_filters(&mut self) {
        self.filters.selection.reset();
        self.filters.query.clear();
        self.refresh_catalog();
    }

    /// Open the detail overlay for a catalog index and record the view.
    pub fn open_detail(&mut self, catalog_idx: usize) {
        let Some(product) = self.catalog.catalog.products.get(catalog_idx) else {
            return;
        };
        let snapshot = SavedProduct::snapshot(product);
        self.abort_gesture();
        self.recent.list.record(snapshot);
        self.catalog.quantity.reset();
        self.overlay = Overlay::Detail(catalog_idx);
        self.save_pending.mark();
    }

    pub fn close_overlay(&mut self) {
        self.overlay = Overlay::None;
    }

    /// Toggle a product in the compare list, with toast feedback.
    pub fn toggle_compare(&mut self, catalog_idx: usize) {
        let Some(product) = self.catalog.catalog.products.get(catalog_idx) else {
            return;
        };
        let title = product.title.clone();
        if self.compare.list.contains(&product.id) {
            self.compare.list.remove(&product.id);
            self.toasts
                .push(format!("Removed {title} from compare"), ToastLevel::Info);
        } else if self.compare.list.is_full() {
            self.toasts.push(
                format!("Compare list is full ({MAX_COMPARE} max)"),
                ToastLevel::Error,
            );
            return;
        } else {
            self.compare.list.add(SavedProduct::snapshot(product));
            self.toasts
                .push(format!("Added {title} to compare"), ToastLevel::Success);
        }
        self.save_pending.mark();
    }

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    /// Set a warning status message.
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}
