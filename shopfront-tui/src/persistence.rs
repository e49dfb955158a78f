//! App state persistence — JSON save/load across restarts.

use std::path::Path;

use serde::{Deserialize, Serialize};

use shopfront_core::compare::CompareList;
use shopfront_core::facets::FacetQuery;
use shopfront_core::recent::RecentlyViewed;

use crate::app::{AppState, Overlay, Panel};

/// Serializable subset of app state that persists across restarts.
#[derive(Debug, Serialize, Deserialize)]
pub struct PersistedState {
    pub compare: CompareList,
    pub recently_viewed: RecentlyViewed,
    pub query: FacetQuery,
    pub active_panel: Panel,
    pub welcome_dismissed: bool,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            compare: CompareList::default(),
            recently_viewed: RecentlyViewed::default(),
            query: FacetQuery::default(),
            active_panel: Panel::Catalog,
            welcome_dismissed: false,
        }
    }
}

/// Load persisted state from disk. Returns defaults if file is missing or corrupt.
pub fn load(path: &Path) -> PersistedState {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => PersistedState::default(),
    }
}

/// Save persisted state to disk. Creates parent directories if needed.
pub fn save(path: &Path, state: &PersistedState) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Extract persisted state from AppState.
pub fn extract(app: &AppState) -> PersistedState {
    PersistedState {
        compare: app.compare.list.clone(),
        recently_viewed: app.recent.list.clone(),
        query: app.filters.query.clone(),
        active_panel: app.active_panel,
        welcome_dismissed: app.overlay != Overlay::Welcome,
    }
}

/// Apply persisted state to AppState. The slider thumbs are re-seated from
/// the restored price params so the control and the query agree.
pub fn apply(app: &mut AppState, state: PersistedState) {
    app.compare.list = state.compare;
    app.recent.list = state.recently_viewed;
    app.filters.query = state.query;
    app.active_panel = state.active_panel;
    if !state.welcome_dismissed {
        app.overlay = Overlay::Welcome;
    }

    let (min, max) = app.filters.selection.bounds();
    let (lo, hi) = app.filters.query.price_band();
    app.filters.selection.set_values(
        lo.map_or(min, |m| m.cents() as f64),
        hi.map_or(max, |m| m.cents() as f64),
    );
    app.catalog.refresh(&app.filters.query);
}
