//! Keyboard input dispatch — overlays first, then global keys, then the
//! active panel's handler.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use shopfront_core::range::{StepDirection, Thumb};

use crate::app::{AppState, FilterControl, Overlay, Panel};
use crate::toast::ToastLevel;

pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    match app.overlay {
        Overlay::Welcome => {
            app.overlay = Overlay::None;
            return;
        }
        Overlay::Detail(idx) => {
            handle_detail_overlay(app, key, idx);
            return;
        }
        Overlay::None => {}
    }

    // 2. Global keys (always available).
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('1') => {
            app.switch_panel(Panel::Catalog);
            return;
        }
        KeyCode::Char('2') => {
            app.switch_panel(Panel::Filters);
            return;
        }
        KeyCode::Char('3') => {
            app.switch_panel(Panel::Compare);
            return;
        }
        KeyCode::Char('4') => {
            app.switch_panel(Panel::Recent);
            return;
        }
        KeyCode::Char('5') => {
            app.switch_panel(Panel::Help);
            return;
        }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.switch_panel(app.active_panel.prev());
            } else {
                app.switch_panel(app.active_panel.next());
            }
            return;
        }
        KeyCode::BackTab => {
            app.switch_panel(app.active_panel.prev());
            return;
        }
        _ => {}
    }

    // 3. Panel-specific keys.
    match app.active_panel {
        Panel::Catalog => handle_catalog_key(app, key),
        Panel::Filters => handle_filters_key(app, key),
        Panel::Compare => handle_compare_key(app, key),
        Panel::Recent => handle_recent_key(app, key),
        Panel::Help => {} // display only
    }
}

fn handle_detail_overlay(app: &mut AppState, key: KeyEvent, idx: usize) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
            app.close_overlay();
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            app.catalog.quantity.increment();
        }
        KeyCode::Char('-') => {
            app.catalog.quantity.decrement();
        }
        KeyCode::Char('c') => {
            app.toggle_compare(idx);
        }
        _ => {}
    }
}

fn handle_catalog_key(app: &mut AppState, key: KeyEvent) {
    let row_count = app.catalog.visible.len();

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if row_count > 0 && app.catalog.cursor + 1 < row_count {
                app.catalog.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.catalog.cursor = app.catalog.cursor.saturating_sub(1);
        }
        KeyCode::Enter => {
            if let Some(idx) = app.catalog.selected_index() {
                app.open_detail(idx);
            }
        }
        KeyCode::Char('c') => {
            if let Some(idx) = app.catalog.selected_index() {
                app.toggle_compare(idx);
            }
        }
        _ => {}
    }
}

fn handle_filters_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            app.filters.focused = app.filters.focused.next();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.filters.focused = app.filters.focused.prev();
        }
        KeyCode::Char('h') | KeyCode::Left => {
            adjust_filter(app, false);
        }
        KeyCode::Char('l') | KeyCode::Right => {
            adjust_filter(app, true);
        }
        KeyCode::Char(' ') | KeyCode::Enter => {
            if app.filters.focused == FilterControl::InStock {
                app.filters.query.in_stock_only = !app.filters.query.in_stock_only;
                app.refresh_catalog();
            }
        }
        KeyCode::Char('r') => {
            app.reset_filters();
            app.toasts.push("Filters reset", ToastLevel::Info);
        }
        _ => {}
    }
}

/// Adjust the focused control. Thumb steps commit immediately — keyboard
/// input has no release phase to defer to.
fn adjust_filter(app: &mut AppState, forward: bool) {
    match app.filters.focused {
        FilterControl::MinThumb => step_thumb(app, Thumb::Min, forward),
        FilterControl::MaxThumb => step_thumb(app, Thumb::Max, forward),
        FilterControl::Vendor => {
            app.filters.cycle_vendor(forward);
            app.refresh_catalog();
        }
        FilterControl::InStock => {
            app.filters.query.in_stock_only = !app.filters.query.in_stock_only;
            app.refresh_catalog();
        }
    }
}

fn step_thumb(app: &mut AppState, thumb: Thumb, forward: bool) {
    let direction = if forward {
        StepDirection::Increase
    } else {
        StepDirection::Decrease
    };
    app.filters.selection.key_step(thumb, direction);
    app.commit_range();
}

fn handle_compare_key(app: &mut AppState, key: KeyEvent) {
    let count = app.compare.list.len();

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if count > 0 && app.compare.cursor + 1 < count {
                app.compare.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.compare.cursor = app.compare.cursor.saturating_sub(1);
        }
        KeyCode::Char('x') | KeyCode::Delete => {
            let id = app
                .compare
                .list
                .items()
                .get(app.compare.cursor)
                .map(|p| p.id.clone());
            if let Some(id) = id {
                app.compare.list.remove(&id);
                app.compare.cursor = app.compare.cursor.min(app.compare.list.len().saturating_sub(1));
                app.save_pending.mark();
            }
        }
        KeyCode::Char('C') => {
            if !app.compare.list.is_empty() {
                app.compare.list.clear();
                app.compare.cursor = 0;
                app.toasts.push("Compare list cleared", ToastLevel::Info);
                app.save_pending.mark();
            }
        }
        _ => {}
    }
}

fn handle_recent_key(app: &mut AppState, key: KeyEvent) {
    let count = app.recent.list.len();

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if count > 0 && app.recent.cursor + 1 < count {
                app.recent.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.recent.cursor = app.recent.cursor.saturating_sub(1);
        }
        KeyCode::Char('x') | KeyCode::Delete => {
            let id = app
                .recent
                .list
                .items()
                .get(app.recent.cursor)
                .map(|p| p.id.clone());
            if let Some(id) = id {
                app.recent.list.remove(&id);
                app.recent.cursor = app.recent.cursor.min(app.recent.list.len().saturating_sub(1));
                app.save_pending.mark();
            }
        }
        KeyCode::Char('C') => {
            if !app.recent.list.is_empty() {
                app.recent.list.clear();
                app.recent.cursor = 0;
                app.toasts.push("Recently viewed cleared", ToastLevel::Info);
                app.save_pending.mark();
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample_data::sample_catalog;
    use shopfront_core::range::Thumb;
    use shopfront_core::settings::ShopSettings;
    use std::path::PathBuf;

    fn app() -> AppState {
        AppState::new(
            sample_catalog(),
            ShopSettings::default(),
            PathBuf::from("."),
        )
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn number_keys_switch_panels() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('2')));
        assert_eq!(app.active_panel, Panel::Filters);
        handle_key(&mut app, press(KeyCode::Char('5')));
        assert_eq!(app.active_panel, Panel::Help);
    }

    #[test]
    fn q_quits() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[test]
    fn welcome_dismisses_on_any_key() {
        let mut app = app();
        app.overlay = Overlay::Welcome;
        handle_key(&mut app, press(KeyCode::Char('x')));
        assert_eq!(app.overlay, Overlay::None);
        // The key is consumed by the overlay, not the panel.
        assert!(app.running);
    }

    #[test]
    fn thumb_step_commits_immediately() {
        let mut app = app();
        app.switch_panel(Panel::Filters);
        app.filters.focused = FilterControl::MaxThumb;
        handle_key(&mut app, press(KeyCode::Left));
        let step = app.filters.selection.step();
        let (_, max) = app.filters.selection.bounds();
        assert_eq!(app.filters.selection.value(Thumb::Max), max - step);
        assert!(app.filters.query.price_max.is_some());
    }

    #[test]
    fn enter_opens_detail_and_records_view() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('j')));
        handle_key(&mut app, press(KeyCode::Enter));
        assert!(matches!(app.overlay, Overlay::Detail(_)));
        assert_eq!(app.recent.list.len(), 1);
    }

    #[test]
    fn detail_quantity_steps() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Enter));
        handle_key(&mut app, press(KeyCode::Char('+')));
        handle_key(&mut app, press(KeyCode::Char('+')));
        assert_eq!(app.catalog.quantity.value(), 3);
        handle_key(&mut app, press(KeyCode::Char('-')));
        assert_eq!(app.catalog.quantity.value(), 2);
        handle_key(&mut app, press(KeyCode::Esc));
        assert_eq!(app.overlay, Overlay::None);
    }

    #[test]
    fn compare_remove_clamps_cursor() {
        let mut app = app();
        app.toggle_compare(0);
        app.toggle_compare(1);
        app.switch_panel(Panel::Compare);
        app.compare.cursor = 1;
        handle_key(&mut app, press(KeyCode::Char('x')));
        assert_eq!(app.compare.list.len(), 1);
        assert_eq!(app.compare.cursor, 0);
    }

    #[test]
    fn in_stock_toggle_refreshes() {
        let mut app = app();
        app.switch_panel(Panel::Filters);
        app.filters.focused = FilterControl::InStock;
        let before = app.catalog.visible.len();
        handle_key(&mut app, press(KeyCode::Char(' ')));
        assert!(app.filters.query.in_stock_only);
        assert!(app.catalog.visible.len() < before);
    }
}
