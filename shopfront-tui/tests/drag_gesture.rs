//! End-to-end drag gesture tests — synthetic mouse events through the real
//! dispatch path, checking the ordering invariant, the commit convention,
//! and the teardown rule (a released/torn-down gesture must be inert).

use std::path::PathBuf;

use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use proptest::prelude::*;
use ratatui::layout::Rect;

use shopfront_core::catalog::{Catalog, Product};
use shopfront_core::money::Money;
use shopfront_core::range::Thumb;
use shopfront_core::settings::ShopSettings;

use shopfront_tui::app::{AppState, Overlay, Panel};
use shopfront_tui::mouse::handle_mouse;

/// Track rect used throughout: 41 cells wide, so each cell is 2.5% of the
/// interval and 40% of the track is exactly 16 cells in.
const TRACK: Rect = Rect {
    x: 10,
    y: 5,
    width: 41,
    height: 1,
};

fn two_price_catalog(lo: i64, hi: i64) -> Catalog {
    let mk = |id: &str, price: i64| Product {
        id: id.into(),
        handle: format!("product-{id}"),
        title: format!("Product {id}"),
        vendor: "Forma".into(),
        price: Money(price),
        compare_at_price: None,
        available: true,
        options: Vec::new(),
    };
    Catalog::new(vec![mk("a", lo), mk("b", hi)])
}

/// An app on the filters panel with the slider "rendered": bounds 0..10000
/// cents ($0–$100) and the track rect recorded.
fn filters_app() -> AppState {
    let mut app = AppState::new(
        two_price_catalog(0, 10_000),
        ShopSettings::default(),
        PathBuf::from("."),
    );
    app.switch_panel(Panel::Filters);
    app.filters.track_area = Some(TRACK);
    app
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn press(app: &mut AppState, column: u16) {
    handle_mouse(
        app,
        mouse(MouseEventKind::Down(MouseButton::Left), column, TRACK.y),
    );
}

fn drag(app: &mut AppState, column: u16) {
    handle_mouse(
        app,
        mouse(MouseEventKind::Drag(MouseButton::Left), column, TRACK.y),
    );
}

fn release(app: &mut AppState) {
    handle_mouse(
        app,
        mouse(MouseEventKind::Up(MouseButton::Left), TRACK.x, TRACK.y),
    );
}

#[test]
fn drag_min_to_forty_percent_commits_40_00() {
    let mut app = filters_app();

    // Min thumb rests at the left edge of the track.
    press(&mut app, TRACK.x);
    assert!(app.filters.gesture.is_some());

    drag(&mut app, TRACK.x + 16); // 40% of 40 steps
    assert_eq!(app.filters.selection.value(Thumb::Min), 4_000.0);
    // Live update, but no commit until release.
    assert_eq!(app.filters.query.price_min, None);

    release(&mut app);
    assert!(app.filters.gesture.is_none());
    assert_eq!(app.filters.query.price_min.as_deref(), Some("40.00"));
    // The re-query ran: the $0 product is filtered out.
    assert_eq!(app.catalog.visible.len(), 1);
}

#[test]
fn drag_max_to_ninety_percent_commits_90_00() {
    let mut app = filters_app();

    press(&mut app, TRACK.x + TRACK.width - 1);
    drag(&mut app, TRACK.x + 36); // 90%
    assert_eq!(app.filters.selection.value(Thumb::Max), 9_000.0);

    release(&mut app);
    assert_eq!(app.filters.query.price_max.as_deref(), Some("90.00"));
    assert_eq!(app.filters.query.price_min, None);
}

#[test]
fn dragging_min_past_max_clamps_one_unit_under() {
    let mut app = filters_app();

    press(&mut app, TRACK.x);
    drag(&mut app, TRACK.x + TRACK.width + 20); // far past the right edge
    let (lo, hi) = app.filters.selection.values();
    assert_eq!(hi, 10_000.0);
    assert_eq!(lo, 9_999.0);
    release(&mut app);
    assert_eq!(app.filters.query.price_min.as_deref(), Some("99.99"));
}

#[test]
fn thumb_on_bound_commits_absent() {
    let mut app = filters_app();

    // Drag the min thumb out and back to the bound: both params end absent.
    press(&mut app, TRACK.x);
    drag(&mut app, TRACK.x + 16);
    drag(&mut app, TRACK.x);
    release(&mut app);
    assert_eq!(app.filters.query.price_min, None);
    assert_eq!(app.filters.query.price_max, None);
    assert_eq!(app.catalog.visible.len(), 2);
}

#[test]
fn press_away_from_thumbs_is_inert() {
    let mut app = filters_app();

    press(&mut app, TRACK.x + 20); // mid-track, both thumbs on the edges
    assert!(app.filters.gesture.is_none());

    // Off the track row entirely.
    handle_mouse(
        &mut app,
        mouse(MouseEventKind::Down(MouseButton::Left), TRACK.x, TRACK.y + 1),
    );
    assert!(app.filters.gesture.is_none());
}

#[test]
fn press_without_rendered_track_is_inert() {
    let mut app = filters_app();
    app.filters.track_area = None;
    press(&mut app, TRACK.x);
    assert!(app.filters.gesture.is_none());
}

#[test]
fn press_under_overlay_is_inert() {
    let mut app = filters_app();
    app.overlay = Overlay::Welcome;
    press(&mut app, TRACK.x);
    assert!(app.filters.gesture.is_none());
}

#[test]
fn teardown_mid_drag_makes_later_events_inert() {
    let mut app = filters_app();

    press(&mut app, TRACK.x);
    drag(&mut app, TRACK.x + 8);
    let values = app.filters.selection.values();

    // Panel switch tears the gesture down.
    app.switch_panel(Panel::Catalog);
    assert!(app.filters.gesture.is_none());

    // A stray move must not mutate the selection, and a stray release must
    // not commit.
    drag(&mut app, TRACK.x + 30);
    assert_eq!(app.filters.selection.values(), values);
    release(&mut app);
    assert_eq!(app.filters.query.price_min, None);
}

#[test]
fn degenerate_catalog_mounts_inert_slider() {
    let mut app = AppState::new(
        two_price_catalog(500, 500),
        ShopSettings::default(),
        PathBuf::from("."),
    );
    app.switch_panel(Panel::Filters);
    app.filters.track_area = Some(TRACK);
    assert!(app.filters.selection.is_degenerate());

    press(&mut app, TRACK.x);
    assert!(app.filters.gesture.is_none());
    drag(&mut app, TRACK.x + 16);
    release(&mut app);
    assert_eq!(app.filters.selection.values(), (500.0, 500.0));
    assert_eq!(app.filters.query.price_min, None);
}

proptest! {
    /// Any interleaving of presses, drags, and releases keeps the ordering
    /// invariant and only ever commits values matching the selection.
    #[test]
    fn random_gestures_keep_ordering(events in prop::collection::vec(arb_event(), 0..60)) {
        let mut app = filters_app();
        let (min, max) = app.filters.selection.bounds();
        for ev in events {
            handle_mouse(&mut app, ev);
            let (lo, hi) = app.filters.selection.values();
            prop_assert!(min <= lo);
            prop_assert!(hi <= max);
            prop_assert!(lo <= hi - 1.0);
        }
        release(&mut app);
        let (lo, hi) = app.filters.selection.values();
        prop_assert_eq!(app.filters.query.price_min.is_some(), lo > min);
        prop_assert_eq!(app.filters.query.price_max.is_some(), hi < max);
    }
}

fn arb_event() -> impl Strategy<Value = MouseEvent> {
    // Columns range past both track edges to exercise clamping.
    (0u8..3, 0u16..80).prop_map(|(kind, column)| {
        let kind = match kind {
            0 => MouseEventKind::Down(MouseButton::Left),
            1 => MouseEventKind::Drag(MouseButton::Left),
            _ => MouseEventKind::Up(MouseButton::Left),
        };
        MouseEvent {
            kind,
            column,
            row: TRACK.y,
            modifiers: KeyModifiers::NONE,
        }
    })
}
