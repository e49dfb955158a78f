//! Mouse dispatch — drag gestures for the price slider.
//!
//! A drag is a scoped resource: acquired on press, released on release and on
//! every teardown path (panel switch, overlay open, terminal resize). With the
//! terminal's mouse capture enabled, move events keep routing to us wherever
//! the cursor goes; the gesture decides whether they may mutate anything. A
//! stray drag event with no gesture held is a silent no-op.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use shopfront_core::range::Thumb;

use crate::app::{AppState, Overlay, Panel};

/// How far (in columns) from a thumb cell a press still grabs it.
const GRAB_RADIUS: u16 = 1;

/// An in-progress thumb drag.
///
/// The track rect is captured at press time: the layout cannot change while a
/// drag is held (resize tears the gesture down), so moves use the cached rect
/// instead of re-reading the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragGesture {
    pub thumb: Thumb,
    pub track: Rect,
}

impl DragGesture {
    pub fn new(thumb: Thumb, track: Rect) -> Self {
        DragGesture { thumb, track }
    }
}

pub fn handle_mouse(app: &mut AppState, ev: MouseEvent) {
    match ev.kind {
        MouseEventKind::Down(MouseButton::Left) => on_press(app, ev.column, ev.row),
        MouseEventKind::Drag(MouseButton::Left) => on_drag(app, ev.column),
        MouseEventKind::Up(MouseButton::Left) => on_release(app),
        _ => {}
    }
}

/// A press begins a drag only on the filters panel, with the slider rendered,
/// on or next to a thumb cell. Everything else is inert.
fn on_press(app: &mut AppState, column: u16, row: u16) {
    if app.active_panel != Panel::Filters || app.overlay != Overlay::None {
        return;
    }
    let Some(track) = app.filters.track_area else {
        return;
    };
    if track.width < 2 || row != track.y {
        return;
    }
    let selection = &app.filters.selection;
    if selection.is_degenerate() {
        return;
    }

    let min_col = thumb_column(track, selection.ratio_of(Thumb::Min));
    let max_col = thumb_column(track, selection.ratio_of(Thumb::Max));
    let d_min = column.abs_diff(min_col);
    let d_max = column.abs_diff(max_col);
    if d_min.min(d_max) > GRAB_RADIUS {
        return;
    }
    // Nearest thumb wins; ties go to the min thumb.
    let thumb = if d_min <= d_max { Thumb::Min } else { Thumb::Max };
    app.filters.gesture = Some(DragGesture::new(thumb, track));
}

/// Move the held thumb to the cursor column. The column clamps into the
/// cached track, so dragging past either edge parks the thumb on the bound.
fn on_drag(app: &mut AppState, column: u16) {
    let Some(gesture) = app.filters.gesture else {
        return;
    };
    if gesture.track.width < 2 {
        return;
    }
    let offset = column.saturating_sub(gesture.track.x);
    let ratio = offset as f64 / (gesture.track.width - 1) as f64;
    app.filters.selection.drag_to(gesture.thumb, ratio);
}

/// Release ends the gesture and performs the once-per-gesture side effect:
/// the selection commits into the facet params and the catalog re-queries.
fn on_release(app: &mut AppState) {
    if app.filters.gesture.take().is_some() {
        app.commit_range();
    }
}

/// The cell a thumb occupies: track cells are inclusive positions, so ratio
/// 1.0 lands on the last cell.
pub fn thumb_column(track: Rect, ratio: f64) -> u16 {
    let last = track.width.saturating_sub(1) as f64;
    track.x + (ratio.clamp(0.0, 1.0) * last).round() as u16
}
