//! Dual-thumb price slider — value labels, track with fill span, bound labels.
//!
//! Three rows: current values, the track itself, the interval bounds. The
//! track row is the mouse surface; the filters panel records its rect for
//! hit-testing after every draw. All value text re-renders from the selection
//! each frame, so labels always match the thumbs.

use ratatui::style::Modifier;
use ratatui::text::{Line, Span};

use shopfront_core::money::Money;
use shopfront_core::range::{RangeSelection, Thumb};

use crate::mouse::thumb_column;
use crate::theme;

const THUMB: &str = "◆";
const FILL: &str = "━";
const REST: &str = "─";

pub struct PriceSlider<'a> {
    pub selection: &'a RangeSelection,
    pub currency: &'a str,
    /// Thumb with keyboard focus, if any.
    pub focused: Option<Thumb>,
    /// Thumb held by a mouse drag, if any.
    pub dragging: Option<Thumb>,
}

impl PriceSlider<'_> {
    /// Row 1: the selected interval, e.g. `$42 – $280`.
    pub fn values_line(&self) -> Line<'static> {
        let (lo, hi) = self.selection.values();
        Line::from(vec![
            Span::styled(self.label(lo), self.thumb_style(Thumb::Min)),
            Span::styled(" – ", theme::muted()),
            Span::styled(self.label(hi), self.thumb_style(Thumb::Max)),
        ])
    }

    /// Row 2: the track. Cells are inclusive positions; ratio 1.0 is the last
    /// cell. Degenerate selections draw fixed thumbs at the track ends.
    pub fn track_line(&self, width: u16) -> Line<'static> {
        if width < 2 {
            return Line::from(Span::styled(REST.repeat(width as usize), theme::muted()));
        }
        let origin = ratatui::layout::Rect::new(0, 0, width, 1);
        let min_cell = thumb_column(origin, self.selection.ratio_of(Thumb::Min)) as usize;
        let max_cell = thumb_column(origin, self.selection.ratio_of(Thumb::Max)) as usize;

        let mut spans = Vec::with_capacity(5);
        spans.push(Span::styled(REST.repeat(min_cell), theme::muted()));
        spans.push(Span::styled(THUMB, self.thumb_style(Thumb::Min)));
        if max_cell > min_cell {
            spans.push(Span::styled(
                FILL.repeat(max_cell - min_cell - 1),
                theme::accent(),
            ));
            spans.push(Span::styled(THUMB, self.thumb_style(Thumb::Max)));
        }
        spans.push(Span::styled(
            REST.repeat((width as usize - 1).saturating_sub(max_cell)),
            theme::muted(),
        ));
        Line::from(spans)
    }

    /// Row 3: the interval bounds, anchored to the track ends.
    pub fn bounds_line(&self, width: u16) -> Line<'static> {
        let (min, max) = self.selection.bounds();
        let left = self.label(min);
        let right = self.label(max);
        let pad = (width as usize).saturating_sub(left.chars().count() + right.chars().count());
        Line::from(vec![
            Span::styled(left, theme::muted()),
            Span::raw(" ".repeat(pad)),
            Span::styled(right, theme::muted()),
        ])
    }

    /// Compact whole-unit price label, e.g. `$42`.
    fn label(&self, cents: f64) -> String {
        format!(
            "{}{}",
            self.currency,
            Money::from_cents(cents.round() as i64).whole_units()
        )
    }

    fn thumb_style(&self, thumb: Thumb) -> ratatui::style::Style {
        if self.dragging == Some(thumb) {
            theme::accent().add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else if self.focused == Some(thumb) {
            theme::accent().add_modifier(Modifier::BOLD)
        } else {
            theme::text()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn slider(selection: &RangeSelection) -> PriceSlider<'_> {
        PriceSlider {
            selection,
            currency: "$",
            focused: None,
            dragging: None,
        }
    }

    #[test]
    fn track_has_two_thumbs_at_full_interval() {
        let sel = RangeSelection::new(0.0, 10_000.0);
        let line = slider(&sel).track_line(21);
        let text = text_of(&line);
        assert_eq!(text.chars().count(), 21);
        assert!(text.starts_with(THUMB));
        assert!(text.ends_with(THUMB));
        assert_eq!(text.matches(THUMB).count(), 2);
    }

    #[test]
    fn track_reflects_interior_selection() {
        let sel = RangeSelection::with_values(0.0, 10_000.0, 5_000.0, 10_000.0);
        let text = text_of(&slider(&sel).track_line(21));
        // Min thumb at 50% of 21 cells -> cell 10.
        assert_eq!(text.chars().position(|c| c.to_string() == THUMB), Some(10));
        assert_eq!(text.chars().count(), 21);
    }

    #[test]
    fn values_line_shows_whole_units() {
        let sel = RangeSelection::with_values(0.0, 10_000.0, 4_000.0, 9_000.0);
        let text = text_of(&slider(&sel).values_line());
        assert_eq!(text, "$40 – $90");
    }

    #[test]
    fn bounds_line_is_padded_to_width() {
        let sel = RangeSelection::new(1_800.0, 28_000.0);
        let text = text_of(&slider(&sel).bounds_line(30));
        assert!(text.starts_with("$18"));
        assert!(text.ends_with("$280"));
        assert_eq!(text.chars().count(), 30);
    }

    #[test]
    fn degenerate_renders_fixed_without_panic() {
        let sel = RangeSelection::new(500.0, 500.0);
        let text = text_of(&slider(&sel).track_line(11));
        assert_eq!(text.chars().count(), 11);
        assert_eq!(text.matches(THUMB).count(), 2);
    }

    #[test]
    fn narrow_track_degrades() {
        let sel = RangeSelection::new(0.0, 10_000.0);
        let text = text_of(&slider(&sel).track_line(1));
        assert_eq!(text.chars().count(), 1);
    }
}
