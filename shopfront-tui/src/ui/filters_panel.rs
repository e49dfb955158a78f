//! Panel 2 — Filters: price slider, vendor facet, stock toggle.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, FilterControl};
use crate::theme;
use crate::ui::widgets::slider::PriceSlider;

/// Row of the track line within the panel, counted from the panel top.
const TRACK_ROW: u16 = 3;

pub fn render(f: &mut Frame, area: Rect, app: &mut AppState) {
    let filters = &app.filters;
    let slider = PriceSlider {
        selection: &filters.selection,
        currency: &app.settings.currency_symbol,
        focused: filters.focused.thumb(),
        dragging: filters.gesture.map(|g| g.thumb),
    };

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        "[j/k]focus [h/l]adjust [r]eset · drag thumbs with the mouse",
        theme::muted(),
    )));
    lines.push(Line::from(""));

    // Price section: values, track, bounds.
    let mut price_header = vec![marker(filters.focused.thumb().is_some()), Span::raw("Price  ")];
    price_header.extend(slider.values_line().spans);
    lines.push(Line::from(price_header));
    lines.push(slider.track_line(area.width));
    lines.push(slider.bounds_line(area.width));
    lines.push(Line::from(""));

    // Vendor facet.
    let vendor_label = filters.query.vendor.as_deref().unwrap_or("Any");
    lines.push(Line::from(vec![
        marker(filters.focused == FilterControl::Vendor),
        Span::styled("Vendor  ", theme::text()),
        Span::styled(vendor_label.to_string(), theme::neutral()),
        Span::styled(
            format!("  ({} in catalog)", filters.vendors.len()),
            theme::muted(),
        ),
    ]));

    // Stock facet.
    let check = if filters.query.in_stock_only { "[x]" } else { "[ ]" };
    lines.push(Line::from(vec![
        marker(filters.focused == FilterControl::InStock),
        Span::styled(format!("{check} In stock only"), theme::text()),
    ]));
    lines.push(Line::from(""));

    lines.push(Line::from(vec![
        Span::styled("Active: ", theme::muted()),
        Span::styled(filters.query.summary(), theme::accent()),
        Span::styled(
            format!(
                "  ·  {} of {} products match",
                app.catalog.visible.len(),
                app.catalog.catalog.len()
            ),
            theme::muted(),
        ),
    ]));

    let para = Paragraph::new(lines);
    f.render_widget(para, area);

    // Record the track rect for mouse hit-testing. A panel too short to show
    // the track leaves the slider inert.
    app.filters.track_area = if area.height > TRACK_ROW {
        Some(Rect::new(area.x, area.y + TRACK_ROW, area.width, 1))
    } else {
        None
    };
}

fn marker(focused: bool) -> Span<'static> {
    if focused {
        Span::styled("▸ ", theme::accent())
    } else {
        Span::raw("  ")
    }
}
