//! Panel 1 — Catalog: the filtered product list.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let state = &app.catalog;
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(vec![
        Span::styled("Showing ", theme::muted()),
        Span::styled(
            format!("{}/{}", state.visible.len(), state.catalog.len()),
            theme::accent(),
        ),
        Span::styled(
            "  [j/k]move [Enter]view [c]ompare",
            theme::muted(),
        ),
    ]));
    lines.push(Line::from(""));

    if state.visible.is_empty() {
        lines.push(Line::from(Span::styled(
            "No products match the current filters — press 2 to adjust them.",
            theme::warning(),
        )));
    }

    for (row, &idx) in state.visible.iter().enumerate() {
        let product = &state.catalog.products[idx];
        let is_cursor = row == state.cursor;

        let mut spans: Vec<Span> = Vec::new();
        spans.push(if app.compare.list.contains(&product.id) {
            Span::styled("[c] ", theme::neutral())
        } else {
            Span::raw("    ")
        });

        let title_style = if is_cursor { theme::cursor() } else { theme::text() };
        spans.push(Span::styled(product.title.clone(), title_style));
        spans.push(Span::styled(format!("  {}", product.vendor), theme::muted()));

        spans.push(Span::styled(
            format!("  {}", app.settings.money_format.format(product.price)),
            theme::price(product.on_sale()),
        ));
        if let Some(was) = product.compare_at_price.filter(|_| product.on_sale()) {
            spans.push(Span::styled(
                format!("  {}", app.settings.money_format.format(was)),
                theme::muted().add_modifier(Modifier::CROSSED_OUT),
            ));
        }

        let dot = if product.available { " ●" } else { " ○" };
        spans.push(Span::styled(dot, theme::availability(product.available)));

        lines.push(Line::from(spans));
    }

    let para = Paragraph::new(lines);
    f.render_widget(para, area);
}
