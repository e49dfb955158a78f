//! Panel 3 — Compare: side-by-side shortlist, up to four products.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use shopfront_core::compare::MAX_COMPARE;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let state = &app.compare;
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(vec![
        Span::styled("Comparing ", theme::muted()),
        Span::styled(
            format!("{}/{MAX_COMPARE}", state.list.len()),
            theme::accent(),
        ),
        Span::styled("  [j/k]move [x]remove [C]lear", theme::muted()),
    ]));
    lines.push(Line::from(""));

    if state.list.is_empty() {
        lines.push(Line::from(Span::styled(
            "Nothing to compare yet — press c on a catalog product.",
            theme::muted(),
        )));
    }

    for (row, product) in state.list.items().iter().enumerate() {
        let is_cursor = row == state.cursor;
        let title_style = if is_cursor { theme::cursor() } else { theme::text() };

        lines.push(Line::from(vec![
            Span::styled(product.title.clone(), title_style),
            Span::styled(format!("  {}", product.vendor), theme::muted()),
            Span::styled(
                format!("  {}", app.settings.money_format.format(product.price)),
                theme::price(false),
            ),
            Span::styled(
                if product.available { "  in stock" } else { "  sold out" },
                theme::availability(product.available),
            ),
        ]));
    }

    let para = Paragraph::new(lines);
    f.render_widget(para, area);
}
