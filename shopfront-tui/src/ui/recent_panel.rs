//! Panel 4 — Recently viewed: most recent first.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let state = &app.recent;
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(vec![
        Span::styled("Recently viewed ", theme::muted()),
        Span::styled(format!("{}", state.list.len()), theme::accent()),
        Span::styled("  [j/k]move [x]remove [C]lear", theme::muted()),
    ]));
    lines.push(Line::from(""));

    if state.list.is_empty() {
        lines.push(Line::from(Span::styled(
            "No views yet — open a product with Enter in the catalog.",
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
                format!("  viewed {}", product.added_at.format("%b %d, %H:%M")),
                theme::muted(),
            ),
        ]));
    }

    let para = Paragraph::new(lines);
    f.render_widget(para, area);
}
