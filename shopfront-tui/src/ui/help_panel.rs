//! Panel 5 — Help: keyboard and mouse reference.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Global",
        &[
            ("1-5 / Tab", "switch panels"),
            ("q", "quit"),
        ],
    ),
    (
        "Catalog",
        &[
            ("j / k", "move the cursor"),
            ("Enter", "open the product detail"),
            ("c", "toggle the product in the compare list"),
        ],
    ),
    (
        "Filters",
        &[
            ("j / k", "move focus between controls"),
            ("h / l", "step the focused thumb (commits immediately)"),
            ("mouse drag", "drag a thumb; the filter commits on release"),
            ("Space", "toggle in-stock only"),
            ("r", "reset all filters"),
        ],
    ),
    (
        "Compare / Recent",
        &[
            ("x", "remove the selected entry"),
            ("C", "clear the list"),
        ],
    ),
    (
        "Detail overlay",
        &[
            ("+ / -", "adjust the quantity"),
            ("c", "toggle compare"),
            ("Esc", "close"),
        ],
    ),
];

pub fn render(f: &mut Frame, area: Rect, _app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();
    for (section, entries) in SECTIONS {
        lines.push(Line::from(Span::styled(*section, theme::accent())));
        for (keys, effect) in *entries {
            lines.push(Line::from(vec![
                Span::styled(format!("  {keys:<12}"), theme::neutral()),
                Span::styled(*effect, theme::text()),
            ]));
        }
        lines.push(Line::from(""));
    }

    let para = Paragraph::new(lines);
    f.render_widget(para, area);
}
