//! Overlays — welcome screen and product detail, drawn over the active panel.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

pub fn render_welcome(f: &mut Frame, area: Rect, app: &AppState) {
    let rect = centered_rect(area, 52, 8);
    f.render_widget(Clear, rect);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(format!(" {} ", app.settings.shop_name));
    let inner = block.inner(rect);
    f.render_widget(block, rect);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Browse the catalog, filter by price, shortlist pieces.",
            theme::text(),
        )),
        Line::from(""),
        Line::from(Span::styled("Press any key to start.", theme::muted())),
    ];
    f.render_widget(Paragraph::new(lines).centered(), inner);
}

pub fn render_detail(f: &mut Frame, area: Rect, app: &AppState, idx: usize) {
    let Some(product) = app.catalog.catalog.products.get(idx) else {
        return;
    };

    let rect = centered_rect(area, 56, 12);
    f.render_widget(Clear, rect);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(format!(" {} ", product.title));
    let inner = block.inner(rect);
    f.render_widget(block, rect);

    let mut price_spans = vec![Span::styled(
        app.settings.money_format.format(product.price),
        theme::price(product.on_sale()),
    )];
    if let Some(was) = product.compare_at_price.filter(|_| product.on_sale()) {
        price_spans.push(Span::styled(
            format!("  {}", app.settings.money_format.format(was)),
            theme::muted().add_modifier(Modifier::CROSSED_OUT),
        ));
    }

    let mut lines = vec![
        Line::from(vec![
            Span::styled(product.vendor.clone(), theme::neutral()),
            Span::styled(format!("  {}", product.url()), theme::muted()),
        ]),
        Line::from(price_spans),
        Line::from(Span::styled(
            if product.available { "In stock" } else { "Sold out" },
            theme::availability(product.available),
        )),
    ];
    if !product.options.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("Options: {}", product.options.join(" / ")),
            theme::muted(),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Quantity  ", theme::text()),
        Span::styled("−", theme::muted()),
        Span::styled(
            format!(" {} ", app.catalog.quantity.value()),
            theme::accent().add_modifier(Modifier::BOLD),
        ),
        Span::styled("+", theme::muted()),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[+/-]quantity [c]ompare [Esc]close",
        theme::muted(),
    )));

    f.render_widget(Paragraph::new(lines), inner);
}

/// Fixed-size rect centered in the area, clipped to it.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
