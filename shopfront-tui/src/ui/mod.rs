//! Top-level UI layout — active panel, status bar, overlays, toasts.

pub mod catalog_panel;
pub mod compare_panel;
pub mod filters_panel;
pub mod help_panel;
pub mod overlays;
pub mod recent_panel;
pub mod status_bar;
pub mod widgets;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::app::{AppState, Overlay, Panel};
use crate::theme;
use crate::toast::ToastLevel;

/// Draw the entire UI. Takes the app mutably because the filters panel
/// records the slider's track rect for mouse hit-testing.
pub fn draw(f: &mut Frame, app: &mut AppState) {
    // Split: main area + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    let main_area = chunks[0];
    let status_area = chunks[1];

    draw_panel(f, main_area, app);
    status_bar::render(f, status_area, app);

    // Overlays on top.
    match app.overlay {
        Overlay::Welcome => overlays::render_welcome(f, main_area, app),
        Overlay::Detail(idx) => overlays::render_detail(f, main_area, app, idx),
        Overlay::None => {}
    }

    draw_toasts(f, main_area, app);
}

/// Draw the active panel with its border.
fn draw_panel(f: &mut Frame, area: Rect, app: &mut AppState) {
    let panel = app.active_panel;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(format!(" {} [{}] ", panel.label(), panel.index() + 1))
        .title_style(theme::panel_title(true));

    let inner = block.inner(area);
    f.render_widget(block, area);

    match panel {
        Panel::Catalog => catalog_panel::render(f, inner, app),
        Panel::Filters => filters_panel::render(f, inner, app),
        Panel::Compare => compare_panel::render(f, inner, app),
        Panel::Recent => recent_panel::render(f, inner, app),
        Panel::Help => help_panel::render(f, inner, app),
    }
}

/// Toasts stack in the top-right corner of the main area.
fn draw_toasts(f: &mut Frame, area: Rect, app: &AppState) {
    for (i, toast) in app.toasts.iter().enumerate() {
        let width = (toast.message.chars().count() as u16 + 4).min(area.width);
        let y = area.y + 1 + i as u16;
        if y >= area.y + area.height {
            break;
        }
        let rect = Rect::new(area.x + area.width - width, y, width, 1);
        let style = match toast.level {
            ToastLevel::Info => theme::accent(),
            ToastLevel::Success => theme::positive(),
            ToastLevel::Error => theme::negative(),
        };
        f.render_widget(Clear, rect);
        let line = Line::from(Span::styled(format!(" {} ", toast.message), style));
        f.render_widget(Paragraph::new(line).right_aligned(), rect);
    }
}
