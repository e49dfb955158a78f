//! Style tokens for the shopfront TUI.
//!
//! Warm gallery palette: parchment text on deep charcoal, brass accents for
//! focus, clay for sale prices.

use ratatui::style::{Color, Modifier, Style};

const ACCENT: Color = Color::Rgb(222, 178, 92);
const POSITIVE: Color = Color::Rgb(126, 186, 118);
const NEGATIVE: Color = Color::Rgb(214, 93, 86);
const WARNING: Color = Color::Rgb(224, 138, 81);
const NEUTRAL: Color = Color::Rgb(156, 138, 185);
const MUTED: Color = Color::Rgb(126, 134, 148);
const TEXT: Color = Color::Rgb(233, 226, 210);

/// Focus, highlights, the active thumb.
pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

/// In stock, successful actions.
pub fn positive() -> Style {
    Style::default().fg(POSITIVE)
}

/// Errors, sold out.
pub fn negative() -> Style {
    Style::default().fg(NEGATIVE)
}

/// Warnings, sale badges.
pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

/// Secondary information.
pub fn neutral() -> Style {
    Style::default().fg(NEUTRAL)
}

/// Hints, disabled, inactive track.
pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

/// Primary text.
pub fn text() -> Style {
    Style::default().fg(TEXT)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent().add_modifier(Modifier::BOLD)
    } else {
        muted()
    }
}

/// Cursor-row emphasis.
pub fn cursor() -> Style {
    accent().add_modifier(Modifier::REVERSED)
}

/// Price color: clay when discounted, parchment otherwise.
pub fn price(on_sale: bool) -> Style {
    if on_sale {
        warning()
    } else {
        text()
    }
}

/// Availability dot color.
pub fn availability(available: bool) -> Style {
    if available {
        positive()
    } else {
        negative()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_highlights_sales() {
        assert_eq!(price(true), warning());
        assert_eq!(price(false), text());
    }

    #[test]
    fn availability_colors() {
        assert_eq!(availability(true), positive());
        assert_eq!(availability(false), negative());
    }

    #[test]
    fn border_follows_focus() {
        assert_eq!(panel_border(true), accent());
        assert_eq!(panel_border(false), muted());
    }
}
