use ratatui::style::Color;

use super::{colors::hex_to_color, Theme};

/// The light palette of the original demo: blue brand on a grey canvas.
pub struct Studio;

impl Theme for Studio {
    fn name(&self) -> &'static str {
        "Studio"
    }

    fn background(&self) -> Color {
        hex_to_color(0xf0f2f5)
    }

    fn foreground(&self) -> Color {
        hex_to_color(0x212529)
    }

    fn foreground_dim(&self) -> Color {
        hex_to_color(0x6c757d)
    }

    fn surface(&self) -> Color {
        hex_to_color(0xffffff)
    }

    fn border(&self) -> Color {
        hex_to_color(0xdee2e6)
    }

    fn selection(&self) -> Color {
        hex_to_color(0xcfe2ff)
    }

    fn accent(&self) -> Color {
        hex_to_color(0x0066cc)
    }

    fn success(&self) -> Color {
        hex_to_color(0x00cc66)
    }

    fn warning(&self) -> Color {
        hex_to_color(0xff6b35)
    }

    fn error(&self) -> Color {
        hex_to_color(0xdc3545)
    }

    fn info(&self) -> Color {
        hex_to_color(0x3399ff)
    }

    fn bot_bubble(&self) -> Color {
        hex_to_color(0x0066cc)
    }

    fn bot_text(&self) -> Color {
        hex_to_color(0xffffff)
    }

    fn user_bubble(&self) -> Color {
        hex_to_color(0xe3f2fd)
    }

    fn user_text(&self) -> Color {
        hex_to_color(0x1565c0)
    }
}
