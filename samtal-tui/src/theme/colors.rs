use ratatui::style::Color;

/// 0xRRGGBB → terminal color.
pub fn hex_to_color(hex: u32) -> Color {
    Color::Rgb(
        ((hex >> 16) & 0xff) as u8,
        ((hex >> 8) & 0xff) as u8,
        (hex & 0xff) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_color_splits_channels() {
        assert_eq!(hex_to_color(0x0066cc), Color::Rgb(0x00, 0x66, 0xcc));
        assert_eq!(hex_to_color(0xffffff), Color::Rgb(255, 255, 255));
        assert_eq!(hex_to_color(0x000000), Color::Rgb(0, 0, 0));
    }
}
