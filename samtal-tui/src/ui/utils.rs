use ratatui::style::Color;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Terminal cell width of a string, emoji and wide glyphs included.
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Word wrap to `width` cells. Words wider than a whole line are broken
/// hard so a URL can never blow the bubble open.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = display_width(word);

            if word_width > width {
                if !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                    line_width = 0;
                }
                for (chunk, chunk_width) in break_word(word, width) {
                    if chunk_width == width {
                        lines.push(chunk);
                    } else {
                        line = chunk;
                        line_width = chunk_width;
                    }
                }
                continue;
            }

            let needed = if line.is_empty() {
                word_width
            } else {
                word_width + 1
            };
            if line_width + needed > width {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }
            if !line.is_empty() {
                line.push(' ');
                line_width += 1;
            }
            line.push_str(word);
            line_width += word_width;
        }

        lines.push(line);
    }

    lines
}

fn break_word(word: &str, width: usize) -> Vec<(String, usize)> {
    let mut chunks = Vec::new();
    let mut chunk = String::new();
    let mut chunk_width = 0;

    for c in word.chars() {
        let c_width = c.width().unwrap_or(0);
        if chunk_width + c_width > width {
            chunks.push((std::mem::take(&mut chunk), chunk_width));
            chunk_width = 0;
        }
        chunk.push(c);
        chunk_width += c_width;
    }
    if !chunk.is_empty() {
        chunks.push((chunk, chunk_width));
    }
    chunks
}

/// Blend `from` toward `to`: opacity 1.0 keeps `from`, 0.0 reaches `to`.
/// The same interpolation the source used to fade evicted bubbles into the
/// canvas color.
pub fn fade_towards(from: Color, to: Color, opacity: f32) -> Color {
    let t = opacity.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(fr, fg, fb), Color::Rgb(tr, tg, tb)) => Color::Rgb(
            lerp_channel(fr, tr, t),
            lerp_channel(fg, tg, t),
            lerp_channel(fb, tb, t),
        ),
        _ => from,
    }
}

fn lerp_channel(from: u8, to: u8, t: f32) -> u8 {
    (f32::from(to) + (f32::from(from) - f32::from(to)) * t).round() as u8
}
