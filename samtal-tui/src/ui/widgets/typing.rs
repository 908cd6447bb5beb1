use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme::Theme;

/// The three pulsing dots shown while the bot composes a message. A wave
/// runs across the dots, one step every other animation tick.
pub struct TypingIndicator;

impl TypingIndicator {
    pub fn line(theme: &dyn Theme, tick: u64) -> Line<'static> {
        let active = (tick / 2) % 3;
        let mut spans = vec![Span::styled("🤖 ", Style::default())];
        for i in 0..3u64 {
            let style = if i == active {
                Style::default()
                    .fg(theme.accent())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.foreground_dim())
            };
            spans.push(Span::styled("•", style));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }

    pub fn render(frame: &mut Frame, area: Rect, theme: &dyn Theme, tick: u64) {
        let paragraph = Paragraph::new(Self::line(theme, tick));
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Studio;

    #[test]
    fn test_wave_cycles_through_all_dots() {
        let theme = Studio;
        let mut seen = std::collections::HashSet::new();
        for tick in 0..6 {
            let line = TypingIndicator::line(&theme, tick);
            let accent_position = line
                .spans
                .iter()
                .enumerate()
                .find(|(_, s)| s.style.fg == Some(theme.accent()))
                .map(|(i, _)| i);
            seen.insert(accent_position);
        }
        assert_eq!(seen.len(), 3);
    }
}
