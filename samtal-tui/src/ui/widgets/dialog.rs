use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use samtal_core::flow::BookingSummary;

use crate::theme::Theme;

/// The confirmation splash shown over the modal once a booking goes
/// through. Single button; Enter or Esc dismisses it.
pub struct SuccessDialog<'a> {
    summary: &'a BookingSummary,
}

impl<'a> SuccessDialog<'a> {
    pub fn new(summary: &'a BookingSummary) -> Self {
        Self { summary }
    }

    pub fn calculate_area(screen: Rect) -> Rect {
        let width = 52u16.min(screen.width.saturating_sub(4));
        let height = 14u16.min(screen.height.saturating_sub(2));
        let x = (screen.width.saturating_sub(width)) / 2;
        let y = (screen.height.saturating_sub(height)) / 2;
        Rect::new(x, y, width, height)
    }

    pub fn render(&self, frame: &mut Frame, screen: Rect, theme: &dyn Theme) {
        let area = Self::calculate_area(screen);
        frame.render_widget(Clear, area);

        let block = Block::default()
            .title(" Bokning Bekräftad! ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(
                Style::default()
                    .fg(theme.background())
                    .add_modifier(Modifier::BOLD),
            )
            .style(Style::default().bg(theme.success()));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(inner);

        let text_style = Style::default().fg(theme.background());
        let bold = text_style.add_modifier(Modifier::BOLD);

        let headline = Paragraph::new(vec![
            Line::from(Span::styled("🎉", bold)),
            Line::from(Span::styled("Fantastiskt!", bold)),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(headline, chunks[0]);

        let summary_lines: Vec<Line> = self
            .summary
            .message()
            .lines()
            .map(|l| Line::from(Span::styled(l.to_string(), text_style)))
            .collect();
        let summary = Paragraph::new(summary_lines).alignment(Alignment::Center);
        frame.render_widget(summary, chunks[1]);

        let followup = Paragraph::new(vec![
            Line::from(Span::styled(
                "📧 Kalenderinbjudan skickas inom 5 minuter",
                text_style,
            )),
            Line::from(Span::styled("📞 Vi ringer 5 minuter före mötet", text_style)),
            Line::from(Span::styled(
                "🚀 Förbered dig på en fantastisk AI-resa!",
                text_style,
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(followup, chunks[2]);

        let button = Paragraph::new(Line::from(Span::styled(
            " Perfekt! Stäng (Enter) ",
            Style::default()
                .fg(theme.success())
                .bg(theme.background())
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(button, chunks[3]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_area_is_centered_and_bounded() {
        let screen = Rect::new(0, 0, 100, 40);
        let area = SuccessDialog::calculate_area(screen);
        assert!(area.width <= 52);
        assert!(area.x + area.width <= screen.width);
        assert!(area.y + area.height <= screen.height);
    }

    #[test]
    fn test_summary_message_feeds_the_dialog() {
        let summary = BookingSummary {
            name: "Anna Andersson".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 12, 6).unwrap(),
            time: "10:30".to_string(),
            service: None,
        };
        let dialog = SuccessDialog::new(&summary);
        assert!(dialog.summary.message().contains("Anna Andersson"));
        assert!(dialog.summary.message().contains("10:30"));
    }
}
