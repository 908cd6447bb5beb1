use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The brand bar: mark + studio name on the left, live clock and the
/// conversation counter on the right. Drawn on the accent color like the
/// original's blue header strip.
pub struct Header;

impl Header {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = app.current_theme();
        let on_accent = Style::default().fg(theme.background());

        frame.render_widget(
            Block::default().style(Style::default().bg(theme.accent())),
            area,
        );

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(30), Constraint::Length(26)])
            .split(area);

        let brand = Paragraph::new(vec![
            Line::from(vec![
                Span::styled(format!("{} ", app.brand_mark().symbol()), on_accent),
                Span::styled(
                    format!("{} AI-Assistent", app.brand_name()),
                    on_accent.add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!(" v{VERSION}"), on_accent),
            ]),
            Line::from(Span::styled(
                format!("🟢 {}", app.brand_tagline()),
                on_accent,
            )),
        ])
        .block(Block::default().borders(Borders::NONE));
        frame.render_widget(brand, chunks[0]);

        let clock = chrono::Local::now().format("%H:%M:%S").to_string();
        let counter = app
            .conversation_counter()
            .map(|(current, total)| format!("Konversation {current}/{total}"))
            .unwrap_or_else(|| "Demo startar...".to_string());

        let right = Paragraph::new(vec![
            Line::from(Span::styled(clock, on_accent)),
            Line::from(Span::styled(counter, on_accent)),
        ])
        .alignment(Alignment::Right)
        .block(Block::default().borders(Borders::NONE));
        frame.render_widget(right, chunks[1]);
    }
}
