use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use samtal_core::models::ChatEntry;

use crate::app::App;
use crate::theme::Theme;
use crate::ui::utils::{display_width, fade_towards, wrap_text};
use crate::ui::widgets::TypingIndicator;

/// The conversation canvas: bubbles stacked from the bottom, the typing
/// indicator row, and the simulated input row.
pub struct ChatView;

impl ChatView {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = app.current_theme();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(5),
                Constraint::Length(1),
                Constraint::Length(3),
            ])
            .split(area);

        Self::render_messages(frame, chunks[0], app);

        if app.is_bot_composing() {
            let indicator_area = Rect {
                x: chunks[1].x + 2,
                width: chunks[1].width.saturating_sub(2),
                ..chunks[1]
            };
            TypingIndicator::render(frame, indicator_area, theme, app.animation_tick);
        }

        Self::render_input(frame, chunks[2], app);
    }

    /// Newest bubble sits at the bottom; older ones stack upward until the
    /// area runs out, which is the terminal's version of auto-scroll.
    fn render_messages(frame: &mut Frame, area: Rect, app: &App) {
        let theme = app.current_theme();

        frame.render_widget(
            Block::default().style(Style::default().bg(theme.surface())),
            area,
        );

        if app.chat.is_empty() {
            Self::render_welcome(frame, area, theme, app);
            return;
        }

        let bubble_max = ((area.width as usize).saturating_sub(10)).clamp(10, 46);
        let timestamp_rows = u16::from(app.show_timestamps());

        let entries: Vec<&ChatEntry> = app.chat.iter().collect();
        let mut bottom = area.bottom();

        for entry in entries.into_iter().rev() {
            let text = entry.revealed_text();
            let mut lines = wrap_text(&text, bubble_max);
            if lines.is_empty() {
                lines.push(String::new());
            }

            let height = lines.len() as u16 + timestamp_rows;
            if bottom < area.top() + height + 1 {
                break;
            }
            bottom -= height;
            Self::render_bubble(frame, area, bottom, entry, &lines, app);
            bottom -= 1; // gap between bubbles
        }
    }

    fn render_bubble(
        frame: &mut Frame,
        area: Rect,
        y: u16,
        entry: &ChatEntry,
        lines: &[String],
        app: &App,
    ) {
        let theme = app.current_theme();
        let opacity = entry.opacity();
        let is_bot = entry.message.is_bot();

        let (bubble_color, text_color) = if is_bot {
            (theme.bot_bubble(), theme.bot_text())
        } else {
            (theme.user_bubble(), theme.user_text())
        };
        let bubble_bg = fade_towards(bubble_color, theme.surface(), opacity);
        let bubble_fg = fade_towards(text_color, theme.surface(), opacity);

        let content_width = lines
            .iter()
            .map(|l| display_width(l))
            .max()
            .unwrap_or(1)
            .max(1) as u16
            + 2;

        let x = if is_bot {
            area.x + 4
        } else {
            area.right().saturating_sub(4 + content_width)
        };
        let bubble_area = Rect::new(x, y, content_width, lines.len() as u16);

        // avatar beside the first line
        let avatar = entry.message.sender.avatar();
        let avatar_x = if is_bot { area.x + 1 } else { area.right().saturating_sub(3) };
        let avatar_area = Rect::new(avatar_x, y, 2, 1);
        frame.render_widget(
            Paragraph::new(Span::styled(
                avatar,
                Style::default().fg(fade_towards(theme.foreground(), theme.surface(), opacity)),
            )),
            avatar_area,
        );

        let mut padded: Vec<Line> = lines
            .iter()
            .map(|l| Line::from(format!(" {l} ")))
            .collect();
        if !entry.is_fully_revealed() {
            if let Some(last) = padded.last_mut() {
                last.spans.push(Span::styled(
                    "▌",
                    Style::default().add_modifier(Modifier::SLOW_BLINK),
                ));
            }
        }

        let bubble = Paragraph::new(padded).style(Style::default().bg(bubble_bg).fg(bubble_fg));
        frame.render_widget(bubble, bubble_area);

        if app.show_timestamps() {
            let stamp_y = y + lines.len() as u16;
            if stamp_y < area.bottom() {
                let stamp = entry.message.timestamp_label();
                let stamp_area = Rect::new(x, stamp_y, content_width.max(5), 1);
                let alignment = if is_bot { Alignment::Left } else { Alignment::Right };
                frame.render_widget(
                    Paragraph::new(Span::styled(
                        stamp,
                        Style::default()
                            .fg(fade_towards(theme.foreground_dim(), theme.surface(), opacity)),
                    ))
                    .alignment(alignment),
                    stamp_area,
                );
            }
        }
    }

    fn render_welcome(frame: &mut Frame, area: Rect, theme: &dyn Theme, app: &App) {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "🎯 Automatisk AI-Demo",
                Style::default()
                    .fg(theme.accent())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!(
                    "Du kommer att se olika kundscenarier som visar hur {}",
                    app.brand_name()
                ),
                Style::default().fg(theme.foreground_dim()),
            )),
            Line::from(Span::styled(
                "hanterar olika typer av förfrågningar.",
                Style::default().fg(theme.foreground_dim()),
            )),
        ];
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            area,
        );
    }

    fn render_input(frame: &mut Frame, area: Rect, app: &App) {
        let theme = app.current_theme();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border()))
            .style(Style::default().bg(theme.surface()));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(3)])
            .split(inner);

        let content = match app.input_display() {
            Some(text) => Line::from(vec![
                Span::styled(text, Style::default().fg(theme.foreground())),
                Span::styled("▌", Style::default().fg(theme.accent())),
            ]),
            None => Line::from(Span::styled(
                "Skriv ett meddelande...",
                Style::default().fg(theme.foreground_dim()),
            )),
        };
        frame.render_widget(Paragraph::new(content), chunks[0]);

        let send = Paragraph::new(Span::styled(
            "🚀",
            Style::default().fg(theme.accent()).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Right);
        frame.render_widget(send, chunks[1]);
    }
}
