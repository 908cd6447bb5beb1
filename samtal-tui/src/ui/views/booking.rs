use chrono::Datelike;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph},
    Frame,
};

use samtal_core::models::DAY_HEADERS;

use crate::app::{App, ModalSection, ModalState};
use crate::theme::Theme;
use crate::ui::utils::fade_towards;

/// The booking overlay: progress, quick picks, calendar, time slots,
/// services, contact form and the confirm row. Fades in and out with the
/// flow's open/close phases.
pub struct BookingView;

impl BookingView {
    pub fn calculate_area(screen: Rect) -> Rect {
        let width = 76u16.min(screen.width.saturating_sub(2));
        let height = 24u16.min(screen.height.saturating_sub(2));
        let x = (screen.width.saturating_sub(width)) / 2;
        let y = (screen.height.saturating_sub(height)) / 2;
        Rect::new(x, y, width, height)
    }

    pub fn render(frame: &mut Frame, screen: Rect, app: &App, modal: &ModalState) {
        let theme = app.current_theme();
        let area = Self::calculate_area(screen);
        let fade = modal.flow.fade_ratio();

        frame.render_widget(Clear, area);

        let border_color = fade_towards(theme.accent(), theme.background(), fade);
        let block = Block::default()
            .title(format!(" 🚀 AI-Bokningssystem - {} ", app.brand_name()))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color).add_modifier(Modifier::BOLD))
            .style(Style::default().bg(theme.surface()));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // headline
                Constraint::Length(1), // progress
                Constraint::Length(2), // quick picks
                Constraint::Min(8),    // calendar | slots+services
                Constraint::Length(6), // contact form
                Constraint::Length(1), // confirm row
                Constraint::Length(1), // error / hint
            ])
            .split(inner);

        Self::render_headline(frame, chunks[0], theme, fade);
        Self::render_progress(frame, chunks[1], theme, modal);
        Self::render_quick_picks(frame, chunks[2], theme, modal);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(29), Constraint::Min(30)])
            .split(chunks[3]);
        Self::render_calendar(frame, body[0], theme, modal);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(6), Constraint::Min(4)])
            .split(body[1]);
        Self::render_slots(frame, right[0], theme, modal);
        Self::render_services(frame, right[1], theme, modal);

        Self::render_form(frame, chunks[4], theme, modal);
        Self::render_confirm(frame, chunks[5], theme, modal);
        Self::render_error_row(frame, chunks[6], theme, modal);
    }

    fn render_headline(frame: &mut Frame, area: Rect, theme: &dyn Theme, fade: f32) {
        let accent = fade_towards(theme.accent(), theme.surface(), fade);
        let dim = fade_towards(theme.foreground_dim(), theme.surface(), fade);
        let headline = Paragraph::new(vec![
            Line::from(Span::styled(
                "🎯 Boka Din AI-Transformation",
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Upptäck hur AI kan revolutionera ditt företag på bara 30 minuter",
                Style::default().fg(dim),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(headline, area);
    }

    fn render_progress(frame: &mut Frame, area: Rect, theme: &dyn Theme, modal: &ModalState) {
        let (percent, label) = modal.flow.progress();
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(theme.accent()).bg(theme.border()))
            .percent(percent)
            .label(Span::styled(
                label,
                Style::default()
                    .fg(theme.foreground())
                    .add_modifier(Modifier::BOLD),
            ));
        frame.render_widget(gauge, area);
    }

    fn render_quick_picks(frame: &mut Frame, area: Rect, theme: &dyn Theme, modal: &ModalState) {
        let focused = modal.section == ModalSection::Quick;
        let title_style = Self::section_title_style(theme, focused);

        let mut spans = vec![Span::styled("Snabbval: ", title_style)];
        for (i, date) in modal.flow.quick_dates().iter().enumerate() {
            let label = format!(" {} {}/{} ", short_weekday(*date), date.day(), date.month());
            let selected = modal.flow.selection.date == Some(*date);
            let under_cursor = focused && modal.quick_cursor == i;
            let style = if selected {
                Style::default()
                    .fg(theme.surface())
                    .bg(theme.accent())
                    .add_modifier(Modifier::BOLD)
            } else if under_cursor {
                Style::default().fg(theme.foreground()).bg(theme.selection())
            } else {
                Style::default().fg(theme.foreground()).bg(theme.background())
            };
            spans.push(Span::styled(label, style));
            spans.push(Span::raw(" "));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_calendar(frame: &mut Frame, area: Rect, theme: &dyn Theme, modal: &ModalState) {
        let focused = modal.section == ModalSection::Calendar;
        let calendar = &modal.flow.calendar;

        let mut lines = Vec::new();
        lines.push(Line::from(Span::styled(
            format!("◀ {} ▶", calendar.label()),
            Self::section_title_style(theme, focused),
        )));

        lines.push(Line::from(
            DAY_HEADERS
                .iter()
                .map(|d| Span::styled(format!("{d:>3} "), Style::default().fg(theme.foreground_dim())))
                .collect::<Vec<_>>(),
        ));

        let selected_day = calendar
            .selected()
            .filter(|d| calendar.contains(*d))
            .map(|d| d.day());

        for week in calendar.weeks() {
            let mut spans = Vec::with_capacity(7);
            for cell in week {
                match cell {
                    Some(day) => {
                        let mut style = Style::default().fg(theme.foreground());
                        if selected_day == Some(day) {
                            style = Style::default()
                                .fg(theme.surface())
                                .bg(theme.accent())
                                .add_modifier(Modifier::BOLD);
                        } else if focused && modal.day_cursor == day {
                            style = Style::default().fg(theme.foreground()).bg(theme.selection());
                        }
                        spans.push(Span::styled(format!("{day:>3} "), style));
                    }
                    None => spans.push(Span::raw("    ")),
                }
            }
            lines.push(Line::from(spans));
        }

        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_slots(frame: &mut Frame, area: Rect, theme: &dyn Theme, modal: &ModalState) {
        let focused = modal.section == ModalSection::Slots;
        let mut lines = vec![Line::from(Span::styled(
            "⏰ Tillgängliga Tider",
            Self::section_title_style(theme, focused),
        ))];

        for (i, slot) in modal.flow.slots().iter().enumerate() {
            let selected = modal.flow.selection.slot == Some(i);
            let under_cursor = focused && modal.slot_cursor == i;
            let marker = if selected { "●" } else { "○" };
            let style = if selected {
                Style::default().fg(theme.accent()).add_modifier(Modifier::BOLD)
            } else if under_cursor {
                Style::default().fg(theme.foreground()).bg(theme.selection())
            } else {
                Style::default().fg(theme.foreground())
            };
            lines.push(Line::from(Span::styled(
                format!("{marker} {} {} - {}", slot.emoji, slot.time, slot.title),
                style,
            )));
        }

        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_services(frame: &mut Frame, area: Rect, theme: &dyn Theme, modal: &ModalState) {
        let focused = modal.section == ModalSection::Services;
        let mut lines = vec![Line::from(Span::styled(
            "🎯 Vad Vill Du Fokusera På?",
            Self::section_title_style(theme, focused),
        ))];

        for (i, service) in modal.flow.services().iter().enumerate() {
            let selected = modal.flow.selection.service == Some(i);
            let under_cursor = focused && modal.service_cursor == i;
            let marker = if selected { "◉" } else { "○" };
            let style = if selected {
                Style::default().fg(theme.accent()).add_modifier(Modifier::BOLD)
            } else if under_cursor {
                Style::default().fg(theme.foreground()).bg(theme.selection())
            } else {
                Style::default().fg(theme.foreground())
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{marker} {}", service.title), style),
                Span::styled(
                    format!("  💰 {}", service.benefit),
                    Style::default().fg(theme.success()),
                ),
            ]));
        }

        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_form(frame: &mut Frame, area: Rect, theme: &dyn Theme, modal: &ModalState) {
        let focused = modal.section == ModalSection::Form;
        let mut lines = vec![Line::from(Span::styled(
            "📝 Dina Kontaktuppgifter",
            Self::section_title_style(theme, focused),
        ))];

        for (i, field) in modal.flow.selection.form.fields().iter().enumerate() {
            let under_cursor = focused && modal.field_cursor == i;
            let label_style = if under_cursor {
                Style::default().fg(theme.accent()).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.foreground_dim())
            };
            let value_style = if field.is_placeholder() {
                Style::default().fg(theme.foreground_dim())
            } else {
                Style::default().fg(theme.foreground())
            };
            let mut spans = vec![
                Span::styled(format!("{:<11}", format!("{}:", field.kind.label())), label_style),
                Span::styled(field.value.clone(), value_style),
            ];
            if under_cursor {
                spans.push(Span::styled("▌", Style::default().fg(theme.accent())));
            }
            lines.push(Line::from(spans));
        }

        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_confirm(frame: &mut Frame, area: Rect, theme: &dyn Theme, modal: &ModalState) {
        let focused = modal.section == ModalSection::Confirm;
        let style = if focused {
            Style::default()
                .fg(theme.surface())
                .bg(theme.success())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.success()).add_modifier(Modifier::BOLD)
        };
        let button = Paragraph::new(Line::from(Span::styled(
            " 🚀 Bekräfta Min AI-Konsultation ",
            style,
        )))
        .alignment(Alignment::Center);
        frame.render_widget(button, area);
    }

    fn render_error_row(frame: &mut Frame, area: Rect, theme: &dyn Theme, modal: &ModalState) {
        let line = match modal.flow.error() {
            Some(error) => Line::from(Span::styled(
                format!("✗ {error}"),
                Style::default().fg(theme.error()).add_modifier(Modifier::BOLD),
            )),
            None => Line::from(Span::styled(
                "Tab: nästa sektion • Enter: välj • Esc: avbryt",
                Style::default().fg(theme.foreground_dim()),
            )),
        };
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
    }

    fn section_title_style(theme: &dyn Theme, focused: bool) -> Style {
        if focused {
            Style::default().fg(theme.accent()).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.foreground()).add_modifier(Modifier::BOLD)
        }
    }
}

fn short_weekday(date: chrono::NaiveDate) -> &'static str {
    match date.weekday() {
        chrono::Weekday::Mon => "mån",
        chrono::Weekday::Tue => "tis",
        chrono::Weekday::Wed => "ons",
        chrono::Weekday::Thu => "tor",
        chrono::Weekday::Fri => "fre",
        chrono::Weekday::Sat => "lör",
        chrono::Weekday::Sun => "sön",
    }
}
