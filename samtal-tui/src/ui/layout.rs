use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

use samtal_core::flow::BookingPhase;

use crate::app::App;
use crate::ui::views::{BookingView, ChatView};
use crate::ui::widgets::{Footer, Header, SuccessDialog};

pub struct MainLayout;

impl MainLayout {
    pub fn render(frame: &mut Frame, app: &App) {
        let theme = app.current_theme();
        let size = frame.area();

        frame.render_widget(
            Block::default().style(
                Style::default()
                    .bg(theme.background())
                    .fg(theme.foreground()),
            ),
            size,
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(10),
                Constraint::Length(1),
            ])
            .split(size);

        Header::render(frame, chunks[0], app);
        ChatView::render(frame, chunks[1], app);
        Footer::render(frame, chunks[2], app);

        app.toast_manager.render(frame, size, theme);

        if let Some(modal) = &app.booking {
            BookingView::render(frame, size, app, modal);

            if modal.flow.phase() == BookingPhase::Confirmed {
                if let Some(summary) = modal.flow.summary() {
                    SuccessDialog::new(summary).render(frame, size, theme);
                }
            }
        }
    }
}
