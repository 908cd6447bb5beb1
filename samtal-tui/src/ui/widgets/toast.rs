use std::time::{Duration, Instant};

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastLevel {
    pub fn icon(&self) -> &'static str {
        match self {
            ToastLevel::Info => "ℹ",
            ToastLevel::Success => "✓",
            ToastLevel::Warning => "⚠",
            ToastLevel::Error => "✗",
        }
    }
}

/// A short-lived notification: date picked, time picked, validation error.
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
    created_at: Instant,
    duration: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>, level: ToastLevel) -> Self {
        Self {
            message: message.into(),
            level,
            created_at: Instant::now(),
            duration: Duration::from_secs(3),
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }

    /// 1.0 fresh, 0.0 about to expire; drawn as the bottom progress line.
    pub fn progress(&self) -> f32 {
        let elapsed = self.created_at.elapsed().as_secs_f32();
        let total = self.duration.as_secs_f32();
        1.0 - (elapsed / total).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Default)]
pub struct ToastManager {
    toasts: Vec<Toast>,
    max_visible: usize,
}

impl ToastManager {
    pub fn new() -> Self {
        Self {
            toasts: Vec::new(),
            max_visible: 3,
        }
    }

    pub fn push(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(Toast::new(message, ToastLevel::Info));
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(Toast::new(message, ToastLevel::Success));
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.push(Toast::new(message, ToastLevel::Warning));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(Toast::new(message, ToastLevel::Error));
    }

    pub fn cleanup(&mut self) {
        self.toasts.retain(|t| !t.is_expired());
    }

    pub fn count(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn visible_toasts(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter().rev().take(self.max_visible)
    }

    /// Stacked above the footer on the right edge.
    pub fn render(&self, frame: &mut Frame, screen: Rect, theme: &dyn Theme) {
        let toasts: Vec<_> = self.visible_toasts().collect();
        if toasts.is_empty() {
            return;
        }

        let width = 38u16.min(screen.width.saturating_sub(4));
        let height = 3u16;
        let x = screen.width.saturating_sub(width + 2);
        let mut y = screen.height.saturating_sub(3 + height);

        for toast in toasts {
            if y < 3 {
                break;
            }
            let area = Rect::new(x, y, width, height);
            Self::render_toast(frame, area, toast, theme);
            y = y.saturating_sub(height + 1);
        }
    }

    fn render_toast(frame: &mut Frame, area: Rect, toast: &Toast, theme: &dyn Theme) {
        frame.render_widget(Clear, area);

        let color = match toast.level {
            ToastLevel::Info => theme.info(),
            ToastLevel::Success => theme.success(),
            ToastLevel::Warning => theme.warning(),
            ToastLevel::Error => theme.error(),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .style(Style::default().bg(theme.surface()));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let max_text = (inner.width as usize).saturating_sub(2);
        let message: String = if toast.message.chars().count() > max_text {
            let mut truncated: String =
                toast.message.chars().take(max_text.saturating_sub(1)).collect();
            truncated.push('…');
            truncated
        } else {
            toast.message.clone()
        };

        let content = Line::from(vec![
            Span::styled(
                format!("{} ", toast.level.icon()),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(message, Style::default().fg(theme.foreground())),
        ]);
        frame.render_widget(Paragraph::new(content), inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_have_distinct_icons() {
        let icons = [
            ToastLevel::Info.icon(),
            ToastLevel::Success.icon(),
            ToastLevel::Warning.icon(),
            ToastLevel::Error.icon(),
        ];
        let unique: std::collections::HashSet<_> = icons.iter().collect();
        assert_eq!(unique.len(), 4);
    }

    #[test]
    fn test_fresh_toast_is_not_expired() {
        let toast = Toast::new("Valt datum: fredag 6 december", ToastLevel::Info);
        assert!(!toast.is_expired());
        assert!(toast.progress() > 0.9);
    }

    #[test]
    fn test_cleanup_drops_expired() {
        let mut manager = ToastManager::new();
        manager.push(Toast::new("x", ToastLevel::Info).with_duration(Duration::from_millis(1)));
        std::thread::sleep(Duration::from_millis(5));
        manager.cleanup();
        assert!(manager.is_empty());
    }

    #[test]
    fn test_visible_toasts_newest_first_and_capped() {
        let mut manager = ToastManager::new();
        for i in 0..5 {
            manager.info(format!("toast {i}"));
        }
        let visible: Vec<_> = manager.visible_toasts().map(|t| t.message.clone()).collect();
        assert_eq!(visible.len(), 3);
        assert_eq!(visible[0], "toast 4");
    }
}
