use std::io;
use std::time::Duration;

use anyhow::Result;
use chrono::{Datelike, Local};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::{mpsc, oneshot};

use samtal_core::branding::{resolve_brand_mark, BrandMark};
use samtal_core::config::SamtalConfig;
use samtal_core::driver::{self, DriverEvent, DriverHandle};
use samtal_core::flow::{AutoPilot, AutoStep, BookingFlow, BookingPhase, ConfirmOutcome};
use samtal_core::models::{
    default_services, default_slots, weekday_name, ChatLog, ScriptLibrary, Sender,
};

use crate::events::{map_global_key, Action};
use crate::theme::{Theme, ThemeLoader, ThemeManager};
use crate::ui::layout::MainLayout;
use crate::ui::widgets::ToastManager;

/// Focusable sections of the booking modal, in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalSection {
    Quick,
    Calendar,
    Slots,
    Services,
    Form,
    Confirm,
}

impl ModalSection {
    const ORDER: [ModalSection; 6] = [
        ModalSection::Quick,
        ModalSection::Calendar,
        ModalSection::Slots,
        ModalSection::Services,
        ModalSection::Form,
        ModalSection::Confirm,
    ];

    pub fn next(&self) -> ModalSection {
        let idx = Self::ORDER.iter().position(|s| s == self).unwrap_or(0);
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }

    pub fn prev(&self) -> ModalSection {
        let idx = Self::ORDER.iter().position(|s| s == self).unwrap_or(0);
        Self::ORDER[(idx + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// The open booking modal: the core flow plus view-side cursors.
pub struct ModalState {
    pub flow: BookingFlow,
    pub autopilot: AutoPilot,
    pub section: ModalSection,
    pub quick_cursor: usize,
    pub day_cursor: u32,
    pub slot_cursor: usize,
    pub service_cursor: usize,
    pub field_cursor: usize,
}

pub struct App {
    pub should_quit: bool,
    config: SamtalConfig,
    theme_manager: ThemeManager,
    theme_loader: ThemeLoader,
    pub chat: ChatLog,
    composing: Option<Sender>,
    input_preview: String,
    input_revealed: usize,
    conversation: Option<(usize, usize)>,
    pub booking: Option<ModalState>,
    pub toast_manager: ToastManager,
    pub status_message: Option<String>,
    brand_mark: BrandMark,
    brand_rx: Option<oneshot::Receiver<BrandMark>>,
    driver: Option<DriverHandle>,
    driver_events: mpsc::Receiver<DriverEvent>,
    pub animation_tick: u64,
}

impl App {
    /// Must run inside the tokio runtime: spawns the driver task and the
    /// one-shot logo fetch.
    pub async fn new(config: SamtalConfig) -> Result<Self> {
        let mut library = match &config.demo.scripts_path {
            Some(path) => ScriptLibrary::load(path)?,
            None => ScriptLibrary::builtin(),
        };
        library.start_at(config.demo.start_scenario);

        let (driver, driver_events) = driver::spawn(library, config.demo.clone());

        let (brand_tx, brand_rx) = oneshot::channel();
        let branding = config.branding.clone();
        tokio::spawn(async move {
            let _ = brand_tx.send(resolve_brand_mark(&branding).await);
        });

        let theme_loader = ThemeLoader::new();
        let theme_manager = theme_loader.initialize_theme_manager(&config.tui.theme);
        let chat = ChatLog::new(config.chat.visible_cap);

        Ok(Self {
            should_quit: false,
            config,
            theme_manager,
            theme_loader,
            chat,
            composing: None,
            input_preview: String::new(),
            input_revealed: 0,
            conversation: None,
            booking: None,
            toast_manager: ToastManager::new(),
            status_message: Some("Automatisk demo aktiv".to_string()),
            brand_mark: BrandMark::Glyph,
            brand_rx: Some(brand_rx),
            driver: Some(driver),
            driver_events,
            animation_tick: 0,
        })
    }

    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<()> {
        let tick_rate = Duration::from_millis(self.config.tui.tick_rate_ms);

        loop {
            self.tick();

            terminal.draw(|frame| {
                MainLayout::render(frame, self);
            })?;

            if event::poll(tick_rate)? {
                let evt = event::read()?;
                self.handle_event(evt);
            }

            if self.should_quit {
                break;
            }
        }

        // Unblocks a driver stuck mid-send before waiting for it.
        self.driver_events.close();
        if let Some(driver) = self.driver.take() {
            driver.join().await;
        }

        Ok(())
    }

    /// One animation tick: drain the driver, advance every animation.
    pub fn tick(&mut self) {
        self.animation_tick = self.animation_tick.wrapping_add(1);

        self.drain_driver_events();
        self.chat.tick(self.config.chat.reveal_chars_per_tick);

        if self.composing == Some(Sender::User) {
            let total = self.input_preview.chars().count();
            self.input_revealed = (self.input_revealed + 2).min(total);
        }

        self.poll_brand();
        self.tick_booking();
        self.toast_manager.cleanup();
    }

    fn drain_driver_events(&mut self) {
        while let Ok(event) = self.driver_events.try_recv() {
            self.apply_driver_event(event);
        }
    }

    fn apply_driver_event(&mut self, event: DriverEvent) {
        match event {
            DriverEvent::ConversationStarted { index, total, name } => {
                self.chat.clear();
                self.composing = None;
                self.input_preview.clear();
                self.conversation = Some((index + 1, total));
                self.status_message = Some(format!("Spelar scenario '{name}'"));
            }
            DriverEvent::Composing { sender, preview } => {
                self.composing = Some(sender);
                self.input_preview = preview;
                self.input_revealed = 0;
            }
            DriverEvent::Say(message) => {
                self.composing = None;
                self.input_preview.clear();
                let animate = message.is_bot();
                self.chat.push(message, animate);
            }
            DriverEvent::OpenBooking => {
                self.open_booking();
            }
            DriverEvent::ConversationFinished => {
                self.status_message = Some("Scenariot är klart, nästa startar strax...".to_string());
            }
        }
    }

    fn poll_brand(&mut self) {
        if let Some(rx) = self.brand_rx.as_mut() {
            match rx.try_recv() {
                Ok(mark) => {
                    self.brand_mark = mark;
                    self.brand_rx = None;
                }
                Err(oneshot::error::TryRecvError::Empty) => {}
                Err(oneshot::error::TryRecvError::Closed) => {
                    self.brand_rx = None;
                }
            }
        }
    }

    /// Open the booking modal. At most one can be up at a time; a second
    /// sentinel while one is showing is a no-op.
    pub fn open_booking(&mut self) {
        if self.booking.is_some() {
            return;
        }
        let today = Local::now().date_naive();
        let flow = BookingFlow::open(
            today,
            default_slots(),
            default_services(),
            self.config.booking.quick_pick_days,
        );
        let mut autopilot = AutoPilot::new(self.config.booking.autopilot_beat_ticks);
        if !self.config.demo.autopilot {
            autopilot.disengage();
        }
        self.booking = Some(ModalState {
            flow,
            autopilot,
            section: ModalSection::Quick,
            quick_cursor: 0,
            day_cursor: today.day(),
            slot_cursor: 0,
            service_cursor: 0,
            field_cursor: 0,
        });
        self.status_message = Some("Bokningssystemet öppnat".to_string());
    }

    fn tick_booking(&mut self) {
        let Some(modal) = self.booking.as_mut() else {
            return;
        };
        modal.flow.tick();

        if let Some(step) = modal.autopilot.tick(&mut modal.flow) {
            match step {
                AutoStep::PickDate => {
                    if let Some(date) = modal.flow.selection.date {
                        self.toast_manager.info(format!(
                            "📅 Valt datum: {} {} {}",
                            weekday_name(date),
                            date.day(),
                            date.format("%B")
                        ));
                    }
                }
                AutoStep::PickSlot(index) => {
                    if let Some(slot) = modal.flow.slots().get(index) {
                        self.toast_manager
                            .info(format!("⏰ Vald tid: {} - {}", slot.time, slot.title));
                    }
                }
                AutoStep::Confirm => {
                    if modal.flow.summary().is_some() {
                        self.toast_manager.success("Bokning bekräftad!");
                    }
                }
                _ => {}
            }
        }

        if modal.flow.is_closed() {
            self.booking = None;
            if let Some(driver) = &self.driver {
                driver.notify_booking_closed();
            }
            self.status_message = Some("Bokningen stängd, demon fortsätter".to_string());
        }
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            if key.kind == KeyEventKind::Press {
                self.handle_key(key.code, key.modifiers);
            }
        }
    }

    fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        if key == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.booking.is_some() {
            self.handle_modal_key(key);
            return;
        }

        match map_global_key(key, modifiers) {
            Action::Quit => self.should_quit = true,
            Action::ToggleTheme => self.toggle_theme(),
            Action::OpenBooking => self.open_booking(),
            Action::None => {}
        }
    }

    fn handle_modal_key(&mut self, key: KeyCode) {
        let Some(modal) = self.booking.as_mut() else {
            return;
        };

        // The user took over: the auto-pilot backs off for this modal.
        modal.autopilot.disengage();

        if modal.flow.phase() == BookingPhase::Confirmed {
            if matches!(key, KeyCode::Enter | KeyCode::Esc) {
                modal.flow.begin_close();
            }
            return;
        }

        match key {
            KeyCode::Esc => {
                modal.flow.begin_close();
                self.status_message = Some("Bokningen avbröts".to_string());
            }
            KeyCode::Tab => modal.section = modal.section.next(),
            KeyCode::BackTab => modal.section = modal.section.prev(),
            KeyCode::Char('[') if modal.section != ModalSection::Form => {
                modal.flow.navigate_month(-1);
            }
            KeyCode::Char(']') if modal.section != ModalSection::Form => {
                modal.flow.navigate_month(1);
            }
            _ => self.handle_section_key(key),
        }
    }

    fn handle_section_key(&mut self, key: KeyCode) {
        let Some(modal) = self.booking.as_mut() else {
            return;
        };

        match modal.section {
            ModalSection::Quick => match key {
                KeyCode::Left => modal.quick_cursor = modal.quick_cursor.saturating_sub(1),
                KeyCode::Right => {
                    let max = modal.flow.quick_dates().len().saturating_sub(1);
                    modal.quick_cursor = (modal.quick_cursor + 1).min(max);
                }
                KeyCode::Enter => {
                    if let Some(date) = modal.flow.select_quick(modal.quick_cursor) {
                        self.toast_manager.info(format!(
                            "📅 Valt datum: {} {} {}",
                            weekday_name(date),
                            date.day(),
                            date.format("%B")
                        ));
                    }
                }
                _ => {}
            },
            ModalSection::Calendar => {
                let days = modal.flow.calendar.days_in_month();
                match key {
                    KeyCode::Left => modal.day_cursor = modal.day_cursor.saturating_sub(1).max(1),
                    KeyCode::Right => modal.day_cursor = (modal.day_cursor + 1).min(days),
                    KeyCode::Up => modal.day_cursor = modal.day_cursor.saturating_sub(7).max(1),
                    KeyCode::Down => modal.day_cursor = (modal.day_cursor + 7).min(days),
                    KeyCode::Enter => {
                        if let Some(date) = modal.flow.select_day(modal.day_cursor.min(days)) {
                            self.toast_manager.info(format!(
                                "📅 Valt datum: {} {} {}",
                                weekday_name(date),
                                date.day(),
                                date.format("%B")
                            ));
                        }
                    }
                    _ => {}
                }
            }
            ModalSection::Slots => match key {
                KeyCode::Up => modal.slot_cursor = modal.slot_cursor.saturating_sub(1),
                KeyCode::Down => {
                    let max = modal.flow.slots().len().saturating_sub(1);
                    modal.slot_cursor = (modal.slot_cursor + 1).min(max);
                }
                KeyCode::Enter => {
                    if let Some(slot) = modal.flow.select_slot(modal.slot_cursor) {
                        let label = format!("⏰ Vald tid: {} - {}", slot.time, slot.title);
                        self.toast_manager.info(label);
                    }
                }
                _ => {}
            },
            ModalSection::Services => match key {
                KeyCode::Up => modal.service_cursor = modal.service_cursor.saturating_sub(1),
                KeyCode::Down => {
                    let max = modal.flow.services().len().saturating_sub(1);
                    modal.service_cursor = (modal.service_cursor + 1).min(max);
                }
                KeyCode::Enter => {
                    if let Some(service) = modal.flow.select_service(modal.service_cursor) {
                        let label = format!("🎯 Valt fokus: {}", service.title);
                        self.toast_manager.info(label);
                    }
                }
                _ => {}
            },
            ModalSection::Form => match key {
                KeyCode::Up => modal.field_cursor = modal.field_cursor.saturating_sub(1),
                KeyCode::Down => {
                    let max = modal.flow.selection.form.len().saturating_sub(1);
                    modal.field_cursor = (modal.field_cursor + 1).min(max);
                }
                KeyCode::Enter => {
                    if modal.field_cursor + 1 < modal.flow.selection.form.len() {
                        modal.field_cursor += 1;
                    } else {
                        modal.section = ModalSection::Confirm;
                    }
                }
                KeyCode::Backspace => modal.flow.field_backspace(modal.field_cursor),
                KeyCode::Char(c) => modal.flow.field_char(modal.field_cursor, c),
                _ => {}
            },
            ModalSection::Confirm => {
                if key == KeyCode::Enter {
                    match modal.flow.confirm() {
                        ConfirmOutcome::Confirmed(_) => {
                            self.toast_manager.success("Bokning bekräftad!");
                        }
                        ConfirmOutcome::Incomplete(message) => {
                            self.toast_manager.error(message);
                        }
                    }
                }
            }
        }
    }

    fn toggle_theme(&mut self) {
        self.theme_manager.cycle_theme();
        let theme_name = self.theme_manager.current_theme_name();
        if let Err(e) = self.theme_loader.save_theme_name(theme_name) {
            tracing::warn!("failed to save theme preference: {e}");
        }
        self.status_message = Some(format!("Tema: {theme_name}"));
    }

    pub fn current_theme(&self) -> &dyn Theme {
        self.theme_manager.current_theme()
    }

    pub fn brand_mark(&self) -> BrandMark {
        self.brand_mark
    }

    pub fn brand_name(&self) -> &str {
        &self.config.branding.name
    }

    pub fn brand_tagline(&self) -> &str {
        &self.config.branding.tagline
    }

    pub fn conversation_counter(&self) -> Option<(usize, usize)> {
        self.conversation
    }

    pub fn is_booking_open(&self) -> bool {
        self.booking.is_some()
    }

    pub fn is_bot_composing(&self) -> bool {
        self.composing == Some(Sender::Bot)
    }

    /// The simulated input-row text while a user message "types".
    pub fn input_display(&self) -> Option<String> {
        if self.composing == Some(Sender::User) {
            Some(self.input_preview.chars().take(self.input_revealed).collect())
        } else {
            None
        }
    }

    pub fn show_timestamps(&self) -> bool {
        self.config.chat.show_timestamps
    }
}
