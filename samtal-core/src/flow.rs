//! The booking modal's state machine.
//!
//! `Opening (fade-in) → Selecting → Validating (on confirm) → Invalid |
//! Confirmed → Closing (fade-out) → Closed`. Validation failures are
//! recoverable: the modal stays up, the error shows inline, and the next
//! edit returns the flow to `Selecting`.

use std::collections::VecDeque;

use chrono::{Datelike, NaiveDate};

use crate::models::{
    calendar::{quick_picks, weekday_name},
    booking::{demo_profile, BookingSelection, FieldKind, ServiceOption, TimeSlot},
    CalendarView,
};

/// Animation ticks for the modal's fade-in and fade-out.
pub const MODAL_FADE_TICKS: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingPhase {
    Opening,
    Selecting,
    Validating,
    Invalid,
    Confirmed,
    Closing,
    Closed,
}

/// What `confirm()` resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// Something required is missing; the message is user-facing.
    Incomplete(String),
    Confirmed(BookingSummary),
}

/// The data the success dialog is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingSummary {
    pub name: String,
    pub date: NaiveDate,
    pub time: String,
    pub service: Option<String>,
}

impl BookingSummary {
    pub fn date_label(&self) -> String {
        format!(
            "{} {} {}",
            weekday_name(self.date),
            self.date.day(),
            self.date.format("%B")
        )
    }

    /// The success dialog body. Carries the exact name and slot time.
    pub fn message(&self) -> String {
        format!(
            "Tack {}! Din AI-konsultation är bokad:\n{} kl {}",
            self.name,
            self.date_label(),
            self.time
        )
    }
}

#[derive(Debug)]
pub struct BookingFlow {
    phase: BookingPhase,
    pub calendar: CalendarView,
    pub selection: BookingSelection,
    slots: Vec<TimeSlot>,
    services: Vec<ServiceOption>,
    quick: Vec<NaiveDate>,
    error: Option<String>,
    summary: Option<BookingSummary>,
    fade: u8,
}

impl BookingFlow {
    pub fn open(
        today: NaiveDate,
        slots: Vec<TimeSlot>,
        services: Vec<ServiceOption>,
        quick_pick_days: usize,
    ) -> Self {
        Self {
            phase: BookingPhase::Opening,
            calendar: CalendarView::new(today),
            selection: BookingSelection::new(),
            slots,
            services,
            quick: quick_picks(today, quick_pick_days),
            error: None,
            summary: None,
            fade: 0,
        }
    }

    pub fn phase(&self) -> BookingPhase {
        self.phase
    }

    pub fn is_closed(&self) -> bool {
        self.phase == BookingPhase::Closed
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn summary(&self) -> Option<&BookingSummary> {
        self.summary.as_ref()
    }

    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    pub fn services(&self) -> &[ServiceOption] {
        &self.services
    }

    pub fn quick_dates(&self) -> &[NaiveDate] {
        &self.quick
    }

    /// 0.0 (invisible) .. 1.0 (fully faded in).
    pub fn fade_ratio(&self) -> f32 {
        f32::from(self.fade) / f32::from(MODAL_FADE_TICKS)
    }

    /// Advance the fade animations one tick.
    pub fn tick(&mut self) {
        match self.phase {
            BookingPhase::Opening => {
                self.fade += 1;
                if self.fade >= MODAL_FADE_TICKS {
                    self.fade = MODAL_FADE_TICKS;
                    self.phase = BookingPhase::Selecting;
                }
            }
            BookingPhase::Closing => {
                if self.fade == 0 {
                    self.phase = BookingPhase::Closed;
                } else {
                    self.fade -= 1;
                }
            }
            _ => {}
        }
    }

    /// Any edit while an error is showing returns the flow to Selecting.
    fn touch(&mut self) {
        if self.phase == BookingPhase::Invalid {
            self.phase = BookingPhase::Selecting;
            self.error = None;
        }
    }

    fn accepts_edits(&self) -> bool {
        matches!(self.phase, BookingPhase::Selecting | BookingPhase::Invalid)
    }

    pub fn navigate_month(&mut self, delta: i32) {
        if !self.accepts_edits() {
            return;
        }
        self.touch();
        self.calendar.navigate(delta);
    }

    /// Select a day in the displayed month. Past days are allowed.
    pub fn select_day(&mut self, day: u32) -> Option<NaiveDate> {
        if !self.accepts_edits() {
            return None;
        }
        self.touch();
        let date = self.calendar.select_day(day)?;
        self.selection.date = Some(date);
        Some(date)
    }

    /// One-click selection from the quick-pick row.
    pub fn select_quick(&mut self, index: usize) -> Option<NaiveDate> {
        if !self.accepts_edits() {
            return None;
        }
        let date = *self.quick.get(index)?;
        self.touch();
        self.calendar.select_date(date);
        self.selection.date = Some(date);
        Some(date)
    }

    pub fn select_slot(&mut self, index: usize) -> Option<&TimeSlot> {
        if !self.accepts_edits() || index >= self.slots.len() {
            return None;
        }
        self.touch();
        self.selection.slot = Some(index);
        self.slots.get(index)
    }

    pub fn select_service(&mut self, index: usize) -> Option<&ServiceOption> {
        if !self.accepts_edits() || index >= self.services.len() {
            return None;
        }
        self.touch();
        self.selection.service = Some(index);
        self.services.get(index)
    }

    pub fn field_char(&mut self, index: usize, c: char) {
        if !self.accepts_edits() {
            return;
        }
        self.touch();
        if let Some(field) = self.selection.form.field_at_mut(index) {
            field.push_char(c);
        }
    }

    pub fn field_backspace(&mut self, index: usize) {
        if !self.accepts_edits() {
            return;
        }
        self.touch();
        if let Some(field) = self.selection.form.field_at_mut(index) {
            field.pop_char();
        }
    }

    /// Progress through the booking steps, mirroring the step labels of the
    /// source: date 25 %, time 50 %, service 75 %, confirmed 100 %.
    pub fn progress(&self) -> (u16, String) {
        if self.phase == BookingPhase::Confirmed {
            return (100, "Bokning bekräftad! 🎉".to_string());
        }
        if self.selection.date.is_none() {
            return (0, "Steg 1 av 4: Välj datum".to_string());
        }
        if self.selection.slot.is_none() {
            return (25, "Steg 2 av 4: Välj tid".to_string());
        }
        if self.selection.service.is_none() {
            return (50, "Steg 3 av 4: Välj fokusområde".to_string());
        }
        (75, "Steg 4 av 4: Dina kontaktuppgifter".to_string())
    }

    /// Validate and either confirm or surface what is missing. Required
    /// fields must be non-empty and not equal to their placeholder; date
    /// and time must both be selected. No format validation on purpose.
    pub fn confirm(&mut self) -> ConfirmOutcome {
        if !self.accepts_edits() {
            return ConfirmOutcome::Incomplete("Bokningen är inte redigerbar just nu".to_string());
        }
        self.phase = BookingPhase::Validating;

        if let Some(kind) = self.selection.form.first_missing() {
            let message = format!("Vänligen fyll i {}", kind.label().to_lowercase());
            self.error = Some(message.clone());
            self.phase = BookingPhase::Invalid;
            return ConfirmOutcome::Incomplete(message);
        }

        let (date, slot) = match (self.selection.date, self.selection.slot) {
            (Some(date), Some(slot)) => (date, slot),
            _ => {
                let message = "Vänligen välj både datum och tid".to_string();
                self.error = Some(message.clone());
                self.phase = BookingPhase::Invalid;
                return ConfirmOutcome::Incomplete(message);
            }
        };

        let summary = BookingSummary {
            name: self.selection.form.value(FieldKind::Name).to_string(),
            date,
            time: self.slots[slot].time.clone(),
            service: self
                .selection
                .service
                .and_then(|i| self.services.get(i))
                .map(|s| s.title.clone()),
        };
        self.summary = Some(summary.clone());
        self.error = None;
        self.phase = BookingPhase::Confirmed;
        ConfirmOutcome::Confirmed(summary)
    }

    /// Start the fade-out. Valid from any open phase.
    pub fn begin_close(&mut self) {
        if self.phase != BookingPhase::Closed {
            self.phase = BookingPhase::Closing;
        }
    }
}

/// A step the auto-pilot performs inside the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoStep {
    PickDate,
    PickSlot(usize),
    PickService(usize),
    Fill(FieldKind),
    Confirm,
    Close,
}

/// Walks the modal through a complete booking, one step per beat, so the
/// demo loop never stalls unattended. Any keypress inside the modal
/// disengages it and hands control to the user.
#[derive(Debug)]
pub struct AutoPilot {
    steps: VecDeque<AutoStep>,
    beat_interval: u32,
    beat: u32,
    engaged: bool,
}

impl AutoPilot {
    pub fn new(beat_interval: u32) -> Self {
        let mut steps = VecDeque::new();
        steps.push_back(AutoStep::PickDate);
        // The 10:30 slot, the demo's signature pick.
        steps.push_back(AutoStep::PickSlot(1));
        steps.push_back(AutoStep::PickService(0));
        for (kind, _) in demo_profile() {
            steps.push_back(AutoStep::Fill(kind));
        }
        steps.push_back(AutoStep::Confirm);
        steps.push_back(AutoStep::Close);
        Self {
            steps,
            beat_interval: beat_interval.max(1),
            beat: 0,
            engaged: true,
        }
    }

    pub fn disengage(&mut self) {
        self.engaged = false;
    }

    pub fn is_engaged(&self) -> bool {
        self.engaged
    }

    /// Called once per animation tick; applies the next step every
    /// `beat_interval` ticks once the modal has finished fading in.
    pub fn tick(&mut self, flow: &mut BookingFlow) -> Option<AutoStep> {
        if !self.engaged || flow.phase() == BookingPhase::Opening {
            return None;
        }
        self.beat += 1;
        if self.beat % self.beat_interval != 0 {
            return None;
        }
        let step = *self.steps.front()?;
        match step {
            AutoStep::PickDate => {
                flow.select_quick(0)?;
            }
            AutoStep::PickSlot(i) => {
                flow.select_slot(i)?;
            }
            AutoStep::PickService(i) => {
                flow.select_service(i)?;
            }
            AutoStep::Fill(kind) => {
                let value = demo_profile()
                    .iter()
                    .find(|(k, _)| *k == kind)
                    .map(|(_, v)| *v)?;
                flow.selection.form.field_mut(kind).set(value);
            }
            AutoStep::Confirm => {
                flow.confirm();
            }
            AutoStep::Close => {
                if flow.phase() == BookingPhase::Confirmed {
                    flow.begin_close();
                }
            }
        }
        self.steps.pop_front();
        Some(step)
    }
}
