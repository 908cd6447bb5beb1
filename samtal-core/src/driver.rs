//! The automation driver: a tokio task that replays conversation scripts
//! forever and feeds the UI over a channel.
//!
//! The driver never touches UI state. It emits [`DriverEvent`]s and the UI
//! thread drains them on its own tick. Every sleep is raced against a
//! shutdown watch so quitting the app stops the task deterministically
//! instead of leaning on process exit.

use std::time::Duration;

use rand::Rng;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::config::DemoConfig;
use crate::models::{Message, ScriptEntry, ScriptLibrary, Sender};

/// Pause between the sentinel and the modal actually opening.
const BOOKING_LEAD_MS: u64 = 1500;

/// What the driver tells the UI.
#[derive(Debug, Clone)]
pub enum DriverEvent {
    /// A new pass begins; the chat clears for it.
    ConversationStarted {
        index: usize,
        total: usize,
        name: String,
    },
    /// Someone is "typing": the bot shows the indicator dots, the user's
    /// upcoming text animates through the input row.
    Composing { sender: Sender, preview: String },
    Say(Message),
    OpenBooking,
    ConversationFinished,
}

/// What the UI tells the driver.
#[derive(Debug, Clone, Copy)]
pub enum DriverControl {
    /// The booking modal closed; no need to sit out the full wait.
    BookingClosed,
}

/// Held by the app; dropping the receiver side also ends the task.
pub struct DriverHandle {
    shutdown: watch::Sender<bool>,
    control: mpsc::Sender<DriverControl>,
    task: JoinHandle<()>,
}

impl DriverHandle {
    pub fn notify_booking_closed(&self) {
        let _ = self.control.try_send(DriverControl::BookingClosed);
    }

    pub fn shutdown(&self) {
        let _ = self.shutdown.send(true);
    }

    /// Signal shutdown and wait for the task to finish.
    pub async fn join(self) {
        let _ = self.shutdown.send(true);
        let _ = self.task.await;
    }
}

/// Spawn the driver task. Returns the handle and the event stream.
pub fn spawn(library: ScriptLibrary, timing: DemoConfig) -> (DriverHandle, mpsc::Receiver<DriverEvent>) {
    let (event_tx, event_rx) = mpsc::channel(32);
    let (control_tx, control_rx) = mpsc::channel(8);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let driver = Driver {
        library,
        timing,
        events: event_tx,
        control: control_rx,
        shutdown: shutdown_rx,
    };
    let task = tokio::spawn(driver.run());

    (
        DriverHandle {
            shutdown: shutdown_tx,
            control: control_tx,
            task,
        },
        event_rx,
    )
}

struct Driver {
    library: ScriptLibrary,
    timing: DemoConfig,
    events: mpsc::Sender<DriverEvent>,
    control: mpsc::Receiver<DriverControl>,
    shutdown: watch::Receiver<bool>,
}

impl Driver {
    async fn run(mut self) {
        let total = self.library.len();
        loop {
            let (index, script) = self.library.next_script();
            debug!(script = %script.name, "starting conversation pass");

            if !self
                .emit(DriverEvent::ConversationStarted {
                    index,
                    total,
                    name: script.name.clone(),
                })
                .await
            {
                return;
            }

            for entry in &script.entries {
                if !self.play_entry(entry).await {
                    return;
                }
            }

            if !self.emit(DriverEvent::ConversationFinished).await {
                return;
            }
            if !self
                .wait(Duration::from_millis(self.timing.conversation_pause_ms))
                .await
            {
                return;
            }
        }
    }

    async fn play_entry(&mut self, entry: &ScriptEntry) -> bool {
        match entry {
            ScriptEntry::Bot { text } => self.play_message(Sender::Bot, text).await,
            ScriptEntry::User { text } => self.play_message(Sender::User, text).await,
            ScriptEntry::OpenBooking => self.play_booking().await,
        }
    }

    async fn play_message(&mut self, sender: Sender, text: &str) -> bool {
        let preview = match sender {
            Sender::Bot => String::new(),
            Sender::User => text.to_string(),
        };
        if !self.emit(DriverEvent::Composing { sender, preview }).await {
            return false;
        }
        if !self.wait(self.message_delay(text)).await {
            return false;
        }
        if !self.emit(DriverEvent::Say(Message::new(sender, text))).await {
            return false;
        }
        self.wait(Duration::from_millis(self.timing.message_delay_ms))
            .await
    }

    async fn play_booking(&mut self) -> bool {
        if !self.wait(Duration::from_millis(BOOKING_LEAD_MS)).await {
            return false;
        }
        if !self.emit(DriverEvent::OpenBooking).await {
            return false;
        }
        self.wait_for_booking().await
    }

    /// Sit out the booking interaction: resume on the modal closing or
    /// after `booking_wait_ms`, whichever comes first.
    async fn wait_for_booking(&mut self) -> bool {
        let timeout = Duration::from_millis(self.timing.booking_wait_ms);
        tokio::select! {
            _ = tokio::time::sleep(timeout) => true,
            message = self.control.recv() => {
                if message.is_some() {
                    debug!("booking modal closed, resuming");
                }
                true
            }
            _ = self.shutdown.changed() => false,
        }
    }

    fn message_delay(&self, text: &str) -> Duration {
        jittered(typing_delay(
            text.chars().count(),
            self.timing.typing_base_ms,
            self.timing.typing_per_char_ms,
        ))
    }

    /// False once shutdown was signalled (or the handle is gone).
    async fn wait(&mut self, duration: Duration) -> bool {
        tokio::select! {
            _ = tokio::time::sleep(duration) => true,
            _ = self.shutdown.changed() => false,
        }
    }

    /// False once the UI has dropped the receiver.
    async fn emit(&self, event: DriverEvent) -> bool {
        self.events.send(event).await.is_ok()
    }
}

/// Deterministic part of the per-message delay: a thinking pause plus
/// typing time proportional to message length.
pub fn typing_delay(chars: usize, base_ms: u64, per_char_ms: u64) -> Duration {
    Duration::from_millis(base_ms + per_char_ms * chars as u64)
}

/// Multiply by a factor in [0.85, 1.25) so the cadence reads human.
pub fn jittered(duration: Duration) -> Duration {
    let factor: f64 = rand::thread_rng().gen_range(0.85..1.25);
    Duration::from_millis((duration.as_millis() as f64 * factor) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_delay_is_proportional_to_length() {
        let short = typing_delay(10, 300, 30);
        let long = typing_delay(40, 300, 30);
        assert_eq!(short, Duration::from_millis(600));
        assert_eq!(long, Duration::from_millis(1500));
    }

    #[test]
    fn test_jitter_stays_in_bounds() {
        let base = Duration::from_millis(1000);
        for _ in 0..100 {
            let d = jittered(base).as_millis();
            assert!(d >= 850, "jittered delay {d} below lower bound");
            assert!(d < 1250, "jittered delay {d} above upper bound");
        }
    }

    #[tokio::test]
    async fn test_driver_emits_script_in_order_and_loops() {
        let timing = DemoConfig {
            message_delay_ms: 1,
            conversation_pause_ms: 1,
            booking_wait_ms: 1,
            typing_base_ms: 1,
            typing_per_char_ms: 0,
            ..DemoConfig::default()
        };
        let (handle, mut events) = spawn(ScriptLibrary::builtin(), timing);

        // First pass begins with conversation 0.
        match events.recv().await.unwrap() {
            DriverEvent::ConversationStarted { index, total, .. } => {
                assert_eq!(index, 0);
                assert_eq!(total, 3);
            }
            other => panic!("expected ConversationStarted, got {other:?}"),
        }

        // Walk until the sentinel fires, exactly once this pass.
        let mut bookings = 0;
        loop {
            match events.recv().await.unwrap() {
                DriverEvent::OpenBooking => bookings += 1,
                DriverEvent::ConversationFinished => break,
                _ => {}
            }
        }
        assert_eq!(bookings, 1);

        // The loop continues with the next conversation.
        match events.recv().await.unwrap() {
            DriverEvent::ConversationStarted { index, .. } => assert_eq!(index, 1),
            other => panic!("expected ConversationStarted, got {other:?}"),
        }

        handle.join().await;
    }

    #[tokio::test]
    async fn test_shutdown_stops_the_task() {
        let (handle, events) = spawn(ScriptLibrary::builtin(), DemoConfig::default());
        handle.join().await;
        drop(events);
    }

    #[tokio::test]
    async fn test_composing_preview_only_for_user_messages() {
        let timing = DemoConfig {
            message_delay_ms: 1,
            conversation_pause_ms: 1,
            booking_wait_ms: 1,
            typing_base_ms: 1,
            typing_per_char_ms: 0,
            ..DemoConfig::default()
        };
        let (handle, mut events) = spawn(ScriptLibrary::builtin(), timing);

        let mut saw_user_preview = false;
        for _ in 0..16 {
            match events.recv().await.unwrap() {
                DriverEvent::Composing { sender, preview } => match sender {
                    Sender::Bot => assert!(preview.is_empty()),
                    Sender::User => {
                        assert!(!preview.is_empty());
                        saw_user_preview = true;
                    }
                },
                DriverEvent::ConversationFinished => break,
                _ => {}
            }
        }
        assert!(saw_user_preview);
        handle.join().await;
    }
}
