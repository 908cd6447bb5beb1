//! Core library for Samtal: an animated chatbot demo that replays scripted
//! sales conversations and walks a booking flow with a calendar, time
//! slots, services and a contact form. Everything here is UI-toolkit-free;
//! the terminal front end lives in `samtal-tui`.

pub mod branding;
pub mod config;
pub mod driver;
pub mod error;
pub mod flow;
pub mod models;

pub use branding::{resolve_brand_mark, BrandMark};
pub use config::SamtalConfig;
pub use driver::{DriverEvent, DriverHandle};
pub use error::{Result, SamtalError};
pub use flow::{AutoPilot, BookingFlow, BookingPhase, BookingSummary, ConfirmOutcome};
pub use models::{
    ChatEntry, ChatLog, ConversationScript, Message, ScriptEntry, ScriptLibrary, Sender,
};
