pub mod booking;
pub mod calendar;
pub mod chat_log;
pub mod message;
pub mod script;

pub use booking::{
    default_services, default_slots, demo_profile, BookingSelection, ContactField, ContactForm,
    FieldKind, ServiceOption, TimeSlot,
};
pub use calendar::{quick_picks, weekday_name, CalendarView, DAY_HEADERS};
pub use chat_log::{ChatEntry, ChatLog, FADE_TICKS};
pub use message::{Message, Sender};
pub use script::{ConversationScript, ScriptEntry, ScriptLibrary};
