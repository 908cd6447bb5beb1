mod booking;
mod chat;

pub use booking::BookingView;
pub use chat::ChatView;
