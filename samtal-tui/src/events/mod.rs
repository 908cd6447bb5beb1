mod handler;

pub use handler::{map_global_key, Action};
