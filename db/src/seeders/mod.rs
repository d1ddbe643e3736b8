pub mod event;

pub use event::{ensure_default_config, event_slots, reset_event, seed_slots};
