pub mod registration_config;
pub mod session_slot;
