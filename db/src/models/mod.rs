pub mod admin_log;
pub mod booking;
pub mod booking_slot;
pub mod registration_config;
pub mod session_slot;
