pub mod m202601050001_create_session_slots;
pub mod m202601050002_create_bookings;
pub mod m202601050003_create_registration_config;
pub mod m202601050004_create_admin_logs;
