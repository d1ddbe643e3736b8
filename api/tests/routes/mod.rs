pub mod auth_test;
pub mod bookings_test;
pub mod health_test;
pub mod registration_test;
pub mod slots_test;
pub mod system_test;
pub mod tickets_test;
