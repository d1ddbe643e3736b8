pub mod app;

pub use app::{admin_token, body_json, make_test_app, user_token};
