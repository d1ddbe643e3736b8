pub mod claims;
pub mod extractors;
pub mod guards;

pub use claims::{AuthUser, Claims};

use chrono::{DateTime, Duration, Utc};
use common::config;
use jsonwebtoken::{EncodingKey, Header, encode};

/// Signs a JWT for `sub` with the configured lifetime. `admin` marks tokens
/// minted through the shared-secret admin login.
pub fn generate_jwt(
    sub: String,
    admin: bool,
) -> Result<(String, DateTime<Utc>), jsonwebtoken::errors::Error> {
    let expires_at = Utc::now() + Duration::minutes(config::jwt_duration_minutes() as i64);
    let claims = Claims {
        sub,
        exp: expires_at.timestamp() as usize,
        admin,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config::jwt_secret().as_bytes()),
    )?;

    Ok((token, expires_at))
}
