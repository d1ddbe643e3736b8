use axum::{
    extract::FromRequestParts,
    http::{StatusCode, header::AUTHORIZATION, request::Parts},
};
use common::config;
use jsonwebtoken::{DecodingKey, Validation, decode};

use crate::auth::claims::{AuthUser, Claims};

/// Extracts and validates the bearer token on a request.
///
/// Rejects with `401 Unauthorized` when the header is missing, malformed, or
/// the token fails signature/expiry validation.
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or(StatusCode::UNAUTHORIZED)?;

        let decoded = decode::<Claims>(
            token,
            &DecodingKey::from_secret(config::jwt_secret().as_bytes()),
            &Validation::default(),
        )
        .map_err(|_| StatusCode::UNAUTHORIZED)?;

        Ok(AuthUser(decoded.claims))
    }
}
