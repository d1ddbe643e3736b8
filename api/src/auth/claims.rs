use serde::{Deserialize, Serialize};

/// JWT claims carried by every authenticated request.
///
/// `sub` is an anonymous session identity (UUID) for attendees; `admin` is
/// true only for tokens minted through the shared-secret admin login.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
    pub admin: bool,
}

#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);
