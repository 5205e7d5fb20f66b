use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims carried by every session token. Validity is entirely
/// determined by the signature and `exp`; nothing is persisted server-side.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: Uuid,     // account ID
    pub email: String, // account email, scopes note access
    pub exp: usize,    // expiration time
    pub iat: usize,    // issued at
    pub iss: String,   // issuer
    pub aud: String,   // audience
}
