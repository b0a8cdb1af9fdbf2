use serde::{Deserialize, Serialize};

// ============ JWT Claims ============

/// Access token claims. Tokens are minted by the identity service; `sub`
/// carries the user id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
}
