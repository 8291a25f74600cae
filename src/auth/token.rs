//! Session token issuance and validation.

use crate::error::AppError;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Claims embedded in a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Wallet address the token was issued to.
    pub sub: String,
    /// Moderator flag captured at login. Missing in tokens issued before the
    /// flag existed; treated as false.
    #[serde(default)]
    pub is_moderator: bool,
    /// Issued-at, seconds since epoch.
    pub iat: i64,
    /// Expiry, seconds since epoch. The only termination path for a session.
    pub exp: i64,
}

/// Issues and validates signed session tokens (HS256).
///
/// Constructed once at startup from injected config; holds no mutable state,
/// so a single instance is shared across all requests.
pub struct TokenAuthority {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    expiry_secs: u64,
}

impl TokenAuthority {
    pub fn new(secret: &[u8], expiry_secs: u64) -> Self {
        let mut validation = Validation::default();
        // A token is valid up to exp, not a minute past it
        validation.leeway = 0;
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            expiry_secs,
        }
    }

    /// Issue a token for an authenticated wallet.
    ///
    /// Pure computation: the moderator flag is the caller's responsibility
    /// (looked up from the roster at login, then trusted for the token's
    /// whole lifetime).
    pub fn issue(&self, wallet_address: &str, is_moderator: bool) -> Result<String, AppError> {
        let iat = epoch_secs();
        let claims = Claims {
            sub: wallet_address.to_string(),
            is_moderator,
            iat,
            exp: iat + self.expiry_secs as i64,
        };
        jsonwebtoken::encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| AppError::Internal(format!("Token encoding failed: {}", e)))
    }

    /// Validate a presented token and return its claims.
    ///
    /// Malformed, tampered, and expired tokens are all rejected with the
    /// same Unauthorized error; the sub-reason is not observable.
    pub fn validate(&self, token: &str) -> Result<Claims, AppError> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| AppError::Unauthorized("Invalid or expired token".to_string()))
    }
}

fn epoch_secs() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_secs() as i64
}
