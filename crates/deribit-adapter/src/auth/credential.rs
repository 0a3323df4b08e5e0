/*
[INPUT]:  Client id/secret pair and signing inputs (timestamp, nonce, data)
[OUTPUT]: Lowercase hex HMAC-SHA256 signatures for public/auth
[POS]:    Auth layer - credential storage and request signing
[UPDATE]: When the signing algorithm or signed-string format changes
*/

use std::fmt::Debug;

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::rpc::error::{DeribitError, Result};

type HmacSha256 = Hmac<Sha256>;

/// Grant type sent on every signature-based authentication
pub const GRANT_TYPE_CLIENT_SIGNATURE: &str = "client_signature";

/// Nonce used for signing. Constant per the exchange session model.
pub const AUTH_NONCE: &str = "abcd";

/// Data payload used for signing. Always empty.
pub const AUTH_DATA: &str = "";

/// Scope requested on authentication: trade read/write plus a named session
pub const AUTH_SCOPE: &str = "trade:read_write session:mysessionname";

/// API credentials for signing authentication requests.
///
/// Uses HMAC SHA256 with lowercase hexadecimal encoding over
/// `"{timestamp}\n{nonce}\n{data}"`, as required by Deribit `public/auth`.
#[derive(Clone)]
pub struct Credential {
    client_id: String,
    client_secret: String,
}

impl Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

impl Credential {
    /// Create a new credential pair
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Get the client id
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Get the client secret. The exchange expects it in the clear on
    /// `public/auth` alongside the signature.
    pub(crate) fn client_secret(&self) -> &str {
        &self.client_secret
    }

    /// Sign `"{timestamp}\n{nonce}\n{data}"` with the client secret and
    /// return the lowercase hex digest
    pub fn sign(&self, timestamp: i64, nonce: &str, data: &str) -> Result<String> {
        let mut mac = HmacSha256::new_from_slice(self.client_secret.as_bytes())
            .map_err(|e| DeribitError::Signature(format!("HMAC key error: {e}")))?;

        mac.update(format!("{timestamp}\n{nonce}\n{data}").as_bytes());
        Ok(hex::encode(mac.finalize().into_bytes()))
    }
}
