/*
[INPUT]:  Access/refresh token pairs and expiration timestamps
[OUTPUT]: Token retrieval and expiration status
[POS]:    Auth layer - token lifecycle management
[UPDATE]: When the token refresh strategy or storage changes
*/

use chrono::{DateTime, Duration, Utc};
use std::sync::{Arc, RwLock};

/// Stored token pair with expiry metadata
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: DateTime<Utc>,
}

/// Thread-safe bearer/refresh token manager
#[derive(Debug, Clone)]
pub struct TokenManager {
    data: Arc<RwLock<Option<TokenPair>>>,
}

impl TokenManager {
    /// Create a new empty token manager
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(None)),
        }
    }

    /// Store a token pair with its server-reported lifetime
    pub fn set_tokens(&self, access_token: String, refresh_token: String, expires_seconds: u64) {
        let pair = TokenPair {
            access_token,
            refresh_token,
            expires_at: Utc::now() + Duration::seconds(expires_seconds as i64),
        };

        let mut guard = self.data.write().unwrap();
        *guard = Some(pair);
    }

    /// Get the current access token if available
    pub fn access_token(&self) -> Option<String> {
        let guard = self.data.read().unwrap();
        guard.as_ref().map(|pair| pair.access_token.clone())
    }

    /// Get the current refresh token if available
    pub fn refresh_token(&self) -> Option<String> {
        let guard = self.data.read().unwrap();
        guard.as_ref().map(|pair| pair.refresh_token.clone())
    }

    /// Check if the access token is expired (or was never issued)
    pub fn is_expired(&self) -> bool {
        let guard = self.data.read().unwrap();
        match guard.as_ref() {
            Some(pair) => Utc::now() > pair.expires_at,
            None => true,
        }
    }

    /// Get the full token pair if available
    pub fn token_pair(&self) -> Option<TokenPair> {
        let guard = self.data.read().unwrap();
        guard.clone()
    }

    /// Clear the stored tokens
    pub fn clear(&self) {
        let mut guard = self.data.write().unwrap();
        *guard = None;
    }
}

impl Default for TokenManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_manager_is_empty() {
        let manager = TokenManager::new();
        assert!(manager.access_token().is_none());
        assert!(manager.refresh_token().is_none());
        assert!(manager.is_expired());
    }

    #[test]
    fn test_set_and_get_tokens() {
        let manager = TokenManager::new();
        manager.set_tokens("access".to_string(), "refresh".to_string(), 900);

        assert_eq!(manager.access_token(), Some("access".to_string()));
        assert_eq!(manager.refresh_token(), Some("refresh".to_string()));
        assert!(!manager.is_expired());
    }

    #[test]
    fn test_refresh_overwrites_previous_pair() {
        let manager = TokenManager::new();
        manager.set_tokens("access1".to_string(), "refresh1".to_string(), 900);
        manager.set_tokens("access2".to_string(), "refresh2".to_string(), 900);

        let pair = manager.token_pair().unwrap();
        assert_eq!(pair.access_token, "access2");
        assert_eq!(pair.refresh_token, "refresh2");
    }

    #[test]
    fn test_clear_tokens() {
        let manager = TokenManager::new();
        manager.set_tokens("access".to_string(), "refresh".to_string(), 900);

        manager.clear();
        assert!(manager.access_token().is_none());
        assert!(manager.is_expired());
    }
}
