/*
[INPUT]:  API credentials, endpoint selection, and JSON-RPC method calls
[OUTPUT]: Authenticated blocking client with normalized call outcomes
[POS]:    Client layer - session state, auth handshake, request dispatch
[UPDATE]: When the auth flow, dispatch path, or re-auth policy changes
*/

pub mod account;
pub mod orders;

#[cfg(test)]
pub(crate) mod testutil;

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::runtime::Runtime;
use tracing::{debug, info};

use crate::auth::credential::{
    Credential, AUTH_DATA, AUTH_NONCE, AUTH_SCOPE, GRANT_TYPE_CLIENT_SIGNATURE,
};
use crate::auth::token::TokenManager;
use crate::rpc::envelope::JsonRpcRequest;
use crate::rpc::error::{DeribitError, Result};
use crate::ws::transport::{ClientConfig, WsTransport};

/// Re-authenticate after this many calls so the access token never
/// expires server-side mid-session
const REAUTH_INTERVAL: u64 = 100;

/// Token lifetime assumed when the server omits `expires_in`
const DEFAULT_EXPIRES_SECONDS: u64 = 900;

/// Result payload of a successful `public/auth` call
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResult {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default = "default_expires_in")]
    pub expires_in: u64,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
}

fn default_expires_in() -> u64 {
    DEFAULT_EXPIRES_SECONDS
}

/// Blocking JSON-RPC-over-WebSocket client for the Deribit trading API.
///
/// Owns its credentials and token state; every call opens one WebSocket
/// connection, performs a single round trip, and closes it. Callers never
/// manage an event loop: the client runs its async I/O to completion on an
/// internal current-thread runtime.
#[derive(Debug)]
pub struct DeribitClient {
    runtime: Runtime,
    transport: WsTransport,
    credential: Credential,
    tokens: TokenManager,
    request_count: AtomicU64,
}

impl DeribitClient {
    /// Create a client and authenticate against the selected endpoint.
    ///
    /// Construction fails if the initial `public/auth` handshake fails, so
    /// a live client always holds an access token.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        testnet: bool,
    ) -> Result<Self> {
        let transport = WsTransport::new(testnet, &ClientConfig::default())?;
        Self::with_transport(client_id, client_secret, transport)
    }

    /// Create a client with a custom timeout configuration
    pub fn with_config(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        testnet: bool,
        config: ClientConfig,
    ) -> Result<Self> {
        let transport = WsTransport::new(testnet, &config)?;
        Self::with_transport(client_id, client_secret, transport)
    }

    /// Create a client against an explicit WebSocket URL
    pub fn with_config_and_url(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        url: &str,
        config: ClientConfig,
    ) -> Result<Self> {
        let transport = WsTransport::with_url(url, &config)?;
        Self::with_transport(client_id, client_secret, transport)
    }

    fn with_transport(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        transport: WsTransport,
    ) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| DeribitError::Config(format!("failed to start runtime: {e}")))?;

        let client = Self {
            runtime,
            transport,
            credential: Credential::new(client_id, client_secret),
            tokens: TokenManager::new(),
            request_count: AtomicU64::new(0),
        };

        client.authenticate()?;
        Ok(client)
    }

    /// Get the token manager holding the current access/refresh pair
    pub fn tokens(&self) -> &TokenManager {
        &self.tokens
    }

    /// Number of calls made through [`request`](Self::request)
    pub fn request_count(&self) -> u64 {
        self.request_count.load(Ordering::Relaxed)
    }

    /// Authenticate via `public/auth` and store the issued token pair.
    ///
    /// Signs `"{timestamp}\n{nonce}\n{data}"` with the client secret and
    /// requests a `client_signature` grant. A held refresh token is carried
    /// into the params; the grant type stays signature-based, so every
    /// re-auth is a full re-signature.
    pub fn authenticate(&self) -> Result<AuthResult> {
        let timestamp = Utc::now().timestamp_millis();
        let signature = self.credential.sign(timestamp, AUTH_NONCE, AUTH_DATA)?;

        let mut params = json!({
            "grant_type": GRANT_TYPE_CLIENT_SIGNATURE,
            "client_id": self.credential.client_id(),
            "client_secret": self.credential.client_secret(),
            "timestamp": timestamp,
            "signature": signature,
            "nonce": AUTH_NONCE,
            "data": AUTH_DATA,
            "scope": AUTH_SCOPE,
        });
        if let Some(refresh_token) = self.tokens.refresh_token() {
            params["refresh_token"] = Value::String(refresh_token);
        }

        let outcome = self
            .runtime
            .block_on(self.dispatch("public/auth", params))
            .map_err(into_auth_error)?;

        let auth: AuthResult = serde_json::from_value(outcome).map_err(|e| {
            DeribitError::Authentication {
                message: format!("malformed auth result: {e}"),
            }
        })?;

        self.tokens.set_tokens(
            auth.access_token.clone(),
            auth.refresh_token.clone(),
            auth.expires_in,
        );
        info!(expires_in = auth.expires_in, "authenticated");

        Ok(auth)
    }

    /// Send one JSON-RPC request and normalize the reply.
    ///
    /// Blocks until the round trip completes. Every call ticks the request
    /// counter; on the 100th-call boundary the session re-authenticates
    /// before returning, refreshing the stored token pair.
    pub fn request(&self, method: &str, params: Value) -> Result<Value> {
        let outcome = self.runtime.block_on(self.dispatch(method, params))?;

        let count = self.request_count.fetch_add(1, Ordering::Relaxed) + 1;
        if count % REAUTH_INTERVAL == REAUTH_INTERVAL - 1 {
            debug!(count, "re-auth interval reached");
            self.authenticate()?;
        }

        Ok(outcome)
    }

    /// Auth traffic goes through the same path but does not tick the
    /// request counter, which keeps re-auth from re-entering itself
    async fn dispatch(&self, method: &str, params: Value) -> Result<Value> {
        let request = JsonRpcRequest::new(method, params);
        let reply = self.transport.call(&request).await?;
        reply.into_outcome()
    }

    /// Access token for private method params.
    /// Present for the lifetime of the client after construction.
    pub(crate) fn access_token(&self) -> Result<String> {
        self.tokens
            .access_token()
            .ok_or_else(|| DeribitError::Authentication {
                message: "no access token held".to_string(),
            })
    }
}

fn into_auth_error(err: DeribitError) -> DeribitError {
    match err {
        DeribitError::Api { code, message } => DeribitError::Authentication {
            message: format!("code {code}: {message}"),
        },
        other => other,
    }
}
