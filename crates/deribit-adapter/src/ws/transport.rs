/*
[INPUT]:  Endpoint selection (testnet flag), timeout config, request envelopes
[OUTPUT]: One decoded JSON-RPC reply per call over a scoped WebSocket
[POS]:    WebSocket layer - single round-trip transport
[UPDATE]: When connection handling or frame decoding changes
*/

use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use tokio::time::timeout;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message as WsMessage;
use tracing::debug;
use url::Url;

use crate::rpc::envelope::{JsonRpcRequest, JsonRpcResponse};
use crate::rpc::error::{DeribitError, Result};

/// Production JSON-RPC WebSocket endpoint
pub const PRODUCTION_WS_URL: &str = "wss://www.deribit.com/ws/api/v2";

/// Testnet JSON-RPC WebSocket endpoint
pub const TESTNET_WS_URL: &str = "wss://test.deribit.com/ws/api/v2";

/// Transport configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Deadline for the whole connect/send/receive round trip
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(10),
        }
    }
}

/// Single round-trip WebSocket transport.
///
/// Stateless across calls: every `call` opens a fresh connection, sends one
/// request frame, decodes the first data frame, and closes the connection.
/// The connection is dropped on every exit path, including failures.
#[derive(Debug, Clone)]
pub struct WsTransport {
    url: Url,
    request_timeout: Duration,
}

impl WsTransport {
    /// Create a transport for the production or test endpoint
    pub fn new(testnet: bool, config: &ClientConfig) -> Result<Self> {
        let endpoint = if testnet {
            TESTNET_WS_URL
        } else {
            PRODUCTION_WS_URL
        };
        Self::with_url(endpoint, config)
    }

    /// Create a transport for an explicit WebSocket URL
    pub fn with_url(url: &str, config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            url: Url::parse(url)?,
            request_timeout: config.request_timeout,
        })
    }

    /// Get the endpoint URL
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Send one encoded request and await exactly one reply
    pub async fn call(&self, request: &JsonRpcRequest) -> Result<JsonRpcResponse> {
        let payload = serde_json::to_string(request)?;
        let duration = self.request_timeout;

        timeout(duration, self.exchange(payload))
            .await
            .map_err(|_| DeribitError::Timeout {
                duration: duration.as_secs(),
            })?
    }

    async fn exchange(&self, payload: String) -> Result<JsonRpcResponse> {
        debug!(url = %self.url, bytes = payload.len(), "ws request");

        let (mut stream, _response) = connect_async(self.url.as_str()).await?;
        stream.send(WsMessage::Text(payload.into())).await?;

        while let Some(frame) = stream.next().await {
            let text = match frame? {
                WsMessage::Text(text) => text.to_string(),
                WsMessage::Binary(bytes) => String::from_utf8(bytes.to_vec())
                    .map_err(|e| DeribitError::InvalidResponse(format!("non-UTF-8 frame: {e}")))?,
                WsMessage::Ping(_) | WsMessage::Pong(_) | WsMessage::Frame(_) => continue,
                WsMessage::Close(_) => break,
            };

            debug!(bytes = text.len(), "ws response");
            let reply: JsonRpcResponse = serde_json::from_str(&text)?;
            let _ = stream.close(None).await;
            return Ok(reply);
        }

        Err(DeribitError::InvalidResponse(
            "connection closed before a reply frame arrived".to_string(),
        ))
    }
}
