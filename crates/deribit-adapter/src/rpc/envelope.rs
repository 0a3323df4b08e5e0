/*
[INPUT]:  Method names, params objects, and raw server reply JSON
[OUTPUT]: JSON-RPC 2.0 request envelopes and normalized call outcomes
[POS]:    RPC layer - wire format and response unwrapping
[UPDATE]: When the envelope shape or outcome normalization changes
*/

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::{DeribitError, Result};

/// Protocol version carried on every request
pub const JSONRPC_VERSION: &str = "2.0";

/// Constant request id. Connections are strictly one-request-one-response,
/// so no correlation beyond this is needed.
pub const REQUEST_ID: u64 = 1;

/// Sentinel returned when a reply carries neither `result` nor `message`
pub const OK_SENTINEL: &str = "Ok";

/// JSON-RPC 2.0 request envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub id: u64,
    pub method: String,
    pub params: Value,
}

impl JsonRpcRequest {
    /// Wrap a method name and params object into an envelope
    pub fn new(method: impl Into<String>, params: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id: REQUEST_ID,
            method: method.into(),
            params,
        }
    }
}

/// JSON-RPC error object carried in failed replies
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub data: Option<Value>,
}

/// JSON-RPC reply as received off the wire
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcResponse {
    #[serde(default)]
    pub jsonrpc: Option<String>,
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<RpcErrorObject>,
    #[serde(default)]
    pub message: Option<Value>,
}

impl JsonRpcResponse {
    /// Normalize a reply into a call outcome:
    /// a JSON-RPC `error` object becomes a typed `Api` error, a `result`
    /// payload is returned verbatim, a bare `message` field is returned as
    /// the value itself, and an empty reply maps to the `"Ok"` sentinel.
    pub fn into_outcome(self) -> Result<Value> {
        if let Some(err) = self.error {
            return Err(DeribitError::Api {
                code: err.code,
                message: err.message,
            });
        }
        if let Some(result) = self.result {
            return Ok(result);
        }
        if let Some(message) = self.message {
            return Ok(message);
        }
        Ok(Value::String(OK_SENTINEL.to_string()))
    }
}
