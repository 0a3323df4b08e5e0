/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Deribit adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod client;
pub mod rpc;
pub mod ws;

// Re-export commonly used types from auth
pub use auth::{Credential, TokenManager, TokenPair};

// Re-export the client and its constants
pub use client::account::{DEFAULT_CURRENCY, DEFAULT_TRADE_COUNT};
pub use client::orders::{DEFAULT_INSTRUMENT, ORDER_LABEL};
pub use client::{AuthResult, DeribitClient};

// Re-export wire types and errors from rpc
pub use rpc::{DeribitError, JsonRpcRequest, JsonRpcResponse, Result, OK_SENTINEL};

// Re-export transport configuration from ws
pub use ws::{ClientConfig, WsTransport, PRODUCTION_WS_URL, TESTNET_WS_URL};
