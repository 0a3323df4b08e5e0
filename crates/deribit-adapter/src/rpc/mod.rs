/*
[INPUT]:  JSON-RPC envelope definitions and error taxonomy
[OUTPUT]: Wire types and crate-wide Result/DeribitError
[POS]:    RPC layer - protocol framing and error normalization
[UPDATE]: When the wire format or error taxonomy changes
*/

pub mod envelope;
pub mod error;

pub use envelope::{JsonRpcRequest, JsonRpcResponse, RpcErrorObject, JSONRPC_VERSION, OK_SENTINEL};
pub use error::{DeribitError, Result};
