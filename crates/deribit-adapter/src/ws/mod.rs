/*
[INPUT]:  Endpoint configuration and encoded requests
[OUTPUT]: One decoded reply per WebSocket round trip
[POS]:    WebSocket layer - connection-per-call transport
[UPDATE]: When connection handling or endpoints change
*/

pub mod transport;

pub use transport::{ClientConfig, WsTransport, PRODUCTION_WS_URL, TESTNET_WS_URL};
