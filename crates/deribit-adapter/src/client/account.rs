/*
[INPUT]:  Query parameters (instrument, currency, trade count)
[OUTPUT]: Raw order/position/account state from query methods
[POS]:    Client layer - account and market queries (mixed private/public)
[UPDATE]: When adding query methods or changing param shapes
*/

use serde_json::{json, Value};

use crate::rpc::error::Result;

use super::orders::DEFAULT_INSTRUMENT;
use super::DeribitClient;

/// Currency used when the caller does not name one
pub const DEFAULT_CURRENCY: &str = "BTC";

/// Trade count returned by `get_last_trades` when unspecified
pub const DEFAULT_TRADE_COUNT: u32 = 10;

impl DeribitClient {
    /// List open orders for an instrument
    ///
    /// RPC: `private/get_open_orders_by_instrument`
    pub fn get_open_orders(&self, instrument: Option<&str>) -> Result<Value> {
        let params = json!({
            "access_token": self.access_token()?,
            "instrument_name": instrument.unwrap_or(DEFAULT_INSTRUMENT),
        });
        self.request("private/get_open_orders_by_instrument", params)
    }

    /// Get the position held in an instrument
    ///
    /// RPC: `private/get_position`
    pub fn get_positions(&self, instrument: Option<&str>) -> Result<Value> {
        let params = json!({
            "access_token": self.access_token()?,
            "instrument_name": instrument.unwrap_or(DEFAULT_INSTRUMENT),
        });
        self.request("private/get_position", params)
    }

    /// Get the book summary for an instrument. Public method, no token.
    ///
    /// RPC: `public/get_book_summary_by_instrument`
    pub fn get_summary(&self, instrument: Option<&str>) -> Result<Value> {
        let params = json!({
            "instrument_name": instrument.unwrap_or(DEFAULT_INSTRUMENT),
        });
        self.request("public/get_book_summary_by_instrument", params)
    }

    /// Get the account summary for a currency
    ///
    /// RPC: `private/get_account_summary`
    pub fn get_account_summary(&self, currency: Option<&str>) -> Result<Value> {
        let params = json!({
            "access_token": self.access_token()?,
            "currency": currency.unwrap_or(DEFAULT_CURRENCY),
        });
        self.request("private/get_account_summary", params)
    }

    /// Get the latest trades on an instrument. Public method, no token.
    ///
    /// RPC: `public/get_last_trades_by_instrument`
    pub fn get_last_trades(&self, instrument: Option<&str>, count: Option<u32>) -> Result<Value> {
        let params = json!({
            "instrument_name": instrument.unwrap_or(DEFAULT_INSTRUMENT),
            "count": count.unwrap_or(DEFAULT_TRADE_COUNT),
        });
        self.request("public/get_last_trades_by_instrument", params)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::client::testutil::{auth_reply, spawn_mock_exchange};
    use crate::client::DeribitClient;
    use crate::ws::transport::ClientConfig;

    fn result_reply(result: serde_json::Value) -> serde_json::Value {
        json!({"jsonrpc": "2.0", "id": 1, "result": result})
    }

    fn connect(url: &str) -> DeribitClient {
        DeribitClient::with_config_and_url("my_id", "my_client_secret", url, ClientConfig::default())
            .unwrap()
    }

    #[test]
    fn test_private_queries_inject_access_token() {
        let (url, rx) = spawn_mock_exchange(vec![
            auth_reply("token-1", "refresh-1"),
            result_reply(json!([])),
            result_reply(json!({"size": 0})),
            result_reply(json!({"equity": 1.0})),
        ]);
        let client = connect(&url);

        client.get_open_orders(None).unwrap();
        client.get_positions(Some("ETH-PERPETUAL")).unwrap();
        client.get_account_summary(None).unwrap();

        let sent: Vec<_> = rx.try_iter().collect();

        assert_eq!(sent[1]["method"], "private/get_open_orders_by_instrument");
        assert_eq!(sent[1]["params"]["instrument_name"], "BTC-PERPETUAL");
        assert_eq!(sent[1]["params"]["access_token"], "token-1");

        assert_eq!(sent[2]["method"], "private/get_position");
        assert_eq!(sent[2]["params"]["instrument_name"], "ETH-PERPETUAL");
        assert_eq!(sent[2]["params"]["access_token"], "token-1");

        assert_eq!(sent[3]["method"], "private/get_account_summary");
        assert_eq!(sent[3]["params"]["currency"], "BTC");
        assert_eq!(sent[3]["params"]["access_token"], "token-1");
    }

    #[test]
    fn test_public_queries_omit_access_token() {
        let (url, rx) = spawn_mock_exchange(vec![
            auth_reply("token-1", "refresh-1"),
            result_reply(json!([{"mark_price": 43000.5}])),
            result_reply(json!([])),
        ]);
        let client = connect(&url);

        let summary = client.get_summary(None).unwrap();
        assert_eq!(summary, json!([{"mark_price": 43000.5}]));

        client.get_last_trades(None, None).unwrap();

        let sent: Vec<_> = rx.try_iter().collect();

        assert_eq!(sent[1]["method"], "public/get_book_summary_by_instrument");
        assert_eq!(sent[1]["params"]["instrument_name"], "BTC-PERPETUAL");
        assert!(sent[1]["params"].get("access_token").is_none());

        assert_eq!(sent[2]["method"], "public/get_last_trades_by_instrument");
        assert_eq!(sent[2]["params"]["count"], 10);
        assert!(sent[2]["params"].get("access_token").is_none());
    }

    #[test]
    fn test_last_trades_explicit_count() {
        let (url, rx) = spawn_mock_exchange(vec![
            auth_reply("token-1", "refresh-1"),
            result_reply(json!([])),
        ]);
        let client = connect(&url);

        client.get_last_trades(Some("ETH-PERPETUAL"), Some(50)).unwrap();

        let sent: Vec<_> = rx.try_iter().collect();
        assert_eq!(sent[1]["params"]["instrument_name"], "ETH-PERPETUAL");
        assert_eq!(sent[1]["params"]["count"], 50);
    }
}
