/*
[INPUT]:  Order parameters (price, amount, instrument, order id)
[OUTPUT]: Raw order results from private trading methods
[POS]:    Client layer - order entry endpoints (require access token)
[UPDATE]: When adding order methods or changing param shapes
*/

use serde_json::{json, Value};

use crate::rpc::error::Result;

use super::DeribitClient;

/// Instrument used when the caller does not name one
pub const DEFAULT_INSTRUMENT: &str = "BTC-PERPETUAL";

/// Label attached to every order placed through this client
pub const ORDER_LABEL: &str = "algoorder";

impl DeribitClient {
    /// Place a limit buy order
    ///
    /// RPC: `private/buy`
    pub fn buy(
        &self,
        price: f64,
        amount: f64,
        post_only: bool,
        instrument: Option<&str>,
    ) -> Result<Value> {
        let params = json!({
            "access_token": self.access_token()?,
            "instrument_name": instrument.unwrap_or(DEFAULT_INSTRUMENT),
            "amount": amount,
            "price": price,
            "type": "limit",
            "post_only": post_only,
            "reject_post_only": post_only,
            "label": ORDER_LABEL,
        });
        self.request("private/buy", params)
    }

    /// Place a market buy order
    ///
    /// RPC: `private/buy`
    pub fn market_buy(&self, amount: f64, instrument: Option<&str>) -> Result<Value> {
        let params = json!({
            "access_token": self.access_token()?,
            "instrument_name": instrument.unwrap_or(DEFAULT_INSTRUMENT),
            "amount": amount,
            "type": "market",
            "label": ORDER_LABEL,
        });
        self.request("private/buy", params)
    }

    /// Place a limit sell order
    ///
    /// RPC: `private/sell`
    pub fn sell(
        &self,
        price: f64,
        amount: f64,
        post_only: bool,
        instrument: Option<&str>,
    ) -> Result<Value> {
        let params = json!({
            "access_token": self.access_token()?,
            "instrument_name": instrument.unwrap_or(DEFAULT_INSTRUMENT),
            "amount": amount,
            "price": price,
            "type": "limit",
            "post_only": post_only,
            "reject_post_only": post_only,
            "label": ORDER_LABEL,
        });
        self.request("private/sell", params)
    }

    /// Place a market sell order
    ///
    /// RPC: `private/sell`
    pub fn market_sell(&self, amount: f64, instrument: Option<&str>) -> Result<Value> {
        let params = json!({
            "access_token": self.access_token()?,
            "instrument_name": instrument.unwrap_or(DEFAULT_INSTRUMENT),
            "amount": amount,
            "type": "market",
            "label": ORDER_LABEL,
        });
        self.request("private/sell", params)
    }

    /// Cancel an order by id
    ///
    /// RPC: `private/cancel`
    pub fn cancel(&self, order_id: &str) -> Result<Value> {
        let params = json!({
            "access_token": self.access_token()?,
            "order_id": order_id,
        });
        self.request("private/cancel", params)
    }

    /// Cancel all open orders across instruments
    ///
    /// RPC: `private/cancel_all`
    pub fn cancel_all(&self) -> Result<Value> {
        let params = json!({
            "access_token": self.access_token()?,
        });
        self.request("private/cancel_all", params)
    }

    /// Change price and amount of an open order
    ///
    /// RPC: `private/edit`
    pub fn edit(&self, order_id: &str, price: f64, amount: f64) -> Result<Value> {
        let params = json!({
            "access_token": self.access_token()?,
            "order_id": order_id,
            "amount": amount,
            "price": price,
        });
        self.request("private/edit", params)
    }
}
