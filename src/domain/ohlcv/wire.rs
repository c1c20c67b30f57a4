//! Wire types for third-party OHLCV responses.

use serde::{Deserialize, Serialize};

/// One GeckoTerminal candle: `[timestamp, open, high, low, close, volume]`.
pub type GeckoCandle = [f64; 6];

/// `GET /networks/{network}/pools/{pool}/ohlcv/{period}` body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeckoOhlcvResponse {
    #[serde(default)]
    pub data: Option<GeckoOhlcvData>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeckoOhlcvData {
    #[serde(default)]
    pub attributes: Option<GeckoOhlcvAttributes>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeckoOhlcvAttributes {
    /// Newest first.
    #[serde(default)]
    pub ohlcv_list: Vec<GeckoCandle>,
}

/// One DexPaprika pool candle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaprikaOhlcvBar {
    /// ISO 8601 start of the candle.
    pub time_open: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(default)]
    pub volume: f64,
}

/// `GET /networks/{network}/pools/{pool}/ohlcv` body: a bare array of candles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaprikaOhlcvResponse(pub Vec<PaprikaOhlcvBar>);
