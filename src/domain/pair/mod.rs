//! Pair domain — a DEX pool snapshot and the chart request derived from it.

mod convert;
pub mod wire;

use crate::domain::chart::{PriceBar, SeriesRequest};
use crate::shared::{ChainId, PairAddress, Timeframe};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub address: String,
    pub name: String,
    pub symbol: String,
}

/// A trading pair with the figures the dashboard shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pair {
    pub chain_id: ChainId,
    pub dex_id: String,
    pub pair_address: PairAddress,
    pub base_token: Token,
    pub quote_token: Token,
    pub price_usd: f64,
    pub price_native: f64,
    /// Percent.
    pub price_change_24h: f64,
    pub volume_24h: f64,
    pub liquidity_usd: f64,
    pub fdv: Option<f64>,
    pub market_cap: Option<f64>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Pair {
    /// `BASE/QUOTE`.
    pub fn symbol(&self) -> String {
        format!("{}/{}", self.base_token.symbol, self.quote_token.symbol)
    }

    pub fn seed(&self) -> u32 {
        self.pair_address.seed()
    }

    pub fn series_request(&self, timeframe: Timeframe) -> SeriesRequest {
        SeriesRequest::new(self.price_usd, self.price_change_24h, self.seed(), timeframe)
            .with_volume_24h(self.volume_24h)
    }

    /// Synthetic chart for this pair, ending now.
    pub fn synthetic_chart(&self, timeframe: Timeframe) -> Vec<PriceBar> {
        crate::domain::chart::generate_series(&self.series_request(timeframe))
    }
}
