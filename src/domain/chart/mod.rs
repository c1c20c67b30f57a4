//! Chart domain — OHLCV bars and the synthetic series that stands in for
//! missing price history.

pub mod aggregate;
pub mod generator;
pub mod rng;

use crate::shared::Timeframe;
use serde::{Deserialize, Serialize};

pub use aggregate::{aggregate, aggregate_weekly};
pub use generator::{generate, generate_series, generate_with, start_price, GeneratorConfig};
pub use rng::Lcg;

/// One OHLCV candle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    /// Unix timestamp in seconds (bar open).
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl PriceBar {
    pub fn is_bullish(&self) -> bool {
        self.close >= self.open
    }

    /// `low <= min(open, close) <= max(open, close) <= high`, all positive.
    pub fn is_well_formed(&self) -> bool {
        self.low > 0.0
            && self.low <= self.open.min(self.close)
            && self.high >= self.open.max(self.close)
            && self.volume >= 0.0
    }
}

/// Input to the synthetic series generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesRequest {
    pub current_price: f64,
    /// 24h change in percent (`10.0` = +10%).
    pub change_24h: f64,
    /// 24h volume spread across the generated bars.
    #[serde(default)]
    pub volume_24h: f64,
    pub seed: u32,
    pub timeframe: Timeframe,
}

impl SeriesRequest {
    pub fn new(current_price: f64, change_24h: f64, seed: u32, timeframe: Timeframe) -> Self {
        Self {
            current_price,
            change_24h,
            volume_24h: 0.0,
            seed,
            timeframe,
        }
    }

    pub fn with_volume_24h(mut self, volume_24h: f64) -> Self {
        self.volume_24h = volume_24h;
        self
    }

    pub fn with_timeframe(mut self, timeframe: Timeframe) -> Self {
        self.timeframe = timeframe;
        self
    }
}

/// Derive a PRNG seed from a stable identifier (usually a pair address).
///
/// Sum of UTF-16 code units, wrapping. Anagrams collide; that is acceptable
/// for picking a chart shape.
pub fn seed_from_identifier(identifier: &str) -> u32 {
    identifier
        .encode_utf16()
        .fold(0u32, |acc, unit| acc.wrapping_add(u32::from(unit)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_from_identifier() {
        assert_eq!(seed_from_identifier(""), 0);
        assert_eq!(seed_from_identifier("0xabc"), 462);
        assert_eq!(
            seed_from_identifier("0x88e6A0c2dDD26FEEb64F039a2c41296FcB3f5640"),
            seed_from_identifier("0x88e6A0c2dDD26FEEb64F039a2c41296FcB3f5640"),
        );
    }

    #[test]
    fn test_seed_uses_utf16_units() {
        // U+1F600 is a surrogate pair: 0xD83D + 0xDE00.
        assert_eq!(seed_from_identifier("\u{1F600}"), 0xD83D + 0xDE00);
    }

    #[test]
    fn test_price_bar_serde_shape() {
        let bar = PriceBar {
            time: 1_700_000_000,
            open: 1.0,
            high: 2.0,
            low: 0.5,
            close: 1.5,
            volume: 10.0,
        };
        let json = serde_json::to_value(bar).unwrap();
        assert_eq!(json["time"], 1_700_000_000);
        assert_eq!(json["close"], 1.5);
        assert!(bar.is_bullish());
        assert!(bar.is_well_formed());
    }

    #[test]
    fn test_series_request_builder() {
        let req = SeriesRequest::new(2.0, -5.0, 9, Timeframe::Hour1)
            .with_volume_24h(1_000.0)
            .with_timeframe(Timeframe::Day1);
        assert_eq!(req.volume_24h, 1_000.0);
        assert_eq!(req.timeframe, Timeframe::Day1);
    }
}
