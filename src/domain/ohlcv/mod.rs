//! Real OHLCV candles from GeckoTerminal and DexPaprika.
//!
//! Fetching is left to the caller; this slice turns the decoded responses into
//! ascending [`PriceBar`](crate::domain::chart::PriceBar) series.

pub mod convert;
pub mod wire;

pub use convert::gecko_bars;

use crate::shared::Timeframe;

/// GeckoTerminal candle endpoint parameters for a [`Timeframe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeckoQuery {
    /// `minute`, `hour` or `day`.
    pub period: &'static str,
    pub aggregate: u32,
    pub limit: u32,
}

impl GeckoQuery {
    /// GeckoTerminal has no weekly candles; `1w` asks for daily ones and
    /// [`gecko_bars`] folds them.
    pub fn for_timeframe(timeframe: Timeframe) -> Self {
        let (period, aggregate, limit) = match timeframe {
            Timeframe::Minute5 => ("minute", 5, 200),
            Timeframe::Minute15 => ("minute", 15, 200),
            Timeframe::Hour1 => ("hour", 1, 168),
            Timeframe::Hour4 => ("hour", 4, 120),
            Timeframe::Day1 => ("day", 1, 90),
            Timeframe::Week1 => ("day", 1, 140),
        };
        Self {
            period,
            aggregate,
            limit,
        }
    }
}
