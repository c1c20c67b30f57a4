//! Synthetic OHLCV series.
//!
//! Used when a pair has a current price and 24h change but no usable candle
//! history. The series starts at the price implied by the 24h change, follows a
//! noisy drift line, and closes its last bar exactly on the current price.
//! Output is a pure function of the request, the config and the clock.

use super::rng::Lcg;
use super::{PriceBar, SeriesRequest};
use crate::error::DexVisionError;
use crate::shared::Timeframe;
use chrono::{DateTime, Utc};
use rand::Rng;
use std::ops::Range;

/// Tunables for the synthetic series.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Price floor as a fraction of the current price. Must be in `(0, 1)`.
    pub floor_ratio: f64,
    /// Change (percent) assumed when the reported 24h change is zero.
    pub zero_change_drift_pct: f64,
    /// Fraction of the previous bar's deviation from the drift line carried forward.
    pub mean_reversion: f64,
    /// Probability that a bar gets one amplified wick.
    pub long_wick_probability: f64,
    pub long_wick_multiplier: f64,
    /// Range the per-bar volume multiplier is drawn from.
    pub volume_jitter: Range<f64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            floor_ratio: 0.01,
            zero_change_drift_pct: 1.0,
            mean_reversion: 0.85,
            long_wick_probability: 0.2,
            long_wick_multiplier: 2.5,
            volume_jitter: 0.3..1.7,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), DexVisionError> {
        if !(self.floor_ratio > 0.0 && self.floor_ratio < 1.0) {
            return Err(DexVisionError::Validation(format!(
                "floor_ratio must be in (0, 1), got {}",
                self.floor_ratio
            )));
        }
        if !self.zero_change_drift_pct.is_finite() || self.zero_change_drift_pct <= -100.0 {
            return Err(DexVisionError::Validation(format!(
                "zero_change_drift_pct must be finite and above -100, got {}",
                self.zero_change_drift_pct
            )));
        }
        if !(0.0..1.0).contains(&self.mean_reversion) {
            return Err(DexVisionError::Validation(format!(
                "mean_reversion must be in [0, 1), got {}",
                self.mean_reversion
            )));
        }
        if !(0.0..=1.0).contains(&self.long_wick_probability) {
            return Err(DexVisionError::Validation(format!(
                "long_wick_probability must be in [0, 1], got {}",
                self.long_wick_probability
            )));
        }
        if !(self.long_wick_multiplier.is_finite() && self.long_wick_multiplier >= 1.0) {
            return Err(DexVisionError::Validation(format!(
                "long_wick_multiplier must be >= 1, got {}",
                self.long_wick_multiplier
            )));
        }
        let (start, end) = (self.volume_jitter.start, self.volume_jitter.end);
        if !(start.is_finite() && end.is_finite() && start >= 0.0 && start < end) {
            return Err(DexVisionError::Validation(format!(
                "volume_jitter must be a non-empty, non-negative range, got {start}..{end}"
            )));
        }
        Ok(())
    }
}

/// Price the series starts from, before the floor is applied.
///
/// `current / (1 + change/100)`, with `zero_change_drift_pct` standing in for a
/// zero (or non-finite) change. Returns `None` when the change implies a
/// non-positive or unbounded start (change at or below -100%).
pub fn start_price(current_price: f64, change_24h: f64, config: &GeneratorConfig) -> Option<f64> {
    let change = if change_24h.is_finite() && change_24h != 0.0 {
        change_24h
    } else {
        config.zero_change_drift_pct
    };
    let start = current_price / (1.0 + change / 100.0);
    (start.is_finite() && start > 0.0).then_some(start)
}

/// Generate a series ending at `current_price`, using the default config and
/// the current time.
pub fn generate(current_price: f64, change_24h: f64, seed: u32, timeframe: Timeframe) -> Vec<PriceBar> {
    generate_series(&SeriesRequest::new(current_price, change_24h, seed, timeframe))
}

pub fn generate_series(request: &SeriesRequest) -> Vec<PriceBar> {
    generate_with(request, &GeneratorConfig::default(), Utc::now())
}

/// Generate a series against an explicit config and clock.
///
/// Returns an empty vector when `current_price` is zero, negative or not finite.
///
/// # Panics
///
/// Panics if `config` fails [`GeneratorConfig::validate`].
pub fn generate_with(
    request: &SeriesRequest,
    config: &GeneratorConfig,
    now: DateTime<Utc>,
) -> Vec<PriceBar> {
    if let Err(e) = config.validate() {
        panic!("invalid generator config: {e}");
    }

    let current = request.current_price;
    if !(current.is_finite() && current > 0.0) {
        tracing::debug!(price = current, "no usable price, returning empty series");
        return Vec::new();
    }

    let spec = request.timeframe.spec();
    let count = spec.bar_count;
    let interval = spec.interval_secs as i64;
    let volatility = spec.volatility;

    let floor = current * config.floor_ratio;
    let start = start_price(current, request.change_24h, config)
        .unwrap_or(floor)
        .max(floor);
    let drift = (current - start) / count as f64;

    let volume_24h = if request.volume_24h.is_finite() {
        request.volume_24h.max(0.0)
    } else {
        0.0
    };
    let volume_per_bar = volume_24h / count as f64;

    tracing::debug!(
        seed = request.seed,
        timeframe = %request.timeframe,
        bars = count,
        start,
        current,
        "generating synthetic series"
    );

    let mut rng = Lcg::new(request.seed);
    let now_secs = now.timestamp();
    let mut bars = Vec::with_capacity(count);
    let mut open = start;
    let mut deviation = 0.0;

    for i in 0..count {
        let time = now_secs - (count - i) as i64 * interval;

        let shock = rng.next_signed() * current * volatility;
        deviation = deviation * config.mean_reversion + shock;
        let close = if i + 1 == count {
            current
        } else {
            let anchor = start + drift * (i + 1) as f64;
            (anchor + deviation).clamp(floor, f64::MAX)
        };

        let body = (close - open).abs();
        let level = open.max(close);
        let mut upper = body * 0.5 * rng.next_f64() + level * volatility * 0.5 * rng.next_f64();
        let mut lower = body * 0.5 * rng.next_f64() + level * volatility * 0.5 * rng.next_f64();
        if rng.gen_bool(config.long_wick_probability) {
            if rng.gen_bool(0.5) {
                upper *= config.long_wick_multiplier;
            } else {
                lower *= config.long_wick_multiplier;
            }
        }

        // Prices near f64::MAX must not round up to infinity.
        let high = (open.max(close) + upper).min(f64::MAX);
        let low = (open.min(close) - lower).max(floor);
        let volume = volume_per_bar * rng.gen_range(config.volume_jitter.clone());

        bars.push(PriceBar {
            time,
            open,
            high,
            low,
            close,
            volume,
        });
        open = close;
    }

    bars
}
