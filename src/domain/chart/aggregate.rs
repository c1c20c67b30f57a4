//! Roll fine bars up into coarser ones.
//!
//! GeckoTerminal has no weekly OHLCV endpoint, so weekly charts are built from
//! daily bars seven at a time.

use super::PriceBar;

/// Fold each run of `bars_per_bucket` consecutive bars into one bar.
///
/// The trailing partial bucket is kept. `bars_per_bucket == 0` returns the input
/// unchanged.
pub fn aggregate(bars: &[PriceBar], bars_per_bucket: usize) -> Vec<PriceBar> {
    if bars_per_bucket == 0 {
        return bars.to_vec();
    }
    bars.chunks(bars_per_bucket).filter_map(fold_chunk).collect()
}

pub fn aggregate_weekly(daily: &[PriceBar]) -> Vec<PriceBar> {
    aggregate(daily, 7)
}

fn fold_chunk(chunk: &[PriceBar]) -> Option<PriceBar> {
    let first = chunk.first()?;
    let last = chunk.last()?;
    Some(PriceBar {
        time: first.time,
        open: first.open,
        high: chunk.iter().map(|b| b.high).fold(f64::MIN, f64::max),
        low: chunk.iter().map(|b| b.low).fold(f64::MAX, f64::min),
        close: last.close,
        volume: chunk.iter().map(|b| b.volume).sum(),
    })
}
