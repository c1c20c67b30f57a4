//! Conversions from OHLCV wire types to [`PriceBar`] series.

use super::wire::{GeckoCandle, GeckoOhlcvResponse, PaprikaOhlcvBar, PaprikaOhlcvResponse};
use crate::domain::chart::{aggregate_weekly, PriceBar};
use crate::error::DexVisionError;
use crate::shared::Timeframe;
use chrono::{DateTime, NaiveDate};

fn gecko_bar([time, open, high, low, close, volume]: GeckoCandle) -> PriceBar {
    PriceBar {
        time: time as i64,
        open,
        high,
        low,
        close,
        volume,
    }
}

/// Candles sorted oldest first. An empty or missing list is an error.
impl TryFrom<GeckoOhlcvResponse> for Vec<PriceBar> {
    type Error = DexVisionError;

    fn try_from(resp: GeckoOhlcvResponse) -> Result<Self, Self::Error> {
        let list = resp
            .data
            .and_then(|d| d.attributes)
            .map(|a| a.ohlcv_list)
            .unwrap_or_default();
        if list.is_empty() {
            return Err(DexVisionError::Validation("No OHLCV data returned".to_string()));
        }

        let mut bars: Vec<PriceBar> = list.into_iter().map(gecko_bar).collect();
        bars.sort_by_key(|b| b.time);
        Ok(bars)
    }
}

/// Converts a GeckoTerminal response fetched with
/// [`GeckoQuery::for_timeframe`](super::GeckoQuery::for_timeframe), folding
/// daily candles into weeks for [`Timeframe::Week1`].
pub fn gecko_bars(
    resp: GeckoOhlcvResponse,
    timeframe: Timeframe,
) -> Result<Vec<PriceBar>, DexVisionError> {
    let bars = Vec::<PriceBar>::try_from(resp)?;
    Ok(match timeframe {
        Timeframe::Week1 => aggregate_weekly(&bars),
        _ => bars,
    })
}

/// Unix seconds for an RFC 3339 timestamp or a bare `YYYY-MM-DD` date (UTC midnight).
fn parse_time_open(raw: &str) -> Result<i64, DexVisionError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.timestamp());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp())
        .ok_or_else(|| DexVisionError::Validation(format!("time_open: not a timestamp: {raw:?}")))
}

impl TryFrom<PaprikaOhlcvBar> for PriceBar {
    type Error = DexVisionError;

    fn try_from(b: PaprikaOhlcvBar) -> Result<Self, Self::Error> {
        Ok(Self {
            time: parse_time_open(&b.time_open)?,
            open: b.open,
            high: b.high,
            low: b.low,
            close: b.close,
            volume: b.volume,
        })
    }
}

impl TryFrom<PaprikaOhlcvResponse> for Vec<PriceBar> {
    type Error = DexVisionError;

    fn try_from(resp: PaprikaOhlcvResponse) -> Result<Self, Self::Error> {
        let mut bars = resp
            .0
            .into_iter()
            .map(PriceBar::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        bars.sort_by_key(|b| b.time);
        Ok(bars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: i64 = 86_400;

    fn gecko(json: &str) -> GeckoOhlcvResponse {
        serde_json::from_str(json).unwrap()
    }

    /// `days` daily candles, newest first as GeckoTerminal sends them.
    fn gecko_daily(days: i64) -> GeckoOhlcvResponse {
        let start = 1_704_067_200; // 2024-01-01
        let list: Vec<_> = (0..days)
            .rev()
            .map(|d| {
                let open = 10.0 + d as f64;
                [(start + d * DAY) as f64, open, open + 2.0, open - 1.0, open + 1.0, 100.0]
            })
            .collect();
        let json = serde_json::json!({ "data": { "attributes": { "ohlcv_list": list } } });
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_gecko_newest_first_is_sorted() {
        let resp = gecko(
            r#"{"data":{"id":"x","type":"ohlcv_request_response","attributes":{"ohlcv_list":[
                [1709294400, 3.0, 3.5, 2.9, 3.2, 120.5],
                [1709290800, 2.0, 3.1, 1.9, 3.0, 80],
                [1709287200, 1.0, 2.2, 0.9, 2.0, 40.25]
            ]}}}"#,
        );
        let bars = Vec::<PriceBar>::try_from(resp).unwrap();
        let times: Vec<i64> = bars.iter().map(|b| b.time).collect();
        assert_eq!(times, [1_709_287_200, 1_709_290_800, 1_709_294_400]);
        assert_eq!(bars[0].open, 1.0);
        assert_eq!(bars[0].volume, 40.25);
        assert_eq!(bars[2].close, 3.2);
        assert!(bars.iter().all(PriceBar::is_well_formed));
    }

    #[test]
    fn test_gecko_empty_list_is_error() {
        for json in [
            r#"{"data":{"attributes":{"ohlcv_list":[]}}}"#,
            r#"{"data":{"attributes":{}}}"#,
            r#"{"data":null}"#,
            r#"{}"#,
        ] {
            let err = Vec::<PriceBar>::try_from(gecko(json)).unwrap_err();
            assert!(matches!(err, DexVisionError::Validation(ref m) if m.contains("No OHLCV")), "{json}");
        }
    }

    #[test]
    fn test_gecko_weekly_rollup() {
        let bars = gecko_bars(gecko_daily(10), Timeframe::Week1).unwrap();
        assert_eq!(bars.len(), 2);

        let first = bars[0];
        assert_eq!(first.time, 1_704_067_200);
        assert_eq!(first.open, 10.0);
        assert_eq!(first.close, 17.0);
        assert_eq!(first.high, 18.0);
        assert_eq!(first.low, 9.0);
        assert_eq!(first.volume, 700.0);

        // Trailing partial week.
        let rest = bars[1];
        assert_eq!(rest.time, 1_704_067_200 + 7 * DAY);
        assert_eq!(rest.open, 17.0);
        assert_eq!(rest.close, 20.0);
        assert_eq!(rest.volume, 300.0);
    }

    #[test]
    fn test_gecko_daily_is_not_rolled_up() {
        let bars = gecko_bars(gecko_daily(10), Timeframe::Day1).unwrap();
        assert_eq!(bars.len(), 10);
        assert!(bars.windows(2).all(|w| w[1].time - w[0].time == DAY));
    }

    #[test]
    fn test_paprika_time_open_to_unix_seconds() {
        let resp: PaprikaOhlcvResponse = serde_json::from_str(
            r#"[
                {"time_open":"2024-03-01T00:00:00Z","time_close":"2024-03-01T01:00:00Z",
                 "open":1.5,"high":1.8,"low":1.4,"close":1.7,"volume":2500},
                {"time_open":"2024-03-01T01:00:00.750+00:00",
                 "open":1.7,"high":1.9,"low":1.6,"close":1.65,"volume":1800}
            ]"#,
        )
        .unwrap();
        let bars = Vec::<PriceBar>::try_from(resp).unwrap();
        assert_eq!(bars[0].time, 1_709_251_200);
        assert_eq!(bars[1].time, 1_709_254_800);
        assert_eq!(bars[1].close, 1.65);
    }

    #[test]
    fn test_paprika_date_only_and_offsets() {
        assert_eq!(parse_time_open("2024-03-01").unwrap(), 1_709_251_200);
        assert_eq!(parse_time_open("2024-03-01T02:00:00+02:00").unwrap(), 1_709_251_200);
    }

    #[test]
    fn test_paprika_bad_time_is_error() {
        let resp = PaprikaOhlcvResponse(vec![PaprikaOhlcvBar {
            time_open: "yesterday".to_string(),
            ..Default::default()
        }]);
        let err = Vec::<PriceBar>::try_from(resp).unwrap_err();
        assert!(matches!(err, DexVisionError::Validation(ref m) if m.contains("time_open")));
    }
}
