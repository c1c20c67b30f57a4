//! Conversions from wire types to domain types for pairs.

use super::wire::{PairResponse, TokenResponse};
use super::{Pair, Token};
use crate::error::DexVisionError;
use chrono::TimeZone;

impl From<TokenResponse> for Token {
    fn from(t: TokenResponse) -> Self {
        Self {
            address: t.address,
            name: t.name,
            symbol: t.symbol,
        }
    }
}

/// Absent prices read as zero ("no price data"); present but garbled ones are rejected.
fn parse_price(field: &str, raw: Option<&str>) -> Result<f64, DexVisionError> {
    match raw {
        None => Ok(0.0),
        Some(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| DexVisionError::Validation(format!("{field}: not a number: {s:?}"))),
    }
}

impl TryFrom<PairResponse> for Pair {
    type Error = DexVisionError;

    fn try_from(p: PairResponse) -> Result<Self, Self::Error> {
        let price_usd = parse_price("priceUsd", p.price_usd.as_deref())?;
        let price_native = parse_price("priceNative", p.price_native.as_deref())?;

        Ok(Self {
            chain_id: p.chain_id,
            dex_id: p.dex_id,
            pair_address: p.pair_address,
            base_token: p.base_token.into(),
            quote_token: p.quote_token.into(),
            price_usd,
            price_native,
            price_change_24h: p.price_change.h24.unwrap_or_default(),
            volume_24h: p.volume.h24.unwrap_or_default(),
            liquidity_usd: p.liquidity.and_then(|l| l.usd).unwrap_or_default(),
            fdv: p.fdv,
            market_cap: p.market_cap,
            created_at: p
                .pair_created_at
                .and_then(|ms| chrono::Utc.timestamp_millis_opt(ms).single()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pair::wire::PairsResponse;
    use crate::shared::Timeframe;

    const SAMPLE: &str = r#"{
        "chainId": "ethereum",
        "dexId": "uniswap",
        "pairAddress": "0x88e6A0c2dDD26FEEb64F039a2c41296FcB3f5640",
        "baseToken": { "address": "0xA0b8", "name": "USD Coin", "symbol": "USDC" },
        "quoteToken": { "address": "0xC02a", "name": "Wrapped Ether", "symbol": "WETH" },
        "priceNative": "0.0003012",
        "priceUsd": "1.0001",
        "volume": { "h1": 1200.5, "h6": 8000, "h24": 45000000 },
        "priceChange": { "m5": 0, "h1": 0.01, "h6": -0.02, "h24": 0.05 },
        "liquidity": { "usd": 150000000, "base": 75000000, "quote": 25000 },
        "fdv": 1000000,
        "pairCreatedAt": 1620250931000
    }"#;

    #[test]
    fn test_pair_conversion() {
        let wire: PairResponse = serde_json::from_str(SAMPLE).unwrap();
        let pair = Pair::try_from(wire).unwrap();
        assert_eq!(pair.chain_id.as_str(), "ethereum");
        assert_eq!(pair.symbol(), "USDC/WETH");
        assert_eq!(pair.price_usd, 1.0001);
        assert_eq!(pair.price_change_24h, 0.05);
        assert_eq!(pair.volume_24h, 45_000_000.0);
        assert_eq!(pair.liquidity_usd, 150_000_000.0);
        assert_eq!(pair.market_cap, None);
        assert_eq!(pair.created_at.unwrap().timestamp(), 1_620_250_931);
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let json = r#"{
            "chainId": "solana",
            "pairAddress": "So11111111111111111111111111111111111111112",
            "baseToken": { "address": "a", "symbol": "SOL" },
            "quoteToken": { "address": "b", "symbol": "USDC" }
        }"#;
        let pair = Pair::try_from(serde_json::from_str::<PairResponse>(json).unwrap()).unwrap();
        assert_eq!(pair.price_usd, 0.0);
        assert_eq!(pair.volume_24h, 0.0);
        assert_eq!(pair.liquidity_usd, 0.0);
        assert!(pair.created_at.is_none());
        assert!(pair.synthetic_chart(Timeframe::Hour1).is_empty());
    }

    #[test]
    fn test_garbled_price_rejected() {
        let mut wire: PairResponse = serde_json::from_str(SAMPLE).unwrap();
        wire.price_usd = Some("n/a".to_string());
        let err = Pair::try_from(wire).unwrap_err();
        assert!(matches!(err, DexVisionError::Validation(ref m) if m.contains("priceUsd")));
    }

    #[test]
    fn test_series_request_from_pair() {
        let pair = Pair::try_from(serde_json::from_str::<PairResponse>(SAMPLE).unwrap()).unwrap();
        let req = pair.series_request(Timeframe::Hour4);
        assert_eq!(req.current_price, 1.0001);
        assert_eq!(req.change_24h, 0.05);
        assert_eq!(req.volume_24h, 45_000_000.0);
        assert_eq!(req.seed, pair.pair_address.seed());
        assert_eq!(req.timeframe, Timeframe::Hour4);
    }

    #[test]
    fn test_favorite_from_pair() {
        let pair = Pair::try_from(serde_json::from_str::<PairResponse>(SAMPLE).unwrap()).unwrap();
        let fav = crate::domain::favorites::FavoriteItem::from(&pair);
        assert_eq!(fav.symbol, "USDC/WETH");
        assert_eq!(fav.pair_address, pair.pair_address);
    }

    #[test]
    fn test_null_pairs_envelope() {
        let resp: PairsResponse = serde_json::from_str(r#"{"schemaVersion":"1.0.0","pairs":null}"#).unwrap();
        assert!(resp.pairs.is_none());
    }
}
