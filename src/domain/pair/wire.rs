//! Wire types for DexScreener pair responses.
//!
//! DexScreener omits fields freely (new pairs have no `liquidity`, some chains
//! no `priceUsd`), so everything outside the identifiers is optional or defaulted.

use crate::shared::{ChainId, PairAddress};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub address: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: String,
}

/// Rolling-window figures keyed `m5`/`h1`/`h6`/`h24`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WindowStats {
    #[serde(default)]
    pub m5: Option<f64>,
    #[serde(default)]
    pub h1: Option<f64>,
    #[serde(default)]
    pub h6: Option<f64>,
    #[serde(default)]
    pub h24: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LiquidityResponse {
    #[serde(default)]
    pub usd: Option<f64>,
    #[serde(default)]
    pub base: Option<f64>,
    #[serde(default)]
    pub quote: Option<f64>,
}

/// One pair as returned by `/latest/dex/pairs`, `/latest/dex/search` and `/tokens/v1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairResponse {
    pub chain_id: ChainId,
    #[serde(default)]
    pub dex_id: String,
    pub pair_address: PairAddress,
    pub base_token: TokenResponse,
    pub quote_token: TokenResponse,
    #[serde(default)]
    pub price_native: Option<String>,
    #[serde(default)]
    pub price_usd: Option<String>,
    #[serde(default)]
    pub volume: WindowStats,
    #[serde(default)]
    pub price_change: WindowStats,
    #[serde(default)]
    pub liquidity: Option<LiquidityResponse>,
    #[serde(default)]
    pub fdv: Option<f64>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    /// Milliseconds since the epoch.
    #[serde(default)]
    pub pair_created_at: Option<i64>,
}

/// Envelope of the `/latest/dex/*` endpoints. `pairs` is `null` when nothing matched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PairsResponse {
    #[serde(default)]
    pub pairs: Option<Vec<PairResponse>>,
}
