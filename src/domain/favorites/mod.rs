//! Favorites domain — pairs the user starred.

pub mod state;

use crate::shared::{ChainId, PairAddress};
use serde::{Deserialize, Serialize};

pub use state::Favorites;

/// Storage key, shared with the browser build.
pub const FAVORITES_STORAGE_KEY: &str = "dex-vision-favorites";

/// A starred pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteItem {
    pub chain_id: ChainId,
    pub pair_address: PairAddress,
    /// `BASE/QUOTE`, captured when starred.
    pub symbol: String,
}

impl FavoriteItem {
    pub fn new(chain_id: impl Into<ChainId>, pair_address: impl Into<PairAddress>, symbol: impl Into<String>) -> Self {
        Self {
            chain_id: chain_id.into(),
            pair_address: pair_address.into(),
            symbol: symbol.into(),
        }
    }
}

impl From<&crate::domain::pair::Pair> for FavoriteItem {
    fn from(pair: &crate::domain::pair::Pair) -> Self {
        Self {
            chain_id: pair.chain_id.clone(),
            pair_address: pair.pair_address.clone(),
            symbol: pair.symbol(),
        }
    }
}
