//! # dex-vision
//!
//! Core of a DEX pair dashboard: pair models, deterministic synthetic price
//! charts, and the client-side stores the UI persists.
//!
//! ## Architecture
//!
//! 1. **Shared** — Newtypes (`ChainId`, `PairAddress`), `Timeframe`, chain table
//! 2. **Domain** — Vertical slices: `chart` (generator + PRNG + aggregation),
//!    `pair` (DexScreener wire types → `Pair`), `ohlcv` (GeckoTerminal and
//!    DexPaprika candles → `PriceBar`), `favorites`, `chain`
//! 3. **Storage** — `KeyValueStorage` with in-memory and file backends
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dex_vision::prelude::*;
//!
//! let seed = seed_from_identifier("0x88e6A0c2dDD26FEEb64F039a2c41296FcB3f5640");
//! let bars = generate(3_412.5, 4.2, seed, Timeframe::Hour1);
//! assert_eq!(bars.len(), 72);
//!
//! let mut storage = FileStorage::new("./state");
//! let mut favorites = Favorites::load(&storage)?;
//! favorites.toggle(FavoriteItem::new("ethereum", "0x88e6...", "USDC/WETH"));
//! favorites.save(&mut storage)?;
//! ```

/// Shared newtypes, enums and tables used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Persistence backends for app-owned state.
pub mod storage;

/// Unified error types.
pub mod error;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared
    pub use crate::shared::{
        chain_info, gecko_network, ChainId, ChainInfo, PairAddress, Timeframe, SUPPORTED_CHAINS,
    };

    // Chart
    pub use crate::domain::chart::{
        aggregate, aggregate_weekly, generate, generate_series, generate_with, seed_from_identifier,
        GeneratorConfig, Lcg, PriceBar, SeriesRequest,
    };

    // OHLCV
    pub use crate::domain::ohlcv::{gecko_bars, GeckoQuery};

    // Pair
    pub use crate::domain::pair::{Pair, Token};

    // Stores
    pub use crate::domain::chain::ChainSelection;
    pub use crate::domain::favorites::{FavoriteItem, Favorites};

    // Storage
    pub use crate::storage::{FileStorage, KeyValueStorage, MemoryStorage};

    // Errors
    pub use crate::error::{DexVisionError, StorageError};
}
