//! Shared newtypes and tables used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw strings the DEX APIs and the persisted stores use, so they can be
//! used directly in wire types without conversion overhead.

pub mod chains;

pub use chains::{chain_info, gecko_network, is_supported_chain, ChainInfo, SUPPORTED_CHAINS};

use crate::error::DexVisionError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── ChainId ─────────────────────────────────────────────────────────────────

/// Newtype for DexScreener-style chain identifiers (e.g. `"ethereum"`, `"solana"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChainId(String);

impl ChainId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this chain appears in [`SUPPORTED_CHAINS`].
    pub fn is_supported(&self) -> bool {
        is_supported_chain(&self.0)
    }

    /// GeckoTerminal network slug for this chain.
    pub fn gecko_network(&self) -> &str {
        gecko_network(&self.0)
    }
}

impl std::fmt::Display for ChainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ChainId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ChainId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Serialize for ChainId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ChainId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(ChainId(s))
    }
}

// ─── PairAddress ─────────────────────────────────────────────────────────────

/// A pair (pool) contract address as the API reports it.
///
/// Kept verbatim: EVM addresses are hex, Solana addresses are base58, and the
/// seed derivation depends on the exact characters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PairAddress(String);

impl PairAddress {
    pub fn new(s: &str) -> Self {
        Self(s.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Stable PRNG seed for synthetic charts of this pair.
    pub fn seed(&self) -> u32 {
        crate::domain::chart::seed_from_identifier(&self.0)
    }
}

impl std::fmt::Display for PairAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for PairAddress {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for PairAddress {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl Serialize for PairAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for PairAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(PairAddress(s))
    }
}

// ─── Timeframe ───────────────────────────────────────────────────────────────

/// Candle width offered by the chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "5m")]
    Minute5,
    #[serde(rename = "15m")]
    Minute15,
    #[default]
    #[serde(rename = "1h")]
    Hour1,
    #[serde(rename = "4h")]
    Hour4,
    #[serde(rename = "1d")]
    Day1,
    #[serde(rename = "1w")]
    Week1,
}

/// Synthetic series shape for one [`Timeframe`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeframeSpec {
    /// Number of bars generated.
    pub bar_count: usize,
    /// Spacing between consecutive bars, in seconds.
    pub interval_secs: u64,
    /// Per-bar noise amplitude as a fraction of the current price.
    pub volatility: f64,
}

impl Timeframe {
    pub const ALL: [Timeframe; 6] = [
        Self::Minute5,
        Self::Minute15,
        Self::Hour1,
        Self::Hour4,
        Self::Day1,
        Self::Week1,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minute5 => "5m",
            Self::Minute15 => "15m",
            Self::Hour1 => "1h",
            Self::Hour4 => "4h",
            Self::Day1 => "1d",
            Self::Week1 => "1w",
        }
    }

    /// Duration of one candle in seconds.
    pub fn seconds(&self) -> u64 {
        self.spec().interval_secs
    }

    pub fn spec(&self) -> TimeframeSpec {
        let (bar_count, interval_secs, volatility) = match self {
            Self::Minute5 => (96, 300, 0.002),
            Self::Minute15 => (96, 900, 0.004),
            Self::Hour1 => (72, 3_600, 0.008),
            Self::Hour4 => (60, 14_400, 0.015),
            Self::Day1 => (30, 86_400, 0.03),
            Self::Week1 => (52, 604_800, 0.06),
        };
        TimeframeSpec {
            bar_count,
            interval_secs,
            volatility,
        }
    }

    /// Parse a key the caller controls statically.
    ///
    /// # Panics
    ///
    /// Panics on a key outside `5m`, `15m`, `1h`, `4h`, `1d`, `1w`. Use
    /// [`str::parse`] for untrusted input.
    pub fn from_key(key: &str) -> Self {
        match key.parse() {
            Ok(tf) => tf,
            Err(e) => panic!("{e}"),
        }
    }
}

impl FromStr for Timeframe {
    type Err = DexVisionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tf| tf.as_str() == s)
            .ok_or_else(|| DexVisionError::InvalidTimeframe(s.to_string()))
    }
}

impl std::fmt::Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
