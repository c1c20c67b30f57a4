//! Chain filter — the chain the pair table is narrowed to, if any.

use crate::error::DexVisionError;
use crate::shared::ChainId;
use crate::storage::{load_state, save_state, KeyValueStorage};
use serde::{Deserialize, Serialize};

/// Storage key, shared with the browser build.
pub const CHAIN_STORAGE_KEY: &str = "dex-vision-chain";

const VERSION: u32 = 0;

/// Selected chain; `None` shows all chains.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainSelection {
    selected_chain: Option<ChainId>,
}

impl ChainSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from storage. A persisted chain that is no longer supported is dropped.
    pub fn load<S: KeyValueStorage + ?Sized>(storage: &S) -> Result<Self, DexVisionError> {
        let mut selection: Self = load_state(storage, CHAIN_STORAGE_KEY)?.unwrap_or_default();
        if let Some(chain) = selection.selected_chain.take() {
            if chain.is_supported() {
                selection.selected_chain = Some(chain);
            } else {
                tracing::warn!("Dropping unsupported persisted chain {}", chain);
            }
        }
        Ok(selection)
    }

    pub fn save<S: KeyValueStorage + ?Sized>(&self, storage: &mut S) -> Result<(), DexVisionError> {
        save_state(storage, CHAIN_STORAGE_KEY, self, VERSION)
    }

    pub fn selected(&self) -> Option<&ChainId> {
        self.selected_chain.as_ref()
    }

    pub fn select(&mut self, chain: impl Into<ChainId>) -> Result<(), DexVisionError> {
        let chain = chain.into();
        if !chain.is_supported() {
            return Err(DexVisionError::Validation(format!("unsupported chain: {chain}")));
        }
        self.selected_chain = Some(chain);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.selected_chain = None;
    }

    /// Whether a pair on `chain` passes the filter.
    pub fn matches(&self, chain: &ChainId) -> bool {
        self.selected_chain.as_ref().map_or(true, |c| c == chain)
    }
}
