//! Favorites state container — app-owned, persisted explicitly.

use super::{FavoriteItem, FAVORITES_STORAGE_KEY};
use crate::error::DexVisionError;
use crate::shared::PairAddress;
use crate::storage::{load_state, save_state, KeyValueStorage};
use serde::{Deserialize, Serialize};

const VERSION: u32 = 0;

/// Starred pairs in the order they were added.
///
/// The app owns instances of this type and decides when to save.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Favorites {
    favorites: Vec<FavoriteItem>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from storage; an absent key yields an empty list.
    pub fn load<S: KeyValueStorage + ?Sized>(storage: &S) -> Result<Self, DexVisionError> {
        Ok(load_state(storage, FAVORITES_STORAGE_KEY)?.unwrap_or_default())
    }

    pub fn save<S: KeyValueStorage + ?Sized>(&self, storage: &mut S) -> Result<(), DexVisionError> {
        save_state(storage, FAVORITES_STORAGE_KEY, self, VERSION)
    }

    /// Star a pair. Returns `false` if its address was already starred.
    pub fn add(&mut self, item: FavoriteItem) -> bool {
        if self.is_favorite(&item.pair_address) {
            return false;
        }
        self.favorites.push(item);
        true
    }

    /// Unstar by address. Returns `false` if it was not starred.
    pub fn remove(&mut self, pair_address: &PairAddress) -> bool {
        let before = self.favorites.len();
        self.favorites.retain(|f| &f.pair_address != pair_address);
        self.favorites.len() != before
    }

    /// Star if absent, unstar if present. Returns the new starred state.
    pub fn toggle(&mut self, item: FavoriteItem) -> bool {
        if self.remove(&item.pair_address) {
            false
        } else {
            self.add(item)
        }
    }

    pub fn is_favorite(&self, pair_address: &PairAddress) -> bool {
        self.favorites.iter().any(|f| &f.pair_address == pair_address)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FavoriteItem> {
        self.favorites.iter()
    }

    pub fn clear(&mut self) {
        self.favorites.clear();
    }

    pub fn len(&self) -> usize {
        self.favorites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }
}
