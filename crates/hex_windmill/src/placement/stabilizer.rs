//! Session-to-session position smoothing.
//!
//! A placement pass can move an item's slot index arbitrarily far when its
//! usage data changes. [`PositionStabilizer`] bounds that motion: each
//! item's committed index may drift at most a fixed number of slots per
//! pass. The committed map persists across passes through a
//! [`PositionStore`] collaborator.
use std::collections::HashMap;

use crate::error::Result;
use crate::placement::ItemKey;

/// Maximum slots an item may move per pass by default.
pub const DEFAULT_MAX_SHIFT: usize = 2;

/// Persistence seam for the committed position map. Implementations own the
/// storage format; the map is opaque to this crate.
pub trait PositionStore {
    /// Loads the position map stored under the namespace, empty if absent.
    fn load(&self, namespace: &str) -> Result<HashMap<ItemKey, usize>>;

    /// Replaces the position map stored under the namespace.
    fn save(&mut self, namespace: &str, positions: &HashMap<ItemKey, usize>) -> Result<()>;
}

/// In-memory [`PositionStore`] for tests and demos.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    namespaces: HashMap<String, HashMap<ItemKey, usize>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PositionStore for MemoryStore {
    fn load(&self, namespace: &str) -> Result<HashMap<ItemKey, usize>> {
        Ok(self.namespaces.get(namespace).cloned().unwrap_or_default())
    }

    fn save(&mut self, namespace: &str, positions: &HashMap<ItemKey, usize>) -> Result<()> {
        self.namespaces
            .insert(namespace.to_owned(), positions.clone());
        Ok(())
    }
}

/// Bounds per-pass slot index drift and tracks committed indices.
#[derive(Clone, Debug)]
pub struct PositionStabilizer {
    max_shift: usize,
    positions: HashMap<ItemKey, usize>,
}

impl Default for PositionStabilizer {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionStabilizer {
    /// Creates a stabilizer with the default drift bound.
    pub fn new() -> Self {
        Self::with_max_shift(DEFAULT_MAX_SHIFT)
    }

    /// Creates a stabilizer with a custom drift bound.
    pub fn with_max_shift(max_shift: usize) -> Self {
        Self {
            max_shift,
            positions: HashMap::new(),
        }
    }

    /// Creates a stabilizer seeded from the store's persisted map.
    pub fn load_from(store: &dyn PositionStore, namespace: &str) -> Result<Self> {
        Ok(Self {
            max_shift: DEFAULT_MAX_SHIFT,
            positions: store.load(namespace)?,
        })
    }

    /// Drift bound in slots per pass.
    pub fn max_shift(&self) -> usize {
        self.max_shift
    }

    /// Computes the committed index for an item given the raw target index
    /// the ranking produced, and records it for the next pass.
    ///
    /// An item never seen before commits at its raw target. Otherwise the
    /// committed index is the previous one moved toward the target by at
    /// most the drift bound.
    pub fn adjust(&mut self, key: &str, raw_target: usize) -> usize {
        let previous = self.positions.get(key).copied().unwrap_or(raw_target);
        let bound = self.max_shift as i64;
        let delta = (raw_target as i64 - previous as i64).clamp(-bound, bound);
        let committed = (previous as i64 + delta) as usize;
        self.positions.insert(key.to_owned(), committed);
        committed
    }

    /// Last committed index for an item, if tracked.
    pub fn get(&self, key: &str) -> Option<usize> {
        self.positions.get(key).copied()
    }

    /// Persists the committed map to the store.
    pub fn commit(&self, store: &mut dyn PositionStore, namespace: &str) -> Result<()> {
        store.save(namespace, &self.positions)
    }

    /// Clears all tracked indices.
    pub fn reset(&mut self) {
        self.positions.clear();
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
