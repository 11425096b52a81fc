//! Stable indexing of component keys.
//!
//! Provides a bidirectional mapping between component keys and contiguous
//! positions (0..N) in insertion order.

use std::collections::HashMap;

use td_core::ComponentKey;

/// Index map from component key to insertion position and back.
///
/// Provides O(1) lookup in both directions. Positions never change once
/// assigned, which is what keeps emission order deterministic.
#[derive(Debug, Clone, Default)]
pub struct KeyIndex {
    /// Contiguous list of keys (position -> key).
    keys: Vec<ComponentKey>,

    /// Reverse lookup: key -> position.
    positions: HashMap<ComponentKey, usize>,
}

impl KeyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a key and return its position.
    ///
    /// Returns `Err` with the existing position if the key is already indexed;
    /// the index is left unchanged in that case.
    pub fn insert(&mut self, key: ComponentKey) -> Result<usize, usize> {
        if let Some(&existing) = self.positions.get(&key) {
            return Err(existing);
        }
        let pos = self.keys.len();
        self.positions.insert(key.clone(), pos);
        self.keys.push(key);
        Ok(pos)
    }

    /// Position of a key, if indexed.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.positions.get(key).copied()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.positions.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// All keys in insertion order.
    pub fn keys(&self) -> &[ComponentKey] {
        &self.keys
    }
}
