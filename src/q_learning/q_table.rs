//! Action-value table for tabular Q-learning

use std::collections::HashMap;

use crate::{rover::Action, sensing::SensedState};

/// Q-table mapping (sensed state, action) pairs to action values
///
/// Keys compare and hash by value, so lookups cost O(1) expected time
/// however many pairs training has touched. An absent entry reads as 0.0:
/// an unvisited pair is neutral, never a missing-data error.
#[derive(Debug, Clone, Default)]
pub struct QTable {
    values: HashMap<(SensedState, Action), f64>,
}

impl QTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Get the value for a state-action pair, defaulting to 0.0.
    ///
    /// Does not materialize the entry; `len` is unchanged by reads.
    pub fn get(&self, state: SensedState, action: Action) -> f64 {
        *self.values.get(&(state, action)).unwrap_or(&0.0)
    }

    /// Set the value for a state-action pair
    pub fn set(&mut self, state: SensedState, action: Action, value: f64) {
        self.values.insert((state, action), value);
    }

    /// Maximum value over all actions in a state.
    ///
    /// Materializes any absent entry at 0.0 first, so after this call the
    /// table holds a value for every action in `state` and `get` agrees
    /// with the returned maximum.
    pub fn max_over(&mut self, state: SensedState) -> f64 {
        Action::ALL
            .iter()
            .map(|&action| *self.values.entry((state, action)).or_insert(0.0))
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over stored entries
    pub fn iter(&self) -> impl Iterator<Item = (SensedState, Action, f64)> + '_ {
        self.values
            .iter()
            .map(|(&(state, action), &value)| (state, action, value))
    }
}
