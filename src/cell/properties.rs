//! Typed, stateful cell properties
//!
//! A cell has an immutable type identity, a mutable discrete state in
//! `0..MAX_STATES`, and a counter of ticks elapsed since the state last
//! changed. Construction validates both ranges; a cell that cannot satisfy
//! its invariants is never created.

use crate::core::error::{Result, SimError};
use crate::core::types::{CellType, MAX_STATES};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellProperties {
    kind: CellType,
    state: u16,
    ticks_since_state_change: u64,
}

impl CellProperties {
    pub fn new(kind: CellType, state: u16) -> Result<Self> {
        if state >= MAX_STATES {
            return Err(SimError::OutOfRange(format!(
                "cell state {state} not in 0..{MAX_STATES}"
            )));
        }
        Ok(Self {
            kind,
            state,
            ticks_since_state_change: 0,
        })
    }

    /// Construct from a raw type index, validating the range
    pub fn from_index(type_index: usize, state: u16) -> Result<Self> {
        Self::new(CellType::from_index(type_index)?, state)
    }

    pub fn kind(&self) -> CellType {
        self.kind
    }

    pub fn state(&self) -> u16 {
        self.state
    }

    /// Ticks elapsed since the state last changed
    pub fn age(&self) -> u64 {
        self.ticks_since_state_change
    }

    /// Advance the age counter by one tick
    pub(crate) fn bump_age(&mut self) {
        self.ticks_since_state_change += 1;
    }

    /// Set the state, resetting the age counter only on an actual change
    ///
    /// Writing the current value back is a no-op and leaves the counter
    /// untouched.
    pub fn set_state(&mut self, state: u16) -> Result<()> {
        if state >= MAX_STATES {
            return Err(SimError::OutOfRange(format!(
                "cell state {state} not in 0..{MAX_STATES}"
            )));
        }
        if self.state != state {
            self.state = state;
            self.ticks_since_state_change = 0;
        }
        Ok(())
    }

    pub fn is_kind(&self, kind: CellType) -> bool {
        self.kind == kind
    }

    /// Mnemonic-character form of `is_kind`
    pub fn is_kind_mnemonic(&self, c: char) -> Result<bool> {
        Ok(self.kind == CellType::from_mnemonic(c)?)
    }

    pub fn is_state(&self, state: u16) -> bool {
        self.state == state
    }

    pub fn is_kind_and_state(&self, kind: CellType, state: u16) -> bool {
        self.is_kind(kind) && self.is_state(state)
    }

    /// Mnemonic-character form of `is_kind_and_state`
    pub fn is_kind_and_state_mnemonic(&self, c: char, state: u16) -> Result<bool> {
        Ok(self.is_kind_mnemonic(c)? && self.is_state(state))
    }

    /// Short human-readable label, e.g. "a1"
    pub fn label(&self) -> String {
        format!("{}{}", self.kind.mnemonic(), self.state)
    }
}
