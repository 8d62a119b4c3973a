//! Immutable reaction rule: one condition/effect mapping
//!
//! A rule matches a cell ("us") and one neighbor ("them") and rewrites
//! their states, optionally making or breaking the bond between them.
//! Rules are validated when loaded and never mutated by the engine.

use crate::core::error::{Result, SimError};
use crate::core::types::{CellType, MAX_STATES};
use serde::{Deserialize, Serialize};

/// Type pattern for the "us" side of a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UsPattern {
    Kind(CellType),
    /// Matches any kind; only the state is checked (`x` in rule notation)
    Any,
}

/// Type pattern for the "them" side of a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemPattern {
    Kind(CellType),
    /// Matches the same kind as the "us" cell; only valid when the us side
    /// is the any-wildcard (`x` paired with us-`x` in rule notation)
    SameAsUs,
    /// Matches any kind; only the state is checked (`y`, or `x` when the us
    /// side is concrete)
    Any,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reaction {
    pub us: UsPattern,
    pub us_state: u16,
    pub bonded_required: bool,
    pub them: ThemPattern,
    pub them_state: u16,
    pub next_us_state: u16,
    pub bonded_result: bool,
    pub next_them_state: u16,
}

impl Reaction {
    /// Build a rule from mnemonic notation, validating at load time
    ///
    /// `us` is one of `e f a b c d x`; `them` is one of `e f a b c d x y`.
    /// `x` on the them side means "same kind as us" when us is also `x`,
    /// otherwise "any kind"; `y` always means "any kind".
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        us: char,
        us_state: u16,
        bonded_required: bool,
        them: char,
        them_state: u16,
        next_us_state: u16,
        bonded_result: bool,
        next_them_state: u16,
    ) -> Result<Self> {
        let us_pattern = match us {
            'x' => UsPattern::Any,
            c => UsPattern::Kind(
                CellType::from_mnemonic(c)
                    .map_err(|_| SimError::InvalidRule(format!("invalid us_type {c:?}")))?,
            ),
        };

        let them_pattern = match them {
            'y' => ThemPattern::Any,
            'x' => {
                if us_pattern == UsPattern::Any {
                    ThemPattern::SameAsUs
                } else {
                    ThemPattern::Any
                }
            }
            c => ThemPattern::Kind(
                CellType::from_mnemonic(c)
                    .map_err(|_| SimError::InvalidRule(format!("invalid them_type {c:?}")))?,
            ),
        };

        let reaction = Self {
            us: us_pattern,
            us_state,
            bonded_required,
            them: them_pattern,
            them_state,
            next_us_state,
            bonded_result,
            next_them_state,
        };
        reaction.validate()?;
        Ok(reaction)
    }

    /// Load-time validation: states in range, wildcard shape consistent
    pub fn validate(&self) -> Result<()> {
        for (name, state) in [
            ("us_state", self.us_state),
            ("them_state", self.them_state),
            ("next_us_state", self.next_us_state),
            ("next_them_state", self.next_them_state),
        ] {
            if state >= MAX_STATES {
                return Err(SimError::InvalidRule(format!(
                    "{name} {state} not in 0..{MAX_STATES}"
                )));
            }
        }

        if self.them == ThemPattern::SameAsUs && self.us != UsPattern::Any {
            return Err(SimError::UnexpectedRuleShape);
        }

        Ok(())
    }
}
