//! Bond-aware cell entity
//!
//! A `Cell` extends its properties with grid coordinates and a set of
//! bonded peers. Bonds are undirected and symmetric; symmetry is maintained
//! by the world arena, which owns both endpoints. The bond set is stored as
//! an insertion-ordered `Vec` (practically small, at most one per neighbor
//! direction) so that per-tick candidate iteration stays deterministic
//! under a fixed seed.

use crate::cell::properties::CellProperties;
use crate::core::types::CellId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cell {
    pub id: CellId,
    pub props: CellProperties,
    pub x: usize,
    pub y: usize,
    bonds: Vec<CellId>,
}

impl Cell {
    pub(crate) fn new(id: CellId, props: CellProperties, x: usize, y: usize) -> Self {
        Self {
            id,
            props,
            x,
            y,
            bonds: Vec::new(),
        }
    }

    /// Bonded peers in bond-creation order
    pub fn bonds(&self) -> &[CellId] {
        &self.bonds
    }

    pub fn is_bonded_to(&self, other: CellId) -> bool {
        self.bonds.contains(&other)
    }

    /// One half of a symmetric bond; duplicate adds are no-ops
    pub(crate) fn add_bond(&mut self, other: CellId) {
        if !self.bonds.contains(&other) {
            self.bonds.push(other);
        }
    }

    /// One half of a symmetric bond removal; absent bonds are no-ops
    pub(crate) fn remove_bond(&mut self, other: CellId) {
        self.bonds.retain(|&id| id != other);
    }

    /// Short human-readable label, e.g. "a1"
    pub fn label(&self) -> String {
        self.props.label()
    }
}
