use thiserror::Error;

use crate::core::types::CellId;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("out of range: {0}")]
    OutOfRange(String),

    #[error("unknown cell type mnemonic: {0:?}")]
    UnknownType(char),

    #[error("slot ({x}, {y}) is occupied, cannot create cell there")]
    SlotOccupied { x: usize, y: usize },

    #[error("slot ({x}, {y}) is already occupied")]
    AlreadyOccupied { x: usize, y: usize },

    #[error("slot ({x}, {y}) has no occupant")]
    NoOccupant { x: usize, y: usize },

    #[error("coordinates ({x}, {y}) are outside the grid")]
    OutOfBounds { x: usize, y: usize },

    #[error("invalid grid dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid reaction rule: {0}")]
    InvalidRule(String),

    #[error("unexpected wildcard combination in reaction rule")]
    UnexpectedRuleShape,

    #[error("no cell with id {0:?}")]
    UnknownCell(CellId),

    #[error("cell {0:?} cannot bond with itself")]
    SelfBond(CellId),
}

pub type Result<T> = std::result::Result<T, SimError>;
