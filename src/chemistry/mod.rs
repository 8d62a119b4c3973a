//! Reaction rules and the chemistry engine

pub mod catalog;
pub mod engine;
pub mod reaction;

pub use engine::{Applied, BondChange, Chemistry};
pub use reaction::{Reaction, ThemPattern, UsPattern};
