//! Cell properties and the bond-aware cell entity

pub mod entity;
pub mod properties;

pub use entity::Cell;
pub use properties::CellProperties;
