//! Protocell - Artificial Chemistry Simulation
//!
//! A 2-D grid of typed, stateful cells that move, bond, and react according
//! to a fixed rule set, producing emergent structures (membranes, chains)
//! from local interactions.

pub mod cell;
pub mod chemistry;
pub mod core;
pub mod render;
pub mod simulation;
pub mod world;
