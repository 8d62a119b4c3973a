//! Tick system - orchestrates one simulation step
//!
//! Each tick walks the live cells in creation order, first giving every
//! cell a chance to move, then invoking the chemistry engine per cell
//! against its neighborhood. A fault raised for one cell is recorded as the
//! world's last error and the sweep continues; a single cell must never
//! halt the simulation.
//!
//! Returns a list of events that occurred during this tick for display in
//! a shell's action log.

use crate::chemistry::{BondChange, Chemistry};
use crate::core::types::{CellType, Tick};
use crate::world::World;
use rand_chacha::ChaCha8Rng;

/// Events generated during a simulation tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulationEvent {
    /// A reaction created a bond between two cells
    BondMade {
        us: CellType,
        them: CellType,
        tick: Tick,
    },
    /// A reaction broke the bond between two cells
    BondBroken {
        us: CellType,
        them: CellType,
        tick: Tick,
    },
    /// A reaction rewrote states without touching the bond
    Reacted {
        us: CellType,
        them: CellType,
        tick: Tick,
    },
    /// A recoverable per-cell fault; the sweep continued
    Fault { message: String, tick: Tick },
}

/// Run a single simulation tick
///
/// Movement first, in stable creation order, then reactions per cell.
/// Age counters advance once per sweep and the tick counter increments at
/// the end. Never fails: per-cell faults become `Fault` events plus the
/// world's last-error record.
pub fn run_simulation_tick(
    world: &mut World,
    chemistry: &Chemistry,
    rng: &mut ChaCha8Rng,
) -> Vec<SimulationEvent> {
    let mut events = Vec::new();
    let tick = world.current_tick;
    let ids: Vec<_> = world.ids().collect();

    world.bump_ages();

    // movement sweep
    for &id in &ids {
        if let Err(e) = world.move_cell_randomly(id, rng) {
            let message = format!("move failed for {id:?}: {e}");
            tracing::warn!("{message}");
            world.record_fault(&message);
            events.push(SimulationEvent::Fault { message, tick });
        }
    }

    // reaction sweep
    for &id in &ids {
        match chemistry.react(world, id) {
            Ok(Some(applied)) => {
                let event = match applied.bond {
                    BondChange::Made => SimulationEvent::BondMade {
                        us: applied.us_kind,
                        them: applied.them_kind,
                        tick,
                    },
                    BondChange::Broken => SimulationEvent::BondBroken {
                        us: applied.us_kind,
                        them: applied.them_kind,
                        tick,
                    },
                    BondChange::Unchanged => SimulationEvent::Reacted {
                        us: applied.us_kind,
                        them: applied.them_kind,
                        tick,
                    },
                };
                events.push(event);
            }
            Ok(None) => {}
            Err(e) => {
                let message = format!("reaction failed for {id:?}: {e}");
                tracing::warn!("{message}");
                world.record_fault(&message);
                events.push(SimulationEvent::Fault { message, tick });
            }
        }
    }

    world.tick();
    events
}
