//! Chemistry engine: ordered rule set and first-match application
//!
//! For one candidate cell the rules are tried in list order; the first rule
//! that finds an eligible partner is applied and the remaining rules for
//! that cell are skipped this tick. Matching is purely local: the candidate
//! pool is either the cell's bonded peers or its 8-connected occupied
//! neighbors, and geometric eligibility prevents reactions from reaching
//! through a bonded diagonal pair.

use crate::chemistry::reaction::{Reaction, ThemPattern, UsPattern};
use crate::core::error::Result;
use crate::core::types::{CellId, CellType};
use crate::world::World;

/// How an applied reaction changed the bond between the pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BondChange {
    Made,
    Broken,
    Unchanged,
}

/// Record of one applied reaction, for diagnostics
#[derive(Debug, Clone, Copy)]
pub struct Applied {
    pub us: CellId,
    pub them: CellId,
    pub us_kind: CellType,
    pub them_kind: CellType,
    pub bond: BondChange,
}

#[derive(Debug, Default)]
pub struct Chemistry {
    reactions: Vec<Reaction>,
}

impl Chemistry {
    pub fn new() -> Self {
        Self {
            reactions: Vec::new(),
        }
    }

    /// Chemistry loaded with the fixed startup rule set
    pub fn with_default_rules() -> Result<Self> {
        let mut chemistry = Self::new();
        for reaction in crate::chemistry::catalog::default_reactions()? {
            chemistry.add_reaction(reaction)?;
        }
        Ok(chemistry)
    }

    /// Append a rule; rules are matched in insertion order
    pub fn add_reaction(&mut self, reaction: Reaction) -> Result<()> {
        reaction.validate()?;
        self.reactions.push(reaction);
        Ok(())
    }

    pub fn clear_reactions(&mut self) {
        self.reactions.clear();
    }

    pub fn reaction_count(&self) -> usize {
        self.reactions.len()
    }

    /// Try every rule in order against one cell; apply the first that finds
    /// an eligible partner and stop.
    pub fn react(&self, world: &mut World, id: CellId) -> Result<Option<Applied>> {
        for reaction in &self.reactions {
            if let Some(applied) = self.try_reaction(world, id, reaction)? {
                return Ok(Some(applied));
            }
        }
        Ok(None)
    }

    fn try_reaction(
        &self,
        world: &mut World,
        id: CellId,
        reaction: &Reaction,
    ) -> Result<Option<Applied>> {
        let (us_kind, us_pos, bonded_peers) = {
            let cell = world.cell(id)?;

            let us_matches = match reaction.us {
                UsPattern::Kind(kind) => cell.props.is_kind_and_state(kind, reaction.us_state),
                UsPattern::Any => cell.props.is_state(reaction.us_state),
            };
            if !us_matches {
                return Ok(None);
            }

            (cell.props.kind(), (cell.x, cell.y), cell.bonds().to_vec())
        };

        // candidate pool: bonded peers or occupied 8-neighbors
        let pool = if reaction.bonded_required {
            bonded_peers
        } else {
            world.occupied_neighbors(id)?
        };

        // them-side filter; SameAsUs resolves against our own kind
        let wanted_kind = match reaction.them {
            ThemPattern::Kind(kind) => Some(kind),
            ThemPattern::SameAsUs => Some(us_kind),
            ThemPattern::Any => None,
        };

        for candidate in pool {
            let (them_kind, them_pos) = {
                let neighbor = world.cell(candidate)?;
                let matches = match wanted_kind {
                    Some(kind) => neighbor
                        .props
                        .is_kind_and_state(kind, reaction.them_state),
                    None => neighbor.props.is_state(reaction.them_state),
                };
                if !matches {
                    continue;
                }
                (neighbor.props.kind(), (neighbor.x, neighbor.y))
            };

            if !can_react(world, us_pos, them_pos)? {
                continue;
            }

            let bond = self.apply(world, id, candidate, reaction)?;
            return Ok(Some(Applied {
                us: id,
                them: candidate,
                us_kind,
                them_kind,
                bond,
            }));
        }

        Ok(None)
    }

    /// Apply the bond transition and state rewrites for a matched pair
    fn apply(
        &self,
        world: &mut World,
        us: CellId,
        them: CellId,
        reaction: &Reaction,
    ) -> Result<BondChange> {
        let bond = if reaction.bonded_required && !reaction.bonded_result {
            world.break_bond(us, them)?;
            tracing::info!(
                us = %world.cell(us)?.label(),
                them = %world.cell(them)?.label(),
                "breaking bond"
            );
            BondChange::Broken
        } else if !reaction.bonded_required && reaction.bonded_result {
            world.make_bond(us, them)?;
            tracing::info!(
                us = %world.cell(us)?.label(),
                them = %world.cell(them)?.label(),
                "making bond"
            );
            BondChange::Made
        } else {
            BondChange::Unchanged
        };

        world.cell_mut(us)?.props.set_state(reaction.next_us_state)?;
        world
            .cell_mut(them)?
            .props
            .set_state(reaction.next_them_state)?;

        Ok(bond)
    }
}

/// Geometric eligibility for a reacting pair
///
/// Face-adjacent cells can always react. For a diagonal (or stretched-bond)
/// pair, the reaction is allowed if at least one of the two alternate
/// diagonal slots is empty, or if the two diagonal occupants do not share a
/// bond. A bonded diagonal pair blocks the reaction from reaching through.
fn can_react(world: &World, us: (usize, usize), them: (usize, usize)) -> Result<bool> {
    let dx = us.0.abs_diff(them.0);
    let dy = us.1.abs_diff(them.1);
    if dx + dy < 2 {
        return Ok(true);
    }

    let alt_a = (us.0, them.1);
    let alt_b = (them.0, us.1);
    if world.slot_is_empty(alt_a.0, alt_a.1) || world.slot_is_empty(alt_b.0, alt_b.1) {
        return Ok(true);
    }

    let occupant_a = world.occupant(alt_a.0, alt_a.1)?;
    let occupant_b = world.occupant(alt_b.0, alt_b.1)?;
    Ok(!world.are_bonded(occupant_a, occupant_b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::CellType;

    fn world_10x10() -> World {
        World::new(10, 10).unwrap()
    }

    #[test]
    fn test_face_adjacent_pair_can_react() {
        let mut world = world_10x10();
        world.spawn_cell(2, 2, CellType::A, 1).unwrap();
        world.spawn_cell(3, 2, CellType::B, 1).unwrap();
        assert!(can_react(&world, (2, 2), (3, 2)).unwrap());
    }

    #[test]
    fn test_diagonal_pair_with_empty_alternate_can_react() {
        let mut world = world_10x10();
        world.spawn_cell(2, 2, CellType::A, 1).unwrap();
        world.spawn_cell(3, 3, CellType::B, 1).unwrap();
        // both alternate diagonals (2,3) and (3,2) empty
        assert!(can_react(&world, (2, 2), (3, 3)).unwrap());
    }

    #[test]
    fn test_bonded_diagonal_pair_blocks_reaction() {
        let mut world = world_10x10();
        world.spawn_cell(2, 2, CellType::A, 1).unwrap();
        world.spawn_cell(3, 3, CellType::B, 1).unwrap();
        let blocker_a = world.spawn_cell(2, 3, CellType::C, 0).unwrap();
        let blocker_b = world.spawn_cell(3, 2, CellType::C, 0).unwrap();

        // unbonded blockers do not block
        assert!(can_react(&world, (2, 2), (3, 3)).unwrap());

        world.make_bond(blocker_a, blocker_b).unwrap();
        assert!(!can_react(&world, (2, 2), (3, 3)).unwrap());
    }

    #[test]
    fn test_react_with_no_rules_is_noop() {
        let mut world = world_10x10();
        let id = world.spawn_cell(2, 2, CellType::A, 1).unwrap();
        let chemistry = Chemistry::new();
        assert!(chemistry.react(&mut world, id).unwrap().is_none());
    }

    #[test]
    fn test_bonded_required_ignores_unbonded_neighbors() {
        let mut world = world_10x10();
        let a = world.spawn_cell(2, 2, CellType::A, 1).unwrap();
        world.spawn_cell(3, 2, CellType::B, 1).unwrap();

        let mut chemistry = Chemistry::new();
        chemistry
            .add_reaction(Reaction::new('a', 1, true, 'b', 1, 2, false, 2).unwrap())
            .unwrap();

        // b1 is adjacent but not bonded; the rule requires a bond
        assert!(chemistry.react(&mut world, a).unwrap().is_none());
    }
}
