//! World: owns the occupancy grid and the arena of all live cells
//!
//! Cells live in a dense, creation-ordered arena indexed by `CellId`; bond
//! sets hold ids rather than references, so the cyclic bond graph needs no
//! shared ownership. Tick iteration walks the arena in creation order, which
//! keeps per-tick behavior fair and deterministic.

pub mod grid;

pub use grid::OccupancyGrid;

use crate::cell::{Cell, CellProperties};
use crate::core::error::{Result, SimError};
use crate::core::types::{CellId, CellType, Tick};
use rand::Rng;

/// Fixed scan order for the 8-connected neighborhood: W, NW, N, NE, E, SE,
/// S, SW. The order only affects tie-breaking, not correctness.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
];

pub struct World {
    grid: OccupancyGrid,
    cells: Vec<Cell>,
    pub current_tick: Tick,
    last_error: Option<String>,
    error_flag: bool,
}

impl World {
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Ok(Self {
            grid: OccupancyGrid::new(width, height)?,
            cells: Vec::new(),
            current_tick: 0,
            last_error: None,
            error_flag: false,
        })
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Create a cell on an empty slot; the slot must be in bounds and empty
    ///
    /// Failure leaves the world unchanged: no cell is added and occupancy is
    /// untouched.
    pub fn spawn_cell(&mut self, x: usize, y: usize, kind: CellType, state: u16) -> Result<CellId> {
        if !self.grid.in_bounds(x, y) {
            return Err(SimError::OutOfBounds { x, y });
        }
        if !self.grid.is_empty(x, y) {
            return Err(SimError::SlotOccupied { x, y });
        }
        let props = CellProperties::new(kind, state)?;
        let id = CellId(self.cells.len() as u32);
        self.grid.place(x, y, id)?;
        self.cells.push(Cell::new(id, props, x, y));
        Ok(id)
    }

    pub fn cell(&self, id: CellId) -> Result<&Cell> {
        self.cells.get(id.index()).ok_or(SimError::UnknownCell(id))
    }

    pub fn cell_mut(&mut self, id: CellId) -> Result<&mut Cell> {
        self.cells
            .get_mut(id.index())
            .ok_or(SimError::UnknownCell(id))
    }

    /// All live cells in creation order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// All cell ids in creation order
    pub fn ids(&self) -> impl Iterator<Item = CellId> + '_ {
        (0..self.cells.len() as u32).map(CellId)
    }

    pub fn are_bonded(&self, a: CellId, b: CellId) -> bool {
        self.cells
            .get(a.index())
            .map(|cell| cell.is_bonded_to(b))
            .unwrap_or(false)
    }

    /// Create a symmetric bond between two cells
    ///
    /// A cell never bonds itself; a duplicate bond request is a no-op that
    /// keeps both sides symmetric.
    pub fn make_bond(&mut self, a: CellId, b: CellId) -> Result<()> {
        if a == b {
            return Err(SimError::SelfBond(a));
        }
        self.cell(a)?;
        self.cell(b)?;
        self.cells[a.index()].add_bond(b);
        self.cells[b.index()].add_bond(a);
        Ok(())
    }

    /// Remove a symmetric bond; breaking an absent bond is a no-op
    pub fn break_bond(&mut self, a: CellId, b: CellId) -> Result<()> {
        self.cell(a)?;
        self.cell(b)?;
        self.cells[a.index()].remove_bond(b);
        self.cells[b.index()].remove_bond(a);
        Ok(())
    }

    /// Move a cell to a uniformly random empty slot in its 8-neighborhood
    ///
    /// Returns `Ok(true)` if the cell moved, `Ok(false)` if it had no valid
    /// move this tick. Relocation clears the old slot and occupies the new
    /// one as a single logical step; no intermediate state is observable.
    /// Existing bonds are not re-validated for distance after the move.
    pub fn move_cell_randomly<R: Rng>(&mut self, id: CellId, rng: &mut R) -> Result<bool> {
        let (x, y) = {
            let cell = self.cell(id)?;
            (cell.x, cell.y)
        };

        let mut candidates: Vec<(usize, usize)> = Vec::with_capacity(8);
        for (dx, dy) in NEIGHBOR_OFFSETS {
            let tx = x as isize + dx;
            let ty = y as isize + dy;
            if tx < 0 || ty < 0 {
                continue;
            }
            let (tx, ty) = (tx as usize, ty as usize);
            if self.grid.in_bounds(tx, ty) && self.grid.is_empty(tx, ty) {
                candidates.push((tx, ty));
            }
        }

        if candidates.is_empty() {
            return Ok(false);
        }

        let (nx, ny) = candidates[rng.gen_range(0..candidates.len())];
        self.grid.clear(x, y);
        self.grid.place(nx, ny, id)?;
        let cell = &mut self.cells[id.index()];
        cell.x = nx;
        cell.y = ny;
        Ok(true)
    }

    /// Occupied 8-connected neighbors of a cell, in fixed scan order
    pub fn occupied_neighbors(&self, id: CellId) -> Result<Vec<CellId>> {
        let cell = self.cell(id)?;
        let mut neighbors = Vec::with_capacity(8);
        for (dx, dy) in NEIGHBOR_OFFSETS {
            let tx = cell.x as isize + dx;
            let ty = cell.y as isize + dy;
            if tx < 0 || ty < 0 {
                continue;
            }
            let (tx, ty) = (tx as usize, ty as usize);
            if self.grid.in_bounds(tx, ty) {
                if let Ok(neighbor) = self.grid.occupant_at(tx, ty) {
                    neighbors.push(neighbor);
                }
            }
        }
        Ok(neighbors)
    }

    pub fn slot_is_empty(&self, x: usize, y: usize) -> bool {
        self.grid.in_bounds(x, y) && self.grid.is_empty(x, y)
    }

    pub fn occupant(&self, x: usize, y: usize) -> Result<CellId> {
        if !self.grid.in_bounds(x, y) {
            return Err(SimError::OutOfBounds { x, y });
        }
        self.grid.occupant_at(x, y)
    }

    /// Short label ("a1") for the slot contents; empty string for
    /// out-of-bounds or empty slots. Used by the inspector overlay.
    pub fn contents_at(&self, x: usize, y: usize) -> String {
        if !self.grid.in_bounds(x, y) {
            return String::new();
        }
        match self.grid.occupant_at(x, y) {
            Ok(id) => self.cells[id.index()].label(),
            Err(_) => String::new(),
        }
    }

    /// Record a recoverable per-cell fault for diagnostic display
    pub fn record_fault(&mut self, message: impl Into<String>) {
        self.last_error = Some(message.into());
        self.error_flag = true;
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn error_occurred(&self) -> bool {
        self.error_flag
    }

    /// Advance the tick counter (once per completed sweep)
    pub fn tick(&mut self) {
        self.current_tick += 1;
    }

    /// Advance every cell's age counter by one tick
    pub(crate) fn bump_ages(&mut self) {
        for cell in &mut self.cells {
            cell.props.bump_age();
        }
    }

    /// Diagnostic: occupied slot count, for invariant checks
    pub fn occupied_slot_count(&self) -> usize {
        self.grid.occupied_count()
    }
}
