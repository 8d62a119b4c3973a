//! Occupancy grid: a fixed-size 2-D array of slots
//!
//! Each slot is empty or holds exactly one cell id. The grid owns spatial
//! placement: a slot can only be occupied once and must be cleared before
//! reuse. Bounds are fixed at construction and never resized.
//!
//! Coordinate validity is a caller contract: the world checks bounds before
//! indexing, and the grid performs no clamping.

use crate::core::error::{Result, SimError};
use crate::core::types::CellId;

#[derive(Debug, Clone)]
pub struct OccupancyGrid {
    width: usize,
    height: usize,
    slots: Vec<Option<CellId>>,
}

impl OccupancyGrid {
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(SimError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            slots: vec![None; width * height],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    fn idx(&self, x: usize, y: usize) -> usize {
        debug_assert!(self.in_bounds(x, y));
        y * self.width + x
    }

    pub fn is_empty(&self, x: usize, y: usize) -> bool {
        self.slots[self.idx(x, y)].is_none()
    }

    pub fn occupant_at(&self, x: usize, y: usize) -> Result<CellId> {
        self.slots[self.idx(x, y)].ok_or(SimError::NoOccupant { x, y })
    }

    pub fn place(&mut self, x: usize, y: usize, id: CellId) -> Result<()> {
        let idx = self.idx(x, y);
        if self.slots[idx].is_some() {
            return Err(SimError::AlreadyOccupied { x, y });
        }
        self.slots[idx] = Some(id);
        Ok(())
    }

    pub fn clear(&mut self, x: usize, y: usize) {
        let idx = self.idx(x, y);
        self.slots[idx] = None;
    }

    /// Count of occupied slots (diagnostic, used by invariant checks)
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            OccupancyGrid::new(0, 10),
            Err(SimError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            OccupancyGrid::new(10, 0),
            Err(SimError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_place_and_query() {
        let mut grid = OccupancyGrid::new(4, 4).unwrap();
        assert!(grid.is_empty(2, 3));
        grid.place(2, 3, CellId(7)).unwrap();
        assert!(!grid.is_empty(2, 3));
        assert_eq!(grid.occupant_at(2, 3).unwrap(), CellId(7));
    }

    #[test]
    fn test_double_place_fails() {
        let mut grid = OccupancyGrid::new(4, 4).unwrap();
        grid.place(1, 1, CellId(0)).unwrap();
        assert!(matches!(
            grid.place(1, 1, CellId(1)),
            Err(SimError::AlreadyOccupied { x: 1, y: 1 })
        ));
        // first occupant untouched
        assert_eq!(grid.occupant_at(1, 1).unwrap(), CellId(0));
    }

    #[test]
    fn test_occupant_of_empty_slot_fails() {
        let grid = OccupancyGrid::new(4, 4).unwrap();
        assert!(matches!(
            grid.occupant_at(0, 0),
            Err(SimError::NoOccupant { x: 0, y: 0 })
        ));
    }

    #[test]
    fn test_clear_frees_slot() {
        let mut grid = OccupancyGrid::new(4, 4).unwrap();
        grid.place(1, 2, CellId(5)).unwrap();
        grid.clear(1, 2);
        assert!(grid.is_empty(1, 2));
        grid.place(1, 2, CellId(6)).unwrap();
        assert_eq!(grid.occupant_at(1, 2).unwrap(), CellId(6));
    }
}
