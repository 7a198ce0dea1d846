//! Occupancy grid - dense n x n mirror of the cluster for rendering
//!
//! Two parallel arrays, same layout as the sandbox grid:
//!   cells[]  - 1 if the cell belongs to the cluster, else 0
//!   colors[] - ABGR packed color for direct Canvas copy
//!
//! Row-major: index = row * side + col.

use crate::core::Coord;

// ABGR, little-endian bytes [RR,GG,BB,AA]
pub const OCCUPIED_COLOR: u32 = 0xFFFFFFFF;
pub const EMPTY_COLOR: u32 = 0xFF000000;

mod indexing;
mod render;

pub use render::Palette;

pub struct OccupancyGrid {
    side: u32,
    size: usize,

    pub(crate) cells: Vec<u8>,
    pub(crate) colors: Vec<u32>,

    palette: Palette,
    occupied: usize,
}

impl OccupancyGrid {
    pub fn new(side: u32, palette: Palette) -> Self {
        let size = (side as usize) * (side as usize);
        Self {
            side,
            size,
            cells: vec![0; size],
            colors: vec![palette.empty; size],
            palette,
            occupied: 0,
        }
    }

    #[inline]
    pub fn is_occupied(&self, coord: Coord) -> bool {
        match self.index(coord) {
            Some(idx) => *fast!(self.cells, [idx]) == 1,
            None => false,
        }
    }

    /// Mark a cell occupied. Returns false for out-of-lattice coordinates
    /// and for cells that were already set.
    /// Only growth may call this: the grid must mirror the cluster.
    pub(crate) fn occupy(&mut self, coord: Coord) -> bool {
        let Some(idx) = self.index(coord) else {
            return false;
        };
        if *fast!(self.cells, [idx]) == 1 {
            return false;
        }
        fast!(self.cells, [idx] = 1);
        fast!(self.colors, [idx] = self.palette.occupied);
        self.occupied += 1;
        true
    }

    #[inline]
    pub fn occupied_count(&self) -> usize {
        self.occupied
    }
}
