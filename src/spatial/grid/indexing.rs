use super::*;

impl OccupancyGrid {
    // === Dimensions ===
    #[inline]
    pub fn side(&self) -> u32 { self.side }

    #[inline]
    pub fn size(&self) -> usize { self.size }

    // === Index conversion ===
    /// Row-major index, or None outside the lattice
    #[inline]
    pub fn index(&self, coord: Coord) -> Option<usize> {
        if !coord.in_bounds(self.side) {
            return None;
        }
        Some((coord.row as usize) * (self.side as usize) + coord.col as usize)
    }

    // === Read access (for rendering) ===
    #[inline]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    #[inline]
    pub fn colors(&self) -> &[u32] {
        &self.colors
    }

    #[inline]
    pub fn cells_ptr(&self) -> *const u8 {
        self.cells.as_ptr()
    }

    #[inline]
    pub fn colors_ptr(&self) -> *const u32 {
        self.colors.as_ptr()
    }
}
