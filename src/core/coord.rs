//! Lattice coordinates
//!
//! Coordinates are signed so the out-of-bounds ring (row/column -1 and n)
//! can live in the same sets as real cells.

/// (row, column) on the square lattice
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

/// Von Neumann offsets in canonical order: +row, -row, +col, -col
pub const NEIGHBOR_OFFSETS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

impl Coord {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    #[inline]
    pub fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self::new(self.row + d_row, self.col + d_col)
    }

    /// The four edge-sharing neighbors, in `NEIGHBOR_OFFSETS` order
    #[inline]
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        NEIGHBOR_OFFSETS
            .into_iter()
            .map(move |(dr, dc)| self.offset(dr, dc))
    }

    /// True when the cell lies on an n x n lattice
    #[inline]
    pub fn in_bounds(self, n: u32) -> bool {
        let n = n as i64;
        (0..n).contains(&(self.row as i64)) && (0..n).contains(&(self.col as i64))
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_follow_canonical_order() {
        let got: Vec<Coord> = Coord::new(4, 7).neighbors().collect();
        assert_eq!(
            got,
            vec![
                Coord::new(5, 7),
                Coord::new(3, 7),
                Coord::new(4, 8),
                Coord::new(4, 6),
            ]
        );
    }

    #[test]
    fn in_bounds_rejects_the_ring() {
        assert!(Coord::new(0, 0).in_bounds(3));
        assert!(Coord::new(2, 2).in_bounds(3));
        assert!(!Coord::new(-1, 1).in_bounds(3));
        assert!(!Coord::new(1, 3).in_bounds(3));
    }

    #[test]
    fn ordering_is_row_major() {
        let mut cells = vec![Coord::new(1, 0), Coord::new(0, 2), Coord::new(0, 1)];
        cells.sort();
        assert_eq!(cells, vec![Coord::new(0, 1), Coord::new(0, 2), Coord::new(1, 0)]);
    }
}
