//! Percolation state - the three disjoint cell sets plus the occupancy mirror
//!
//! Per cell: unseen -> frontier -> {cluster | excluded}.
//! Cluster and excluded are terminal; a cell is tested at most once.
//!
//! The ring just outside the lattice (row -1, row n, col -1, col n) is
//! pre-seeded into `excluded`, so expansion never needs a bounds check.

use std::collections::{BTreeSet, HashSet};

use crate::core::Coord;
use crate::domain::error::{check_parameters, ConstructionError};
use crate::grid::{OccupancyGrid, Palette};
use crate::systems::growth::expand_frontier;

/// Only the growth step mutates occupancy; callers get read access.
/// There is no mutable grid handle:
///
/// ```compile_fail
/// use leath_engine::{Coord, PercolationState};
///
/// let mut state = PercolationState::new(5, 0.5).unwrap();
/// state.grid_mut().occupy(Coord::new(0, 0));
/// ```
///
/// and a grid owned outside the crate cannot be marked either:
///
/// ```compile_fail
/// use leath_engine::grid::{OccupancyGrid, Palette};
/// use leath_engine::Coord;
///
/// let mut grid = OccupancyGrid::new(5, Palette::default());
/// grid.occupy(Coord::new(0, 0));
/// ```
pub struct PercolationState {
    n: u32,
    p: f64,
    seed: Coord,

    pub(crate) cluster: HashSet<Coord>,
    /// Ordered so every step enumerates it the same way (row-major)
    pub(crate) frontier: BTreeSet<Coord>,
    pub(crate) excluded: HashSet<Coord>,
    pub(crate) grid: OccupancyGrid,
}

impl PercolationState {
    pub fn new(n: u32, p: f64) -> Result<Self, ConstructionError> {
        Self::with_palette(n, p, Palette::default())
    }

    pub fn with_palette(n: u32, p: f64, palette: Palette) -> Result<Self, ConstructionError> {
        check_parameters(n, p)?;

        let side = n as i32;
        let mut excluded = HashSet::with_capacity(4 * n as usize);
        for i in 0..side {
            excluded.insert(Coord::new(-1, i));
            excluded.insert(Coord::new(side, i));
            excluded.insert(Coord::new(i, -1));
            excluded.insert(Coord::new(i, side));
        }

        let seed = Coord::new(side / 2, side / 2);
        let mut grid = OccupancyGrid::new(n, palette);
        grid.occupy(seed);

        let mut state = Self {
            n,
            p,
            seed,
            cluster: HashSet::from([seed]),
            frontier: BTreeSet::new(),
            excluded,
            grid,
        };
        expand_frontier(&mut state, seed);
        Ok(state)
    }

    #[inline]
    pub fn n(&self) -> u32 { self.n }

    #[inline]
    pub fn p(&self) -> f64 { self.p }

    #[inline]
    pub fn seed(&self) -> Coord { self.seed }

    /// Row-major n x n occupancy, 1 = cluster
    #[inline]
    pub fn snapshot(&self) -> &[u8] {
        &self.grid.cells
    }

    #[inline]
    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    /// Recolor the render buffer; occupancy is untouched
    pub fn set_palette(&mut self, palette: Palette) {
        self.grid.set_palette(palette);
    }

    /// False once the frontier is exhausted: further steps are no-ops
    #[inline]
    pub fn is_active(&self) -> bool {
        !self.frontier.is_empty()
    }

    #[inline]
    pub fn cluster_size(&self) -> usize {
        self.cluster.len()
    }

    #[inline]
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Includes the out-of-bounds ring
    #[inline]
    pub fn excluded_len(&self) -> usize {
        self.excluded.len()
    }

    /// Walk every set and report the first broken invariant
    #[cfg(test)]
    pub(crate) fn check_invariants(&self) -> Result<(), String> {
        if self.cluster.is_empty() || !self.cluster.contains(&self.seed) {
            return Err("seed missing from cluster".into());
        }
        for c in &self.frontier {
            if self.cluster.contains(c) {
                return Err(format!("{c:?} in frontier and cluster"));
            }
            if self.excluded.contains(c) {
                return Err(format!("{c:?} in frontier and excluded"));
            }
            if !c.in_bounds(self.n) {
                return Err(format!("{c:?} in frontier but off the lattice"));
            }
        }
        for c in &self.cluster {
            if self.excluded.contains(c) {
                return Err(format!("{c:?} in cluster and excluded"));
            }
            if !self.grid.is_occupied(*c) {
                return Err(format!("{c:?} in cluster but not in grid"));
            }
        }
        if self.grid.occupied_count() != self.cluster.len() {
            return Err(format!(
                "grid has {} cells, cluster has {}",
                self.grid.occupied_count(),
                self.cluster.len()
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_is_center_with_four_frontier_cells() {
        let state = PercolationState::new(5, 0.5).expect("valid");
        assert_eq!(state.seed(), Coord::new(2, 2));
        assert_eq!(state.cluster_size(), 1);
        assert_eq!(state.frontier_len(), 4);
        assert_eq!(state.snapshot()[2 * 5 + 2], 1);
        assert_eq!(state.snapshot().iter().filter(|&&c| c == 1).count(), 1);
        assert!(state.is_active());
        state.check_invariants().expect("fresh state is consistent");
    }

    #[test]
    fn seed_uses_integer_division_on_even_sides() {
        let state = PercolationState::new(4, 0.5).expect("valid");
        assert_eq!(state.seed(), Coord::new(2, 2));
    }

    #[test]
    fn boundary_ring_is_pre_excluded() {
        let state = PercolationState::new(3, 0.5).expect("valid");
        assert_eq!(state.excluded_len(), 12);
        for i in 0..3 {
            assert!(state.excluded.contains(&Coord::new(-1, i)));
            assert!(state.excluded.contains(&Coord::new(3, i)));
            assert!(state.excluded.contains(&Coord::new(i, -1)));
            assert!(state.excluded.contains(&Coord::new(i, 3)));
        }
        // ring has no corners; they are unreachable by edge adjacency
        assert!(!state.excluded.contains(&Coord::new(-1, -1)));
    }

    #[test]
    fn single_cell_lattice_starts_dead() {
        let state = PercolationState::new(1, 1.0).expect("valid");
        assert_eq!(state.seed(), Coord::new(0, 0));
        assert!(!state.is_active());
        assert_eq!(state.snapshot(), &[1u8]);
    }

    #[test]
    fn set_palette_recolors_without_touching_occupancy() {
        let mut state = PercolationState::new(5, 0.5).expect("valid");
        let cells = state.snapshot().to_vec();
        state.set_palette(Palette { occupied: 0xFF00FF00, empty: 0xFF202020 });

        assert_eq!(state.snapshot(), cells.as_slice());
        assert_eq!(state.grid().colors()[2 * 5 + 2], 0xFF00FF00);
        assert_eq!(state.grid().colors()[0], 0xFF202020);
        state.check_invariants().expect("consistent");
    }

    #[test]
    fn invalid_parameters_fail_fast() {
        assert!(matches!(
            PercolationState::new(0, 0.5),
            Err(ConstructionError::EmptyLattice)
        ));
        assert!(matches!(
            PercolationState::new(10, -0.5),
            Err(ConstructionError::ProbabilityOutOfRange(_))
        ));
    }
}
