//! Leath growth step
//!
//! One step resolves the whole current frontier:
//!   1. pop every frontier cell in row-major order, one sample each
//!   2. `p >= r` promotes (ties promote), anything else demotes
//!   3. demoted cells join `excluded`
//!   4. promoted cells join the cluster and the grid, then expand
//!
//! Cells discovered in (4) wait for the next step. Promotions are all
//! committed before any expansion so two promoted neighbors never see
//! each other as fresh frontier.

use crate::core::Coord;
use crate::domain::percolation::PercolationState;

use super::random::UniformSource;

/// What a single step resolved
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GrowthReport {
    pub tested: usize,
    pub promoted: usize,
    pub demoted: usize,
}

/// Push the untested neighbors of `pt` onto the frontier.
/// This is the only way a cell enters the frontier.
pub fn expand_frontier(state: &mut PercolationState, pt: Coord) {
    for neighbor in pt.neighbors() {
        if state.cluster.contains(&neighbor) || state.excluded.contains(&neighbor) {
            continue;
        }
        debug_assert!(
            neighbor.in_bounds(state.n()),
            "expand_frontier: {:?} escaped the excluded ring of a {}x{} lattice",
            neighbor,
            state.n(),
            state.n()
        );
        state.frontier.insert(neighbor);
    }
}

/// Run one growth step. With an empty frontier nothing is drawn or changed.
pub fn grow_cluster<R>(state: &mut PercolationState, rng: &mut R) -> GrowthReport
where
    R: UniformSource + ?Sized,
{
    if state.frontier.is_empty() {
        return GrowthReport::default();
    }

    let p = state.p();
    let tested = state.frontier.len();
    let mut promoted = Vec::with_capacity(tested);
    let mut demoted = Vec::with_capacity(tested);

    // Sampling order is the frontier's own order, so the pairing of
    // cell to sample is fixed for a given random stream.
    while let Some(pt) = state.frontier.pop_first() {
        let r = rng.next_unit();
        if p >= r {
            promoted.push(pt);
        } else {
            demoted.push(pt);
        }
    }

    state.excluded.extend(demoted.iter().copied());

    for &pt in &promoted {
        state.cluster.insert(pt);
        state.grid.occupy(pt);
    }
    for &pt in &promoted {
        expand_frontier(state, pt);
    }

    GrowthReport {
        tested,
        promoted: promoted.len(),
        demoted: demoted.len(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::systems::random::{SequenceSource, Xorshift32};

    fn coords(cells: &[(i32, i32)]) -> BTreeSet<Coord> {
        cells.iter().copied().map(Coord::from).collect()
    }

    #[test]
    fn expand_skips_cluster_frontier_and_excluded() {
        let mut state = PercolationState::new(5, 0.5).expect("valid");
        // seed (2,2) already expanded; mark one neighbor excluded by hand
        state.frontier.clear();
        state.excluded.insert(Coord::new(3, 2));
        state.frontier.insert(Coord::new(1, 2));
        expand_frontier(&mut state, Coord::new(2, 2));
        assert_eq!(state.frontier, coords(&[(1, 2), (2, 1), (2, 3)]));
    }

    #[test]
    fn p_zero_walls_in_the_seed_after_one_step() {
        let mut state = PercolationState::new(7, 0.0).expect("valid");
        let mut rng = SequenceSource::constant(0.5);
        let report = grow_cluster(&mut state, &mut rng);
        assert_eq!(report, GrowthReport { tested: 4, promoted: 0, demoted: 4 });
        assert!(!state.is_active());
        assert_eq!(state.cluster_size(), 1);
        assert!(state.cluster.contains(&Coord::new(3, 3)));
        state.check_invariants().expect("consistent");
    }

    #[test]
    fn p_zero_with_xorshift_never_promotes() {
        let mut state = PercolationState::new(9, 0.0).expect("valid");
        let mut rng = Xorshift32::new(1);
        grow_cluster(&mut state, &mut rng);
        assert_eq!(state.cluster_size(), 1);
        assert!(!state.is_active());
    }

    #[test]
    fn p_one_on_three_by_three_makes_a_plus() {
        let mut state = PercolationState::new(3, 1.0).expect("valid");
        let mut rng = SequenceSource::constant(0.0);
        grow_cluster(&mut state, &mut rng);

        let cluster: BTreeSet<Coord> = state.cluster.iter().copied().collect();
        assert_eq!(cluster, coords(&[(1, 1), (0, 1), (2, 1), (1, 0), (1, 2)]));
        // only the corners are left untested on a 3x3 lattice
        assert_eq!(state.frontier, coords(&[(0, 0), (0, 2), (2, 0), (2, 2)]));
        assert_eq!(state.snapshot(), &[0u8, 1, 0, 1, 1, 1, 0, 1, 0]);
        state.check_invariants().expect("consistent");
    }

    #[test]
    fn sample_equal_to_p_promotes() {
        let mut state = PercolationState::new(5, 0.375).expect("valid");
        let mut rng = SequenceSource::constant(0.375);
        let report = grow_cluster(&mut state, &mut rng);
        assert_eq!(report.promoted, 4);
        assert_eq!(report.demoted, 0);
        assert_eq!(state.cluster_size(), 5);
    }

    #[test]
    fn samples_pair_with_row_major_frontier_order() {
        // seed (2,2): frontier in row-major order is (1,2), (2,1), (2,3), (3,2)
        let mut state = PercolationState::new(5, 0.5).expect("valid");
        let mut rng = SequenceSource::new(vec![0.1, 0.9, 0.9, 0.1]);
        grow_cluster(&mut state, &mut rng);

        let cluster: BTreeSet<Coord> = state.cluster.iter().copied().collect();
        assert_eq!(cluster, coords(&[(1, 2), (2, 2), (3, 2)]));
        assert!(state.excluded.contains(&Coord::new(2, 1)));
        assert!(state.excluded.contains(&Coord::new(2, 3)));
        assert_eq!(rng.drawn(), 4);
    }

    #[test]
    fn adjacent_promotions_do_not_reenter_frontier() {
        // after the first step (1,2),(2,1),(2,3),(3,2) are all cluster;
        // the diagonals each touch two promoted cells
        let mut state = PercolationState::new(5, 1.0).expect("valid");
        let mut rng = SequenceSource::constant(0.0);
        grow_cluster(&mut state, &mut rng);
        grow_cluster(&mut state, &mut rng);
        state.check_invariants().expect("consistent");
        assert!(state.frontier.iter().all(|c| !state.cluster.contains(c)));
    }

    #[test]
    fn empty_frontier_step_is_a_no_op() {
        let mut state = PercolationState::new(6, 0.0).expect("valid");
        let mut rng = SequenceSource::constant(0.5);
        grow_cluster(&mut state, &mut rng);
        assert!(!state.is_active());

        let cluster = state.cluster.clone();
        let excluded = state.excluded.clone();
        let cells = state.snapshot().to_vec();
        let drawn = rng.drawn();

        let report = grow_cluster(&mut state, &mut rng);
        assert_eq!(report, GrowthReport::default());
        assert_eq!(rng.drawn(), drawn);
        assert_eq!(state.cluster, cluster);
        assert_eq!(state.excluded, excluded);
        assert_eq!(state.snapshot(), cells.as_slice());
    }

    #[test]
    fn random_runs_keep_every_invariant() {
        for (seed, p) in [(1u32, 0.3), (7, 0.5), (99, 0.59), (123, 0.75), (5, 1.0)] {
            let mut state = PercolationState::new(24, p).expect("valid");
            let mut rng = Xorshift32::new(seed);
            let mut last_size = state.cluster_size();
            let mut seen_excluded = state.excluded.clone();
            while state.is_active() {
                grow_cluster(&mut state, &mut rng);
                state.check_invariants().expect("consistent");
                assert!(state.cluster_size() >= last_size);
                assert!(seen_excluded.iter().all(|c| state.excluded.contains(c)));
                last_size = state.cluster_size();
                seen_excluded = state.excluded.clone();
            }
        }
    }

    #[test]
    fn full_probability_floods_the_lattice() {
        let mut state = PercolationState::new(5, 1.0).expect("valid");
        let mut rng = SequenceSource::constant(0.0);
        while state.is_active() {
            grow_cluster(&mut state, &mut rng);
        }
        assert_eq!(state.cluster_size(), 25);
        assert!(state.snapshot().iter().all(|&c| c == 1));
        assert!(state.cluster.iter().all(|c| c.in_bounds(5)));
    }
}
