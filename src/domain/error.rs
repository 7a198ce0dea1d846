//! Construction errors
//!
//! Growth itself cannot fail once a state exists; everything that can go
//! wrong is caught before the first cell is seeded.

use thiserror::Error;

/// Largest lattice side accepted.
/// 4096^2 cells is 80 MiB of occupancy + colors; a flooded run adds a few
/// hundred MiB of coordinate sets, which still fits a 4 GiB wasm32 heap.
pub const MAX_SIDE: u32 = 4_096;

#[derive(Debug, Error)]
pub enum ConstructionError {
    #[error("lattice size must be at least 1")]
    EmptyLattice,

    #[error("lattice size {n} exceeds the maximum of {max}")]
    LatticeTooLarge { n: u32, max: u32 },

    #[error("occupation probability {0} is outside [0, 1]")]
    ProbabilityOutOfRange(f64),

    #[error("invalid settings json: {0}")]
    Settings(#[from] serde_json::Error),
}

/// Shared by `PercolationState::new` and `LeathSettings::validate`
pub fn check_parameters(n: u32, p: f64) -> Result<(), ConstructionError> {
    if n == 0 {
        return Err(ConstructionError::EmptyLattice);
    }
    if n > MAX_SIDE {
        return Err(ConstructionError::LatticeTooLarge { n, max: MAX_SIDE });
    }
    // NaN fails the range check too
    if !(0.0..=1.0).contains(&p) {
        return Err(ConstructionError::ProbabilityOutOfRange(p));
    }
    Ok(())
}
