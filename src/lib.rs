//! Leath Engine - dynamic percolation growth on a square lattice, in WASM
//!
//! A seed cell grows a cluster by testing its untested neighbors, each
//! joining with probability p. Growth stops when every frontier cell has
//! been tried.
//!
//! Architecture:
//! - core/       - coordinates, safety and logging macros
//! - spatial/    - dense occupancy + color grid
//! - domain/     - percolation state, settings, errors
//! - systems/    - growth step and random sources
//! - simulation/ - run orchestration and the JS facade

#[macro_use]
pub mod core;
pub mod spatial;
pub mod domain;
pub mod systems;
pub mod simulation;

pub use spatial::grid;

use wasm_bindgen::prelude::*;

#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    engine_log!("Leath WASM engine initialized (v{})", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::Coord;
pub use domain::error::ConstructionError;
pub use domain::percolation::PercolationState;
pub use domain::settings::LeathSettings;
pub use simulation::{Leath, LeathCore, Playback, StepStats};
pub use systems::{GrowthReport, SequenceSource, UniformSource, Xorshift32};
