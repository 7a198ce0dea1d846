//! Core primitives shared by the lattice and the growth system
//!
//! - utils/safety.rs - checked-in-debug slice access
//! - utils/log.rs    - console logging that is silent off-wasm
//! - coord.rs        - lattice coordinates and von Neumann offsets

#[macro_use]
#[path = "utils/safety.rs"]
pub mod safety;
#[macro_use]
#[path = "utils/log.rs"]
pub mod log;
pub mod coord;

pub use coord::{Coord, NEIGHBOR_OFFSETS};
