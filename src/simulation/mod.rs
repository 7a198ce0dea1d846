//! Simulation - owns one percolation run and drives it tick by tick
//!
//! LeathCore only orchestrates:
//! - growth rules live in systems/growth.rs
//! - set bookkeeping lives in domain/percolation.rs
//! - pacing/pause state lives in playback.rs
//!
//! Rendering is left to the caller: after each step the occupancy and
//! color buffers are ready to read.

use crate::domain::error::ConstructionError;
use crate::domain::percolation::PercolationState;
use crate::domain::settings::LeathSettings;
use crate::grid::{OccupancyGrid, Palette};
use crate::systems::{GrowthReport, UniformSource, Xorshift32};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/step_stats.rs"]
mod step_stats;
#[path = "step/step.rs"]
mod step;
#[path = "playback/playback.rs"]
mod playback;
#[path = "init/init.rs"]
mod init;
mod facade;

pub use facade::Leath;
pub use playback::Playback;
pub use step_stats::StepStats;

use perf_timer::PerfTimer;

/// A single Leath run
pub struct LeathCore {
    state: PercolationState,
    rng: Box<dyn UniformSource>,

    tick_interval_ms: u32,
    playback: Playback,

    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    step_stats: StepStats,
}

impl LeathCore {
    /// Fresh run seeded with the default xorshift stream
    pub fn new(n: u32, p: f64, rng_seed: u32) -> Result<Self, ConstructionError> {
        Self::with_source(n, p, Xorshift32::new(rng_seed))
    }

    /// Fresh run drawing from a caller-supplied source
    pub fn with_source<R>(n: u32, p: f64, rng: R) -> Result<Self, ConstructionError>
    where
        R: UniformSource + 'static,
    {
        let settings = LeathSettings {
            size: n,
            probability: p,
            ..LeathSettings::default()
        };
        init::create_leath_core(&settings, Box::new(rng))
    }

    pub fn from_settings(settings: &LeathSettings) -> Result<Self, ConstructionError> {
        init::create_leath_core(settings, Box::new(Xorshift32::new(settings.rng_seed)))
    }

    pub fn from_settings_json(json: &str) -> Result<Self, ConstructionError> {
        let settings = LeathSettings::from_json(json)?;
        Self::from_settings(&settings)
    }

    pub fn n(&self) -> u32 { self.state.n() }

    pub fn p(&self) -> f64 { self.state.p() }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn tick_interval_ms(&self) -> u32 { self.tick_interval_ms }

    pub fn state(&self) -> &PercolationState { &self.state }

    /// False once the frontier is exhausted
    pub fn is_active(&self) -> bool { self.state.is_active() }

    pub fn cluster_size(&self) -> usize { self.state.cluster_size() }

    /// Row-major n x n occupancy, 1 = cluster
    pub fn snapshot(&self) -> &[u8] { self.state.snapshot() }

    pub fn grid(&self) -> &OccupancyGrid { self.state.grid() }

    /// Run one growth step; a dead run returns an empty report
    pub fn step(&mut self) -> GrowthReport {
        step::step(self)
    }

    /// Step unless paused or dead. Returns true when a step ran.
    pub fn tick(&mut self) -> bool {
        step::tick(self)
    }

    /// Step until the frontier empties or `max_steps` is spent.
    /// Returns the number of steps taken.
    pub fn run_until_dead(&mut self, max_steps: u64) -> u64 {
        step::run_until_dead(self, max_steps)
    }

    /// Re-seed the lattice with the same n and p; the random stream carries on
    pub fn reset(&mut self) {
        init::reset(self);
    }

    // === Playback ===

    pub fn pause(&mut self) { self.playback.pause(); }

    pub fn resume(&mut self) { self.playback.resume(); }

    /// Returns the new paused flag
    pub fn toggle_pause(&mut self) -> bool { self.playback.toggle() }

    pub fn is_paused(&self) -> bool { self.playback.is_paused() }

    // === Rendering ===

    pub fn set_palette(&mut self, palette: Palette) {
        self.state.set_palette(palette);
    }

    /// Get pointer to occupancy array (for JS rendering)
    pub fn cells_ptr(&self) -> *const u8 { self.state.grid().cells_ptr() }

    /// Get pointer to colors array (for JS rendering)
    pub fn colors_ptr(&self) -> *const u32 { self.state.grid().colors_ptr() }

    pub fn cells_len(&self) -> usize { self.state.grid().size() }

    pub fn colors_len_bytes(&self) -> usize {
        self.state.grid().size() * std::mem::size_of::<u32>()
    }

    // === Perf ===

    /// Enable or disable per-step stats (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.perf_enabled = enabled;
    }

    /// Last step snapshot (zeros when perf disabled)
    pub fn get_step_stats(&self) -> StepStats {
        self.step_stats.clone()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
