use crate::domain::error::ConstructionError;
use crate::domain::percolation::PercolationState;
use crate::domain::settings::LeathSettings;
use crate::systems::UniformSource;

use super::step_stats::StepStats;
use super::{LeathCore, Playback};

pub(super) fn create_leath_core(
    settings: &LeathSettings,
    rng: Box<dyn UniformSource>,
) -> Result<LeathCore, ConstructionError> {
    let state =
        PercolationState::with_palette(settings.size, settings.probability, settings.palette())?;

    engine_log!(
        "leath: {}x{} lattice, p = {}, seed cell ({}, {})",
        settings.size,
        settings.size,
        settings.probability,
        state.seed().row,
        state.seed().col
    );

    Ok(LeathCore {
        state,
        rng,
        tick_interval_ms: settings.tick_interval_ms,
        playback: Playback::default(),
        frame: 0,
        perf_enabled: false,
        step_stats: StepStats::default(),
    })
}

pub(super) fn reset(core: &mut LeathCore) {
    let palette = core.state.grid().palette();
    // n and p were validated when the current state was built
    match PercolationState::with_palette(core.state.n(), core.state.p(), palette) {
        Ok(state) => core.state = state,
        Err(err) => {
            engine_log!("leath: reset failed: {}", err);
            return;
        }
    }
    core.frame = 0;
    core.step_stats.reset();
}
