use crate::systems::{grow_cluster, GrowthReport};

use super::{LeathCore, PerfTimer};

pub(super) fn step(core: &mut LeathCore) -> GrowthReport {
    if !core.state.is_active() {
        return GrowthReport::default();
    }

    let step_start = if core.perf_enabled {
        Some(PerfTimer::start())
    } else {
        None
    };

    let report = grow_cluster(&mut core.state, &mut core.rng);

    if let Some(start) = step_start {
        let stats = &mut core.step_stats;
        stats.step_ms = start.elapsed_ms();
        stats.frame = core.frame;
        stats.tested = report.tested as u32;
        stats.promoted = report.promoted as u32;
        stats.demoted = report.demoted as u32;
        stats.cluster_size = core.state.cluster_size() as u32;
        stats.frontier_size = core.state.frontier_len() as u32;
        stats.excluded_size = core.state.excluded_len() as u32;
    }

    core.frame += 1;

    if !core.state.is_active() {
        engine_log!(
            "leath: cluster died after {} steps with {} cells",
            core.frame,
            core.state.cluster_size()
        );
    }

    report
}

pub(super) fn tick(core: &mut LeathCore) -> bool {
    if core.playback.is_paused() || !core.state.is_active() {
        return false;
    }
    step(core);
    true
}

pub(super) fn run_until_dead(core: &mut LeathCore, max_steps: u64) -> u64 {
    let mut taken = 0;
    while taken < max_steps && core.state.is_active() {
        step(core);
        taken += 1;
    }
    taken
}
