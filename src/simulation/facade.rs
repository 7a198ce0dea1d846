use wasm_bindgen::prelude::*;

use crate::grid::Palette;

use super::step_stats::StepStats;
use super::LeathCore;

/// JS handle to one percolation run.
///
/// The page owns the timer: call `tick()` from `requestAnimationFrame` or
/// `setInterval(tickIntervalMs)`, then copy `colorsPtr()` into an ImageData.
#[wasm_bindgen]
pub struct Leath {
    core: LeathCore,
}

#[wasm_bindgen]
impl Leath {
    /// Create a new run on an n x n lattice
    #[wasm_bindgen(constructor)]
    pub fn new(n: u32, p: f64, rng_seed: u32) -> Result<Leath, JsValue> {
        let core = LeathCore::new(n, p, rng_seed).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { core })
    }

    #[wasm_bindgen(js_name = fromSettingsJson)]
    pub fn from_settings_json(json: String) -> Result<Leath, JsValue> {
        let core =
            LeathCore::from_settings_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn size(&self) -> u32 { self.core.n() }

    #[wasm_bindgen(getter)]
    pub fn probability(&self) -> f64 { self.core.p() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter, js_name = tickIntervalMs)]
    pub fn tick_interval_ms(&self) -> u32 { self.core.tick_interval_ms() }

    #[wasm_bindgen(getter, js_name = clusterSize)]
    pub fn cluster_size(&self) -> u32 { self.core.cluster_size() as u32 }

    /// False once the frontier is exhausted; the page can stop its timer
    #[wasm_bindgen(js_name = isActive)]
    pub fn is_active(&self) -> bool { self.core.is_active() }

    /// Step the simulation forward, paused or not. Returns cells promoted.
    pub fn step(&mut self) -> u32 {
        self.core.step().promoted as u32
    }

    /// Step only when running; returns whether a step happened
    pub fn tick(&mut self) -> bool {
        self.core.tick()
    }

    #[wasm_bindgen(js_name = runUntilDead)]
    pub fn run_until_dead(&mut self, max_steps: u32) -> u32 {
        self.core.run_until_dead(max_steps as u64) as u32
    }

    pub fn reset(&mut self) {
        self.core.reset();
    }

    // === Playback ===

    pub fn pause(&mut self) { self.core.pause(); }

    pub fn resume(&mut self) { self.core.resume(); }

    #[wasm_bindgen(js_name = togglePause)]
    pub fn toggle_pause(&mut self) -> bool { self.core.toggle_pause() }

    #[wasm_bindgen(getter)]
    pub fn paused(&self) -> bool { self.core.is_paused() }

    // === Rendering ===

    #[wasm_bindgen(js_name = setPalette)]
    pub fn set_palette(&mut self, occupied: u32, empty: u32) {
        self.core.set_palette(Palette { occupied, empty });
    }

    /// Copy of the occupancy grid (1 = cluster), row-major
    pub fn snapshot(&self) -> Vec<u8> {
        self.core.snapshot().to_vec()
    }

    /// Get pointer to occupancy array (for zero-copy JS views)
    #[wasm_bindgen(js_name = snapshotPtr)]
    pub fn snapshot_ptr(&self) -> *const u8 { self.core.cells_ptr() }

    #[wasm_bindgen(js_name = snapshotLen)]
    pub fn snapshot_len(&self) -> usize { self.core.cells_len() }

    /// Get pointer to ABGR colors array (for JS rendering)
    #[wasm_bindgen(js_name = colorsPtr)]
    pub fn colors_ptr(&self) -> *const u32 { self.core.colors_ptr() }

    #[wasm_bindgen(js_name = colorsLen)]
    pub fn colors_len(&self) -> usize { self.core.cells_len() }

    #[wasm_bindgen(js_name = colorsLenBytes)]
    pub fn colors_len_bytes(&self) -> usize { self.core.colors_len_bytes() }

    // === Perf ===

    /// Enable or disable per-step stats (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Last step snapshot (zeros when perf disabled)
    pub fn get_step_stats(&self) -> StepStats {
        self.core.get_step_stats()
    }
}
