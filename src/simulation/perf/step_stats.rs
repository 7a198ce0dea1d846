use wasm_bindgen::prelude::*;

/// Counters for the most recent step
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepStats {
    pub(super) step_ms: f64,
    pub(super) frame: u64,
    pub(super) tested: u32,
    pub(super) promoted: u32,
    pub(super) demoted: u32,
    pub(super) cluster_size: u32,
    pub(super) frontier_size: u32,
    pub(super) excluded_size: u32,
}

impl StepStats {
    pub(crate) fn reset(&mut self) {
        *self = StepStats::default();
    }
}

#[wasm_bindgen]
impl StepStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.frame }
    #[wasm_bindgen(getter)]
    pub fn tested(&self) -> u32 { self.tested }
    #[wasm_bindgen(getter)]
    pub fn promoted(&self) -> u32 { self.promoted }
    #[wasm_bindgen(getter)]
    pub fn demoted(&self) -> u32 { self.demoted }
    #[wasm_bindgen(getter)]
    pub fn cluster_size(&self) -> u32 { self.cluster_size }
    #[wasm_bindgen(getter)]
    pub fn frontier_size(&self) -> u32 { self.frontier_size }
    /// Includes the out-of-bounds ring
    #[wasm_bindgen(getter)]
    pub fn excluded_size(&self) -> u32 { self.excluded_size }
}
