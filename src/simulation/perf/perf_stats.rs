use wasm_bindgen::prelude::*;

/// Snapshot of the last `advance_frame` (all zero unless perf is enabled)
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) particles_processed: u32,
    pub(super) particles_removed: u32,
    pub(super) decays: u32,
    pub(super) bounces: u32,
    pub(super) particle_count: u32,
    pub(super) drawables: u32,
    pub(super) total_warming_potential: f64,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn particles_processed(&self) -> u32 { self.particles_processed }
    #[wasm_bindgen(getter)]
    pub fn particles_removed(&self) -> u32 { self.particles_removed }
    #[wasm_bindgen(getter)]
    pub fn decays(&self) -> u32 { self.decays }
    #[wasm_bindgen(getter)]
    pub fn bounces(&self) -> u32 { self.bounces }
    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.particle_count }
    #[wasm_bindgen(getter)]
    pub fn drawables(&self) -> u32 { self.drawables }
    #[wasm_bindgen(getter)]
    pub fn total_warming_potential(&self) -> f64 { self.total_warming_potential }
}
