use wasm_bindgen::prelude::*;

use crate::core::EngineError;
use crate::domain::gases::GasType;

use super::perf_stats::PerfStats;
use super::render_extract::DRAWABLE_STRIDE;
use super::{FrameOutput, SimulationCore};

fn to_js(e: EngineError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Per-frame result for the JS side: background overlay and counter labels
#[wasm_bindgen]
#[derive(Clone, Copy, Debug)]
pub struct FrameStats {
    co2_count: u32,
    ch4_count: u32,
    r410a_count: u32,
    background_r: f64,
    background_g: f64,
    background_b: f64,
    background_a: f64,
    drawable_count: u32,
}

impl From<FrameOutput<'_>> for FrameStats {
    fn from(out: FrameOutput<'_>) -> Self {
        Self {
            co2_count: out.counts.co2,
            ch4_count: out.counts.ch4,
            r410a_count: out.counts.r410a,
            background_r: out.background.r,
            background_g: out.background.g,
            background_b: out.background.b,
            background_a: out.background.a,
            drawable_count: out.drawables.len() as u32,
        }
    }
}

#[wasm_bindgen]
impl FrameStats {
    #[wasm_bindgen(getter)]
    pub fn co2_count(&self) -> u32 { self.co2_count }
    #[wasm_bindgen(getter)]
    pub fn ch4_count(&self) -> u32 { self.ch4_count }
    #[wasm_bindgen(getter)]
    pub fn r410a_count(&self) -> u32 { self.r410a_count }

    #[wasm_bindgen(getter)]
    pub fn background_r(&self) -> f64 { self.background_r }
    #[wasm_bindgen(getter)]
    pub fn background_g(&self) -> f64 { self.background_g }
    #[wasm_bindgen(getter)]
    pub fn background_b(&self) -> f64 { self.background_b }
    #[wasm_bindgen(getter)]
    pub fn background_a(&self) -> f64 { self.background_a }

    #[wasm_bindgen(getter)]
    pub fn drawable_count(&self) -> u32 { self.drawable_count }
}

#[wasm_bindgen]
pub struct Simulation {
    core: SimulationCore,
}

#[wasm_bindgen]
impl Simulation {
    /// Create a simulation for a canvas of the given size
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            core: SimulationCore::new(width, height),
        }
    }

    #[wasm_bindgen(js_name = withSeed)]
    pub fn with_seed(width: u32, height: u32, seed: u32) -> Self {
        Self {
            core: SimulationCore::with_seed(width, height, seed),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> usize { self.core.particle_count() }

    #[wasm_bindgen(getter)]
    pub fn total_warming_potential(&self) -> f64 { self.core.total_warming_potential() }

    #[wasm_bindgen(getter)]
    pub fn warming_ratio(&self) -> f64 { self.core.warming_ratio() }

    /// Call when the canvas element is resized
    pub fn resize(&mut self, width: u32, height: u32) {
        self.core.resize(width, height);
    }

    /// Emit by name: "CO2", "CH4" or "R410a". Throws on anything else.
    pub fn spawn(&mut self, gas: &str) -> Result<(), JsValue> {
        let gas: GasType = gas.parse().map_err(to_js)?;
        self.core.spawn(gas);
        Ok(())
    }

    /// Emit by id (see `gas_co2` / `gas_ch4` / `gas_r410a`). Throws on anything else.
    pub fn spawn_id(&mut self, id: u8) -> Result<(), JsValue> {
        let gas = GasType::try_from(id).map_err(to_js)?;
        self.core.spawn(gas);
        Ok(())
    }

    /// Clear all particles
    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Advance one frame and refresh the packed drawable buffer.
    /// Re-read `drawables_ptr` afterwards; the buffer may have moved.
    pub fn advance_frame(&mut self) -> FrameStats {
        let stats = FrameStats::from(self.core.advance_frame());
        self.core.pack_drawables();
        stats
    }

    /// Last frame's overlay as a canvas `fillStyle`
    pub fn background_css(&self) -> String {
        self.core.background().to_css()
    }

    /// Get pointer to packed drawables (for JS rendering)
    pub fn drawables_ptr(&self) -> *const f32 {
        self.core.packed_drawables_ptr()
    }

    /// Packed drawables length in floats
    pub fn drawables_len(&self) -> usize {
        self.core.packed_drawables_len()
    }

    pub fn drawable_stride(&self) -> usize {
        DRAWABLE_STRIDE
    }

    pub fn load_settings(&mut self, json: String) -> Result<(), JsValue> {
        self.core.load_settings_json(&json).map_err(to_js)
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        self.core.snapshot_json().map_err(to_js)
    }
}

impl Simulation {
    pub fn core(&self) -> &SimulationCore {
        &self.core
    }
}
