//! Simulation - greenhouse gas particle engine
//!
//! Owns the live particle list and the running warming aggregate. A host
//! calls `spawn` from input handlers and `advance_frame` once per display
//! refresh; the frame output is a background tint, live counts, and draw
//! parameters for every surviving particle.
//!
//! Module map:
//! - init/      - construction and runtime settings
//! - commands/  - spawn / clear / resize
//! - step/      - the per-frame update
//! - render/    - drawable extraction for the JS renderer
//! - perf/      - opt-in step timing

use serde::Serialize;

use crate::core::{Result, Rng};
use crate::domain::color::Rgba;
use crate::domain::gases::GasType;
use crate::domain::palette;
use crate::domain::particle::{Drawable, LiveCounts, Particle};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/particle_update.rs"]
mod particle_update;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::{FrameStats, Simulation};
pub use perf_stats::PerfStats;
pub use render_extract::DRAWABLE_STRIDE;
pub use settings::SimulationSettings;

use perf_timer::PerfTimer;

/// What one `advance_frame` call hands to the renderer
#[derive(Clone, Copy, Debug)]
pub struct FrameOutput<'a> {
    /// Low-alpha overlay painted over the whole canvas
    pub background: Rgba,
    pub counts: LiveCounts,
    pub drawables: &'a [Drawable],
}

/// Summary for host debug overlays
#[derive(Clone, Debug, Serialize)]
pub struct Snapshot {
    pub frame: u64,
    pub particle_count: usize,
    pub total_warming_potential: f64,
    pub warming_ratio: f64,
    pub counts: LiveCounts,
    pub background: Rgba,
}

pub(crate) struct RenderBuffers {
    drawables: Vec<Drawable>,
    packed: Vec<f32>,
}

/// The simulation state
///
/// CO2-family particles bounce forever and are never removed, so the
/// particle list grows without bound under sustained CO2 emission.
pub struct SimulationCore {
    width: u32,
    height: u32,
    particles: Vec<Particle>,
    // Sum of live contributions, maintained incrementally
    total_warming_potential: f64,
    settings: SimulationSettings,
    rng: Rng,
    frame: u64,
    counts: LiveCounts,
    background: Rgba,
    render: RenderBuffers,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SimulationCore {
    /// Create a simulation for a canvas of the given size
    pub fn new(width: u32, height: u32) -> Self {
        init::create_simulation_core(width, height, crate::core::random::DEFAULT_SEED)
    }

    /// Same as `new` with an explicit RNG seed (replayable runs)
    pub fn with_seed(width: u32, height: u32, seed: u32) -> Self {
        init::create_simulation_core(width, height, seed)
    }

    pub fn width(&self) -> u32 { self.width }

    pub fn height(&self) -> u32 { self.height }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn particle_count(&self) -> usize { self.particles.len() }

    pub fn particles(&self) -> &[Particle] { &self.particles }

    pub fn total_warming_potential(&self) -> f64 { self.total_warming_potential }

    pub fn warming_ratio(&self) -> f64 {
        palette::warming_ratio(self.total_warming_potential, self.settings.max_warming_potential)
    }

    /// Counts from the last frame
    pub fn live_counts(&self) -> LiveCounts { self.counts }

    /// Background from the last frame
    pub fn background(&self) -> Rgba { self.background }

    /// Drawables from the last frame
    pub fn drawables(&self) -> &[Drawable] { &self.render.drawables }

    pub fn settings(&self) -> &SimulationSettings { &self.settings }

    /// Replace settings from a JSON document; missing fields take defaults
    pub fn load_settings_json(&mut self, json: &str) -> Result<()> {
        settings::load_settings_json(self, json)
    }

    pub fn apply_settings(&mut self, settings: SimulationSettings) -> Result<()> {
        settings::apply_settings(self, settings)
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Emit one particle of `gas` at a random x on the bottom edge
    pub fn spawn(&mut self, gas: GasType) {
        commands::spawn(self, gas);
    }

    /// Emit one particle of `gas` at a host-chosen position
    pub fn spawn_at(&mut self, gas: GasType, x: f64, y: f64) {
        commands::spawn_at(self, gas, x, y);
    }

    /// Drop every particle and reset the aggregate
    pub fn clear(&mut self) {
        commands::clear(self);
    }

    /// Change canvas bounds; particles keep their positions
    pub fn resize(&mut self, width: u32, height: u32) {
        commands::resize(self, width, height);
    }

    /// Advance one fixed time step (1 / frames_per_second simulated seconds)
    pub fn advance_frame(&mut self) -> FrameOutput<'_> {
        step::advance_frame(self);
        FrameOutput {
            background: self.background,
            counts: self.counts,
            drawables: &self.render.drawables,
        }
    }

    /// Pack last frame's drawables into the flat `f32` transfer buffer
    /// (`DRAWABLE_STRIDE` floats each) and return it
    pub fn pack_drawables(&mut self) -> &[f32] {
        render_extract::pack_drawables(&mut self.render)
    }

    /// Pointer to the packed buffer (for JS rendering)
    pub fn packed_drawables_ptr(&self) -> *const f32 {
        self.render.packed.as_ptr()
    }

    /// Packed buffer length in floats
    pub fn packed_drawables_len(&self) -> usize {
        self.render.packed.len()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            frame: self.frame,
            particle_count: self.particles.len(),
            total_warming_potential: self.total_warming_potential,
            warming_ratio: self.warming_ratio(),
            counts: self.counts,
            background: self.background,
        }
    }

    pub fn snapshot_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.snapshot())?)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
