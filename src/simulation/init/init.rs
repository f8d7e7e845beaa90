use crate::core::Rng;
use crate::domain::palette;
use crate::domain::particle::LiveCounts;

use super::perf_stats::PerfStats;
use super::settings::SimulationSettings;
use super::RenderBuffers;
use super::SimulationCore;

pub(super) fn create_simulation_core(width: u32, height: u32, seed: u32) -> SimulationCore {
    let settings = SimulationSettings::default();
    let background = palette::background_color(0.0, settings.overlay_alpha);

    log::debug!("simulation created: {}x{}, seed {}", width, height, seed);

    SimulationCore {
        width,
        height,
        particles: Vec::with_capacity(256),
        total_warming_potential: 0.0,
        settings,
        rng: Rng::new(seed),
        frame: 0,
        counts: LiveCounts::default(),
        background,

        render: RenderBuffers {
            drawables: Vec::with_capacity(256),
            // Grown on demand by `pack_drawables`
            packed: Vec::new(),
        },
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
