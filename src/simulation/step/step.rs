use crate::domain::palette;
use crate::domain::particle::{Drawable, LiveCounts};

use super::particle_update::{update_particle, FrameBounds, ParticleFate, StepTally};
use super::{PerfTimer, SimulationCore};

pub(super) fn advance_frame(sim: &mut SimulationCore) {
    let perf_on = sim.perf_enabled;
    if perf_on {
        sim.perf_stats.reset();
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    // Painted beneath this frame's particles, so it reflects the aggregate
    // as it stood when the frame began
    let ratio = palette::warming_ratio(sim.total_warming_potential, sim.settings.max_warming_potential);
    sim.background = palette::background_color(ratio, sim.settings.overlay_alpha);

    let bounds = FrameBounds {
        width: sim.width as f64,
        height: sim.height as f64,
        frames_per_second: sim.settings.frames_per_second,
    };
    let mut counts = LiveCounts::default();
    let mut tally = StepTally::default();

    let total = &mut sim.total_warming_potential;
    let rng = &mut sim.rng;
    let drawables = &mut sim.render.drawables;
    drawables.clear();

    // retain_mut visits each particle exactly once and removes in place
    sim.particles.retain_mut(|p| match update_particle(p, &bounds, rng, total, &mut tally) {
        ParticleFate::Alive => {
            counts.tally(p.kind);
            drawables.push(Drawable::from(&*p));
            true
        }
        ParticleFate::Expired => false,
    });

    sim.counts = counts;

    if perf_on {
        sim.perf_stats.particles_processed = tally.processed;
        sim.perf_stats.particles_removed = tally.removed;
        sim.perf_stats.decays = tally.decays;
        sim.perf_stats.bounces = tally.bounces;
        sim.perf_stats.particle_count = sim.particles.len() as u32;
        sim.perf_stats.drawables = sim.render.drawables.len() as u32;
        sim.perf_stats.total_warming_potential = sim.total_warming_potential;
        if let Some(start) = step_start {
            sim.perf_stats.step_ms = start.elapsed_ms();
        }
    }

    sim.frame += 1;
}
