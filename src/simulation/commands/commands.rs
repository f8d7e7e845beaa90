use crate::domain::gases::GasType;
use crate::domain::palette;
use crate::domain::particle::{LiveCounts, Particle};

use super::SimulationCore;

pub(super) fn spawn(sim: &mut SimulationCore, gas: GasType) {
    let x = sim.rng.unit() * sim.width as f64;
    let y = sim.height as f64;
    spawn_at(sim, gas, x, y);
}

pub(super) fn spawn_at(sim: &mut SimulationCore, gas: GasType, x: f64, y: f64) {
    let particle = Particle::new(gas, x, y);
    sim.total_warming_potential += particle.warming_contribution;
    log::debug!(
        "spawn {} at ({:.1}, {:.1}), total warming {:.4}",
        gas,
        x,
        y,
        sim.total_warming_potential
    );
    sim.particles.push(particle);
}

pub(super) fn clear(sim: &mut SimulationCore) {
    log::info!("clear: dropping {} particles", sim.particles.len());
    sim.particles.clear();
    sim.total_warming_potential = 0.0;
    sim.frame = 0;
    sim.counts = LiveCounts::default();
    sim.background = palette::background_color(0.0, sim.settings.overlay_alpha);
    sim.render.drawables.clear();
    sim.render.packed.clear();
}

pub(super) fn resize(sim: &mut SimulationCore, width: u32, height: u32) {
    log::info!("resize {}x{} -> {}x{}", sim.width, sim.height, width, height);
    sim.width = width;
    sim.height = height;
}
