//! Per-particle frame update
//!
//! Order within a frame: integrate, age, decay, bounce, expire, animate.
//! The caller tallies and draws whatever survives.

use crate::core::Rng;
use crate::domain::gases::{base_radius, lookup, GasType};
use crate::domain::particle::{Particle, ParticleKind};

/// Canvas bounds and clock for one frame
pub(super) struct FrameBounds {
    pub(super) width: f64,
    pub(super) height: f64,
    pub(super) frames_per_second: f64,
}

/// Per-frame event counters (feed perf stats)
#[derive(Default)]
pub(super) struct StepTally {
    pub(super) processed: u32,
    pub(super) removed: u32,
    pub(super) decays: u32,
    pub(super) bounces: u32,
}

#[derive(Debug, PartialEq, Eq)]
pub(super) enum ParticleFate {
    Alive,
    Expired,
}

pub(super) fn update_particle(
    p: &mut Particle,
    bounds: &FrameBounds,
    rng: &mut Rng,
    total_warming_potential: &mut f64,
    tally: &mut StepTally,
) -> ParticleFate {
    tally.processed += 1;

    p.y += p.vy;
    p.x += p.vx;
    p.age_ticks = p.age_ticks.saturating_add(1);
    let age = p.age_seconds(bounds.frames_per_second);

    if let Some(next) = p.kind.decayed(age) {
        apply_decay(p, next, rng, total_warming_potential);
        tally.decays += 1;
    }

    if p.kind.is_co2_family() {
        if bounce(p, bounds, rng) {
            tally.bounces += 1;
        }
    } else if p.y < -p.radius {
        *total_warming_potential -= p.warming_contribution;
        tally.removed += 1;
        log::trace!("{:?} left the canvas, -{}", p.kind, p.warming_contribution);
        return ParticleFate::Expired;
    }

    match p.kind {
        ParticleKind::Methane { .. } => p.x += rng.symmetric(2.0),
        ParticleKind::Refrigerant { base_radius: resting } => {
            p.radius = resting * (1.0 + (age * 5.0).sin() * 0.2);
        }
        ParticleKind::Co2 | ParticleKind::DecayedCo2 => {}
    }

    ParticleFate::Alive
}

/// Methane -> CO2-equivalent
///
/// The decayed particle takes CO2's potency applied to methane's own
/// baseline quantity, and the aggregate drops by the difference.
fn apply_decay(p: &mut Particle, next: ParticleKind, rng: &mut Rng, total: &mut f64) {
    let ch4 = lookup(GasType::Methane);
    let co2 = lookup(GasType::Co2);

    *total -= ch4.warming_potential_factor * ch4.baseline_quantity
        - co2.warming_potential_factor * ch4.baseline_quantity;

    p.kind = next;
    p.color = co2.color;
    p.warming_contribution = co2.warming_potential_factor * ch4.baseline_quantity;
    p.radius = base_radius(p.warming_contribution);
    p.vx = rng.symmetric(1.0);

    log::trace!("methane decayed at tick {}", p.age_ticks);
}

/// Reflect off canvas edges; returns true if either axis flipped
fn bounce(p: &mut Particle, bounds: &FrameBounds, rng: &mut Rng) -> bool {
    let mut flipped = false;

    if (p.y < p.radius && p.vy < 0.0) || (p.y > bounds.height - p.radius && p.vy > 0.0) {
        p.vy = -p.vy;
        p.vx = rng.symmetric(1.0);
        flipped = true;
    }

    // Independent of the vertical check; sees the fresh vx
    if (p.x < p.radius && p.vx < 0.0) || (p.x > bounds.width - p.radius && p.vx > 0.0) {
        p.vx = -p.vx;
        flipped = true;
    }

    flipped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> FrameBounds {
        FrameBounds { width: 200.0, height: 200.0, frames_per_second: 60.0 }
    }

    #[test]
    fn co2_reverses_at_top_edge() {
        let mut rng = Rng::new(1);
        let mut total = 1.0;
        let mut tally = StepTally::default();
        let mut p = Particle::new(GasType::Co2, 100.0, 4.0);

        let fate = update_particle(&mut p, &bounds(), &mut rng, &mut total, &mut tally);

        assert_eq!(fate, ParticleFate::Alive);
        assert_eq!(p.vy, 1.0);
        assert!((-1.0..1.0).contains(&p.vx));
        assert_eq!(tally.bounces, 1);
    }

    #[test]
    fn co2_reverses_horizontally_at_right_edge() {
        let mut rng = Rng::new(1);
        let mut total = 1.0;
        let mut tally = StepTally::default();
        let mut p = Particle::new(GasType::Co2, 199.0, 100.0);
        p.vx = 0.5;

        update_particle(&mut p, &bounds(), &mut rng, &mut total, &mut tally);

        assert_eq!(p.vx, -0.5);
        assert_eq!(p.vy, -1.0);
    }

    #[test]
    fn refrigerant_expires_above_top_and_releases_contribution() {
        let mut rng = Rng::new(1);
        let mut tally = StepTally::default();
        let mut p = Particle::new(GasType::Refrigerant, 50.0, -p_radius() + 0.5);
        let mut total = 10.0;
        let contribution = p.warming_contribution;

        let fate = update_particle(&mut p, &bounds(), &mut rng, &mut total, &mut tally);

        assert_eq!(fate, ParticleFate::Expired);
        assert_eq!(total, 10.0 - contribution);
        assert_eq!(tally.removed, 1);
    }

    #[test]
    fn methane_does_not_bounce() {
        let mut rng = Rng::new(1);
        let mut total = 8.4;
        let mut tally = StepTally::default();
        let mut p = Particle::new(GasType::Methane, 100.0, 2.0);

        update_particle(&mut p, &bounds(), &mut rng, &mut total, &mut tally);

        assert_eq!(p.vy, -1.5);
        assert_eq!(tally.bounces, 0);
    }

    #[test]
    fn refrigerant_radius_breathes_from_base() {
        let mut rng = Rng::new(1);
        let mut total = 0.0;
        let mut tally = StepTally::default();
        let mut p = Particle::new(GasType::Refrigerant, 100.0, 150.0);
        let base = p.radius;

        for _ in 0..30 {
            update_particle(&mut p, &bounds(), &mut rng, &mut total, &mut tally);
        }

        let age = 30.0 / 60.0;
        assert!((p.radius - base * (1.0 + (age * 5.0_f64).sin() * 0.2)).abs() < 1e-12);
    }

    fn p_radius() -> f64 {
        Particle::new(GasType::Refrigerant, 0.0, 0.0).radius
    }

    fn step(p: &mut Particle, rng: &mut Rng) -> ParticleFate {
        let mut total = p.warming_contribution;
        let mut tally = StepTally::default();
        update_particle(p, &bounds(), rng, &mut total, &mut tally)
    }

    #[test]
    fn corner_bounce_flips_both_axes_from_fresh_vx() {
        let mut rng = Rng::new(5);
        let fresh = rng.clone().symmetric(1.0);
        let mut p = Particle::new(GasType::Co2, 1.0, 198.0);
        p.vx = -0.5;
        p.vy = 1.0;

        step(&mut p, &mut rng);

        assert_eq!(p.vy, -1.0);
        // Horizontal check ran against the fresh vx, not the incoming -0.5
        let expected = if fresh < 0.0 { -fresh } else { fresh };
        assert_eq!(p.vx, expected);
        assert!(p.vx >= 0.0);
    }

    #[test]
    fn co2_reverses_at_bottom_edge() {
        let mut rng = Rng::new(2);
        let mut p = Particle::new(GasType::Co2, 100.0, 197.0);
        p.vy = 1.0;

        step(&mut p, &mut rng);

        assert_eq!(p.y, 198.0);
        assert_eq!(p.vy, -1.0);
        assert!((-1.0..1.0).contains(&p.vx));
    }

    #[test]
    fn co2_reverses_horizontally_at_left_edge() {
        let mut rng = Rng::new(3);
        let mut p = Particle::new(GasType::Co2, 3.0, 100.0);
        p.vx = -1.0;

        step(&mut p, &mut rng);

        assert_eq!(p.x, 2.0);
        assert_eq!(p.vx, 1.0);
        assert_eq!(p.vy, -1.0);
    }

    #[test]
    fn decayed_methane_drifts_by_vx_without_jitter() {
        for seed in 1..50 {
            let mut rng = Rng::new(seed);
            let mut p = Particle::new(GasType::Methane, 100.0, 150.0);
            p.age_ticks = 720;

            step(&mut p, &mut rng);
            assert_eq!(p.kind, ParticleKind::DecayedCo2);
            assert!((-1.0..1.0).contains(&p.vx));

            let x0 = p.x;
            let vx = p.vx;
            step(&mut p, &mut rng);
            assert_eq!(p.x, x0 + vx);
        }
    }

    #[test]
    fn methane_jitter_stays_within_two_units() {
        for seed in 1..200 {
            let mut rng = Rng::new(seed);
            let jitter = rng.clone().symmetric(2.0);
            let mut p = Particle::new(GasType::Methane, 100.0, 150.0);

            step(&mut p, &mut rng);

            assert!((-2.0..2.0).contains(&jitter));
            assert_eq!(p.x, 100.0 + jitter);
            assert_eq!(p.vx, 0.0);
        }
    }
}
