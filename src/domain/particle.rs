//! Particle record and kind transitions

use serde::Serialize;

use super::color::Rgba;
use super::gases::{base_radius, lookup, GasType};

/// Particle kind with per-variant data
///
/// `DecayedCo2` is terminal and behaves exactly like `Co2`; only the kind id
/// differs so a host can tell decayed methane apart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParticleKind {
    Co2,
    Methane { lifetime: f64 },
    Refrigerant { base_radius: f64 },
    DecayedCo2,
}

pub const KIND_CO2: u8 = 0;
pub const KIND_CH4: u8 = 1;
pub const KIND_R410A: u8 = 2;
pub const KIND_CO2_DECAYED: u8 = 3;

impl ParticleKind {
    /// Decay transition; `Some` only for methane strictly past its lifetime
    #[inline]
    pub fn decayed(self, age_seconds: f64) -> Option<ParticleKind> {
        match self {
            ParticleKind::Methane { lifetime } if age_seconds > lifetime => {
                Some(ParticleKind::DecayedCo2)
            }
            _ => None,
        }
    }

    #[inline]
    pub fn is_co2_family(self) -> bool {
        matches!(self, ParticleKind::Co2 | ParticleKind::DecayedCo2)
    }

    /// Counter bucket shown to the user
    #[inline]
    pub fn category(self) -> GasType {
        match self {
            ParticleKind::Co2 | ParticleKind::DecayedCo2 => GasType::Co2,
            ParticleKind::Methane { .. } => GasType::Methane,
            ParticleKind::Refrigerant { .. } => GasType::Refrigerant,
        }
    }

    /// Draw glow intensity (canvas shadow blur)
    #[inline]
    pub fn glow(self) -> f64 {
        lookup(self.category()).glow_radius
    }

    pub fn id(self) -> u8 {
        match self {
            ParticleKind::Co2 => KIND_CO2,
            ParticleKind::Methane { .. } => KIND_CH4,
            ParticleKind::Refrigerant { .. } => KIND_R410A,
            ParticleKind::DecayedCo2 => KIND_CO2_DECAYED,
        }
    }
}

/// One emission event
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    /// Frames since spawn; age in seconds is `age_ticks / frames_per_second`
    pub age_ticks: u32,
    pub kind: ParticleKind,
    pub warming_contribution: f64,
    pub radius: f64,
    pub color: Rgba,
}

impl Particle {
    /// Fresh particle at rest horizontally, rising at the gas's ascent rate
    pub fn new(gas: GasType, x: f64, y: f64) -> Self {
        let profile = lookup(gas);
        let contribution = profile.spawn_contribution();
        let radius = base_radius(contribution);
        let kind = match gas {
            GasType::Co2 => ParticleKind::Co2,
            GasType::Methane => ParticleKind::Methane {
                lifetime: profile.lifetime_seconds.unwrap_or(f64::INFINITY),
            },
            GasType::Refrigerant => ParticleKind::Refrigerant { base_radius: radius },
        };

        Self {
            x,
            y,
            vx: 0.0,
            vy: profile.ascent_rate,
            age_ticks: 0,
            kind,
            warming_contribution: contribution,
            radius,
            color: profile.color,
        }
    }

    #[inline]
    pub fn age_seconds(&self, frames_per_second: f64) -> f64 {
        self.age_ticks as f64 / frames_per_second
    }
}

/// Per-frame draw parameters
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Drawable {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: Rgba,
    pub glow: f64,
    pub kind: u8,
}

impl From<&Particle> for Drawable {
    fn from(p: &Particle) -> Self {
        Self {
            x: p.x,
            y: p.y,
            radius: p.radius,
            color: p.color,
            glow: p.kind.glow(),
            kind: p.kind.id(),
        }
    }
}

/// Live particles per displayed category
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LiveCounts {
    pub co2: u32,
    pub ch4: u32,
    pub r410a: u32,
}

impl LiveCounts {
    #[inline]
    pub fn tally(&mut self, kind: ParticleKind) {
        match kind.category() {
            GasType::Co2 => self.co2 += 1,
            GasType::Methane => self.ch4 += 1,
            GasType::Refrigerant => self.r410a += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.co2 + self.ch4 + self.r410a
    }
}
