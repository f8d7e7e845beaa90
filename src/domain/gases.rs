//! Emission registry
//!
//! Static GWP20 constants for the three emission sources. No state; every
//! lookup is a table read.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::color::Rgba;
use crate::core::EngineError;

/// Gas released by one spawn event
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum GasType {
    /// Carbon dioxide (a flight)
    Co2,
    /// Methane (a cow)
    Methane,
    /// R-410A refrigerant (a window AC unit)
    Refrigerant,
}

pub const GAS_CO2: u8 = 0;
pub const GAS_CH4: u8 = 1;
pub const GAS_R410A: u8 = 2;

/// Immutable per-gas constants
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GasProfile {
    pub warming_potential_factor: f64,
    pub baseline_quantity: f64,
    /// `None` for gases that never decay
    pub lifetime_seconds: Option<f64>,
    pub color: Rgba,
    pub glow_radius: f64,
    /// Units per frame; negative is up
    pub ascent_rate: f64,
}

static CO2_PROFILE: GasProfile = GasProfile {
    warming_potential_factor: 1.0,
    baseline_quantity: 1.0,
    lifetime_seconds: None,
    color: Rgba::new(150.0, 150.0, 255.0, 0.7),
    glow_radius: 5.0,
    ascent_rate: -1.0,
};

static CH4_PROFILE: GasProfile = GasProfile {
    warming_potential_factor: 84.0,
    baseline_quantity: 0.1,
    lifetime_seconds: Some(12.0),
    color: Rgba::new(255.0, 100.0, 100.0, 0.7),
    glow_radius: 30.0,
    ascent_rate: -1.5,
};

static R410A_PROFILE: GasProfile = GasProfile {
    warming_potential_factor: 4340.0,
    baseline_quantity: 0.000567,
    lifetime_seconds: None,
    color: Rgba::new(148.0, 0.0, 211.0, 0.7),
    glow_radius: 20.0,
    ascent_rate: -1.0,
};

/// Registry lookup
#[inline]
pub fn lookup(gas: GasType) -> &'static GasProfile {
    match gas {
        GasType::Co2 => &CO2_PROFILE,
        GasType::Methane => &CH4_PROFILE,
        GasType::Refrigerant => &R410A_PROFILE,
    }
}

/// Radius before any per-type animation
#[inline]
pub fn base_radius(contribution: f64) -> f64 {
    3.0 + contribution * 1.5
}

impl GasProfile {
    /// Warming contribution of a fresh spawn
    #[inline]
    pub fn spawn_contribution(&self) -> f64 {
        self.warming_potential_factor * self.baseline_quantity
    }
}

impl GasType {
    pub const ALL: [GasType; 3] = [GasType::Co2, GasType::Methane, GasType::Refrigerant];

    pub fn id(self) -> u8 {
        match self {
            GasType::Co2 => GAS_CO2,
            GasType::Methane => GAS_CH4,
            GasType::Refrigerant => GAS_R410A,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            GasType::Co2 => "CO2",
            GasType::Methane => "CH4",
            GasType::Refrigerant => "R410a",
        }
    }

    #[inline]
    pub fn profile(self) -> &'static GasProfile {
        lookup(self)
    }
}

impl fmt::Display for GasType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GasType {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CO2" => Ok(GasType::Co2),
            "CH4" => Ok(GasType::Methane),
            "R410a" => Ok(GasType::Refrigerant),
            other => Err(EngineError::UnknownGas(other.to_string())),
        }
    }
}

impl TryFrom<u8> for GasType {
    type Error = EngineError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            GAS_CO2 => Ok(GasType::Co2),
            GAS_CH4 => Ok(GasType::Methane),
            GAS_R410A => Ok(GasType::Refrigerant),
            other => Err(EngineError::UnknownGasId(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_contributions_match_gwp20_table() {
        assert_eq!(lookup(GasType::Co2).spawn_contribution(), 1.0);
        assert_eq!(lookup(GasType::Methane).spawn_contribution(), 84.0 * 0.1);
        assert_eq!(lookup(GasType::Refrigerant).spawn_contribution(), 4340.0 * 0.000567);
    }

    #[test]
    fn only_methane_decays() {
        assert_eq!(lookup(GasType::Co2).lifetime_seconds, None);
        assert_eq!(lookup(GasType::Methane).lifetime_seconds, Some(12.0));
        assert_eq!(lookup(GasType::Refrigerant).lifetime_seconds, None);
    }

    #[test]
    fn names_and_ids_round_trip() {
        for gas in GasType::ALL {
            assert_eq!(gas.name().parse::<GasType>().unwrap(), gas);
            assert_eq!(GasType::try_from(gas.id()).unwrap(), gas);
        }
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert!(matches!("co2".parse::<GasType>(), Err(EngineError::UnknownGas(_))));
        assert!(matches!("".parse::<GasType>(), Err(EngineError::UnknownGas(_))));
        assert!(matches!(GasType::try_from(3), Err(EngineError::UnknownGasId(3))));
    }

    #[test]
    fn base_radius_formula() {
        assert_eq!(base_radius(1.0), 4.5);
        assert_eq!(base_radius(0.1), 3.0 + 0.1 * 1.5);
    }
}
