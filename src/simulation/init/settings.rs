use serde::{Deserialize, Serialize};

use crate::core::{EngineError, Result};
use crate::domain::palette::{DEFAULT_MAX_WARMING_POTENTIAL, DEFAULT_OVERLAY_ALPHA};

use super::perf_stats::PerfStats;
use super::SimulationCore;

/// Tunables a host may override with a JSON document
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationSettings {
    /// Aggregate at which the background reaches the last color stop
    pub max_warming_potential: f64,
    /// Simulated frames per second; one frame advances age by its inverse
    pub frames_per_second: f64,
    /// Alpha of the per-frame background overlay
    pub overlay_alpha: f64,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            max_warming_potential: DEFAULT_MAX_WARMING_POTENTIAL,
            frames_per_second: 60.0,
            overlay_alpha: DEFAULT_OVERLAY_ALPHA,
        }
    }
}

impl SimulationSettings {
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: SimulationSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.max_warming_potential.is_finite() && self.max_warming_potential > 0.0) {
            return Err(EngineError::InvalidSettings(format!(
                "max_warming_potential must be positive, got {}",
                self.max_warming_potential
            )));
        }
        if !(self.frames_per_second.is_finite() && self.frames_per_second > 0.0) {
            return Err(EngineError::InvalidSettings(format!(
                "frames_per_second must be positive, got {}",
                self.frames_per_second
            )));
        }
        if !(0.0..=1.0).contains(&self.overlay_alpha) {
            return Err(EngineError::InvalidSettings(format!(
                "overlay_alpha must be within [0, 1], got {}",
                self.overlay_alpha
            )));
        }
        Ok(())
    }
}

pub(super) fn load_settings_json(sim: &mut SimulationCore, json: &str) -> Result<()> {
    let settings = SimulationSettings::from_json(json)?;
    apply_settings(sim, settings)
}

pub(super) fn apply_settings(sim: &mut SimulationCore, settings: SimulationSettings) -> Result<()> {
    settings.validate()?;
    log::info!("settings applied: {:?}", settings);
    sim.settings = settings;
    Ok(())
}

pub(super) fn enable_perf_metrics(sim: &mut SimulationCore, enabled: bool) {
    sim.perf_enabled = enabled;
    // Stale numbers from the last measured frame would read as current
    if !enabled {
        sim.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(sim: &SimulationCore) -> PerfStats {
    sim.perf_stats.clone()
}
