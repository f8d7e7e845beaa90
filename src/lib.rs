//! Greenhouse Engine - emission particle simulation in WASM
//!
//! Particles for CO2, methane and R-410A rise through a canvas, methane
//! decays into CO2 after its atmospheric lifetime, and the running warming
//! potential tints the background.
//!
//! Architecture:
//! - core/       - error type, RNG
//! - domain/     - gas registry, particle records, palette
//! - simulation/ - state, per-frame step, wasm facade

pub mod core;
pub mod domain;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"Greenhouse WASM engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::EngineError;
pub use domain::gases::{lookup, GasProfile, GasType};
pub use domain::particle::{Drawable, LiveCounts, Particle, ParticleKind};
pub use simulation::{FrameOutput, Simulation, SimulationCore, SimulationSettings};

// Export gas ids for JS
#[wasm_bindgen]
pub fn gas_co2() -> u8 { domain::gases::GAS_CO2 }
#[wasm_bindgen]
pub fn gas_ch4() -> u8 { domain::gases::GAS_CH4 }
#[wasm_bindgen]
pub fn gas_r410a() -> u8 { domain::gases::GAS_R410A }
