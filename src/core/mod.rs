//! Core utilities shared by domain and simulation code

pub mod error;
pub mod random;

pub use error::{EngineError, Result};
pub use random::Rng;
