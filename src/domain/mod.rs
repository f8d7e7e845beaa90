//! Domain - gas constants, particle records, background palette

pub mod color;
pub mod gases;
pub mod palette;
pub mod particle;
