//! LED driver traits
//!
//! These traits define the interface between upper firmware layers
//! (indicator logic, host-controlled lighting) and the chip-specific
//! driver implementations.

pub mod led;

pub use led::{LedMatrix, RgbMatrix};
