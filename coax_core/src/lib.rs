//! # coax_core - Coaxial Line Calculation Engine
//!
//! `coax_core` computes the derived electrical parameters of a coaxial
//! transmission line: wavelength, phase speed, impedances, losses and the
//! peak voltage and power the dielectric can hold.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions over `f64` values in SI base units
//! - **Validated**: Every function checks its own inputs before computing
//! - **Rich Errors**: One structured error variant per kind of invalid input
//! - **JSON-Friendly**: Batch input, results and errors implement Serialize/Deserialize
//!
//! ## Quick Start
//!
//! ```rust
//! use coax_core::{total_attenuation_coefficient, wave_resistance, CoaxError};
//!
//! // PTFE line, 2.1 mm inner / 7.3 mm outer, silver, 10 GHz
//! let z0 = wave_resistance(2.08, 2.1e-3, 7.3e-3).unwrap();
//! let alpha = total_attenuation_coefficient(2.5e-4, 1.0e10, 6.1e7, 2.08, 2.1e-3, 7.3e-3).unwrap();
//! assert!(z0 > 50.0 && alpha < 1.0);
//!
//! // Shield not larger than the inner conductor
//! let err = wave_resistance(2.08, 7.3e-3, 7.3e-3).unwrap_err();
//! assert!(matches!(err, CoaxError::OuterDiameterNotGreater { .. }));
//! ```
//!
//! ## Modules
//!
//! - [`equations`] - The nine line formulas and their registry
//! - [`calculations`] - Batch calculation in display units
//! - [`constants`] - Physical constants
//! - [`materials`] - Common dielectrics and conductor metals
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod constants;
pub mod equations;
pub mod errors;
pub mod materials;
pub mod units;

// Re-export commonly used items at crate root for convenience
pub use calculations::{calculate, CoaxialInput, CoaxialResult};
pub use equations::{
    attenuation_coefficient_in_dielectric,
    attenuation_coefficient_in_metal,
    characteristic_resistance,
    peak_power,
    peak_voltage,
    phase_speed,
    total_attenuation_coefficient,
    wave_resistance,
    wavelength_in_the_line,
};
pub use errors::{CoaxError, CoaxResult};
