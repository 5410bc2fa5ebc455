//! # Coaxial Line Equations
//!
//! The formula library. Every function here is pure, takes `f64` arguments
//! in SI base units and returns `CoaxResult<f64>`. Inputs are validated at
//! the top of each function, before any arithmetic, so every function is
//! safe to call on its own.
//!
//! ## Modules
//!
//! - [`line`] - Wavelength, phase speed and bulk dielectric impedance
//! - [`attenuation`] - Dielectric, conductor and total losses (dB/m)
//! - [`strength`] - Geometric impedance, peak voltage and peak power
//! - [`registry`] - Equation metadata for the generated reference document
//!
//! ## Dependency Order
//!
//! ```text
//! wavelength_in_the_line ──► attenuation_coefficient_in_dielectric ─┐
//!                                                                    ├─► total_attenuation_coefficient
//! attenuation_coefficient_in_metal ─────────────────────────────────┘
//!
//! peak_voltage ──► peak_power
//! ```
//!
//! ## Assumptions
//!
//! - Relative permeability of the dielectric is 1
//! - Peak voltage and peak power ignore thermal effects; real operating
//!   limits are lower

pub mod attenuation;
pub mod line;
pub mod registry;
pub mod strength;

mod checks;

pub use attenuation::{
    attenuation_coefficient_in_dielectric,
    attenuation_coefficient_in_metal,
    total_attenuation_coefficient,
};
pub use line::{characteristic_resistance, phase_speed, wavelength_in_the_line};
pub use registry::{generate_equations_markdown, Equation, EquationCategory};
pub use strength::{peak_power, peak_voltage, wave_resistance};
