//! # Physical Constants
//!
//! Constants shared by the line formulas. All values are in SI base units.
//!
//! Relative permeability of the dielectric is taken as 1 everywhere: the
//! insulating materials used in coaxial lines do not deviate meaningfully
//! from it, so only the vacuum permeability appears in the formulas.

use std::f64::consts::PI;

/// Speed of light in vacuum, m/s (exact by SI definition)
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// Vacuum permeability μ₀, H/m
pub const VACUUM_PERMEABILITY: f64 = 1.256_637_062_121_9e-6;

/// Vacuum permittivity ε₀, F/m
pub const VACUUM_PERMITTIVITY: f64 = 8.854_187_817_620_39e-12;

/// Impedance of free space in the engineering approximation 120π, Ω
pub const FREE_SPACE_IMPEDANCE: f64 = 120.0 * PI;

/// Nepers to decibels (≈ 20 / ln 10, rounded the way line handbooks do)
pub const NEPER_TO_DECIBEL: f64 = 8.68;
