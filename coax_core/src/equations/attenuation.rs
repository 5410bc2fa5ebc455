//! # Attenuation
//!
//! Per-unit-length losses of a coaxial line, returned in dB/m.
//!
//! Two loss mechanisms are modeled: dielectric loss in the filling and
//! skin-effect loss in the conductors. In decibels the two are additive, so
//! the total is their plain sum.
//!
//! ## Notation
//!
//! - `tanδ` = Loss tangent of the dielectric
//! - `σ` = Conductivity of the metal
//! - `d` = Inner conductor diameter, `D` = outer conductor (shield) diameter
//! - `R_s` = Surface resistance of the metal
//! - `α_d`, `α_m` = Dielectric and metal attenuation

use std::f64::consts::PI;

use crate::constants::{FREE_SPACE_IMPEDANCE, NEPER_TO_DECIBEL, VACUUM_PERMEABILITY};
use crate::errors::CoaxResult;

use super::checks;
use super::line::wavelength_in_the_line;

/// Calculate the attenuation caused by the dielectric
///
/// # Formula
/// α_d = tanδ · π / λ  (Np/m), converted with 8.68 dB/Np
///
/// # Arguments
/// * `loss_tangent` - Dielectric loss tangent (must be > 0)
/// * `wavelength_m` - Wavelength in the line, m (must be > 0)
///
/// # Returns
/// Attenuation in dB/m
///
/// # Example
/// ```rust
/// use coax_core::equations::attenuation::attenuation_coefficient_in_dielectric;
///
/// let alpha_d = attenuation_coefficient_in_dielectric(2.5e-4, 0.0208013).unwrap();
/// assert!((alpha_d - 0.328).abs() < 1.0e-3);
/// ```
pub fn attenuation_coefficient_in_dielectric(loss_tangent: f64, wavelength_m: f64) -> CoaxResult<f64> {
    checks::loss_tangent(loss_tangent)?;
    checks::wavelength(wavelength_m)?;

    let alpha_d = loss_tangent * PI / wavelength_m;
    Ok(alpha_d * NEPER_TO_DECIBEL)
}

/// Calculate the attenuation caused by the conductors
///
/// # Formula
/// ω = 2πf
/// R_s = √(ω·μ₀ / 2σ)
/// α_m = √ε · (R_s/d + R_s/D) / (120π · ln(D/d))  (Np/m), converted with 8.68 dB/Np
///
/// # Arguments
/// * `frequency_hz` - Operating frequency, Hz (must be > 0)
/// * `conductivity_s_per_m` - Metal conductivity, S/m (must be > 0)
/// * `permittivity` - Relative permittivity of the dielectric (must be ≥ 1)
/// * `inner_diameter_m` - Inner conductor diameter, m (must be > 0)
/// * `outer_diameter_m` - Shield inner diameter, m (must exceed `inner_diameter_m`)
///
/// # Returns
/// Attenuation in dB/m
pub fn attenuation_coefficient_in_metal(
    frequency_hz: f64,
    conductivity_s_per_m: f64,
    permittivity: f64,
    inner_diameter_m: f64,
    outer_diameter_m: f64,
) -> CoaxResult<f64> {
    checks::frequency(frequency_hz)?;
    checks::conductivity(conductivity_s_per_m)?;
    checks::permittivity(permittivity)?;
    checks::diameters(inner_diameter_m, outer_diameter_m)?;

    let omega = 2.0 * PI * frequency_hz;
    let surface_resistance = (omega * VACUUM_PERMEABILITY / (2.0 * conductivity_s_per_m)).sqrt();

    let alpha_m = permittivity.sqrt()
        * (surface_resistance / inner_diameter_m + surface_resistance / outer_diameter_m)
        / (FREE_SPACE_IMPEDANCE * (outer_diameter_m / inner_diameter_m).ln());

    Ok(alpha_m * NEPER_TO_DECIBEL)
}

/// Calculate the total attenuation of the line
///
/// Sum of [`attenuation_coefficient_in_dielectric`] (evaluated at the
/// in-line wavelength) and [`attenuation_coefficient_in_metal`]. All inputs
/// are validated here before the components re-check their own.
///
/// # Arguments
/// * `loss_tangent` - Dielectric loss tangent (must be > 0)
/// * `frequency_hz` - Operating frequency, Hz (must be > 0)
/// * `conductivity_s_per_m` - Metal conductivity, S/m (must be > 0)
/// * `permittivity` - Relative permittivity of the dielectric (must be ≥ 1)
/// * `inner_diameter_m` - Inner conductor diameter, m (must be > 0)
/// * `outer_diameter_m` - Shield inner diameter, m (must exceed `inner_diameter_m`)
///
/// # Returns
/// Attenuation in dB/m
///
/// # Example
/// ```rust
/// use coax_core::equations::attenuation::total_attenuation_coefficient;
///
/// let alpha = total_attenuation_coefficient(2.5e-4, 1.0e10, 6.1e7, 2.08, 2.1e-3, 7.3e-3).unwrap();
/// assert!((alpha - 0.744).abs() < 1.0e-3);
/// ```
pub fn total_attenuation_coefficient(
    loss_tangent: f64,
    frequency_hz: f64,
    conductivity_s_per_m: f64,
    permittivity: f64,
    inner_diameter_m: f64,
    outer_diameter_m: f64,
) -> CoaxResult<f64> {
    checks::loss_tangent(loss_tangent)?;
    checks::frequency(frequency_hz)?;
    checks::conductivity(conductivity_s_per_m)?;
    checks::permittivity(permittivity)?;
    checks::diameters(inner_diameter_m, outer_diameter_m)?;

    let wavelength = wavelength_in_the_line(frequency_hz, permittivity)?;
    let dielectric_losses = attenuation_coefficient_in_dielectric(loss_tangent, wavelength)?;
    let metal_losses = attenuation_coefficient_in_metal(
        frequency_hz,
        conductivity_s_per_m,
        permittivity,
        inner_diameter_m,
        outer_diameter_m,
    )?;

    Ok(dielectric_losses + metal_losses)
}
