//! # Impedance and Electrical Strength
//!
//! Geometry-dependent line impedance and the peak voltage and power the
//! dielectric can hold before breakdown.
//!
//! Peak figures are instantaneous maxima at the breakdown field. Heating is
//! not modeled, so real operating limits must stay well below them.

use crate::errors::CoaxResult;

use super::checks;

/// Calculate the wave resistance (characteristic impedance) of the line
///
/// # Formula
/// Z₀ = 60 / √ε · ln(D/d)
///
/// # Arguments
/// * `permittivity` - Relative permittivity of the dielectric (must be ≥ 1)
/// * `inner_diameter_m` - Inner conductor diameter, m (must be > 0)
/// * `outer_diameter_m` - Shield inner diameter, m (must exceed `inner_diameter_m`)
///
/// # Returns
/// Impedance in ohms
///
/// # Example
/// ```rust
/// use coax_core::equations::strength::wave_resistance;
///
/// let z0 = wave_resistance(2.08, 2.1e-3, 7.3e-3).unwrap();
/// assert!((z0 - 51.834).abs() < 1.0e-3);
/// ```
pub fn wave_resistance(permittivity: f64, inner_diameter_m: f64, outer_diameter_m: f64) -> CoaxResult<f64> {
    checks::permittivity(permittivity)?;
    checks::diameters(inner_diameter_m, outer_diameter_m)?;

    Ok(60.0 / permittivity.sqrt() * (outer_diameter_m / inner_diameter_m).ln())
}

/// Calculate the peak voltage at the dielectric breakdown field
///
/// # Formula
/// U = E_p · (D/2) · ln(D/d)
///
/// # Arguments
/// * `breakdown_field_v_per_m` - Dielectric breakdown field strength, V/m (must be > 0)
/// * `inner_diameter_m` - Inner conductor diameter, m (must be > 0)
/// * `outer_diameter_m` - Shield inner diameter, m (must exceed `inner_diameter_m`)
///
/// # Returns
/// Voltage in volts (peak, no thermal derating)
pub fn peak_voltage(breakdown_field_v_per_m: f64, inner_diameter_m: f64, outer_diameter_m: f64) -> CoaxResult<f64> {
    checks::breakdown_field(breakdown_field_v_per_m)?;
    checks::diameters(inner_diameter_m, outer_diameter_m)?;

    Ok(breakdown_field_v_per_m * (outer_diameter_m / 2.0) * (outer_diameter_m / inner_diameter_m).ln())
}

/// Calculate the peak power at the dielectric breakdown field
///
/// # Formula
/// P = (U² / 120) · √(ε / ln(D/d)), with U from [`peak_voltage`]
///
/// # Arguments
/// * `permittivity` - Relative permittivity of the dielectric (must be ≥ 1)
/// * `breakdown_field_v_per_m` - Dielectric breakdown field strength, V/m (must be > 0)
/// * `inner_diameter_m` - Inner conductor diameter, m (must be > 0)
/// * `outer_diameter_m` - Shield inner diameter, m (must exceed `inner_diameter_m`)
///
/// # Returns
/// Power in watts (peak, no thermal derating)
pub fn peak_power(
    permittivity: f64,
    breakdown_field_v_per_m: f64,
    inner_diameter_m: f64,
    outer_diameter_m: f64,
) -> CoaxResult<f64> {
    checks::permittivity(permittivity)?;
    checks::breakdown_field(breakdown_field_v_per_m)?;
    checks::diameters(inner_diameter_m, outer_diameter_m)?;

    let u = peak_voltage(breakdown_field_v_per_m, inner_diameter_m, outer_diameter_m)?;
    let log_ratio = (outer_diameter_m / inner_diameter_m).ln();

    Ok((u * u / 120.0) * (permittivity / log_ratio).sqrt())
}
