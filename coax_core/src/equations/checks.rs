//! Input checks shared by the equations.
//!
//! A magnitude is valid only when it is finite and strictly positive, so
//! NaN and infinities fall into the same failure kind as zero.

use crate::errors::{CoaxError, CoaxResult};

#[inline]
fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

pub(crate) fn frequency(frequency_hz: f64) -> CoaxResult<()> {
    if !is_positive(frequency_hz) {
        return Err(CoaxError::NonPositiveFrequency { frequency_hz });
    }
    Ok(())
}

/// Vacuum (ε = 1) is the smallest accepted value.
pub(crate) fn permittivity(permittivity: f64) -> CoaxResult<()> {
    if !(permittivity.is_finite() && permittivity >= 1.0) {
        return Err(CoaxError::PermittivityBelowUnity { permittivity });
    }
    Ok(())
}

pub(crate) fn loss_tangent(loss_tangent: f64) -> CoaxResult<()> {
    if !is_positive(loss_tangent) {
        return Err(CoaxError::NonPositiveLossTangent { loss_tangent });
    }
    Ok(())
}

pub(crate) fn wavelength(wavelength_m: f64) -> CoaxResult<()> {
    if !is_positive(wavelength_m) {
        return Err(CoaxError::NonPositiveWavelength { wavelength_m });
    }
    Ok(())
}

pub(crate) fn conductivity(conductivity_s_per_m: f64) -> CoaxResult<()> {
    if !is_positive(conductivity_s_per_m) {
        return Err(CoaxError::NonPositiveConductivity { conductivity_s_per_m });
    }
    Ok(())
}

pub(crate) fn breakdown_field(breakdown_field_v_per_m: f64) -> CoaxResult<()> {
    if !is_positive(breakdown_field_v_per_m) {
        return Err(CoaxError::NonPositiveBreakdownField { breakdown_field_v_per_m });
    }
    Ok(())
}

/// Outer-greater-than-inner is checked before inner positivity.
pub(crate) fn diameters(inner_diameter_m: f64, outer_diameter_m: f64) -> CoaxResult<()> {
    if !(outer_diameter_m.is_finite() && outer_diameter_m > inner_diameter_m) {
        return Err(CoaxError::OuterDiameterNotGreater {
            inner_diameter_m,
            outer_diameter_m,
        });
    }
    if !is_positive(inner_diameter_m) {
        return Err(CoaxError::NonPositiveDiameter { inner_diameter_m });
    }
    Ok(())
}
