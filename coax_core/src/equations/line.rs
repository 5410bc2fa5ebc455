//! # Line Basics
//!
//! Propagation quantities that depend only on the dielectric filling and the
//! operating frequency.
//!
//! ## Notation
//!
//! - `c` = Speed of light in vacuum
//! - `f` = Operating frequency
//! - `ε` = Relative permittivity of the dielectric
//! - `λ₀` = Free-space wavelength, `λ` = wavelength in the line

use crate::constants::{FREE_SPACE_IMPEDANCE, SPEED_OF_LIGHT};
use crate::errors::{CoaxError, CoaxResult};

use super::checks;

/// Calculate the wavelength inside the line
///
/// # Formula
/// λ₀ = c / f
/// λ = λ₀ / √ε
///
/// # Arguments
/// * `frequency_hz` - Operating frequency, Hz (must be > 0)
/// * `permittivity` - Relative permittivity of the dielectric (must be ≥ 1)
///
/// # Returns
/// Wavelength in meters. A frequency so small that `c / f` overflows is
/// reported as [`CoaxError::NonPositiveFrequency`].
///
/// # Example
/// ```rust
/// use coax_core::equations::line::wavelength_in_the_line;
///
/// // PTFE-filled line at 10 GHz
/// let lambda = wavelength_in_the_line(1.0e10, 2.08).unwrap();
/// assert!((lambda - 0.0208).abs() < 1.0e-4);
/// ```
pub fn wavelength_in_the_line(frequency_hz: f64, permittivity: f64) -> CoaxResult<f64> {
    checks::frequency(frequency_hz)?;
    checks::permittivity(permittivity)?;

    let lambda_0 = SPEED_OF_LIGHT / frequency_hz;
    let lambda = lambda_0 / permittivity.sqrt();

    // Subnormal frequencies overflow c/f
    if !lambda.is_finite() {
        return Err(CoaxError::NonPositiveFrequency { frequency_hz });
    }
    Ok(lambda)
}

/// Calculate the phase speed of the wave along the line
///
/// # Formula
/// v = c / √ε
///
/// # Arguments
/// * `permittivity` - Relative permittivity of the dielectric (must be ≥ 1)
///
/// # Returns
/// Phase speed in m/s. Equals `c` for an air-filled line.
pub fn phase_speed(permittivity: f64) -> CoaxResult<f64> {
    checks::permittivity(permittivity)?;

    Ok(SPEED_OF_LIGHT / permittivity.sqrt())
}

/// Calculate the characteristic resistance of the dielectric medium
///
/// This is the bulk impedance of the filling, independent of conductor
/// geometry. For the line's own impedance see
/// [`wave_resistance`](super::strength::wave_resistance).
///
/// # Formula
/// Z = 120π / √ε
///
/// # Arguments
/// * `permittivity` - Relative permittivity of the dielectric (must be ≥ 1)
///
/// # Returns
/// Impedance in ohms
pub fn characteristic_resistance(permittivity: f64) -> CoaxResult<f64> {
    checks::permittivity(permittivity)?;

    Ok(FREE_SPACE_IMPEDANCE / permittivity.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wavelength_positive() {
        for (f, eps) in [(1.0e6, 2.0), (1.0e9, 1.0), (7.0e8, 3.5)] {
            assert!(wavelength_in_the_line(f, eps).unwrap() > 0.0);
        }
    }

    #[test]
    fn test_wavelength_reference_values() {
        let lambda = wavelength_in_the_line(8.5e9, 2.08).unwrap();
        assert!((lambda - 0.0244721).abs() < 1.0e-4);

        let lambda = wavelength_in_the_line(1.0e10, 2.08).unwrap();
        assert!((lambda - 0.0208013).abs() < 1.0e-4);
    }

    #[test]
    fn test_wavelength_invalid_inputs() {
        assert_eq!(
            wavelength_in_the_line(0.0, 2.08),
            Err(CoaxError::NonPositiveFrequency { frequency_hz: 0.0 })
        );
        assert_eq!(
            wavelength_in_the_line(1.0e9, 0.5),
            Err(CoaxError::PermittivityBelowUnity { permittivity: 0.5 })
        );
        // Frequency is checked first
        let err = wavelength_in_the_line(-1.0, 0.5).unwrap_err();
        assert_eq!(err.error_code(), "NON_POSITIVE_FREQUENCY");
    }

    #[test]
    fn test_wavelength_overflow_reported_as_frequency() {
        assert_eq!(
            wavelength_in_the_line(1.0e-310, 2.08),
            Err(CoaxError::NonPositiveFrequency { frequency_hz: 1.0e-310 })
        );
        assert!(wavelength_in_the_line(f64::MIN_POSITIVE, 1.0).is_err());
        assert!(wavelength_in_the_line(1.0e-290, 1.0).unwrap().is_finite());
    }

    #[test]
    fn test_phase_speed() {
        for eps in [2.0, 1.0, 3.5] {
            assert!(phase_speed(eps).unwrap() > 0.0);
        }
        assert!((phase_speed(1.0).unwrap() - SPEED_OF_LIGHT).abs() <= 1.0);
        assert!((phase_speed(4.0).unwrap() - SPEED_OF_LIGHT / 2.0).abs() <= 1.0);
    }

    #[test]
    fn test_phase_speed_rejects_sub_unity() {
        assert!(phase_speed(0.999_999).is_err());
        assert!(phase_speed(1.0).is_ok());
    }

    #[test]
    fn test_characteristic_resistance() {
        for eps in [2.0, 1.0, 3.5] {
            assert!(characteristic_resistance(eps).unwrap() > 0.0);
        }
        let z = characteristic_resistance(2.08).unwrap();
        assert!((z - 261.3963).abs() < 1.0e-3);
    }

    #[test]
    fn test_characteristic_resistance_rejects_sub_unity() {
        let err = characteristic_resistance(0.5).unwrap_err();
        assert_eq!(err.field(), "permittivity");
    }
}
