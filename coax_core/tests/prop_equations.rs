//! Property-based tests for the line equations using proptest.
//!
//! Covers: positivity of every result over valid inputs, additivity of the
//! total attenuation, and rejection of each kind of invalid input.

use coax_core::{
    attenuation_coefficient_in_dielectric, attenuation_coefficient_in_metal, calculate,
    characteristic_resistance, peak_power, peak_voltage, phase_speed, total_attenuation_coefficient,
    wave_resistance, wavelength_in_the_line, CoaxError, CoaxResult, CoaxialInput,
};
use proptest::prelude::*;

/// Error code of a failed call, `None` on success.
fn error_code(result: CoaxResult<f64>) -> Option<&'static str> {
    result.err().map(|e| e.error_code())
}

/// Inner and outer diameters in meters with D > d.
fn diameters() -> impl Strategy<Value = (f64, f64)> {
    (1.0e-4f64..1.0e-1, 1.001f64..20.0).prop_map(|(d, ratio)| (d, d * ratio))
}

// ── Positivity over valid inputs ─────────────────────────────────────

proptest! {
    #[test]
    fn line_basics_positive(
        f in 1.0e3f64..1.0e12,
        eps in 1.0f64..100.0,
    ) {
        prop_assert!(wavelength_in_the_line(f, eps).unwrap() > 0.0);
        prop_assert!(phase_speed(eps).unwrap() > 0.0);
        prop_assert!(characteristic_resistance(eps).unwrap() > 0.0);
    }

    #[test]
    fn attenuation_positive(
        tan_delta in 1.0e-6f64..1.0e-1,
        f in 1.0e3f64..1.0e12,
        sigma in 1.0e5f64..1.0e8,
        eps in 1.0f64..100.0,
        (d, big_d) in diameters(),
    ) {
        let lambda = wavelength_in_the_line(f, eps).unwrap();
        prop_assert!(attenuation_coefficient_in_dielectric(tan_delta, lambda).unwrap() > 0.0);
        prop_assert!(attenuation_coefficient_in_metal(f, sigma, eps, d, big_d).unwrap() > 0.0);
        prop_assert!(total_attenuation_coefficient(tan_delta, f, sigma, eps, d, big_d).unwrap() > 0.0);
    }

    #[test]
    fn strength_positive(
        eps in 1.0f64..100.0,
        e_p in 1.0e5f64..1.0e9,
        (d, big_d) in diameters(),
    ) {
        prop_assert!(wave_resistance(eps, d, big_d).unwrap() > 0.0);
        prop_assert!(peak_voltage(e_p, d, big_d).unwrap() > 0.0);
        prop_assert!(peak_power(eps, e_p, d, big_d).unwrap() > 0.0);
    }

    /// Total attenuation is exactly the sum of its two components.
    #[test]
    fn total_attenuation_additive(
        tan_delta in 1.0e-6f64..1.0e-1,
        f in 1.0e3f64..1.0e12,
        sigma in 1.0e5f64..1.0e8,
        eps in 1.0f64..100.0,
        (d, big_d) in diameters(),
    ) {
        let lambda = wavelength_in_the_line(f, eps).unwrap();
        let alpha_d = attenuation_coefficient_in_dielectric(tan_delta, lambda).unwrap();
        let alpha_m = attenuation_coefficient_in_metal(f, sigma, eps, d, big_d).unwrap();
        let total = total_attenuation_coefficient(tan_delta, f, sigma, eps, d, big_d).unwrap();
        prop_assert_eq!(total, alpha_d + alpha_m);
    }

    /// Wavelength scales as 1/f at fixed permittivity.
    #[test]
    fn wavelength_inverse_in_frequency(
        f in 1.0e3f64..1.0e11,
        eps in 1.0f64..100.0,
    ) {
        let lambda_1 = wavelength_in_the_line(f, eps).unwrap();
        let lambda_2 = wavelength_in_the_line(2.0 * f, eps).unwrap();
        prop_assert!((lambda_1 / lambda_2 - 2.0).abs() < 1e-12);
    }
}

// ── Rejection of invalid inputs ──────────────────────────────────────

proptest! {
    #[test]
    fn non_positive_frequency_rejected(f in -1.0e12f64..=0.0, eps in 1.0f64..10.0) {
        prop_assert_eq!(
            wavelength_in_the_line(f, eps),
            Err(CoaxError::NonPositiveFrequency { frequency_hz: f })
        );
    }

    #[test]
    fn sub_unity_permittivity_rejected(eps in -10.0f64..0.999_999) {
        prop_assert_eq!(error_code(phase_speed(eps)), Some("PERMITTIVITY_BELOW_UNITY"));
        prop_assert_eq!(error_code(characteristic_resistance(eps)), Some("PERMITTIVITY_BELOW_UNITY"));
        prop_assert_eq!(
            error_code(wave_resistance(eps, 2.1e-3, 7.3e-3)),
            Some("PERMITTIVITY_BELOW_UNITY")
        );
    }

    #[test]
    fn outer_not_greater_rejected(d in 1.0e-4f64..1.0e-1, shrink in 0.0f64..=1.0) {
        let big_d = d * shrink;
        prop_assert_eq!(
            error_code(peak_voltage(6.0e7, d, big_d)),
            Some("OUTER_DIAMETER_NOT_GREATER")
        );
        prop_assert_eq!(
            error_code(attenuation_coefficient_in_metal(1.0e10, 6.1e7, 2.08, d, big_d)),
            Some("OUTER_DIAMETER_NOT_GREATER")
        );
    }

    #[test]
    fn non_positive_conductivity_rejected(sigma in -1.0e8f64..=0.0) {
        prop_assert_eq!(
            error_code(total_attenuation_coefficient(2.5e-4, 1.0e10, sigma, 2.08, 2.1e-3, 7.3e-3)),
            Some("NON_POSITIVE_CONDUCTIVITY")
        );
    }

    #[test]
    fn non_positive_breakdown_field_rejected(e_p in -1.0e9f64..=0.0) {
        prop_assert_eq!(
            error_code(peak_power(2.08, e_p, 2.1e-3, 7.3e-3)),
            Some("NON_POSITIVE_BREAKDOWN_FIELD")
        );
    }
}

// ── Batch calculation ────────────────────────────────────────────────

proptest! {
    #[test]
    fn batch_matches_individual_formulas(
        frequency_ghz in 0.01f64..100.0,
        eps in 1.0f64..10.0,
        inner_mm in 0.1f64..10.0,
        ratio in 1.01f64..10.0,
    ) {
        let input = CoaxialInput {
            frequency_ghz,
            permittivity: eps,
            inner_diameter_mm: inner_mm,
            outer_diameter_mm: inner_mm * ratio,
            ..CoaxialInput::default()
        };
        let result = calculate(&input).unwrap();
        let z0 = wave_resistance(eps, input.inner_diameter_m(), input.outer_diameter_m()).unwrap();
        prop_assert_eq!(result.wave_resistance_ohm, z0);
        prop_assert!(result.peak_power_mw > 0.0);
    }
}

#[test]
fn permittivity_of_vacuum_accepted_everywhere() {
    assert!(wavelength_in_the_line(1.0e9, 1.0).is_ok());
    assert!(phase_speed(1.0).is_ok());
    assert!(characteristic_resistance(1.0).is_ok());
    assert!(attenuation_coefficient_in_metal(1.0e9, 5.8e7, 1.0, 1.0e-3, 3.0e-3).is_ok());
    assert!(total_attenuation_coefficient(1.0e-4, 1.0e9, 5.8e7, 1.0, 1.0e-3, 3.0e-3).is_ok());
    assert!(wave_resistance(1.0, 1.0e-3, 3.0e-3).is_ok());
    assert!(peak_power(1.0, 3.0e6, 1.0e-3, 3.0e-3).is_ok());
}

#[test]
fn permittivity_just_below_unity_rejected_everywhere() {
    let eps = 0.999_999;
    assert!(wavelength_in_the_line(1.0e9, eps).is_err());
    assert!(phase_speed(eps).is_err());
    assert!(characteristic_resistance(eps).is_err());
    assert!(attenuation_coefficient_in_metal(1.0e9, 5.8e7, eps, 1.0e-3, 3.0e-3).is_err());
    assert!(total_attenuation_coefficient(1.0e-4, 1.0e9, 5.8e7, eps, 1.0e-3, 3.0e-3).is_err());
    assert!(wave_resistance(eps, 1.0e-3, 3.0e-3).is_err());
    assert!(peak_power(eps, 3.0e6, 1.0e-3, 3.0e-3).is_err());
}
