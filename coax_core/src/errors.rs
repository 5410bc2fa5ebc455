//! # Error Types
//!
//! Structured validation errors for coax_core. Every formula checks its
//! inputs before doing any arithmetic and reports the first violated
//! precondition as one of the variants below. Each variant carries the
//! offending value so the message can be shown to a user verbatim.
//!
//! ## Example
//!
//! ```rust
//! use coax_core::errors::{CoaxError, CoaxResult};
//!
//! fn check_frequency(frequency_hz: f64) -> CoaxResult<()> {
//!     if !(frequency_hz > 0.0) {
//!         return Err(CoaxError::NonPositiveFrequency { frequency_hz });
//!     }
//!     Ok(())
//! }
//!
//! let err = check_frequency(0.0).unwrap_err();
//! assert_eq!(err.error_code(), "NON_POSITIVE_FREQUENCY");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for coax_core operations
pub type CoaxResult<T> = Result<T, CoaxError>;

/// Validation failure raised by the line formulas.
///
/// There is exactly one variant per kind of physically invalid input.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CoaxError {
    /// Frequency is zero, negative, not finite, or so small that c/f overflows
    #[error("Frequency must be greater than 0 (got {frequency_hz} Hz)")]
    NonPositiveFrequency { frequency_hz: f64 },

    /// Relative permittivity is below that of vacuum
    #[error("Permittivity must be greater than or equal to 1 (got {permittivity})")]
    PermittivityBelowUnity { permittivity: f64 },

    /// Dielectric loss tangent is zero, negative or not finite
    #[error("Loss tangent must be greater than 0 (got {loss_tangent})")]
    NonPositiveLossTangent { loss_tangent: f64 },

    /// Wavelength is zero, negative or not finite
    #[error("Wavelength must be greater than 0 (got {wavelength_m} m)")]
    NonPositiveWavelength { wavelength_m: f64 },

    /// Metal conductivity is zero, negative or not finite
    #[error("Conductivity must be greater than 0 (got {conductivity_s_per_m} S/m)")]
    NonPositiveConductivity { conductivity_s_per_m: f64 },

    /// Inner conductor diameter is zero, negative or not finite
    #[error("Inner diameter must be greater than 0 (got {inner_diameter_m} m)")]
    NonPositiveDiameter { inner_diameter_m: f64 },

    /// Outer conductor diameter does not exceed the inner one
    #[error(
        "Outer diameter must be greater than inner diameter (got outer {outer_diameter_m} m, inner {inner_diameter_m} m)"
    )]
    OuterDiameterNotGreater {
        inner_diameter_m: f64,
        outer_diameter_m: f64,
    },

    /// Dielectric breakdown field strength is zero, negative or not finite
    #[error("Breakdown field strength must be greater than 0 (got {breakdown_field_v_per_m} V/m)")]
    NonPositiveBreakdownField { breakdown_field_v_per_m: f64 },
}

impl CoaxError {
    /// Name of the input that violated its precondition
    pub fn field(&self) -> &'static str {
        match self {
            CoaxError::NonPositiveFrequency { .. } => "frequency",
            CoaxError::PermittivityBelowUnity { .. } => "permittivity",
            CoaxError::NonPositiveLossTangent { .. } => "loss_tangent",
            CoaxError::NonPositiveWavelength { .. } => "wavelength",
            CoaxError::NonPositiveConductivity { .. } => "conductivity",
            CoaxError::NonPositiveDiameter { .. } => "inner_diameter",
            CoaxError::OuterDiameterNotGreater { .. } => "outer_diameter",
            CoaxError::NonPositiveBreakdownField { .. } => "breakdown_field",
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CoaxError::NonPositiveFrequency { .. } => "NON_POSITIVE_FREQUENCY",
            CoaxError::PermittivityBelowUnity { .. } => "PERMITTIVITY_BELOW_UNITY",
            CoaxError::NonPositiveLossTangent { .. } => "NON_POSITIVE_LOSS_TANGENT",
            CoaxError::NonPositiveWavelength { .. } => "NON_POSITIVE_WAVELENGTH",
            CoaxError::NonPositiveConductivity { .. } => "NON_POSITIVE_CONDUCTIVITY",
            CoaxError::NonPositiveDiameter { .. } => "NON_POSITIVE_DIAMETER",
            CoaxError::OuterDiameterNotGreater { .. } => "OUTER_DIAMETER_NOT_GREATER",
            CoaxError::NonPositiveBreakdownField { .. } => "NON_POSITIVE_BREAKDOWN_FIELD",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CoaxError::OuterDiameterNotGreater {
            inner_diameter_m: 2.1e-3,
            outer_diameter_m: 2.1e-3,
        };
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"OuterDiameterNotGreater\""));
        let roundtrip: CoaxError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            CoaxError::NonPositiveFrequency { frequency_hz: 0.0 }.error_code(),
            "NON_POSITIVE_FREQUENCY"
        );
        assert_eq!(
            CoaxError::PermittivityBelowUnity { permittivity: 0.5 }.error_code(),
            "PERMITTIVITY_BELOW_UNITY"
        );
        assert_eq!(
            CoaxError::NonPositiveBreakdownField { breakdown_field_v_per_m: -1.0 }.field(),
            "breakdown_field"
        );
    }

    #[test]
    fn test_message_names_the_violated_precondition() {
        let msg = CoaxError::PermittivityBelowUnity { permittivity: 0.5 }.to_string();
        assert!(msg.contains("greater than or equal to 1"));
        assert!(msg.contains("0.5"));

        let msg = CoaxError::NonPositiveDiameter { inner_diameter_m: 0.0 }.to_string();
        assert!(msg.starts_with("Inner diameter must be greater than 0"));
    }
}
