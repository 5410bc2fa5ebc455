//! # Unit Types
//!
//! Type-safe wrappers for the units a line designer works in. The formulas
//! in [`crate::equations`] take SI base units; people type millimeters and
//! gigahertz. These newtypes make the conversion explicit at the boundary.
//!
//! All wrappers serialize as bare numbers.
//!
//! ## Example
//!
//! ```rust
//! use coax_core::units::{Gigahertz, Hertz, Meters, Millimeters};
//!
//! let f: Hertz = Gigahertz(10.0).into();
//! assert_eq!(f.0, 1.0e10);
//!
//! let d: Meters = Millimeters(2.1).into();
//! assert!((d.0 - 2.1e-3).abs() < 1.0e-15);
//! ```

use serde::{Deserialize, Serialize};

/// Declares a display unit, its SI base unit and conversions both ways.
macro_rules! scaled_unit {
    ($(#[$display_doc:meta])* $display:ident, $(#[$si_doc:meta])* $si:ident, $factor:expr) => {
        $(#[$display_doc])*
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $display(pub f64);

        $(#[$si_doc])*
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $si(pub f64);

        impl From<$display> for $si {
            fn from(value: $display) -> Self {
                $si(value.0 * $factor)
            }
        }

        impl From<$si> for $display {
            fn from(value: $si) -> Self {
                $display(value.0 / $factor)
            }
        }
    };
}

// ============================================================================
// Length
// ============================================================================

scaled_unit!(
    /// Length in millimeters (conductor diameters, displayed wavelength)
    Millimeters,
    /// Length in meters
    Meters,
    1.0e-3
);

// ============================================================================
// Frequency
// ============================================================================

scaled_unit!(
    /// Frequency in gigahertz
    Gigahertz,
    /// Frequency in hertz
    Hertz,
    1.0e9
);

// ============================================================================
// Conductivity
// ============================================================================

scaled_unit!(
    /// Conductivity in megasiemens per meter
    MegasiemensPerMeter,
    /// Conductivity in siemens per meter
    SiemensPerMeter,
    1.0e6
);

// ============================================================================
// Electric Field
// ============================================================================

scaled_unit!(
    /// Field strength in megavolts per meter
    MegavoltsPerMeter,
    /// Field strength in volts per meter
    VoltsPerMeter,
    1.0e6
);

// ============================================================================
// Speed
// ============================================================================

scaled_unit!(
    /// Speed in kilometers per second
    KilometersPerSecond,
    /// Speed in meters per second
    MetersPerSecond,
    1.0e3
);

// ============================================================================
// Voltage and Power
// ============================================================================

scaled_unit!(
    /// Voltage in kilovolts
    Kilovolts,
    /// Voltage in volts
    Volts,
    1.0e3
);

scaled_unit!(
    /// Power in megawatts
    Megawatts,
    /// Power in watts
    Watts,
    1.0e6
);
