//! # Coaxial Line Calculation
//!
//! Computes all nine derived parameters of a coaxial line from inputs given
//! in the units a designer types: millimeters, gigahertz, MS/m and MV/m.
//!
//! The inputs are converted to SI, the formulas run in dependency order,
//! and the results come back in display units (mm, km/s, kV, MW). The first
//! invalid input aborts the whole batch; no partial result is produced.
//!
//! ## Example
//!
//! ```rust
//! use coax_core::calculations::coaxial::{calculate, CoaxialInput};
//!
//! let input = CoaxialInput {
//!     label: "Semi-rigid 50 Ω".to_string(),
//!     inner_diameter_mm: 2.1,
//!     outer_diameter_mm: 7.3,
//!     frequency_ghz: 10.0,
//!     conductivity_ms_per_m: 61.0,
//!     permittivity: 2.08,
//!     breakdown_field_mv_per_m: 60.0,
//!     loss_tangent: 2.5e-4,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!((result.wave_resistance_ohm - 51.834).abs() < 1.0e-3);
//! println!("Total loss: {:.3} dB/m", result.total_attenuation_db_per_m);
//! ```

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::equations::{
    attenuation_coefficient_in_dielectric, attenuation_coefficient_in_metal, characteristic_resistance,
    peak_power, peak_voltage, phase_speed, total_attenuation_coefficient, wave_resistance,
    wavelength_in_the_line,
};
use crate::errors::CoaxResult;
use crate::materials::{Conductor, Dielectric};
use crate::units::{
    Gigahertz, Hertz, KilometersPerSecond, Kilovolts, MegasiemensPerMeter, MegavoltsPerMeter, Megawatts,
    Meters, MetersPerSecond, Millimeters, SiemensPerMeter, Volts, VoltsPerMeter, Watts,
};

/// Input parameters for a coaxial line, in display units.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Semi-rigid 50 Ω",
///   "inner_diameter_mm": 2.1,
///   "outer_diameter_mm": 7.3,
///   "frequency_ghz": 10.0,
///   "conductivity_ms_per_m": 61.0,
///   "permittivity": 2.08,
///   "breakdown_field_mv_per_m": 60.0,
///   "loss_tangent": 0.00025
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoaxialInput {
    /// User label for this line
    #[serde(default)]
    pub label: String,

    /// Inner conductor diameter in millimeters
    pub inner_diameter_mm: f64,

    /// Outer conductor (shield) diameter in millimeters
    pub outer_diameter_mm: f64,

    /// Operating frequency in gigahertz
    pub frequency_ghz: f64,

    /// Metal conductivity in megasiemens per meter
    pub conductivity_ms_per_m: f64,

    /// Relative permittivity of the dielectric
    pub permittivity: f64,

    /// Dielectric breakdown field strength in megavolts per meter
    pub breakdown_field_mv_per_m: f64,

    /// Dielectric loss tangent
    pub loss_tangent: f64,
}

impl Default for CoaxialInput {
    /// Silver-plated PTFE line, 2.1 / 7.3 mm, at 10 GHz
    fn default() -> Self {
        Self {
            label: "Reference line".to_string(),
            inner_diameter_mm: 2.1,
            outer_diameter_mm: 7.3,
            frequency_ghz: 10.0,
            conductivity_ms_per_m: 61.0,
            permittivity: 2.08,
            breakdown_field_mv_per_m: 60.0,
            loss_tangent: 2.5e-4,
        }
    }
}

impl CoaxialInput {
    /// Build an input from catalog materials and the line geometry.
    pub fn with_materials(
        label: impl Into<String>,
        dielectric: Dielectric,
        conductor: Conductor,
        inner_diameter_mm: f64,
        outer_diameter_mm: f64,
        frequency_ghz: f64,
    ) -> Self {
        Self {
            label: label.into(),
            inner_diameter_mm,
            outer_diameter_mm,
            frequency_ghz,
            ..Self::default()
        }
        .with_dielectric(dielectric)
        .with_conductor(conductor)
    }

    /// Replace permittivity, loss tangent and breakdown field with the
    /// catalog values of `dielectric`. Geometry and conductor are kept.
    pub fn with_dielectric(mut self, dielectric: Dielectric) -> Self {
        let props = dielectric.properties();
        self.permittivity = props.permittivity;
        self.loss_tangent = props.loss_tangent;
        self.breakdown_field_mv_per_m = MegavoltsPerMeter::from(VoltsPerMeter(props.breakdown_field_v_per_m)).0;
        self
    }

    /// Replace the metal conductivity with the catalog value of `conductor`
    pub fn with_conductor(mut self, conductor: Conductor) -> Self {
        self.conductivity_ms_per_m = MegasiemensPerMeter::from(SiemensPerMeter(conductor.conductivity_s_per_m())).0;
        self
    }

    /// Inner diameter in meters
    pub fn inner_diameter_m(&self) -> f64 {
        Meters::from(Millimeters(self.inner_diameter_mm)).0
    }

    /// Outer diameter in meters
    pub fn outer_diameter_m(&self) -> f64 {
        Meters::from(Millimeters(self.outer_diameter_mm)).0
    }

    /// Frequency in hertz
    pub fn frequency_hz(&self) -> f64 {
        Hertz::from(Gigahertz(self.frequency_ghz)).0
    }

    /// Conductivity in siemens per meter
    pub fn conductivity_s_per_m(&self) -> f64 {
        SiemensPerMeter::from(MegasiemensPerMeter(self.conductivity_ms_per_m)).0
    }

    /// Breakdown field in volts per meter
    pub fn breakdown_field_v_per_m(&self) -> f64 {
        VoltsPerMeter::from(MegavoltsPerMeter(self.breakdown_field_mv_per_m)).0
    }
}

/// Results from a coaxial line calculation, in display units.
///
/// ## JSON Example
///
/// ```json
/// {
///   "wavelength_mm": 20.787,
///   "phase_speed_km_per_s": 207869.0,
///   "characteristic_resistance_ohm": 261.396,
///   "dielectric_attenuation_db_per_m": 0.3277,
///   "metal_attenuation_db_per_m": 0.4157,
///   "total_attenuation_db_per_m": 0.7437,
///   "wave_resistance_ohm": 51.834,
///   "peak_voltage_kv": 272.86,
///   "peak_power_mw": 801.65
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoaxialResult {
    /// Wavelength in the line (mm)
    pub wavelength_mm: f64,

    /// Phase speed (km/s)
    pub phase_speed_km_per_s: f64,

    /// Bulk impedance of the dielectric (Ω)
    pub characteristic_resistance_ohm: f64,

    /// Dielectric loss (dB/m)
    pub dielectric_attenuation_db_per_m: f64,

    /// Conductor loss (dB/m)
    pub metal_attenuation_db_per_m: f64,

    /// Dielectric plus conductor loss (dB/m)
    pub total_attenuation_db_per_m: f64,

    /// Characteristic impedance of the line (Ω)
    pub wave_resistance_ohm: f64,

    /// Peak voltage at breakdown field (kV), no thermal derating
    pub peak_voltage_kv: f64,

    /// Peak power at breakdown field (MW), no thermal derating
    pub peak_power_mw: f64,
}

impl CoaxialResult {
    /// Total loss in dB over a run of `length_m` meters
    pub fn loss_over_length_db(&self, length_m: f64) -> f64 {
        self.total_attenuation_db_per_m * length_m
    }
}

/// Calculate every derived parameter of a coaxial line.
///
/// # Arguments
///
/// * `input` - Line parameters in display units
///
/// # Returns
///
/// * `Ok(CoaxialResult)` - All nine results in display units
/// * `Err(CoaxError)` - The first invalid input encountered
pub fn calculate(input: &CoaxialInput) -> CoaxResult<CoaxialResult> {
    compute(input).inspect_err(|e| {
        warn!("coaxial '{}' rejected [{}]: {}", input.label, e.error_code(), e);
    })
}

fn compute(input: &CoaxialInput) -> CoaxResult<CoaxialResult> {
    let d = input.inner_diameter_m();
    let big_d = input.outer_diameter_m();
    let f = input.frequency_hz();
    let sigma = input.conductivity_s_per_m();
    let eps = input.permittivity;
    let e_p = input.breakdown_field_v_per_m();
    let tan_delta = input.loss_tangent;

    debug!(
        "coaxial '{}': d={} m, D={} m, f={} Hz, sigma={} S/m, eps={}, Ep={} V/m, tan_delta={}",
        input.label, d, big_d, f, sigma, eps, e_p, tan_delta
    );

    let lambda = wavelength_in_the_line(f, eps)?;
    let v = phase_speed(eps)?;
    let z_c = characteristic_resistance(eps)?;
    debug!("lambda={} m, v={} m/s, Zc={} ohm", lambda, v, z_c);

    let alpha_d = attenuation_coefficient_in_dielectric(tan_delta, lambda)?;
    let alpha_m = attenuation_coefficient_in_metal(f, sigma, eps, d, big_d)?;
    let alpha = total_attenuation_coefficient(tan_delta, f, sigma, eps, d, big_d)?;
    debug!("alpha_d={} dB/m, alpha_m={} dB/m, alpha={} dB/m", alpha_d, alpha_m, alpha);

    let rho = wave_resistance(eps, d, big_d)?;
    let u_max = peak_voltage(e_p, d, big_d)?;
    let p_max = peak_power(eps, e_p, d, big_d)?;
    debug!("Z0={} ohm, Umax={} V, Pmax={} W", rho, u_max, p_max);

    Ok(CoaxialResult {
        wavelength_mm: Millimeters::from(Meters(lambda)).0,
        phase_speed_km_per_s: KilometersPerSecond::from(MetersPerSecond(v)).0,
        characteristic_resistance_ohm: z_c,
        dielectric_attenuation_db_per_m: alpha_d,
        metal_attenuation_db_per_m: alpha_m,
        total_attenuation_db_per_m: alpha,
        wave_resistance_ohm: rho,
        peak_voltage_kv: Kilovolts::from(Volts(u_max)).0,
        peak_power_mw: Megawatts::from(Watts(p_max)).0,
    })
}
