//! # Equation Registry
//!
//! Central list of the line equations with their metadata: formula,
//! variables, assumptions and the function implementing each one.
//!
//! The registry drives the generated `EQUATIONS.md` reference so the
//! documented mathematics cannot drift from the code.
//!
//! ## Usage
//!
//! ```rust
//! use coax_core::equations::registry::{Equation, EquationCategory};
//!
//! let meta = Equation::WaveResistance.metadata();
//! assert_eq!(meta.source_function, "wave_resistance");
//! assert_eq!(meta.category, EquationCategory::Strength);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Equation Categories
// ============================================================================

/// Categories for grouping equations in the reference document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Wavelength, phase speed, medium impedance
    LineBasics,
    /// Dielectric, metal and total losses
    Attenuation,
    /// Geometric impedance, peak voltage and power
    Strength,
}

impl EquationCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::LineBasics => "Line Basics",
            EquationCategory::Attenuation => "Attenuation",
            EquationCategory::Strength => "Impedance and Electrical Strength",
        }
    }

    /// Sort order in the reference document (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            EquationCategory::LineBasics => 1,
            EquationCategory::Attenuation => 2,
            EquationCategory::Strength => 3,
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g., "f", "ε", "D")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// Units (e.g., "Hz", "m", "S/m")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

const FREQUENCY: Variable = Variable::new("f", "Operating frequency", "Hz");
const PERMITTIVITY: Variable = Variable::new("ε", "Relative permittivity of the dielectric", "-");
const LOSS_TANGENT: Variable = Variable::new("tanδ", "Dielectric loss tangent", "-");
const CONDUCTIVITY: Variable = Variable::new("σ", "Metal conductivity", "S/m");
const INNER_DIAMETER: Variable = Variable::new("d", "Inner conductor diameter", "m");
const OUTER_DIAMETER: Variable = Variable::new("D", "Outer conductor (shield) diameter", "m");
const BREAKDOWN_FIELD: Variable = Variable::new("E_p", "Dielectric breakdown field strength", "V/m");
const LIGHT_SPEED: Variable = Variable::new("c", "Speed of light in vacuum", "m/s");

const PERMEABILITY_ASSUMPTION: &str = "Relative permeability of the dielectric is 1";
const THERMAL_ASSUMPTION: &str = "Peak value at breakdown; heating is not modeled, operating limits are lower";
const COAXIAL_GEOMETRY: &str = "Concentric round conductors, D > d > 0";

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for a line equation.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name
    pub name: &'static str,
    /// Brief description of what this equation calculates
    pub description: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    /// Units of the result
    pub result_units: &'static str,
    /// Variable definitions
    pub variables: Vec<Variable>,
    /// Assumptions or limitations
    pub assumptions: Vec<&'static str>,
    /// Category for grouping
    pub category: EquationCategory,
    /// Source module where the equation implementation lives
    pub source_module: &'static str,
    /// Function name implementing the equation
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// All line equations, one per public formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Equation {
    /// λ = c / (f·√ε)
    WavelengthInTheLine,
    /// v = c / √ε
    PhaseSpeed,
    /// Z = 120π / √ε
    CharacteristicResistance,
    /// α_d = 8.68·tanδ·π/λ
    AttenuationInDielectric,
    /// α_m from surface resistance
    AttenuationInMetal,
    /// α = α_d + α_m
    TotalAttenuation,
    /// Z₀ = 60/√ε · ln(D/d)
    WaveResistance,
    /// U = E_p·(D/2)·ln(D/d)
    PeakVoltage,
    /// P = U²/120 · √(ε/ln(D/d))
    PeakPower,
}

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::WavelengthInTheLine => EquationMetadata {
                name: "Wavelength in the Line",
                description: "Wavelength of a narrowband signal propagating in the dielectric-filled line",
                formula_plain: "λ0 = c/f, λ = λ0/√ε",
                result_units: "m",
                variables: vec![FREQUENCY, PERMITTIVITY, LIGHT_SPEED],
                assumptions: vec![PERMEABILITY_ASSUMPTION],
                category: EquationCategory::LineBasics,
                source_module: "equations/line.rs",
                source_function: "wavelength_in_the_line",
            },
            Equation::PhaseSpeed => EquationMetadata {
                name: "Phase Speed",
                description: "Phase velocity of the wave along the line",
                formula_plain: "v = c/√ε",
                result_units: "m/s",
                variables: vec![PERMITTIVITY, LIGHT_SPEED],
                assumptions: vec![PERMEABILITY_ASSUMPTION],
                category: EquationCategory::LineBasics,
                source_module: "equations/line.rs",
                source_function: "phase_speed",
            },
            Equation::CharacteristicResistance => EquationMetadata {
                name: "Characteristic Resistance",
                description: "Bulk impedance of the dielectric medium, independent of conductor geometry",
                formula_plain: "Z = 120π/√ε",
                result_units: "Ω",
                variables: vec![PERMITTIVITY],
                assumptions: vec![PERMEABILITY_ASSUMPTION, "Free-space impedance approximated as 120π Ω"],
                category: EquationCategory::LineBasics,
                source_module: "equations/line.rs",
                source_function: "characteristic_resistance",
            },
            Equation::AttenuationInDielectric => EquationMetadata {
                name: "Attenuation in Dielectric",
                description: "Loss per unit length caused by the dielectric filling",
                formula_plain: "α_d = 8.68 · tanδ·π/λ",
                result_units: "dB/m",
                variables: vec![
                    LOSS_TANGENT,
                    Variable::new("λ", "Wavelength in the line", "m"),
                ],
                assumptions: vec!["1 Np = 8.68 dB"],
                category: EquationCategory::Attenuation,
                source_module: "equations/attenuation.rs",
                source_function: "attenuation_coefficient_in_dielectric",
            },
            Equation::AttenuationInMetal => EquationMetadata {
                name: "Attenuation in Metal",
                description: "Skin-effect loss per unit length in the inner and outer conductors",
                formula_plain: "R_s = √(2πf·μ0/(2σ)), α_m = 8.68 · √ε·(R_s/d + R_s/D)/(120π·ln(D/d))",
                result_units: "dB/m",
                variables: vec![FREQUENCY, CONDUCTIVITY, PERMITTIVITY, INNER_DIAMETER, OUTER_DIAMETER],
                assumptions: vec![PERMEABILITY_ASSUMPTION, COAXIAL_GEOMETRY, "1 Np = 8.68 dB"],
                category: EquationCategory::Attenuation,
                source_module: "equations/attenuation.rs",
                source_function: "attenuation_coefficient_in_metal",
            },
            Equation::TotalAttenuation => EquationMetadata {
                name: "Total Attenuation",
                description: "Sum of dielectric and metal losses, the dielectric term taken at the in-line wavelength",
                formula_plain: "α = α_d(tanδ, λ(f, ε)) + α_m(f, σ, ε, d, D)",
                result_units: "dB/m",
                variables: vec![
                    LOSS_TANGENT,
                    FREQUENCY,
                    CONDUCTIVITY,
                    PERMITTIVITY,
                    INNER_DIAMETER,
                    OUTER_DIAMETER,
                ],
                assumptions: vec!["Loss mechanisms are additive in decibels"],
                category: EquationCategory::Attenuation,
                source_module: "equations/attenuation.rs",
                source_function: "total_attenuation_coefficient",
            },
            Equation::WaveResistance => EquationMetadata {
                name: "Wave Resistance",
                description: "Geometry-dependent characteristic impedance of the line",
                formula_plain: "Z0 = 60/√ε · ln(D/d)",
                result_units: "Ω",
                variables: vec![PERMITTIVITY, INNER_DIAMETER, OUTER_DIAMETER],
                assumptions: vec![PERMEABILITY_ASSUMPTION, COAXIAL_GEOMETRY],
                category: EquationCategory::Strength,
                source_module: "equations/strength.rs",
                source_function: "wave_resistance",
            },
            Equation::PeakVoltage => EquationMetadata {
                name: "Peak Voltage",
                description: "Voltage at which the field at the inner conductor reaches breakdown",
                formula_plain: "U = E_p · (D/2) · ln(D/d)",
                result_units: "V",
                variables: vec![BREAKDOWN_FIELD, INNER_DIAMETER, OUTER_DIAMETER],
                assumptions: vec![THERMAL_ASSUMPTION, COAXIAL_GEOMETRY],
                category: EquationCategory::Strength,
                source_module: "equations/strength.rs",
                source_function: "peak_voltage",
            },
            Equation::PeakPower => EquationMetadata {
                name: "Peak Power",
                description: "Power carried at the peak voltage",
                formula_plain: "P = U²/120 · √(ε/ln(D/d))",
                result_units: "W",
                variables: vec![
                    PERMITTIVITY,
                    BREAKDOWN_FIELD,
                    INNER_DIAMETER,
                    OUTER_DIAMETER,
                    Variable::new("U", "Peak voltage", "V"),
                ],
                assumptions: vec![THERMAL_ASSUMPTION],
                category: EquationCategory::Strength,
                source_module: "equations/strength.rs",
                source_function: "peak_power",
            },
        }
    }

    /// Get all equations in a given category
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .filter(|eq| eq.metadata().category == category)
            .copied()
            .collect()
    }

    /// Get all categories in document order
    pub fn all_categories() -> Vec<EquationCategory> {
        let mut cats = vec![
            EquationCategory::Strength,
            EquationCategory::Attenuation,
            EquationCategory::LineBasics,
        ];
        cats.sort_by_key(|c| c.sort_order());
        cats
    }
}

/// All equations in the registry, in dependency order
pub static ALL_EQUATIONS: &[Equation] = &[
    Equation::WavelengthInTheLine,
    Equation::PhaseSpeed,
    Equation::CharacteristicResistance,
    Equation::AttenuationInDielectric,
    Equation::AttenuationInMetal,
    Equation::TotalAttenuation,
    Equation::WaveResistance,
    Equation::PeakVoltage,
    Equation::PeakPower,
];

// ============================================================================
// Markdown Generation
// ============================================================================

/// Generate the equations reference document as markdown.
///
/// ```rust
/// use coax_core::equations::registry::generate_equations_markdown;
///
/// let markdown = generate_equations_markdown();
/// assert!(markdown.contains("Coaxcalc Equations Reference"));
/// assert!(markdown.contains("Wave Resistance"));
/// ```
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(8_000);

    output.push_str(
        r#"# Coaxcalc Equations Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-equations`

All formulas take SI base units: hertz, meters, siemens per meter, volts per meter.
Permittivity and loss tangent are dimensionless.

---

"#,
    );

    let categories = Equation::all_categories();

    for category in &categories {
        let equations = Equation::in_category(*category);
        if equations.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for equation in equations {
            let meta = equation.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));
            output.push_str(&format!("**Result units:** {}\n\n", meta.result_units));

            if !meta.variables.is_empty() {
                output.push_str("**Variables:**\n\n");
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!("| {} | {} | {} |\n", var.symbol, var.description, var.units));
                }
                output.push('\n');
            }

            output.push_str(&format!(
                "**Source:** [`{}`]({})\n\n",
                meta.source_function, meta.source_module
            ));

            if !meta.assumptions.is_empty() {
                output.push_str("**Assumptions:**\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Equations:** {}\n- **Categories:** {}\n",
        ALL_EQUATIONS.len(),
        categories.len()
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_equation_in_some_category() {
        let total: usize = Equation::all_categories()
            .into_iter()
            .map(|c| Equation::in_category(c).len())
            .sum();
        assert_eq!(total, ALL_EQUATIONS.len());
        assert_eq!(ALL_EQUATIONS.len(), 9);
    }

    #[test]
    fn test_categories_sorted() {
        let cats = Equation::all_categories();
        assert_eq!(cats.first(), Some(&EquationCategory::LineBasics));
        assert_eq!(cats.last(), Some(&EquationCategory::Strength));
    }

    #[test]
    fn test_markdown_lists_every_function() {
        let markdown = generate_equations_markdown();
        for eq in ALL_EQUATIONS {
            assert!(markdown.contains(eq.metadata().source_function));
        }
        assert!(markdown.contains("**Total Equations:** 9"));
    }

    #[test]
    fn test_peak_equations_carry_thermal_note() {
        for eq in [Equation::PeakVoltage, Equation::PeakPower] {
            assert!(eq.metadata().assumptions.contains(&THERMAL_ASSUMPTION));
        }
    }
}
