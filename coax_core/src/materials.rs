//! # Materials Database
//!
//! Typical properties of the dielectrics and conductor metals used in
//! coaxial lines. Values are representative handbook figures at microwave
//! frequencies; manufacturers' data should be preferred for final design.
//!
//! ## Example
//!
//! ```rust
//! use coax_core::materials::{Conductor, Dielectric};
//!
//! let ptfe = Dielectric::Ptfe.properties();
//! assert_eq!(ptfe.permittivity, 2.08);
//! assert!(Conductor::Silver.conductivity_s_per_m() > Conductor::Copper.conductivity_s_per_m());
//!
//! // Names parse case-insensitively, by abbreviation or full name
//! let pe: Dielectric = "polyethylene".parse().unwrap();
//! assert_eq!(pe, Dielectric::Polyethylene);
//! assert_eq!("Cu".parse::<Conductor>().unwrap(), Conductor::Copper);
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A material name that is not in the catalog
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {kind} '{name}' (expected one of: {expected})")]
pub struct UnknownMaterial {
    pub kind: &'static str,
    pub name: String,
    pub expected: &'static str,
}

/// Electrical properties of a dielectric filling
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DielectricProperties {
    /// Relative permittivity ε (≥ 1)
    pub permittivity: f64,
    /// Loss tangent tanδ
    pub loss_tangent: f64,
    /// Breakdown field strength, V/m
    pub breakdown_field_v_per_m: f64,
}

/// Dielectric fillings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dielectric {
    /// Polytetrafluoroethylene (Teflon)
    #[serde(rename = "PTFE")]
    Ptfe,
    /// Solid polyethylene
    #[serde(rename = "PE")]
    Polyethylene,
    /// Polystyrene
    #[serde(rename = "PS")]
    Polystyrene,
}

impl Dielectric {
    /// All catalog dielectrics
    pub const ALL: [Dielectric; 3] = [Dielectric::Ptfe, Dielectric::Polyethylene, Dielectric::Polystyrene];

    /// Get the tabulated properties
    pub fn properties(&self) -> DielectricProperties {
        match self {
            Dielectric::Ptfe => DielectricProperties {
                permittivity: 2.08,
                loss_tangent: 2.5e-4,
                breakdown_field_v_per_m: 60.0e6,
            },
            Dielectric::Polyethylene => DielectricProperties {
                permittivity: 2.25,
                loss_tangent: 2.0e-4,
                breakdown_field_v_per_m: 20.0e6,
            },
            Dielectric::Polystyrene => DielectricProperties {
                permittivity: 2.55,
                loss_tangent: 3.3e-4,
                breakdown_field_v_per_m: 20.0e6,
            },
        }
    }

    /// Short display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Dielectric::Ptfe => "PTFE",
            Dielectric::Polyethylene => "Polyethylene",
            Dielectric::Polystyrene => "Polystyrene",
        }
    }
}

impl FromStr for Dielectric {
    type Err = UnknownMaterial;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ptfe" | "teflon" => Ok(Dielectric::Ptfe),
            "pe" | "polyethylene" => Ok(Dielectric::Polyethylene),
            "ps" | "polystyrene" => Ok(Dielectric::Polystyrene),
            _ => Err(UnknownMaterial {
                kind: "dielectric",
                name: s.to_string(),
                expected: "PTFE, PE, PS",
            }),
        }
    }
}

/// Conductor metals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Conductor {
    Silver,
    Copper,
    Gold,
    Aluminum,
}

impl Conductor {
    /// All catalog conductors
    pub const ALL: [Conductor; 4] = [Conductor::Silver, Conductor::Copper, Conductor::Gold, Conductor::Aluminum];

    /// Conductivity at room temperature, S/m
    pub fn conductivity_s_per_m(&self) -> f64 {
        match self {
            Conductor::Silver => 6.1e7,
            Conductor::Copper => 5.8e7,
            Conductor::Gold => 4.1e7,
            Conductor::Aluminum => 3.5e7,
        }
    }
}

impl FromStr for Conductor {
    type Err = UnknownMaterial;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "silver" | "ag" => Ok(Conductor::Silver),
            "copper" | "cu" => Ok(Conductor::Copper),
            "gold" | "au" => Ok(Conductor::Gold),
            "aluminum" | "aluminium" | "al" => Ok(Conductor::Aluminum),
            _ => Err(UnknownMaterial {
                kind: "conductor",
                name: s.to_string(),
                expected: "Silver, Copper, Gold, Aluminum",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_values_are_physical() {
        for dielectric in Dielectric::ALL {
            let props = dielectric.properties();
            assert!(props.permittivity >= 1.0, "{}", dielectric.display_name());
            assert!(props.loss_tangent > 0.0);
            assert!(props.breakdown_field_v_per_m > 0.0);
        }
        for conductor in Conductor::ALL {
            assert!(conductor.conductivity_s_per_m() > 0.0);
        }
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Dielectric::Ptfe).unwrap(), "\"PTFE\"");
        let pe: Dielectric = serde_json::from_str("\"PE\"").unwrap();
        assert_eq!(pe, Dielectric::Polyethylene);
        assert_eq!(serde_json::to_string(&Conductor::Copper).unwrap(), "\"Copper\"");
    }

    #[test]
    fn test_parse_dielectric_names() {
        assert_eq!("PTFE".parse::<Dielectric>(), Ok(Dielectric::Ptfe));
        assert_eq!("teflon".parse::<Dielectric>(), Ok(Dielectric::Ptfe));
        assert_eq!(" ps ".parse::<Dielectric>(), Ok(Dielectric::Polystyrene));
        for dielectric in Dielectric::ALL {
            assert_eq!(dielectric.display_name().parse::<Dielectric>(), Ok(dielectric));
        }
    }

    #[test]
    fn test_parse_conductor_names() {
        assert_eq!("Copper".parse::<Conductor>(), Ok(Conductor::Copper));
        assert_eq!("AG".parse::<Conductor>(), Ok(Conductor::Silver));
        assert_eq!("aluminium".parse::<Conductor>(), Ok(Conductor::Aluminum));
        for conductor in Conductor::ALL {
            assert_eq!(format!("{:?}", conductor).parse::<Conductor>(), Ok(conductor));
        }
    }

    #[test]
    fn test_parse_unknown_material() {
        let err = "nylon".parse::<Dielectric>().unwrap_err();
        assert_eq!(err.kind, "dielectric");
        assert_eq!(err.to_string(), "Unknown dielectric 'nylon' (expected one of: PTFE, PE, PS)");

        let err = "brass".parse::<Conductor>().unwrap_err();
        assert!(err.to_string().starts_with("Unknown conductor 'brass'"));
    }
}
