//! # Line Calculations
//!
//! Batch calculations built on top of the formula library. Each calculation
//! follows the pattern:
//!
//! - `*Input` - Input parameters in display units (JSON-serializable)
//! - `*Result` - Calculation results in display units (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CoaxError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`coaxial`] - Every derived parameter of a coaxial line in one pass

pub mod coaxial;

pub use coaxial::{calculate, CoaxialInput, CoaxialResult};
