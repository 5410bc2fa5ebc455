//! # Coaxcalc CLI Application
//!
//! Terminal front end for the coaxial line calculator.
//!
//! ## Usage
//!
//! ```bash
//! # Interactive: prompts for every value, Enter keeps the default
//! coax_cli
//!
//! # Interactive, defaults taken from catalog materials
//! coax_cli --dielectric PE --conductor Copper
//!
//! # Batch: read a CoaxialInput JSON file, optionally overriding its materials
//! coax_cli line.json
//! coax_cli line.json --dielectric PTFE
//! ```
//!
//! Set `RUST_LOG=debug` to trace intermediate results.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use coax_core::calculations::coaxial::{calculate, CoaxialInput, CoaxialResult};
use coax_core::materials::{Conductor, Dielectric};

/// Coaxial transmission line calculator
#[derive(Parser, Debug)]
#[command(name = "coax_cli", version, about)]
struct Args {
    /// CoaxialInput JSON file; prompts for every value when omitted
    input: Option<PathBuf>,

    /// Catalog dielectric filling (PTFE, PE, PS)
    #[arg(long, value_name = "NAME")]
    dielectric: Option<Dielectric>,

    /// Catalog conductor metal (Silver, Copper, Gold, Aluminum)
    #[arg(long, value_name = "NAME")]
    conductor: Option<Conductor>,
}

/// Parse one typed answer. Blank keeps the default.
fn parse_field(text: &str, default: f64) -> Result<f64, String> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(default);
    }
    text.parse().map_err(|_| format!("'{}' is not a number", text))
}

/// Ask until the answer parses. End of input keeps the default.
fn read_f64(reader: &mut impl BufRead, out: &mut impl Write, prompt: &str, default: f64) -> f64 {
    loop {
        if write!(out, "{} [{}]: ", prompt, default).and_then(|_| out.flush()).is_err() {
            return default;
        }

        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) | Err(_) => return default,
            Ok(_) => {}
        }

        match parse_field(&line, default) {
            Ok(value) => return value,
            Err(msg) => {
                log::warn!("rejected answer for '{}': {}", prompt, line.trim());
                let _ = writeln!(out, "  {}, try again", msg);
            }
        }
    }
}

fn prompt_input(defaults: CoaxialInput) -> CoaxialInput {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut out = io::stdout();
    let mut ask = |prompt: &str, default: f64| read_f64(&mut reader, &mut out, prompt, default);

    CoaxialInput {
        inner_diameter_mm: ask("Inner conductor diameter d (mm)", defaults.inner_diameter_mm),
        outer_diameter_mm: ask("Outer conductor diameter D (mm)", defaults.outer_diameter_mm),
        frequency_ghz: ask("Operating frequency f (GHz)", defaults.frequency_ghz),
        conductivity_ms_per_m: ask("Metal conductivity (MS/m)", defaults.conductivity_ms_per_m),
        permittivity: ask("Dielectric permittivity", defaults.permittivity),
        breakdown_field_mv_per_m: ask("Breakdown field strength (MV/m)", defaults.breakdown_field_mv_per_m),
        loss_tangent: ask("Loss tangent", defaults.loss_tangent),
        label: defaults.label,
    }
}

fn load_input(path: &Path) -> Result<CoaxialInput, String> {
    let text = fs::read_to_string(path).map_err(|e| format!("cannot read '{}': {}", path.display(), e))?;
    serde_json::from_str(&text).map_err(|e| format!("invalid input JSON in '{}': {}", path.display(), e))
}

/// Overwrite the material fields of `input` with any catalog picks
fn apply_materials(mut input: CoaxialInput, dielectric: Option<Dielectric>, conductor: Option<Conductor>) -> CoaxialInput {
    if let Some(dielectric) = dielectric {
        log::debug!("using catalog dielectric {}", dielectric.display_name());
        input = input.with_dielectric(dielectric);
    }
    if let Some(conductor) = conductor {
        log::debug!("using catalog conductor {:?}", conductor);
        input = input.with_conductor(conductor);
    }
    input
}

fn print_result(input: &CoaxialInput, result: &CoaxialResult) {
    println!("═══════════════════════════════════════");
    println!("  COAXIAL LINE PARAMETERS");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Label:      {}", input.label);
    println!("  d / D:      {} / {} mm", input.inner_diameter_mm, input.outer_diameter_mm);
    println!("  f:          {} GHz", input.frequency_ghz);
    println!("  σ:          {} MS/m", input.conductivity_ms_per_m);
    println!("  ε, tanδ:    {}, {}", input.permittivity, input.loss_tangent);
    println!("  E_p:        {} MV/m", input.breakdown_field_mv_per_m);
    println!();
    println!("Propagation:");
    println!("  λ    = {:.4} mm", result.wavelength_mm);
    println!("  v    = {:.1} km/s", result.phase_speed_km_per_s);
    println!("  Zc   = {:.4} Ω", result.characteristic_resistance_ohm);
    println!("  Z0   = {:.4} Ω", result.wave_resistance_ohm);
    println!();
    println!("Attenuation:");
    println!("  α_d  = {:.4} dB/m", result.dielectric_attenuation_db_per_m);
    println!("  α_m  = {:.4} dB/m", result.metal_attenuation_db_per_m);
    println!("  α    = {:.4} dB/m", result.total_attenuation_db_per_m);
    println!();
    println!("Electrical strength (peak, no thermal derating):");
    println!("  Umax = {:.3} kV", result.peak_voltage_kv);
    println!("  Pmax = {:.3} MW", result.peak_power_mw);
    println!();
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    println!("Coaxcalc - Coaxial Line Calculator");
    println!("==================================");
    println!();

    let input = match &args.input {
        Some(path) => match load_input(path) {
            Ok(input) => apply_materials(input, args.dielectric, args.conductor),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => prompt_input(apply_materials(CoaxialInput::default(), args.dielectric, args.conductor)),
    };
    log::debug!("input: {:?}", input);

    match calculate(&input) {
        Ok(result) => {
            println!();
            print_result(&input, &result);

            println!("JSON Output:");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}
