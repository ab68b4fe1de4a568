//! # Flexura CLI Application
//!
//! Terminal-based interface for the beam deflection engine.
//! Prompts for the load and stiffness parameters, prints a full
//! analysis report, and optionally exports mesh data or requests
//! an LLM interpretation of the results.

use std::io::{self, BufRead, Write};

use beam_core::calculations::beam::{
    calculate, BeamInput, DEFAULT_EI_KN_M2, DEFAULT_W0_KN_PER_M,
};
use beam_core::equations::registry::Equation;
use beam_core::equations::{deflection, load_intensity, SPAN_M};
use beam_core::geometry::{deformed_mesh, undeformed_mesh, DEFAULT_DEFORMATION_SCALE};
use beam_core::interpret::{sanitize_interpretation, BeamSummary};

mod gemini;

use gemini::{interpret_with_gemini, InterpretationResult};

/// Report stations: position and label for the printed table
const STATIONS: &[(f64, &str)] = &[
    (0.0, "clamped end"),
    (2.0, "ramp end"),
    (5.0, "midspan"),
    (8.0, "plateau end"),
    (10.0, "roller support"),
];

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_yes_no(prompt: &str, default: bool) -> bool {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => true,
        "n" | "no" => false,
        _ => default,
    }
}

fn main() {
    println!("Flexura CLI - Beam Deflection Analyzer");
    println!("======================================");
    println!();
    println!("Propped cantilever, 10 m span, trapezoidal load (ramp 0-2 m, plateau 2-8 m).");
    println!();

    let w0 = prompt_f64("Enter load intensity w0 (kN/m) [20.0]: ", DEFAULT_W0_KN_PER_M);
    let ei = prompt_f64("Enter flexural rigidity EI (kN*m^2) [5000.0]: ", DEFAULT_EI_KN_M2);
    let scale = prompt_f64(
        "Enter deformation scale for mesh export [5.0]: ",
        DEFAULT_DEFORMATION_SCALE,
    );

    println!();
    println!("Solving closed-form deflection curve...");
    println!();

    let input = BeamInput {
        w0_kn_per_m: w0,
        ei_kn_m2: ei,
    };

    match calculate(&input) {
        Ok(result) => {
            println!("═══════════════════════════════════════");
            println!("  BEAM ANALYSIS RESULTS");
            println!("═══════════════════════════════════════");
            println!();
            println!("Input:");
            println!("  Span:     {:.1} m (clamped at x=0, roller at x=10)", SPAN_M);
            println!("  Load:     w0 = {:.1} kN/m (peak 3*w0 = {:.1} kN/m)", w0, 3.0 * w0);
            println!("  Rigidity: EI = {:.1} kN*m^2", ei);
            println!();
            println!("Stations:");
            for &(x, label) in STATIONS {
                println!(
                    "  x = {:>4.1} m   q = {:>6.1} kN/m   y = {:>9.2} mm  ({})",
                    x,
                    load_intensity(x, w0),
                    deflection(x, w0, ei) * 1000.0,
                    label
                );
            }
            println!();
            println!("Extremum:");
            println!(
                "  δ_max = {:.2} mm at x = {:.2} m",
                result.max_deflection_mm, result.max_deflection_position_m
            );
            println!();
            println!("Serviceability Check:");
            println!("  Deflection: {:.2} ({:.2} / {:.2} mm, L/{:.0}) {}",
                result.serviceability.unity,
                result.serviceability.actual_mm,
                result.serviceability.allowable_mm,
                result.serviceability.limit_denominator,
                status_icon(result.passes())
            );
            println!();

            let metadata = Equation::LaplaceDeflection.metadata();
            println!("Method:");
            println!("  {}", metadata.formula_plain);
            println!("  Reference: {}", metadata.reference.citation());
            println!();

            println!("═══════════════════════════════════════");
            println!("  RESULT: {} (L/360 deflection limit)",
                if result.passes() { "PASS" } else { "FAIL" }
            );
            println!("═══════════════════════════════════════");

            println!();
            println!("JSON Output (for LLM/API use):");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }

            println!();
            if prompt_yes_no("Export mesh JSON (deformed + reference)? [y/N]: ", false) {
                match deformed_mesh(w0, ei, scale) {
                    Ok(mesh) => {
                        println!();
                        println!("Deformed mesh ({}x scale):", scale);
                        if let Ok(json) = serde_json::to_string(&mesh) {
                            println!("{}", json);
                        }
                        println!();
                        println!("Reference mesh (undeformed):");
                        if let Ok(json) = serde_json::to_string(undeformed_mesh()) {
                            println!("{}", json);
                        }
                    }
                    Err(e) => eprintln!("Mesh export failed: {}", e),
                }
            }

            println!();
            if prompt_yes_no("Request Gemini interpretation? [y/N]: ", false) {
                let summary = BeamSummary::from_result(&result, scale);
                match interpret_with_gemini(&summary) {
                    InterpretationResult::Report(raw) => {
                        println!();
                        println!("═══════════════════════════════════════");
                        println!("  ENGINEERING INTERPRETATION");
                        println!("═══════════════════════════════════════");
                        println!();
                        println!("{}", sanitize_interpretation(&raw));
                    }
                    InterpretationResult::MissingApiKey => {
                        eprintln!("GEMINI_API_KEY is not set - skipping interpretation.");
                    }
                    InterpretationResult::Failed(reason) => {
                        eprintln!("Interpretation failed: {}", reason);
                    }
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
    }
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}
