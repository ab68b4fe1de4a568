//! # LLM Interpretation Support
//!
//! Builds the prompt for an engineering review of the analysis results and
//! cleans up the response text. The network call itself lives in the CLI;
//! this module keeps the pure string work so it can be tested without I/O.
//!
//! The prompt asks for exactly four markdown sections and forbids
//! conversational filler. The sanitizer is the enforcement side of that
//! contract: it drops blank lines and any line that still slipped into
//! thanks, sign-offs, or meta commentary.

use serde::{Deserialize, Serialize};

use crate::calculations::beam::DeflectionResult;

/// Phrases that mark a response line as filler rather than analysis.
/// Matching is case-insensitive and substring-based, so stems cover their
/// variants ("summar" catches both "summary" and "summarize").
const FORBIDDEN_PHRASES: &[&str] = &[
    "thank",
    "hope",
    "language model",
    "as an ai",
    "appreciat",
    "conclus",
    "summar",
    "final",
];

/// Snapshot of inputs, results, and display settings sent for interpretation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "w0_kn_per_m": 20.0,
///   "ei_kn_m2": 5000.0,
///   "deformation_scale": 5.0,
///   "max_deflection_m": 0.6164,
///   "max_deflection_position_m": 5.75,
///   "show_original": true,
///   "use_absolute_color": false
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeamSummary {
    /// Load intensity parameter (kN/m)
    pub w0_kn_per_m: f64,

    /// Flexural rigidity (kN·m²)
    pub ei_kn_m2: f64,

    /// Deformation exaggeration factor used by the 3D view
    pub deformation_scale: f64,

    /// Signed maximum deflection (m)
    pub max_deflection_m: f64,

    /// Position of the maximum deflection (m from the left support)
    pub max_deflection_position_m: f64,

    /// Whether the undeformed outline is displayed
    pub show_original: bool,

    /// Whether the 3D view uses absolute rather than relative coloring
    pub use_absolute_color: bool,
}

impl BeamSummary {
    /// Build a summary from a calculation result.
    ///
    /// Display settings take the viewer defaults: outline shown, relative
    /// coloring. Override the fields directly to reflect other settings.
    pub fn from_result(result: &DeflectionResult, deformation_scale: f64) -> Self {
        BeamSummary {
            w0_kn_per_m: result.w0_kn_per_m,
            ei_kn_m2: result.ei_kn_m2,
            deformation_scale,
            max_deflection_m: result.max_deflection_m,
            max_deflection_position_m: result.max_deflection_position_m,
            show_original: true,
            use_absolute_color: false,
        }
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

/// Build the interpretation prompt for this summary.
///
/// The deflection is reported in millimeters (the serviceability scale) and
/// positions to two decimals, matching the report formatting elsewhere.
pub fn build_prompt(summary: &BeamSummary) -> String {
    format!(
        "Act as an expert structural engineer. Analyze the results for a 10 m beam, \
clamped at x = 0 and simply supported at x = 10, under a NON-uniform distributed load. \
Respond technically, concisely, and structured, with ONLY the 4 sections listed below. \
DO NOT include: final summaries, generic conclusions, thanks, sign-offs, apologies, \
meta phrases like 'as an AI/model', parameter repetition, or filler.

**Input parameters:**
- Maximum distributed load (w0): {} kN/m
- Flexural rigidity (EI): {} kN·m²
- Deformation scale for display: {}x

**Calculated results:**
- Maximum deflection: {:.2} mm
- Position of maximum deflection: {:.2} m from the left support

**Display settings:**
- Show original position: {}
- Absolute coloring: {}

Return EXACTLY these sections in markdown, in this order, with no text before or after:
### 1. Technical analysis
Direct structural interpretation of the values.
### 2. Serviceability check (L/360)
Numerical comparison of deflection vs limit, brief reasoning.
### 3. Load distribution observations
Implications of the maximum deflection position and the load shape.
### 4. Recommendations
Concrete actions (EI or w0 adjustments, materials, allowable criteria).

Formatting rules: clean markdown; avoid empty lists; no sign-offs or motivational \
phrases; do not repeat parameters; at most 2-4 sentences per section for paragraphs. \
Bullets are allowed only in recommendations if they improve clarity.",
        summary.w0_kn_per_m,
        summary.ei_kn_m2,
        summary.deformation_scale,
        summary.max_deflection_m * 1000.0,
        summary.max_deflection_position_m,
        yes_no(summary.show_original),
        yes_no(summary.use_absolute_color),
    )
}

/// Strip filler from an interpretation response.
///
/// Drops blank lines and lines containing any forbidden phrase, keeping the
/// rest in order.
pub fn sanitize_interpretation(raw: &str) -> String {
    raw.lines()
        .filter(|line| {
            if line.trim().is_empty() {
                return false;
            }
            let lower = line.to_lowercase();
            !FORBIDDEN_PHRASES.iter().any(|phrase| lower.contains(phrase))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::beam::{calculate, BeamInput};

    fn default_summary() -> BeamSummary {
        let result = calculate(&BeamInput::default()).unwrap();
        BeamSummary::from_result(&result, 5.0)
    }

    #[test]
    fn test_summary_from_result() {
        let summary = default_summary();
        assert_eq!(summary.w0_kn_per_m, 20.0);
        assert_eq!(summary.ei_kn_m2, 5000.0);
        assert_eq!(summary.deformation_scale, 5.0);
        assert!(summary.show_original);
        assert!(!summary.use_absolute_color);
    }

    #[test]
    fn test_prompt_contains_sections_in_order() {
        let prompt = build_prompt(&default_summary());

        let headers = [
            "### 1. Technical analysis",
            "### 2. Serviceability check (L/360)",
            "### 3. Load distribution observations",
            "### 4. Recommendations",
        ];

        let mut last = 0;
        for header in headers {
            let pos = prompt.find(header).unwrap_or_else(|| panic!("missing {}", header));
            assert!(pos > last, "{} out of order", header);
            last = pos;
        }
    }

    #[test]
    fn test_prompt_formats_values() {
        let prompt = build_prompt(&default_summary());

        assert!(prompt.contains("(w0): 20 kN/m"));
        assert!(prompt.contains("(EI): 5000 kN·m²"));
        assert!(prompt.contains("display: 5x"));
        assert!(prompt.contains("Maximum deflection: 616.42 mm"));
        assert!(prompt.contains("5.75 m from the left support"));
        assert!(prompt.contains("Show original position: Yes"));
        assert!(prompt.contains("Absolute coloring: No"));
    }

    #[test]
    fn test_sanitize_drops_blank_and_filler_lines() {
        let raw = "### 1. Technical analysis\n\
                   \n\
                   The deflection is large relative to the span.\n\
                   Thank you for using this tool!\n\
                   In conclusion, the beam is overloaded.\n\
                   As an AI, I cannot inspect the site.\n\
                   Stiffening the section would reduce the deflection.";

        let clean = sanitize_interpretation(raw);
        assert_eq!(
            clean,
            "### 1. Technical analysis\n\
             The deflection is large relative to the span.\n\
             Stiffening the section would reduce the deflection."
        );
    }

    #[test]
    fn test_sanitize_is_case_insensitive() {
        let raw = "Reduce the load.\nTHANK YOU VERY MUCH.";
        assert_eq!(sanitize_interpretation(raw), "Reduce the load.");
    }

    #[test]
    fn test_sanitize_handles_crlf() {
        let raw = "First line.\r\n\r\nSecond line.";
        assert_eq!(sanitize_interpretation(raw), "First line.\nSecond line.");
    }

    #[test]
    fn test_sanitize_keeps_clean_text() {
        let raw = "### 2. Serviceability check (L/360)\nUnity is 22.2, far over the limit.";
        assert_eq!(sanitize_interpretation(raw), raw);
    }

    #[test]
    fn test_summary_serialization() {
        let summary = default_summary();
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("use_absolute_color"));

        let roundtrip: BeamSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.max_deflection_position_m, summary.max_deflection_position_m);
    }
}
