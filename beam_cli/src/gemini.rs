//! Gemini interpretation client.
//!
//! Sends a structured beam summary to the Gemini API and returns the
//! generated engineering interpretation. Requires the GEMINI_API_KEY
//! environment variable.

use beam_core::interpret::{build_prompt, BeamSummary};
use serde::{Deserialize, Serialize};

/// Current application version (from Cargo.toml)
pub const CURRENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Model used for report generation
const GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Environment variable holding the API key
const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Result of an interpretation request
#[derive(Debug, Clone)]
pub enum InterpretationResult {
    /// Model returned a report (raw markdown, not yet sanitized)
    Report(String),
    /// GEMINI_API_KEY is not set in the environment
    MissingApiKey,
    /// Request failed (with error message)
    Failed(String),
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

/// Request an engineering interpretation of the summary from Gemini
pub fn interpret_with_gemini(summary: &BeamSummary) -> InterpretationResult {
    let api_key = match std::env::var(API_KEY_ENV) {
        Ok(key) if !key.trim().is_empty() => key,
        _ => return InterpretationResult::MissingApiKey,
    };

    let url = format!(
        "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent",
        GEMINI_MODEL
    );

    let client = match reqwest::blocking::Client::builder()
        .user_agent(format!("Flexura/{}", CURRENT_VERSION))
        .timeout(std::time::Duration::from_secs(30))
        .build()
    {
        Ok(c) => c,
        Err(e) => {
            return InterpretationResult::Failed(format!("Failed to create HTTP client: {}", e))
        }
    };

    let request = GenerateContentRequest {
        contents: vec![Content {
            parts: vec![Part {
                text: build_prompt(summary),
            }],
        }],
    };

    let response = match client
        .post(&url)
        .header("x-goog-api-key", api_key.as_str())
        .json(&request)
        .send()
    {
        Ok(r) => r,
        Err(e) => return InterpretationResult::Failed(format!("Network error: {}", e)),
    };

    if !response.status().is_success() {
        return InterpretationResult::Failed(format!("Gemini API returned {}", response.status()));
    }

    let reply: GenerateContentResponse = match response.json() {
        Ok(r) => r,
        Err(e) => return InterpretationResult::Failed(format!("Failed to parse response: {}", e)),
    };

    let text: String = reply
        .candidates
        .iter()
        .filter_map(|candidate| candidate.content.as_ref())
        .flat_map(|content| content.parts.iter())
        .map(|part| part.text.as_str())
        .collect();

    if text.trim().is_empty() {
        return InterpretationResult::Failed("Model returned an empty response".to_string());
    }

    InterpretationResult::Report(text)
}
