//! Structured Output Extraction
//!
//! The backend is a free-text generator that is *asked* to emit JSON, so the
//! response is not guaranteed to contain a well-formed object at all.
//! Extraction runs in two independent stages: locate a candidate span, then
//! strictly parse it into a typed record. Either stage failing degrades to a
//! fallback record instead of an error, so every raw output, including the
//! empty string, yields a structurally valid candidate.

use serde::Deserialize;

use crate::types::RISK_MEDIUM;

/// Explanation used when a payload parses but carries no explanation field.
pub const MISSING_EXPLANATION: &str = "no explanation available";

/// Explanation used when no payload could be extracted at all. Deliberately
/// distinct from [`MISSING_EXPLANATION`]: this one signals "could not parse"
/// rather than "parsed but incomplete".
pub const FALLBACK_EXPLANATION: &str =
    "The analysis could not be fully processed. Please try again.";

/// Candidate record produced by extraction, before range validation.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateAnalysis {
    pub score: f64,
    pub explanation: String,
    pub risk_level: String,
    pub confidence: f64,
}

impl CandidateAnalysis {
    /// The record returned when the model output had no usable payload.
    ///
    /// Confidence is deliberately low: the caller still gets a full result,
    /// but one that admits it reflects a failed parse, not an assessment.
    pub fn fallback() -> Self {
        Self {
            score: 50.0,
            explanation: FALLBACK_EXPLANATION.to_string(),
            risk_level: RISK_MEDIUM.to_string(),
            confidence: 0.3,
        }
    }
}

/// Raw payload shape. Every field is optional so that *missing* fields fall
/// back per-field, while a field of the wrong type fails the whole parse:
/// partially-typed garbage is as unreliable as fully malformed output.
#[derive(Debug, Deserialize)]
struct RawAnalysis {
    score: Option<f64>,
    explanation: Option<String>,
    risk_level: Option<String>,
    confidence: Option<f64>,
}

/// Extract a candidate analysis from raw model output.
///
/// Tolerates prose before and after the JSON object by slicing the outermost
/// brace span. This is a heuristic, not a JSON-in-text scanner: text holding
/// several independent brace-delimited blocks will mis-slice across them and
/// degrade to the fallback record.
pub fn extract_analysis(raw: &str) -> CandidateAnalysis {
    match braced_span(raw).and_then(parse_candidate) {
        Some(candidate) => candidate,
        None => {
            tracing::warn!(
                output_len = raw.len(),
                "model output had no parseable payload, falling back"
            );
            CandidateAnalysis::fallback()
        }
    }
}

/// Locate the outermost brace span: first `{` through last `}`, inclusive.
fn braced_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Strictly parse a candidate span, defaulting fields that are absent.
fn parse_candidate(span: &str) -> Option<CandidateAnalysis> {
    let raw: RawAnalysis = serde_json::from_str(span).ok()?;
    Some(CandidateAnalysis {
        score: raw.score.unwrap_or(50.0),
        explanation: raw
            .explanation
            .unwrap_or_else(|| MISSING_EXPLANATION.to_string()),
        risk_level: raw.risk_level.unwrap_or_else(|| RISK_MEDIUM.to_string()),
        confidence: raw.confidence.unwrap_or(0.5),
    })
}
