//! Result Validation
//!
//! Normalizes the candidate record into the guaranteed ranges of
//! [`AnalysisResult`]. Out-of-range numerics are saturated, not rejected:
//! by this point the record is the best answer available and the caller is
//! owed a structurally valid result.

use crate::extract::CandidateAnalysis;
use crate::types::AnalysisResult;

/// Clamp a candidate into the final, invariant-holding result.
///
/// `score` saturates into `[0, 100]` and `confidence` into `[0.0, 1.0]`.
/// `risk_level` and `explanation` pass through verbatim: any string is
/// accepted as a risk level, and an empty explanation stays empty.
pub fn validate(candidate: CandidateAnalysis) -> AnalysisResult {
    AnalysisResult {
        score: candidate.score.clamp(0.0, 100.0).round() as u8,
        explanation: candidate.explanation,
        risk_level: candidate.risk_level,
        confidence: candidate.confidence.clamp(0.0, 1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(score: f64, confidence: f64) -> CandidateAnalysis {
        CandidateAnalysis {
            score,
            explanation: "test".to_string(),
            risk_level: "MEDIUM".to_string(),
            confidence,
        }
    }

    #[test]
    fn score_saturates_at_both_bounds() {
        for (input, expected) in [(-10.0, 0), (150.0, 100), (0.0, 0), (100.0, 100), (42.0, 42)] {
            assert_eq!(validate(candidate(input, 0.5)).score, expected);
        }
    }

    #[test]
    fn confidence_clamps_into_the_unit_interval() {
        for (input, expected) in [(-0.2, 0.0), (1.5, 1.0), (0.0, 0.0), (1.0, 1.0), (0.7, 0.7)] {
            assert_eq!(validate(candidate(50.0, input)).confidence, expected);
        }
    }

    #[test]
    fn fractional_scores_round_to_the_nearest_integer() {
        assert_eq!(validate(candidate(59.5, 0.5)).score, 60);
        assert_eq!(validate(candidate(59.4, 0.5)).score, 59);
    }

    #[test]
    fn unknown_risk_levels_pass_through_verbatim() {
        let result = validate(CandidateAnalysis {
            score: 50.0,
            explanation: "test".to_string(),
            risk_level: "SOMEWHAT_SKETCHY".to_string(),
            confidence: 0.5,
        });
        assert_eq!(result.risk_level, "SOMEWHAT_SKETCHY");
    }

    #[test]
    fn empty_explanation_passes_through() {
        let result = validate(CandidateAnalysis {
            score: 50.0,
            explanation: String::new(),
            risk_level: "LOW".to_string(),
            confidence: 0.5,
        });
        assert_eq!(result.explanation, "");
    }
}
