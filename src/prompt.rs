//! Prompt Construction
//!
//! The instruction text sent with every inference request. This text is a
//! contract with the backend, not user input: the output-shape section below
//! is what makes the free-text response machine-extractable at all, so it is
//! kept as fixed, version-controlled configuration.

/// Fixed analysis instruction for the vision model.
const ANALYSIS_PROMPT: &str = r#"
You are an expert in detecting online fraud and scams. Analyze the provided image carefully and assess it for possible fraud indicators.

Pay particular attention to:
- Phishing attempts (fake login pages, suspicious URLs)
- Fake online shops (unrealistic prices, unprofessional design)
- Social media scams (fake profiles, suspicious messages)
- Tech support scams (fake error messages, pop-ups)
- Investment fraud (unrealistic profit promises)
- Romance scams (suspicious dating profiles)
- Financial fraud attempts
- Grammar and spelling mistakes
- Pressure and time limits
- Unusual payment methods

Return your answer in the following JSON format:
{
    "score": <number from 0-100, where 100 = definitely a scam>,
    "explanation": "<detailed explanation>",
    "risk_level": "<LOW|MEDIUM|HIGH|VERY_HIGH>",
    "confidence": <confidence in the assessment from 0.0-1.0>
}

Be precise and make your assessment easy to follow.
"#;

/// The instruction text for one analysis request.
pub fn analysis_prompt() -> &'static str {
    ANALYSIS_PROMPT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_enumerates_the_scam_categories() {
        let prompt = analysis_prompt();
        for term in [
            "Phishing",
            "Fake online shops",
            "Social media scams",
            "Tech support scams",
            "Investment fraud",
            "Romance scams",
            "Financial fraud",
            "Grammar and spelling mistakes",
            "Pressure and time limits",
            "Unusual payment methods",
        ] {
            assert!(prompt.contains(term), "prompt is missing category: {term}");
        }
    }

    #[test]
    fn prompt_specifies_the_output_shape() {
        let prompt = analysis_prompt();
        assert!(prompt.contains(r#""score""#));
        assert!(prompt.contains(r#""explanation""#));
        assert!(prompt.contains(r#""risk_level""#));
        assert!(prompt.contains(r#""confidence""#));
        assert!(prompt.contains("LOW|MEDIUM|HIGH|VERY_HIGH"));
    }
}
