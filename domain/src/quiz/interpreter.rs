//! Model response interpretation.
//!
//! Turns free-form model text into the two shapes the quiz loop needs:
//! a name → probability update, or a single question string. Pure domain
//! logic, no I/O.

use crate::core::error::ResponseError;
use serde_json::Value;
use std::collections::HashMap;

/// Strip a surrounding markdown code fence (```` ```json ... ``` ````), if any.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string ("json") on the opening line
    let body = match rest.find('\n') {
        Some(idx) => &rest[idx + 1..],
        None => rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric()),
    };
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

/// Parse a probability update such as `{"A": 0.7, "B": 0.3}`.
///
/// The text must decode to a flat JSON object whose values are all numbers.
/// Range checking is left to the ledger.
pub fn parse_probability_update(raw: &str) -> Result<HashMap<String, f64>, ResponseError> {
    let body = strip_code_fence(raw);

    let value: Value = serde_json::from_str(body)
        .map_err(|e| ResponseError::malformed(format!("invalid JSON: {}", e), raw))?;

    let Value::Object(map) = value else {
        return Err(ResponseError::malformed("expected a JSON object", raw));
    };

    map.into_iter()
        .map(|(name, value)| match value.as_f64() {
            Some(probability) => Ok((name, probability)),
            None => Err(ResponseError::malformed(
                format!("value for '{}' is not a number", name),
                raw,
            )),
        })
        .collect()
}

/// Extract the question text from a model reply.
///
/// Trims whitespace and one pair of wrapping double quotes, which models
/// copy from the quoted examples in the prompt.
pub fn parse_question_text(raw: &str) -> Result<String, ResponseError> {
    let trimmed = raw.trim();
    let unquoted = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed)
        .trim();

    if unquoted.is_empty() {
        Err(ResponseError::Empty)
    } else {
        Ok(unquoted.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== parse_probability_update Tests ====================

    #[test]
    fn test_parse_update_flat_object() {
        let parsed = parse_probability_update(r#"{"A": 0.5, "B": 0.5}"#).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed["A"], 0.5);
        assert_eq!(parsed["B"], 0.5);
    }

    #[test]
    fn test_parse_update_integer_values() {
        let parsed = parse_probability_update(r#"{"A": 1, "B": 0}"#).unwrap();
        assert_eq!(parsed["A"], 1.0);
        assert_eq!(parsed["B"], 0.0);
    }

    #[test]
    fn test_parse_update_code_fence() {
        let raw = "```json\n{ \"Shape Rotator\": 0.7, \"Wordcel\": 0.3 }\n```";
        let parsed = parse_probability_update(raw).unwrap();
        assert_eq!(parsed["Shape Rotator"], 0.7);
        assert_eq!(parsed["Wordcel"], 0.3);
    }

    #[test]
    fn test_parse_update_single_line_code_fence() {
        let parsed = parse_probability_update(r#"```json {"A": 0.7, "B": 0.3}```"#).unwrap();
        assert_eq!(parsed["A"], 0.7);
        assert_eq!(parsed["B"], 0.3);

        let parsed = parse_probability_update(r#"```{"A": 1}```"#).unwrap();
        assert_eq!(parsed["A"], 1.0);
    }

    #[test]
    fn test_parse_update_not_json() {
        let err = parse_probability_update("not json").unwrap_err();
        assert!(matches!(err, ResponseError::Malformed { .. }));
        assert_eq!(err.raw(), Some("not json"));
    }

    #[test]
    fn test_parse_update_rejects_non_object() {
        assert!(parse_probability_update("[0.5, 0.5]").is_err());
        assert!(parse_probability_update("0.5").is_err());
    }

    #[test]
    fn test_parse_update_rejects_non_numeric_values() {
        assert!(parse_probability_update(r#"{"A": "high"}"#).is_err());
        assert!(parse_probability_update(r#"{"A": {"p": 0.5}}"#).is_err());
        assert!(parse_probability_update(r#"{"A": null}"#).is_err());
    }

    #[test]
    fn test_parse_update_empty_object() {
        assert!(parse_probability_update("{}").unwrap().is_empty());
    }

    // ==================== parse_question_text Tests ====================

    #[test]
    fn test_parse_question_trims() {
        assert_eq!(
            parse_question_text("  How often do you read for pleasure?\n").unwrap(),
            "How often do you read for pleasure?"
        );
    }

    #[test]
    fn test_parse_question_strips_wrapping_quotes() {
        assert_eq!(
            parse_question_text("\"Do you enjoy puzzles?\"").unwrap(),
            "Do you enjoy puzzles?"
        );
    }

    #[test]
    fn test_parse_question_keeps_inner_quotes() {
        assert_eq!(
            parse_question_text(r#"Have you read "Dune"?"#).unwrap(),
            r#"Have you read "Dune"?"#
        );
    }

    #[test]
    fn test_parse_question_empty() {
        assert_eq!(parse_question_text("   "), Err(ResponseError::Empty));
        assert_eq!(parse_question_text("\"\""), Err(ResponseError::Empty));
    }
}
