//! Two-phase response handling: a permissive brace-span recovery step that
//! strips wrapper text the model may emit around its JSON, then a strict
//! schema parse. Kept as separate phases so a failure attributes to the
//! correct one.

use super::types::ExtractionResult;
use super::AnalysisError;

/// Parse the raw extraction response into a validated [`ExtractionResult`].
pub fn parse_extraction_response(response: &str) -> Result<ExtractionResult, AnalysisError> {
    let json_str = extract_brace_span(response)?;
    let extraction: ExtractionResult = serde_json::from_str(json_str)
        .map_err(|e| AnalysisError::SchemaViolation(e.to_string()))?;
    validate_extraction(&extraction)?;
    Ok(extraction)
}

/// Best-effort recovery: take the span from the first `{` to the last `}`.
fn extract_brace_span(response: &str) -> Result<&str, AnalysisError> {
    let start = response
        .find('{')
        .ok_or_else(|| AnalysisError::MalformedResponse("no opening brace in response".into()))?;
    let end = response
        .rfind('}')
        .ok_or_else(|| AnalysisError::MalformedResponse("no closing brace in response".into()))?;
    if end < start {
        return Err(AnalysisError::MalformedResponse(
            "closing brace precedes opening brace".into(),
        ));
    }
    Ok(&response[start..=end])
}

/// Range checks the strict parse cannot express.
fn validate_extraction(extraction: &ExtractionResult) -> Result<(), AnalysisError> {
    let p = extraction.engagement.positivity_probability;
    if !(0.0..=1.0).contains(&p) {
        return Err(AnalysisError::SchemaViolation(format!(
            "positivity_probability {p} outside [0, 1]"
        )));
    }
    Ok(())
}
