//! Prompt construction and model output parsing.

use serde_json::Value;

/// Instructions sent ahead of the user's text context.
pub const SYSTEM_PROMPT: &str = r#"You are CrisisLens AI, an emergency analysis assistant.
Analyze the provided image and text about a crisis.
Return STRICT JSON ONLY with the following schema:
{
  "crisis_type": "",
  "severity_level": "Low | Medium | High | Critical",
  "key_observations": [],
  "identified_risks": [],
  "recommended_actions": []
}
Guidelines:
- Combine visible damage and textual context.
- Be concise and factual.
- Avoid harmful, violent, or political persuasion content.
- Include an AI-assisted disclaimer in recommended_actions if appropriate."#;

/// Error message when no JSON object can be recovered from model output.
pub const INVALID_MODEL_JSON: &str = "Model returned invalid JSON.";

/// Build the full prompt for one analysis.
pub fn build_prompt(text: &str) -> String {
    format!("{SYSTEM_PROMPT}\n\nText context:\n{text}")
        .trim()
        .to_string()
}

/// Parse JSON out of raw model output.
///
/// Models sometimes wrap the object in prose or code fences, so when the
/// whole text is not valid JSON the span from the first `{` to the last `}`
/// is tried before giving up.
pub fn parse_model_json(text: &str) -> Option<Value> {
    if let Ok(value) = serde_json::from_str(text) {
        return Some(value);
    }

    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end <= start {
        return None;
    }
    serde_json::from_str(&text[start..=end]).ok()
}
