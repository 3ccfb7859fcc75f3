//! Analysis results.
//!
//! The form treats the server response as opaque JSON. [`CrisisReport`] only
//! documents the shape the server asks the model to produce.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Opaque JSON returned by `POST /analyze`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalysisResult(Value);

impl AnalysisResult {
    pub const fn new(value: Value) -> Self {
        Self(value)
    }

    pub const fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// Render with two-space indentation, keys in server order.
    pub fn pretty(&self) -> String {
        // Serializing a `Value` cannot fail.
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.0.to_string())
    }
}

impl From<Value> for AnalysisResult {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Severity scale used in crisis reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeverityLevel {
    Low,
    Medium,
    High,
    Critical,
}

/// Report schema requested from the vision model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrisisReport {
    pub crisis_type: String,
    pub severity_level: SeverityLevel,
    #[serde(default)]
    pub key_observations: Vec<String>,
    #[serde(default)]
    pub identified_risks: Vec<String>,
    #[serde(default)]
    pub recommended_actions: Vec<String>,
}

impl CrisisReport {
    /// Try to read a result as a well-formed report.
    ///
    /// Returns `None` for model output that drifted from the schema; callers
    /// still render such results verbatim.
    pub fn from_result(result: &AnalysisResult) -> Option<Self> {
        serde_json::from_value(result.as_value().clone()).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn pretty_uses_two_space_indent() {
        let result = AnalysisResult::new(json!({"x": 1}));
        assert_eq!(result.pretty(), "{\n  \"x\": 1\n}");
    }

    #[test]
    fn pretty_keeps_server_key_order() {
        let result: AnalysisResult = serde_json::from_str(r#"{"zeta":1,"alpha":2}"#).unwrap();
        let pretty = result.pretty();
        assert!(pretty.find("zeta").unwrap() < pretty.find("alpha").unwrap());
    }

    #[test]
    fn report_parses_full_schema() {
        let result = AnalysisResult::new(json!({
            "crisis_type": "Flood",
            "severity_level": "High",
            "key_observations": ["water above car doors"],
            "identified_risks": ["electrocution"],
            "recommended_actions": ["move to higher ground"]
        }));
        let report = CrisisReport::from_result(&result).unwrap();
        assert_eq!(report.severity_level, SeverityLevel::High);
        assert_eq!(report.key_observations.len(), 1);
    }

    #[test]
    fn report_rejects_unknown_severity() {
        let result = AnalysisResult::new(json!({
            "crisis_type": "Fire",
            "severity_level": "Apocalyptic"
        }));
        assert!(CrisisReport::from_result(&result).is_none());
    }
}
