//! Document compliance analysis result.

use serde::{Deserialize, Serialize};

use super::contract::ResponseContract;

/// Outcome of checking a trade document for compliance problems.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentAnalysis {
    /// Whether the document is valid and compliant.
    pub is_valid: bool,
    /// Issues found, in the order reported.
    pub issues: Vec<String>,
    /// Suggested improvements, in the order reported.
    pub suggestions: Vec<String>,
}

impl ResponseContract for DocumentAnalysis {
    const NAME: &'static str = "document_analysis";

    fn fallback() -> Self {
        Self {
            is_valid: false,
            issues: vec!["Failed to analyze document".to_string()],
            suggestions: vec!["Please try again or contact support".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::trade::{parse_response, GenerationFailure};

    #[test]
    fn parses_camel_case_fields() {
        let analysis: DocumentAnalysis = parse_response(
            r#"{"isValid": true, "issues": [], "suggestions": ["Add HS codes"]}"#,
        )
        .unwrap();

        assert!(analysis.is_valid);
        assert!(analysis.issues.is_empty());
        assert_eq!(analysis.suggestions, vec!["Add HS codes".to_string()]);
    }

    #[test]
    fn missing_field_is_schema_failure() {
        let err = parse_response::<DocumentAnalysis>(r#"{"isValid": true, "issues": []}"#)
            .unwrap_err();
        assert!(matches!(err, GenerationFailure::Schema(_)));
    }

    #[test]
    fn string_where_bool_expected_is_schema_failure() {
        let err = parse_response::<DocumentAnalysis>(
            r#"{"isValid": "yes", "issues": [], "suggestions": []}"#,
        )
        .unwrap_err();
        assert!(matches!(err, GenerationFailure::Schema(_)));
    }

    #[test]
    fn serializes_with_wire_names() {
        let json = serde_json::to_value(DocumentAnalysis::fallback()).unwrap();
        assert_eq!(json["isValid"], false);
        assert_eq!(json["issues"][0], "Failed to analyze document");
        assert_eq!(json["suggestions"][0], "Please try again or contact support");
    }
}
