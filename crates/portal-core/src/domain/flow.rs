// ============================================================================
// Portal Core - AI Flow Schemas
// File: crates/portal-core/src/domain/flow.rs
// Description: Request/response contracts of the two model-backed flows
// ============================================================================

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Health-advice chat request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct HealthAdviceInput {
    #[validate(length(min = 1, max = 2000, message = "Question must be between 1 and 2000 characters"))]
    pub question: String,

    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 20, message = "Gender is required"))]
    pub gender: String,

    #[validate(range(max = 150, message = "Age must be between 0 and 150"))]
    pub age: u32,

    #[validate(length(max = 5000, message = "Medical history too long"))]
    pub medical_history: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct HealthAdviceOutput {
    #[validate(length(min = 1, message = "Advice must not be empty"))]
    pub advice: String,
}

/// Report-generation request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReportInput {
    #[validate(length(min = 1, max = 20000, message = "Health data must be between 1 and 20000 characters"))]
    pub health_data: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 100, message = "Report type too long"))]
    pub report_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 2000, message = "User preferences too long"))]
    pub user_preferences: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReportOutput {
    #[validate(length(min = 1, message = "Report title must not be empty"))]
    pub report_title: String,

    #[validate(length(min = 1, message = "Report summary must not be empty"))]
    pub report_summary: String,

    #[validate(length(min = 1, message = "Report details must not be empty"))]
    pub report_details: String,

    #[validate(length(min = 1, message = "Recommendations must not be empty"))]
    pub recommendations: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_advice_wire_names() {
        let input: HealthAdviceInput = serde_json::from_value(serde_json::json!({
            "question": "如何控糖",
            "name": "张三",
            "gender": "male",
            "age": 45,
            "medicalHistory": "2型糖尿病"
        }))
        .unwrap();

        assert_eq!(input.medical_history, "2型糖尿病");
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_age_out_of_range() {
        let input = HealthAdviceInput {
            question: "q".into(),
            name: "n".into(),
            gender: "female".into(),
            age: 200,
            medical_history: String::new(),
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_report_optional_fields() {
        let input: ReportInput =
            serde_json::from_value(serde_json::json!({ "healthData": "血压 120/80" })).unwrap();
        assert!(input.report_type.is_none());
        assert!(input.validate().is_ok());

        let output: Result<ReportOutput, _> = serde_json::from_value(serde_json::json!({
            "reportTitle": "t", "reportSummary": "s", "reportDetails": "d"
        }));
        assert!(output.is_err());
    }
}
