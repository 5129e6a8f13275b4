// ============================================================================
// Portal Core - AI Flows
// File: crates/portal-core/src/services/flows.rs
// ============================================================================
//! Schema-validated prompt flows: health advice and report generation.
//!
//! Each flow validates its input, renders one prompt, makes exactly one
//! provider call and validates the JSON the model returns. No retries.

use std::sync::Arc;

use handlebars::Handlebars;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{error, info, Instrument};
use uuid::Uuid;
use validator::Validate;

use crate::domain::{HealthAdviceInput, HealthAdviceOutput, ReportInput, ReportOutput};
use crate::error::DomainError;
use crate::repositories::{LlmProvider, PromptRequest};

pub const HEALTH_ADVICE_FLOW: &str = "health_advice";
pub const HEALTH_REPORT_FLOW: &str = "health_report";

const HEALTH_ADVICE_SYSTEM: &str = "你是一名专业、谨慎的健康顾问。根据用户的个人信息和病史给出通俗易懂、可执行的健康建议。\
不要做出诊断，必要时提醒用户就医。只输出 JSON。";

const HEALTH_ADVICE_TEMPLATE: &str = r#"用户信息：
姓名：{{name}}
性别：{{gender}}
年龄：{{age}}
既往病史：{{medicalHistory}}

用户问题：{{question}}

请只返回一个 JSON 对象，格式为：{"advice": "<健康建议>"}"#;

const HEALTH_REPORT_SYSTEM: &str = "你是一名医疗报告撰写助手。根据提供的健康数据生成结构清晰、客观的健康报告。只输出 JSON。";

const HEALTH_REPORT_TEMPLATE: &str = r#"健康数据：
{{healthData}}
{{#if reportType}}
报告类型：{{reportType}}
{{/if}}
{{#if userPreferences}}
用户偏好：{{userPreferences}}
{{/if}}

请只返回一个 JSON 对象，包含以下字符串字段：
{"reportTitle": "<标题>", "reportSummary": "<摘要>", "reportDetails": "<详细内容>", "recommendations": "<建议>"}"#;

pub struct FlowService {
    provider: Arc<dyn LlmProvider>,
    templates: Handlebars<'static>,
    fence: Regex,
}

impl FlowService {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Result<Self, DomainError> {
        let mut templates = Handlebars::new();
        templates.register_escape_fn(handlebars::no_escape);
        templates
            .register_template_string(HEALTH_ADVICE_FLOW, HEALTH_ADVICE_TEMPLATE)
            .map_err(|e| DomainError::TemplateError(e.to_string()))?;
        templates
            .register_template_string(HEALTH_REPORT_FLOW, HEALTH_REPORT_TEMPLATE)
            .map_err(|e| DomainError::TemplateError(e.to_string()))?;

        let fence = Regex::new(r"(?s)^\s*```(?:json)?\s*(.*?)\s*```\s*$")
            .map_err(|e| DomainError::TemplateError(e.to_string()))?;

        Ok(Self { provider, templates, fence })
    }

    pub async fn health_advice(
        &self,
        input: &HealthAdviceInput,
    ) -> Result<HealthAdviceOutput, DomainError> {
        self.run(HEALTH_ADVICE_FLOW, HEALTH_ADVICE_SYSTEM, input).await
    }

    pub async fn generate_report(&self, input: &ReportInput) -> Result<ReportOutput, DomainError> {
        self.run(HEALTH_REPORT_FLOW, HEALTH_REPORT_SYSTEM, input).await
    }

    async fn run<I, O>(&self, flow: &str, system: &str, input: &I) -> Result<O, DomainError>
    where
        I: Serialize + Validate,
        O: DeserializeOwned + Validate,
    {
        let span = tracing::info_span!("flow", flow, request_id = %Uuid::new_v4());
        async move {
            input
                .validate()
                .map_err(|e| DomainError::InvalidFlowInput(e.to_string()))?;

            let user = self
                .templates
                .render(flow, input)
                .map_err(|e| DomainError::TemplateError(e.to_string()))?;

            info!("Invoking model");
            let raw = self
                .provider
                .complete(PromptRequest {
                    flow: flow.to_string(),
                    system: system.to_string(),
                    user,
                })
                .await
                .inspect_err(|e| error!("Model call failed: {}", e))?;

            let output: O = serde_json::from_str(self.strip_fence(&raw)).map_err(|e| {
                error!("Model returned malformed JSON: {}", e);
                DomainError::FlowFailed(format!("malformed model output: {}", e))
            })?;
            output
                .validate()
                .map_err(|e| DomainError::FlowFailed(format!("model output failed validation: {}", e)))?;

            info!("Flow completed");
            Ok(output)
        }
        .instrument(span)
        .await
    }

    fn strip_fence<'a>(&self, raw: &'a str) -> &'a str {
        match self.fence.captures(raw).and_then(|c| c.get(1)) {
            Some(body) => body.as_str(),
            None => raw.trim(),
        }
    }
}
