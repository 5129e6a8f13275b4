//! Deterministic stand-in for the hosted model

use async_trait::async_trait;
use serde_json::json;
use std::time::Duration;
use tracing::debug;

use portal_core::error::DomainError;
use portal_core::repositories::{LlmProvider, PromptRequest};
use portal_core::services::flows::{HEALTH_ADVICE_FLOW, HEALTH_REPORT_FLOW};

/// Answers every flow with a fixed, schema-conforming JSON object after an
/// optional simulated network delay.
#[derive(Debug, Clone, Default)]
pub struct CannedLlmProvider {
    latency: Duration,
}

impl CannedLlmProvider {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl LlmProvider for CannedLlmProvider {
    async fn complete(&self, request: PromptRequest) -> Result<String, DomainError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        debug!(flow = %request.flow, "Serving canned completion");

        let body = match request.flow.as_str() {
            HEALTH_ADVICE_FLOW => json!({
                "advice": "建议保持均衡饮食，减少精制糖和高油食物摄入；每周进行至少 150 分钟中等强度运动；\
                           按时作息并定期复查相关指标。如症状持续或加重，请及时就医。"
            }),
            HEALTH_REPORT_FLOW => json!({
                "reportTitle": "个人健康评估报告",
                "reportSummary": "根据提供的数据，整体健康状况稳定，部分指标需持续关注。",
                "reportDetails": "各项指标已按类别整理，未发现需要紧急处理的异常值。",
                "recommendations": "保持规律作息与适量运动，三个月后复查关键指标。"
            }),
            other => {
                return Err(DomainError::FlowFailed(format!("no canned answer for flow {}", other)))
            }
        };
        Ok(body.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_core::domain::HealthAdviceInput;
    use portal_core::services::FlowService;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_health_advice_contract_against_canned_provider() {
        let service = FlowService::new(Arc::new(CannedLlmProvider::default())).unwrap();
        let input = HealthAdviceInput {
            question: "如何控糖".into(),
            name: "张三".into(),
            gender: "male".into(),
            age: 45,
            medical_history: "2型糖尿病".into(),
        };

        let output = service.health_advice(&input).await.unwrap();
        assert!(!output.advice.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_latency() {
        let provider = CannedLlmProvider::new(Duration::from_millis(800));
        let started = tokio::time::Instant::now();
        provider
            .complete(PromptRequest {
                flow: HEALTH_REPORT_FLOW.into(),
                system: String::new(),
                user: String::new(),
            })
            .await
            .unwrap();
        assert!(started.elapsed() >= Duration::from_millis(800));
    }

    #[tokio::test]
    async fn test_unknown_flow_fails() {
        let provider = CannedLlmProvider::default();
        let result = provider
            .complete(PromptRequest {
                flow: "triage".into(),
                system: String::new(),
                user: String::new(),
            })
            .await;
        assert!(result.is_err());
    }
}
