//! Resume summarization flow.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::flows::prompts::{SUMMARIZE_PROMPT_TEMPLATE, SUMMARIZE_SYSTEM};
use crate::llm_client::LlmClient;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeResumeInput {
    pub resume_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeResumeOutput {
    pub summary: String,
}

/// Produces a short professional summary of a plain-text resume.
/// Empty input is rejected before any network call.
pub async fn summarize_resume(
    input: &SummarizeResumeInput,
    llm: &LlmClient,
) -> Result<SummarizeResumeOutput, AppError> {
    if input.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "Resume text must not be empty".to_string(),
        ));
    }

    let prompt = SUMMARIZE_PROMPT_TEMPLATE.replace("{resume_text}", &input.resume_text);
    llm.call_json::<SummarizeResumeOutput>(&prompt, SUMMARIZE_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Resume summarization failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_resume_text_rejected_before_network_call() {
        let input = SummarizeResumeInput {
            resume_text: "".to_string(),
        };
        let err = summarize_resume(&input, &LlmClient::new("test-key".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_output_deserializes_from_model_output() {
        let json = r#"{"summary": "Backend engineer with 8 years of experience."}"#;
        let output: SummarizeResumeOutput = serde_json::from_str(json).unwrap();
        assert!(output.summary.contains("8 years"));
    }
}
