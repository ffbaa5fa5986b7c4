//! Keyword extraction flow — pulls structured skills, technologies, and
//! responsibilities out of a raw job description.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::flows::prompts::{EXTRACT_KEYWORDS_PROMPT_TEMPLATE, EXTRACT_KEYWORDS_SYSTEM};
use crate::llm_client::LlmClient;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractKeywordsInput {
    pub job_description: String,
}

/// Structured output of keyword extraction. Recomputed per analysis; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordExtractionResult {
    pub skills: Vec<String>,
    pub technologies: Vec<String>,
    pub responsibilities: Vec<String>,
}

/// Extracts keywords from a job description using the LLM.
/// Rejects an empty job description before any network call is made.
pub async fn extract_keywords(
    input: &ExtractKeywordsInput,
    llm: &LlmClient,
) -> Result<KeywordExtractionResult, AppError> {
    if input.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "Job description must not be empty".to_string(),
        ));
    }

    let prompt =
        EXTRACT_KEYWORDS_PROMPT_TEMPLATE.replace("{job_description}", &input.job_description);
    llm.call_json::<KeywordExtractionResult>(&prompt, EXTRACT_KEYWORDS_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Keyword extraction failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dummy_client() -> LlmClient {
        LlmClient::new("test-key".to_string())
    }

    #[tokio::test]
    async fn test_empty_job_description_rejected_before_network_call() {
        let input = ExtractKeywordsInput {
            job_description: "   \n ".to_string(),
        };
        // The dummy client holds no valid credentials; a Validation error here
        // proves the precondition fires before the request is built.
        let err = extract_keywords(&input, &dummy_client()).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_result_deserializes_from_model_output() {
        let json = r#"{
            "skills": ["communication", "problem solving"],
            "technologies": ["Rust", "PostgreSQL"],
            "responsibilities": ["Build backend services", "Review code"]
        }"#;
        let result: KeywordExtractionResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.skills.len(), 2);
        assert_eq!(result.technologies[0], "Rust");
        assert_eq!(result.responsibilities.len(), 2);
    }

    #[test]
    fn test_prompt_template_embeds_job_description() {
        let prompt = EXTRACT_KEYWORDS_PROMPT_TEMPLATE.replace("{job_description}", "needs Rust");
        assert!(prompt.contains("needs Rust"));
        assert!(!prompt.contains("{job_description}"));
    }
}
