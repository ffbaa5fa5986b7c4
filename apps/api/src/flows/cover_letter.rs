//! Cover-letter generation flow.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::flows::prompts::{COVER_LETTER_PROMPT_TEMPLATE, COVER_LETTER_SYSTEM};
use crate::llm_client::LlmClient;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterInput {
    pub job_description: String,
    /// Plain-text content of the resume the letter is tailored to.
    pub selected_resume: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterOutput {
    pub cover_letter: String,
}

/// Generates a tailored cover letter from a job description and resume text.
/// Both inputs are required; empty input is rejected before any network call.
pub async fn generate_cover_letter(
    input: &CoverLetterInput,
    llm: &LlmClient,
) -> Result<CoverLetterOutput, AppError> {
    if input.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "Job description must not be empty".to_string(),
        ));
    }
    if input.selected_resume.trim().is_empty() {
        return Err(AppError::Validation(
            "Selected resume must not be empty".to_string(),
        ));
    }

    let prompt = COVER_LETTER_PROMPT_TEMPLATE
        .replace("{job_description}", &input.job_description)
        .replace("{selected_resume}", &input.selected_resume);
    llm.call_json::<CoverLetterOutput>(&prompt, COVER_LETTER_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Cover letter generation failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dummy_client() -> LlmClient {
        LlmClient::new("test-key".to_string())
    }

    #[tokio::test]
    async fn test_empty_job_description_rejected() {
        let input = CoverLetterInput {
            job_description: "".to_string(),
            selected_resume: "Ten years of Rust.".to_string(),
        };
        let err = generate_cover_letter(&input, &dummy_client())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_empty_resume_rejected() {
        let input = CoverLetterInput {
            job_description: "Senior Rust Engineer".to_string(),
            selected_resume: "  ".to_string(),
        };
        let err = generate_cover_letter(&input, &dummy_client())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_output_deserializes_with_camel_case_field() {
        let json = r#"{"coverLetter": "Dear hiring manager, ..."}"#;
        let output: CoverLetterOutput = serde_json::from_str(json).unwrap();
        assert!(output.cover_letter.starts_with("Dear"));
    }
}
