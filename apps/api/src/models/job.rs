use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::store::Document;

/// Pipeline status of one application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobStatus {
    #[serde(rename = "Not Applied")]
    NotApplied,
    Applied,
    #[serde(rename = "Interview Scheduled")]
    InterviewScheduled,
    #[serde(rename = "Offer Received")]
    OfferReceived,
    Rejected,
    #[serde(rename = "Follow-up Sent")]
    FollowUpSent,
    Wishlist,
}

/// Where the posting was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobPlatform {
    LinkedIn,
    Naukri,
    Upwork,
    Direct,
    Indeed,
    #[serde(rename = "Company Website")]
    CompanyWebsite,
    Referral,
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(default = "Uuid::nil")]
    pub user_id: Uuid,
    pub title: String,
    pub company: String,
    pub platform: JobPlatform,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub status: JobStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_applied: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_description: Option<String>,
    #[serde(default = "Utc::now")]
    pub last_updated: DateTime<Utc>,
}

impl Document for JobApplication {
    const ENTITY_TYPE: &'static str = "jobApplications";

    fn id(&self) -> Uuid {
        self.id
    }

    fn set_owner(&mut self, id: Uuid, user_id: Uuid) {
        self.id = id;
        self.user_id = user_id;
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.last_updated = now;
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.title.trim().is_empty() {
            return Err(AppError::Validation("Job title is required".to_string()));
        }
        if self.company.trim().is_empty() {
            return Err(AppError::Validation("Company is required".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_with_display_labels() {
        assert_eq!(
            serde_json::to_string(&JobStatus::InterviewScheduled).unwrap(),
            r#""Interview Scheduled""#
        );
        assert_eq!(
            serde_json::to_string(&JobStatus::FollowUpSent).unwrap(),
            r#""Follow-up Sent""#
        );
    }

    #[test]
    fn test_create_body_without_id_gets_generated_one() {
        let json = r#"{
            "title": "Rust Engineer",
            "company": "Acme",
            "platform": "LinkedIn",
            "status": "Applied"
        }"#;
        let a: JobApplication = serde_json::from_str(json).unwrap();
        let b: JobApplication = serde_json::from_str(json).unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(a.user_id, Uuid::nil());
    }

    #[test]
    fn test_validate_requires_title_and_company() {
        let mut job: JobApplication = serde_json::from_str(
            r#"{"title": "Rust Engineer", "company": "Acme", "platform": "Direct", "status": "Wishlist"}"#,
        )
        .unwrap();
        assert!(job.validate().is_ok());

        job.title = " ".to_string();
        assert!(job.validate().is_err());
    }
}
