use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::store::Document;

/// The three fixed resume layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateId {
    Modern,
    Classic,
    IvyLeague,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

/// One work-history entry. `id` addresses the entry for edit/remove in the
/// builder; display fields are all optional — rendering skips incomplete
/// entries rather than rejecting them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// ISO date or "Present".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// Plain text; newline-separated bullet points.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graduation_year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillEntry {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<SkillLevel>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomSectionEntry {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Structured resume content edited through the builder and fed to the
/// template renderer. Persisted as part of the owning `Resume` document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_info: Option<PersonalInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub education: Vec<EducationEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<SkillEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_sections: Vec<CustomSectionEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(default = "Uuid::nil")]
    pub user_id: Uuid,
    pub name: String,
    /// Plain-text content, used by keyword matching, cover letters, and
    /// summarization. Builder resumes may leave this empty.
    #[serde(default)]
    pub content: String,
    /// AI-generated summary for plain-text resumes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Set when this resume was made in the builder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<TemplateId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structured_data: Option<ResumeData>,
    #[serde(default = "Utc::now")]
    pub last_updated: DateTime<Utc>,
}

impl Document for Resume {
    const ENTITY_TYPE: &'static str = "resumes";

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
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("Resume name is required".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_data() -> ResumeData {
        ResumeData {
            personal_info: Some(PersonalInfo {
                full_name: Some("Ada Lovelace".to_string()),
                email: Some("ada@example.com".to_string()),
                ..PersonalInfo::default()
            }),
            summary: Some("Engine programmer.".to_string()),
            experience: vec![ExperienceEntry {
                id: Uuid::new_v4(),
                job_title: Some("Analyst".to_string()),
                company: Some("Analytical Engines Ltd".to_string()),
                location: None,
                start_date: Some("1842-01-01".to_string()),
                end_date: Some("Present".to_string()),
                description: Some("- Wrote the first program".to_string()),
            }],
            education: vec![],
            skills: vec![SkillEntry {
                id: Uuid::new_v4(),
                name: Some("Mathematics".to_string()),
                level: Some(SkillLevel::Expert),
            }],
            custom_sections: vec![],
        }
    }

    #[test]
    fn test_resume_data_json_round_trip_is_equivalent() {
        let data = sample_data();
        let json = serde_json::to_string(&data).unwrap();
        let back: ResumeData = serde_json::from_str(&json).unwrap();
        assert_eq!(data, back);
    }

    #[test]
    fn test_absent_optional_fields_default_fill_on_import() {
        let back: ResumeData = serde_json::from_str(r#"{"summary": "Short."}"#).unwrap();
        assert_eq!(back.summary.as_deref(), Some("Short."));
        assert!(back.personal_info.is_none());
        assert!(back.experience.is_empty());
        assert!(back.skills.is_empty());
    }

    #[test]
    fn test_template_id_uses_kebab_case_wire_names() {
        assert_eq!(
            serde_json::to_string(&TemplateId::IvyLeague).unwrap(),
            r#""ivy-league""#
        );
        let parsed: TemplateId = serde_json::from_str(r#""modern""#).unwrap();
        assert_eq!(parsed, TemplateId::Modern);
    }

    #[test]
    fn test_resume_requires_name() {
        let resume: Resume = serde_json::from_str(r#"{"name": ""}"#).unwrap();
        assert!(resume.validate().is_err());

        let resume: Resume = serde_json::from_str(r#"{"name": "My CV"}"#).unwrap();
        assert!(resume.validate().is_ok());
        assert!(resume.content.is_empty());
    }
}
