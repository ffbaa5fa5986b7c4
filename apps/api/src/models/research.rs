use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::store::Document;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyContact {
    pub name: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<String>,
}

/// Research notes on one company, optionally linked to job applications.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyResearch {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(default = "Uuid::nil")]
    pub user_id: Uuid,
    pub company_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mission: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recent_news_highlights: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub culture_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub key_contacts: Vec<KeyContact>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub linked_job_ids: Vec<Uuid>,
    #[serde(default = "Utc::now")]
    pub last_updated: DateTime<Utc>,
}

impl Document for CompanyResearch {
    const ENTITY_TYPE: &'static str = "companyResearch";

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
        if self.company_name.trim().is_empty() {
            return Err(AppError::Validation("Company name is required".to_string()));
        }
        Ok(())
    }
}
