use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::store::Document;

/// Notes from one interview round, linked to a job application.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewNote {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(default = "Uuid::nil")]
    pub user_id: Uuid,
    pub job_id: Uuid,
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interviewers: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub questions_asked: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub your_responses: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub self_assessment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default = "Utc::now")]
    pub last_updated: DateTime<Utc>,
}

impl Document for InterviewNote {
    const ENTITY_TYPE: &'static str = "interviewNotes";

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
}
