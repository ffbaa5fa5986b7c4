use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::store::Document;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmailType {
    #[serde(rename = "Initial Application")]
    InitialApplication,
    #[serde(rename = "Thank You Note")]
    ThankYouNote,
    #[serde(rename = "Application Status Inquiry")]
    ApplicationStatusInquiry,
    #[serde(rename = "Offer Follow-up")]
    OfferFollowUp,
    Networking,
    Other,
}

/// One logged email, linked to a job application.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailLog {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(default = "Uuid::nil")]
    pub user_id: Uuid,
    pub job_id: Uuid,
    #[serde(rename = "type")]
    pub email_type: EmailType,
    pub date_sent: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default = "Utc::now")]
    pub last_updated: DateTime<Utc>,
}

impl Document for EmailLog {
    const ENTITY_TYPE: &'static str = "emailLogs";

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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_type_wire_name_is_type() {
        let json = format!(
            r#"{{"jobId": "{}", "type": "Thank You Note", "dateSent": "2026-08-01T12:00:00Z"}}"#,
            Uuid::new_v4()
        );
        let log: EmailLog = serde_json::from_str(&json).unwrap();
        assert_eq!(log.email_type, EmailType::ThankYouNote);

        let out = serde_json::to_value(&log).unwrap();
        assert_eq!(out["type"], "Thank You Note");
    }
}
