#![allow(dead_code)]

//! Keyword Matching Engine — scores a resume against keywords extracted from
//! a job description.
//!
//! Pure-Rust, fast, deterministic, no LLM call. The extraction step (which
//! does call the LLM) lives in `flows::extract_keywords`; this module only
//! consumes its result.

use serde::{Deserialize, Serialize};

use crate::flows::extract_keywords::KeywordExtractionResult;

// ────────────────────────────────────────────────────────────────────────────
// Output data model
// ────────────────────────────────────────────────────────────────────────────

/// Qualitative band derived from the match score.
/// Thresholds are inclusive at the lower bound of each band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchAssessment {
    #[serde(rename = "Low Match")]
    Low,
    #[serde(rename = "Fair Match")]
    Fair,
    #[serde(rename = "Moderate Match")]
    Moderate,
    #[serde(rename = "Strong Match")]
    Strong,
}

impl MatchAssessment {
    /// Bands: Strong ≥ 75, Moderate ≥ 50, Fair ≥ 25, else Low.
    pub fn from_score(score: f64) -> Self {
        if score >= 75.0 {
            MatchAssessment::Strong
        } else if score >= 50.0 {
            MatchAssessment::Moderate
        } else if score >= 25.0 {
            MatchAssessment::Fair
        } else {
            MatchAssessment::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MatchAssessment::Low => "Low Match",
            MatchAssessment::Fair => "Fair Match",
            MatchAssessment::Moderate => "Moderate Match",
            MatchAssessment::Strong => "Strong Match",
        }
    }
}

/// Full analysis returned to callers. Derived deterministically from the
/// extraction result and resume text; recomputed per request, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchAnalysis {
    pub jd_keywords: KeywordExtractionResult,
    pub matching_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    /// Percentage of candidate keywords found in the resume, in [0, 100].
    pub match_score: f64,
    pub qualitative_assessment: MatchAssessment,
}

// ────────────────────────────────────────────────────────────────────────────
// Core matching algorithm
// ────────────────────────────────────────────────────────────────────────────

/// Flattens skills + technologies + tokenized responsibility words into one
/// lower-cased, deduplicated candidate list. Insertion order is preserved.
pub fn candidate_keywords(extraction: &KeywordExtractionResult) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut candidates = Vec::new();

    let mut push = |keyword: String| {
        if !keyword.is_empty() && seen.insert(keyword.clone()) {
            candidates.push(keyword);
        }
    };

    for skill in &extraction.skills {
        push(skill.to_lowercase());
    }
    for tech in &extraction.technologies {
        push(tech.to_lowercase());
    }
    for responsibility in &extraction.responsibilities {
        for word in tokenize(responsibility) {
            push(word);
        }
    }

    candidates
}

/// Splits text into lower-cased word tokens on non-word boundaries.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string())
        .collect()
}

/// Classifies every candidate keyword as matching or missing against the
/// resume text and computes the overall match score.
///
/// Matching is substring containment on the lower-cased resume text, not
/// word-boundary matching — short keywords can false-positive inside longer
/// unrelated words (inherited behavior, kept for parity).
pub fn analyze(extraction: KeywordExtractionResult, resume_text: &str) -> MatchAnalysis {
    let candidates = candidate_keywords(&extraction);
    let resume_lower = resume_text.to_lowercase();

    let mut matching_keywords = Vec::new();
    let mut missing_keywords = Vec::new();

    for keyword in &candidates {
        if resume_lower.contains(keyword.as_str()) {
            matching_keywords.push(keyword.clone());
        } else {
            missing_keywords.push(keyword.clone());
        }
    }

    let match_score = if candidates.is_empty() {
        0.0
    } else {
        (matching_keywords.len() as f64 / candidates.len() as f64) * 100.0
    };

    MatchAnalysis {
        jd_keywords: extraction,
        matching_keywords,
        missing_keywords,
        match_score,
        qualitative_assessment: MatchAssessment::from_score(match_score),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
