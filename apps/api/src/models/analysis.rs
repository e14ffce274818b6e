use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Market demand labels the insight prompt asks for. Not enforced on parse.
pub const MARKET_DEMAND_LEVELS: [&str; 4] = ["Low", "Medium", "High", "Very High"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    /// Free text, e.g. "2019 - Present".
    pub duration: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub year: String,
}

/// Structured candidate data pulled out of the resume text.
/// Every field is required; a missing or null field fails deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub name: String,
    pub email: String,
    pub summary: String,
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecommendation {
    /// Empty when the model leaves it out; the recommendation stage always
    /// replaces a blank or repeated id before the job is stored.
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub match_score: i64,
    pub reason: String,
    pub skills_found: Vec<String>,
    pub skills_missing: Vec<String>,
    #[serde(default)]
    pub salary_estimate: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerInsight {
    pub score: i64,
    pub market_demand: String,
    pub top_recommendations: Vec<String>,
    pub gap_analysis: Vec<String>,
}

impl CareerInsight {
    pub fn has_known_market_demand(&self) -> bool {
        MARKET_DEMAND_LEVELS.contains(&self.market_demand.as_str())
    }
}

/// One persisted analysis: profile, recommendations and insight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub id: Uuid,
    pub resume: CandidateProfile,
    pub jobs: Vec<JobRecommendation>,
    pub insights: CareerInsight,
    pub created_at: DateTime<Utc>,
}
