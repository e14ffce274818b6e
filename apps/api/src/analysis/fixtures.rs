//! Canned model completions shared by the analysis tests.

use serde_json::json;

use crate::models::analysis::CandidateProfile;

pub const JANE_PROFILE: &str = r#"{
    "name": "Jane Doe",
    "email": "jane@example.com",
    "summary": "Python developer with 5 years of experience",
    "skills": ["Python", "Django", "PostgreSQL"],
    "experience": [
        {
            "title": "Python Developer",
            "company": "Acme",
            "duration": "5 years",
            "highlights": ["Shipped billing service"]
        }
    ],
    "education": []
}"#;

pub const INSIGHT_JSON: &str = r#"{
    "score": 78,
    "marketDemand": "High",
    "topRecommendations": ["Learn Go", "Contribute to open source"],
    "gapAnalysis": ["Kubernetes"]
}"#;

pub fn jane_profile() -> CandidateProfile {
    serde_json::from_str(JANE_PROFILE).unwrap()
}

/// A JSON array of `count` jobs titled "Job 0".."Job n", with or without ids.
pub fn jobs_json(count: usize, with_ids: bool) -> String {
    let jobs: Vec<_> = (0..count)
        .map(|i| {
            let mut job = json!({
                "title": format!("Job {i}"),
                "company": "Initech",
                "location": "Remote",
                "matchScore": 80,
                "reason": "Python background",
                "skillsFound": ["Python"],
                "skillsMissing": ["Go"],
                "salaryEstimate": "$120k - $150k"
            });
            if with_ids {
                job["id"] = json!(format!("job-{i}"));
            }
            job
        })
        .collect();
    serde_json::to_string(&jobs).unwrap()
}
