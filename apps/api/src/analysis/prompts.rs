// Analysis pipeline LLM prompt templates.
// Placeholders in `{braces}` are substituted by `fill_template`.

pub const PROFILE_PARSE_PROMPT: &str = r#"Parse the following resume text and extract key details into valid JSON format.

Required JSON structure (use exactly these field names):
{
  "name": "string",
  "email": "string",
  "summary": "string",
  "skills": ["string"],
  "experience": [
    {
      "title": "string",
      "company": "string",
      "duration": "string",
      "highlights": ["string"]
    }
  ],
  "education": [
    {
      "degree": "string",
      "institution": "string",
      "year": "string"
    }
  ]
}

Every field is required. Use "" or [] when the resume has nothing for a field.

Resume Text:
{resume_text}

{json_only}"#;

pub const JOB_RECOMMENDATIONS_PROMPT: &str = r#"Based on the following candidate profile, generate exactly {job_count} realistic job recommendations.

Profile:
Summary: {summary}
Skills: {skills}
Experience: {experience}

Required JSON structure (an array of exactly {job_count} jobs):
[
  {
    "id": "unique-string",
    "title": "string",
    "company": "string",
    "location": "string",
    "matchScore": 85,
    "reason": "string explaining why this is a good match",
    "skillsFound": ["skill1", "skill2"],
    "skillsMissing": ["skill1", "skill2"],
    "salaryEstimate": "$120k - $150k"
  }
]

matchScore is an integer from 0 to 100.

{json_only}"#;

pub const CAREER_INSIGHTS_PROMPT: &str = r#"Analyze the candidate's profile and provide strategic career insights.

Profile:
Skills: {skills}
Experience: {experience}

Required JSON structure:
{
  "score": 85,
  "marketDemand": "High",
  "topRecommendations": [
    "Recommendation 1",
    "Recommendation 2",
    "Recommendation 3"
  ],
  "gapAnalysis": [
    "Missing skill 1",
    "Missing skill 2"
  ]
}

score is an integer from 0 to 100.
marketDemand must be one of: {market_demand_levels}

{json_only}"#;

/// Substitutes `{name}` placeholders in one left-to-right pass.
///
/// Inserted values are never rescanned, so profile text that happens to
/// contain `{skills}` or similar comes through untouched. Braces that do not
/// name a known placeholder (the JSON examples) are copied as-is.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after_brace = &rest[start + 1..];
        let matched = values.iter().find_map(|(name, value)| {
            after_brace
                .strip_prefix(*name)?
                .strip_prefix('}')
                .map(|tail| (*value, tail))
        });
        match matched {
            Some((value, tail)) => {
                out.push_str(value);
                rest = tail;
            }
            None => {
                out.push('{');
                rest = after_brace;
            }
        }
    }
    out.push_str(rest);
    out
}
