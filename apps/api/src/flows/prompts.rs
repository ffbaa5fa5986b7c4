// All LLM prompt constants for the AI flows.

/// System prompt for keyword extraction — enforces JSON-only output.
pub const EXTRACT_KEYWORDS_SYSTEM: &str =
    "You are an AI assistant tasked with extracting key information from job descriptions. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Keyword extraction prompt template. Replace `{job_description}` before sending.
pub const EXTRACT_KEYWORDS_PROMPT_TEMPLATE: &str = r#"Analyze the following job description and identify the key skills, technologies, and responsibilities.

Return a JSON object with this EXACT schema (no extra fields):
{
  "skills": ["communication", "stakeholder management"],
  "technologies": ["Python", "PostgreSQL"],
  "responsibilities": ["Design and ship backend services"]
}

- "skills": key skills the role asks for, including soft skills.
- "technologies": languages, frameworks, and tools mentioned by name.
- "responsibilities": the duties listed for the role, one entry per duty.

JOB DESCRIPTION:
{job_description}"#;

/// System prompt for cover-letter generation — enforces JSON-only output.
pub const COVER_LETTER_SYSTEM: &str =
    "You are a professional cover letter writer. You generate a tailored cover letter \
    based on a job description and the applicant's resume. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Cover-letter prompt template.
/// Replace `{job_description}` and `{selected_resume}` before sending.
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"Write a tailored cover letter based on the job description and the selected resume below.

Return a JSON object with this EXACT schema:
{
  "coverLetter": "the full cover letter text"
}

Job Description:
{job_description}

Selected Resume:
{selected_resume}"#;

/// System prompt for resume summarization — enforces JSON-only output.
pub const SUMMARIZE_SYSTEM: &str =
    "You are an expert resume reviewer. You produce a concise professional summary \
    of a resume, highlighting key experience, skills, and accomplishments. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Resume summarization prompt template. Replace `{resume_text}` before sending.
pub const SUMMARIZE_PROMPT_TEMPLATE: &str = r#"Summarize the following resume in 3-5 sentences, covering the candidate's key experience, skills, and accomplishments.

Return a JSON object with this EXACT schema:
{
  "summary": "the summary text"
}

RESUME:
{resume_text}"#;
