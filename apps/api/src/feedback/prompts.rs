// All LLM prompt constants for the Feedback module.
// Both templates ask for the same three labelled sections so the report reads uniformly.

/// Resume-only review prompt. Replace `{resume_text}` before sending.
pub const RESUME_FEEDBACK_PROMPT_TEMPLATE: &str = r#"You are an AI career assistant.
Analyze the following resume and structure your response into 3 sections:

1. ✅ Strengths: Mention what is good about the resume.
2. ⚠️ Weaknesses: Mention what is wrong or missing.
3. 🔧 Fix Suggestions: For each weakness, give a clear way to improve it.

Resume:
{resume_text}"#;

/// Resume vs job description comparison prompt.
/// Replace: {resume_text}, {job_description}
pub const COMPARISON_PROMPT_TEMPLATE: &str = r#"Compare the following resume against the job description.
Structure your response into:
✅ Strengths (aligned parts),
⚠️ Weaknesses (missing parts),
🔧 Fix Suggestions (how to add missing parts).

Resume:
{resume_text}

Job Description:
{job_description}"#;
