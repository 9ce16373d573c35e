//! Prompt builders for the completion oracle.
//!
//! Each builder produces a full [`CompletionRequest`]: system role, user
//! prompt with the input documents embedded in XML tags, and the sampling
//! parameters tuned per artifact kind.

use super::CompletionRequest;

/// Tag names for the four suggestion-reply sections.
pub const SUGGESTION_SECTIONS: [&str; 4] = [
    "language_suggestions",
    "inclusion_questions",
    "copy_edit_suggestions",
    "general_summary",
];

/// Prompt for resume-improvement suggestions.
pub fn suggestions(resume_text: &str, job_description: &str) -> CompletionRequest {
    let system = "You are a professional resume coach. Your job is to help candidates \
tailor their resume to fit a job description and highlight their skills in the best \
light, while keeping them human and approachable."
        .to_string();

    let prompt = format!(
        "You are an expert resume reviewer tasked with providing a comprehensive review \
of a resume. Follow these instructions carefully:\n\
\n\
1. Read and analyze the resume:\n\
<resume>\n{resume_text}\n</resume>\n\
\n\
2. If a job description is provided, read and analyze it as well:\n\
<job_description>\n{job_description}\n</job_description>\n\
\n\
3. Compare the resume to the job requirements and responsibilities. Identify areas \
where the resume aligns well and areas where it could better match the position. If \
no job description is provided, focus on general resume best practices.\n\
\n\
4. Organize your review into the following sections, using these exact XML tags:\n\
\n\
<language_suggestions>\n\
Suggestions for improving the language and content of the resume, aligned with the \
job requirements where possible.\n\
</language_suggestions>\n\
\n\
<inclusion_questions>\n\
Questions about possible items to include or highlight, including suggestions for \
adding metrics or quantifiable achievements.\n\
</inclusion_questions>\n\
\n\
<copy_edit_suggestions>\n\
Copy editing suggestions for grammar, spelling, formatting, and overall presentation.\n\
</copy_edit_suggestions>\n\
\n\
<general_summary>\n\
A general summary of the resume's strengths and weaknesses and, if applicable, an \
assessment of the candidate's fit for the position.\n\
</general_summary>\n\
\n\
5. Your final output should only include the content within these four XML tags. Do \
not include any additional commentary outside of these sections."
    );

    CompletionRequest {
        system,
        prompt,
        max_tokens: 20_000,
        temperature: 1.0,
    }
}

/// Prompt for a tailored cover letter.
pub fn cover_letter(
    resume_text: &str,
    job_description: &str,
    company_info: &str,
) -> CompletionRequest {
    let system = "You are a professional cover letter writer. Your job is to help \
candidates create compelling, tailored cover letters that showcase their \
qualifications and align with the company's values and needs."
        .to_string();

    let prompt = format!(
        "Create a professional, tailored cover letter based on the candidate's resume, \
the job description, and information about the company.\n\
\n\
1. Review the candidate's resume:\n\
<resume>\n{resume_text}\n</resume>\n\
\n\
2. Analyze the job description:\n\
<job_description>\n{job_description}\n</job_description>\n\
\n\
3. Consider the company information:\n\
<company_info>\n{company_info}\n</company_info>\n\
\n\
4. The cover letter must:\n\
   - Start with a compelling introduction\n\
   - Highlight the candidate's most relevant skills and experiences for this position\n\
   - Demonstrate knowledge of the company and why the candidate wants to work there\n\
   - Close with a strong final paragraph\n\
   - Run 250-400 words in a professional but conversational tone\n\
   - Avoid cliches, generic statements, and placeholder text\n\
   - Reference company values or mission when relevant\n\
\n\
Output only the completed cover letter text with no additional explanations."
    );

    CompletionRequest {
        system,
        prompt,
        max_tokens: 4_000,
        temperature: 0.7,
    }
}

/// Prompt for an interview-preparation sheet.
pub fn interview_prep(
    resume_text: &str,
    job_description: &str,
    company_info: &str,
) -> CompletionRequest {
    let system = "You are a professional interview coach. Your job is to help \
candidates prepare for job interviews with tailored preparation materials and \
insights."
        .to_string();

    let prompt = format!(
        "Create a comprehensive interview prep cheat sheet for a candidate based on \
their resume, the job description, and company information.\n\
\n\
1. Review the candidate's resume:\n\
<resume>\n{resume_text}\n</resume>\n\
\n\
2. Analyze the job description:\n\
<job_description>\n{job_description}\n</job_description>\n\
\n\
3. Consider the company information:\n\
<company_info>\n{company_info}\n</company_info>\n\
\n\
4. The cheat sheet must include:\n\
\n\
<key_talking_points>\n\
5-7 key accomplishments from the resume that align with the job requirements, each \
with a concise STAR format description the candidate can use.\n\
</key_talking_points>\n\
\n\
<potential_questions>\n\
10 likely interview questions specific to this role and company: behavioral, \
technical, and company-specific.\n\
</potential_questions>\n\
\n\
<suggested_answers>\n\
Brief but effective sample answers that highlight the candidate's experience.\n\
</suggested_answers>\n\
\n\
<questions_to_ask>\n\
5-7 thoughtful questions the candidate should ask the interviewer.\n\
</questions_to_ask>\n\
\n\
<company_insights>\n\
Key insights about the company culture, recent news, challenges, or initiatives.\n\
</company_insights>\n\
\n\
Output only the completed cheat sheet with appropriate section headings."
    );

    CompletionRequest {
        system,
        prompt,
        max_tokens: 7_000,
        temperature: 0.7,
    }
}
