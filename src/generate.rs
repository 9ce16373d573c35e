//! The four-artifact application-materials pipeline.
//!
//! Given resume text, a job description, and a company profile, produces
//! improvement suggestions, a reformatted LaTeX resume, a cover letter,
//! and an interview-prep sheet. Only the generative artifacts touch the
//! oracle; the reformatted resume comes from the local converter.

use serde::{Deserialize, Serialize};

use crate::convert_resume_to_latex;
use crate::error::Result;
use crate::oracle::sections::section_or_sentinel;
use crate::oracle::{prompts, CompletionOracle};

/// Categorized resume-improvement suggestions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeSuggestions {
    /// Language and content improvements.
    pub language_suggestions: String,

    /// Questions about items to add or highlight.
    pub inclusion_questions: String,

    /// Grammar, spelling, and formatting notes.
    pub copy_edit_suggestions: String,

    /// Overall strengths/weaknesses and fit assessment.
    pub general_summary: String,
}

/// The complete set of generated artifacts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationMaterials {
    /// Resume-improvement suggestions.
    pub suggestions: ResumeSuggestions,

    /// The resume reformatted as a LaTeX document.
    pub updated_resume: String,

    /// Tailored cover letter text.
    pub cover_letter: String,

    /// Interview-preparation sheet text.
    pub interview_prep: String,
}

/// Drives the pipeline against an injected completion oracle.
pub struct MaterialsGenerator<O> {
    oracle: O,
}

impl<O: CompletionOracle> MaterialsGenerator<O> {
    /// Create a generator over an oracle.
    pub fn new(oracle: O) -> Self {
        Self { oracle }
    }

    /// Produce all four artifacts.
    pub fn generate(
        &self,
        resume_text: &str,
        job_description: &str,
        company_info: &str,
    ) -> Result<ApplicationMaterials> {
        let suggestions = self.suggestions(resume_text, job_description)?;

        log::info!("rendering updated resume");
        let updated_resume = convert_resume_to_latex(resume_text, job_description);

        log::info!("generating cover letter");
        let cover_letter = self.oracle.complete(&prompts::cover_letter(
            resume_text,
            job_description,
            company_info,
        ))?;

        log::info!("generating interview prep sheet");
        let interview_prep = self.oracle.complete(&prompts::interview_prep(
            resume_text,
            job_description,
            company_info,
        ))?;

        Ok(ApplicationMaterials {
            suggestions,
            updated_resume,
            cover_letter,
            interview_prep,
        })
    }

    /// Produce only the improvement suggestions.
    ///
    /// Sections missing from the reply are substituted with the sentinel
    /// string rather than failing the whole call.
    pub fn suggestions(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<ResumeSuggestions> {
        log::info!("requesting resume suggestions");
        let reply = self
            .oracle
            .complete(&prompts::suggestions(resume_text, job_description))?;

        Ok(ResumeSuggestions {
            language_suggestions: section_or_sentinel(&reply, "language_suggestions"),
            inclusion_questions: section_or_sentinel(&reply, "inclusion_questions"),
            copy_edit_suggestions: section_or_sentinel(&reply, "copy_edit_suggestions"),
            general_summary: section_or_sentinel(&reply, "general_summary"),
        })
    }
}
