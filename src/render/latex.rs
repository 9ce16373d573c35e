//! LaTeX rendering for parsed resumes.
//!
//! The renderer's core guarantee: output is always a syntactically closed
//! LaTeX document, independent of how malformed the input text was. Every
//! opened environment is closed before the terminator is emitted.

use crate::model::{Block, ResumeDocument, Section};

use super::escape::escape_latex;

/// Render a resume document to a complete LaTeX document string.
pub fn to_latex(doc: &ResumeDocument) -> String {
    LatexRenderer::new().render(doc)
}

/// Document-class preamble emitted before any content.
const PREAMBLE: &str = "\\documentclass[11pt,a4paper]{article}\n\
\\usepackage[margin=1in]{geometry}\n\
\\usepackage{enumitem}\n\
\\setlist[itemize]{leftmargin=*,nosep}\n\
\\pagestyle{empty}\n\
\\newcommand{\\resumeentry}[3]{\\noindent\\textbf{#2} \\hfill #1\\\\\\textit{#3}\\vspace{4pt}}\n";

/// LaTeX renderer.
///
/// Stateless across invocations; a fresh renderer per call.
#[derive(Debug, Default)]
pub struct LatexRenderer;

impl LatexRenderer {
    /// Create a new renderer.
    pub fn new() -> Self {
        Self
    }

    /// Render a document.
    pub fn render(&self, doc: &ResumeDocument) -> String {
        let mut output = String::new();

        output.push_str(PREAMBLE);
        output.push_str("\\begin{document}\n\n");

        self.render_header(&mut output, doc);

        for block in &doc.prelude {
            self.render_block(&mut output, block);
        }

        for section in &doc.sections {
            self.render_section(&mut output, section);
        }

        output.push_str("\\end{document}\n");
        output
    }

    fn render_header(&self, output: &mut String, doc: &ResumeDocument) {
        output.push_str("\\begin{center}\n");

        if let Some((first, last)) = &doc.candidate_name {
            output.push_str(&format!(
                "{{\\LARGE \\textbf{{{} {}}}}}\\\\[4pt]\n",
                escape_latex(first),
                escape_latex(last)
            ));
        }

        // Present fields only, fixed order: email, phone, network.
        let mut fields = Vec::new();
        if let Some(email) = &doc.contact.email {
            fields.push(escape_latex(email));
        }
        if let Some(phone) = &doc.contact.phone {
            fields.push(escape_latex(phone));
        }
        if let Some(network) = &doc.contact.network {
            fields.push(format!("linkedin.com/in/{}", escape_latex(network)));
        }
        if !fields.is_empty() {
            output.push_str(&fields.join(" \\textbar{} "));
            output.push('\n');
        }

        output.push_str("\\end{center}\n\n");
    }

    fn render_section(&self, output: &mut String, section: &Section) {
        output.push_str(&format!(
            "\\section*{{{}}}\n\\hrule\\vspace{{4pt}}\n\n",
            escape_latex(&section.title)
        ));
        for block in &section.blocks {
            self.render_block(output, block);
        }
    }

    fn render_block(&self, output: &mut String, block: &Block) {
        match block {
            Block::Paragraph(text) => {
                output.push_str(text);
                output.push_str("\n\n");
            }
            Block::BulletList(items) => {
                output.push_str("\\begin{itemize}\n");
                for item in items {
                    output.push_str(&format!("  \\item {}\n", item));
                }
                output.push_str("\\end{itemize}\n\n");
            }
            Block::Entry {
                date,
                primary,
                secondary,
            } => {
                // Argument order is fixed: date, then primary, then secondary.
                output.push_str(&format!(
                    "\\resumeentry{{{}}}{{{}}}{{{}}}\n\n",
                    date, primary, secondary
                ));
            }
            Block::SubHeading(text) => {
                output.push_str(&format!("\\textbf{{{}}}\\\\\n", text));
            }
        }
    }
}
