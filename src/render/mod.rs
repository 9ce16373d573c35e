//! Rendering module for serializing parsed resumes to LaTeX.

mod escape;
mod latex;

pub use escape::escape_latex;
pub use latex::{to_latex, LatexRenderer};
