//! Per-line heuristic classification.
//!
//! Classification is an ordered cascade: section headers and bullets are
//! unambiguous lexical cues and are checked before prose; the entry-header
//! guess (short, verb-free line) is the weakest signal and is tried last,
//! just before the paragraph fallback.

use regex::Regex;

/// Classification of a single trimmed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// Fully upper-case line, or a short line ending with `:`.
    SectionHeader,
    /// Line starting with `-`, `•`, or `*`.
    Bullet,
    /// Short line free of linking verbs; candidate org/date line.
    EntryHeader,
    /// Anything else.
    Paragraph,
}

/// Rule evaluation order. First match wins; [`LineClass::Paragraph`] is the
/// fallback when nothing matches.
pub const RULE_ORDER: [LineClass; 3] = [
    LineClass::SectionHeader,
    LineClass::Bullet,
    LineClass::EntryHeader,
];

/// Maximum length (in chars) for the short-header-with-colon rule.
const HEADER_MAX_LEN: usize = 40;

/// Maximum length (in chars) for the entry-header rule.
const ENTRY_MAX_LEN: usize = 50;

/// Line classifier with precompiled patterns.
#[derive(Debug)]
pub struct Classifier {
    linking_verb_re: Regex,
}

impl Classifier {
    /// Create a classifier.
    pub fn new() -> Self {
        Self {
            linking_verb_re: Regex::new(
                r"(?i)\b(is|are|was|were|have|has|had|do|does|did)\b",
            )
            .unwrap(),
        }
    }

    /// Classify one trimmed line, evaluating rules in [`RULE_ORDER`].
    pub fn classify(&self, line: &str) -> LineClass {
        for class in RULE_ORDER {
            if self.matches(class, line) {
                return class;
            }
        }
        LineClass::Paragraph
    }

    /// Evaluate a single rule's predicate in isolation.
    ///
    /// [`LineClass::Paragraph`] matches everything: it is the fallback.
    pub fn matches(&self, class: LineClass, line: &str) -> bool {
        match class {
            LineClass::SectionHeader => {
                is_fully_uppercase(line)
                    || (line.ends_with(':') && line.chars().count() < HEADER_MAX_LEN)
            }
            LineClass::Bullet => {
                line.starts_with('-') || line.starts_with('•') || line.starts_with('*')
            }
            LineClass::EntryHeader => {
                line.chars().count() < ENTRY_MAX_LEN && !self.linking_verb_re.is_match(line)
            }
            LineClass::Paragraph => true,
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

/// True when the line is made of uppercase letters and whitespace only.
///
/// Any other character (a bullet glyph, a digit, punctuation) defeats the
/// rule, so a line like `- DONE` is left for the bullet rule.
fn is_fully_uppercase(line: &str) -> bool {
    let mut has_letter = false;
    for c in line.chars() {
        if c.is_uppercase() {
            has_letter = true;
        } else if !c.is_whitespace() {
            return false;
        }
    }
    has_letter
}
