//! Contact field extraction.
//!
//! Scans the line stream for email, phone, and LinkedIn handle patterns.
//! For each field only the FIRST match across the whole document is kept;
//! later matches are ignored.

use regex::Regex;

use crate::model::ContactInfo;

/// Extracts contact fields from resume lines, first match wins.
#[derive(Debug)]
pub struct ContactExtractor {
    email_re: Regex,
    phone_re: Regex,
    network_re: Regex,
    contact: ContactInfo,
}

impl ContactExtractor {
    /// Create an extractor with freshly compiled patterns.
    pub fn new() -> Self {
        Self {
            email_re: Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap(),
            phone_re: Regex::new(r"\b\d{3}[-\s]?\d{3}[-\s]?\d{4}\b").unwrap(),
            network_re: Regex::new(r"(?i)linkedin\.com/in/([A-Za-z0-9_%.-]+)").unwrap(),
            contact: ContactInfo::default(),
        }
    }

    /// Scan one trimmed line, filling any still-empty fields.
    pub fn observe(&mut self, line: &str) {
        if line.is_empty() {
            return;
        }
        if self.contact.email.is_none() {
            if let Some(m) = self.email_re.find(line) {
                log::debug!("contact: email found");
                self.contact.email = Some(m.as_str().to_string());
            }
        }
        if self.contact.phone.is_none() {
            if let Some(m) = self.phone_re.find(line) {
                log::debug!("contact: phone found");
                self.contact.phone = Some(m.as_str().to_string());
            }
        }
        if self.contact.network.is_none() && line.to_lowercase().contains("linkedin.com") {
            if let Some(caps) = self.network_re.captures(line) {
                log::debug!("contact: network handle found");
                self.contact.network = Some(caps[1].to_string());
            }
        }
    }

    /// Whether the line matches any contact pattern at all.
    ///
    /// Used to rule a line out as a candidate-name line.
    pub fn matches_any(&self, line: &str) -> bool {
        self.email_re.is_match(line)
            || self.phone_re.is_match(line)
            || line.to_lowercase().contains("linkedin.com")
    }

    /// Current snapshot of the captured fields.
    pub fn contact(&self) -> &ContactInfo {
        &self.contact
    }

    /// Finish scanning and take the captured fields.
    pub fn into_contact(self) -> ContactInfo {
        self.contact
    }
}

impl Default for ContactExtractor {
    fn default() -> Self {
        Self::new()
    }
}
