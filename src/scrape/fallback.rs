//! Deterministic placeholder content for offline mode and fetch failures.
//!
//! When the scraping collaborator is unavailable the pipeline continues on
//! placeholder text derived only from the URL, so repeated runs produce
//! identical output.

use regex::Regex;

/// Placeholder job posting, keyed by any job id found in the URL.
pub fn job_posting(url: &str) -> String {
    let job_id = Regex::new(r"jobs/(\d+)")
        .unwrap()
        .captures(url)
        .map(|c| c[1].to_string())
        .unwrap_or_else(|| "unknown".to_string());

    format!(
        "# Job Description for position #{job_id}\n\
         \n\
         ## About the Role\n\
         \n\
         We are looking for a talented professional to join our team. This is a great opportunity to work on exciting projects and grow your career.\n\
         \n\
         ## Requirements\n\
         \n\
         - 3+ years of relevant experience\n\
         - Strong communication skills\n\
         - Bachelor's degree or equivalent practical experience\n\
         \n\
         ## Responsibilities\n\
         \n\
         - Collaborate with cross-functional teams\n\
         - Develop and implement solutions\n\
         - Contribute to team success\n\
         \n\
         ## Benefits\n\
         \n\
         - Competitive salary\n\
         - Health insurance\n\
         - Flexible work arrangements\n\
         - Professional development opportunities\n"
    )
}

/// Placeholder company profile, keyed by the host name in the URL.
pub fn company_profile(url: &str) -> String {
    let name = Regex::new(r"//(?:www\.)?([^./]+)")
        .unwrap()
        .captures(url)
        .map(|c| c[1].to_string())
        .unwrap_or_else(|| "Company".to_string());
    let name = capitalize(&name);

    format!(
        "company_description: {name} is a leading provider of innovative solutions in its industry, committed to excellence and customer satisfaction.\n\
         \n\
         products: Our flagship products include cutting-edge software solutions, consulting services, and specialized tools for professionals.\n\
         \n\
         vision: To transform the industry through innovation and technology.\n\
         \n\
         mission: Our mission is to provide exceptional products and services that exceed customer expectations and set new standards in the industry.\n\
         \n\
         philosophy: We believe in collaboration, integrity, and continuous improvement as the foundation of our work.\n\
         \n\
         values: Innovation, Excellence, Integrity, Collaboration, Customer Focus\n"
    )
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
