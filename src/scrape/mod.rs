//! Job posting and company profile scraping.
//!
//! Wraps the Firecrawl v1 scrape endpoint: job postings are fetched as
//! markdown, company profiles as a prompted JSON extraction flattened to
//! `key: value` lines. Failures surface as [`Error::RemoteFetch`] /
//! [`Error::Api`]; callers may substitute the deterministic [`fallback`]
//! content instead of aborting, and offline mode does so automatically.

pub mod fallback;

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::Config;
use crate::error::{Error, Result};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

const COMPANY_PROMPT: &str = "Extract the following information about the company: \
company description, products, vision, mission, philosophy, and values.";

/// Blocking client for the scraping collaborator.
pub struct ScrapeClient {
    http: reqwest::blocking::Client,
    api_key: String,
    base_url: String,
    offline: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScrapeRequest<'a> {
    url: &'a str,
    formats: &'a [&'a str],
    #[serde(skip_serializing_if = "Option::is_none")]
    json_options: Option<JsonOptions<'a>>,
}

#[derive(Debug, Serialize)]
struct JsonOptions<'a> {
    prompt: &'a str,
}

#[derive(Debug, Deserialize)]
struct ScrapeResponse {
    success: bool,
    #[serde(default)]
    data: ScrapeData,
}

#[derive(Debug, Default, Deserialize)]
struct ScrapeData {
    #[serde(default)]
    markdown: Option<String>,
    #[serde(default)]
    json: Option<Value>,
}

impl ScrapeClient {
    /// Create a client from configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::blocking::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            api_key: config.firecrawl_api_key.clone(),
            base_url: config.firecrawl_base_url.clone(),
            offline: config.offline,
        }
    }

    /// Fetch a job posting as plain markdown text.
    pub fn job_posting(&self, url: &str) -> Result<String> {
        if self.offline {
            return Ok(fallback::job_posting(url));
        }
        log::info!("scraping job posting from {url}");
        let data = self.scrape(&ScrapeRequest {
            url,
            formats: &["markdown"],
            json_options: None,
        })?;
        data.markdown
            .filter(|m| !m.is_empty())
            .ok_or_else(|| Error::RemoteFetch(format!("no markdown content for {url}")))
    }

    /// Fetch a company profile, flattened to `key: value` lines.
    pub fn company_profile(&self, url: &str) -> Result<String> {
        if self.offline {
            return Ok(fallback::company_profile(url));
        }
        log::info!("extracting company profile from {url}");
        let data = self.scrape(&ScrapeRequest {
            url,
            formats: &["json"],
            json_options: Some(JsonOptions {
                prompt: COMPANY_PROMPT,
            }),
        })?;
        let json = data
            .json
            .ok_or_else(|| Error::RemoteFetch(format!("no structured content for {url}")))?;
        Ok(flatten_profile(&json))
    }

    fn scrape(&self, request: &ScrapeRequest<'_>) -> Result<ScrapeData> {
        let response = self
            .http
            .post(format!("{}/scrape", self.base_url))
            .bearer_auth(&self.api_key)
            .json(request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            log::warn!("scrape request failed with {status}: {message}");
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: ScrapeResponse = response.json()?;
        if !body.success {
            return Err(Error::RemoteFetch("API returned success=false".to_string()));
        }
        Ok(body.data)
    }
}

/// Flatten an extraction object to sorted `key: value` lines; a non-object
/// reply is rendered as-is.
fn flatten_profile(json: &Value) -> String {
    match json.as_object() {
        Some(map) => map
            .iter()
            .map(|(k, v)| match v {
                Value::String(s) => (k, s.clone()),
                other => (k, other.to_string()),
            })
            .collect::<BTreeMap<_, _>>()
            .into_iter()
            .map(|(k, v)| format!("{k}: {v}"))
            .collect::<Vec<_>>()
            .join("\n"),
        None => json.to_string(),
    }
}
