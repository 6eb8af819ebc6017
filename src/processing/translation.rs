use std::time::Duration;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::utils::TranslationError;

/// Text-to-text translation between ISO 639-1 language codes.
pub trait Translator {
    fn translate(&self, text: &str, source: &str, target: &str) -> Result<String, TranslationError>;
}

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

/// Client for a LibreTranslate-compatible `/translate` endpoint.
/// Each call is a single blocking request with no retry.
pub struct HttpTranslator {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl HttpTranslator {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, TranslationError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| TranslationError(format!("Failed to create HTTP client: {}", e)))?;
        Ok(HttpTranslator {
            endpoint: endpoint.into(),
            client,
        })
    }
}

impl Translator for HttpTranslator {
    fn translate(&self, text: &str, source: &str, target: &str) -> Result<String, TranslationError> {
        let request = TranslateRequest {
            q: text,
            source,
            target,
            format: "text",
        };
        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .map_err(|e| TranslationError(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TranslationError(format!("Translation endpoint returned {}", status)));
        }

        let body: TranslateResponse = response
            .json()
            .map_err(|e| TranslationError(format!("Invalid response: {}", e)))?;
        debug!("Translated {:?} ({} -> {}): {:?}", text, source, target, body.translated_text);
        Ok(body.translated_text)
    }
}
