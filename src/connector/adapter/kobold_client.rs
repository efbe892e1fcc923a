use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::application::TextGenerator;
use crate::domain::{DomainError, GenerationConfig};

/// Default target: a KoboldAI server running locally on its standard port.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000";
pub const ENDPOINT_ENV_VAR: &str = "KOBOLD_ENDPOINT";
const GENERATE_PATH: &str = "/api/v1/generate";
const LLM_TYPE: &str = "koboldai";

/// KoboldAI `/api/v1/generate` request payload.
#[derive(Serialize)]
struct GenerateRequest<'a> {
    use_story: bool,
    use_authors_note: bool,
    use_world_info: bool,
    use_memory: bool,
    max_context_length: u32,
    max_length: u32,
    rep_pen: f64,
    rep_pen_range: u32,
    rep_pen_slope: f64,
    temperature: f64,
    tfs: f64,
    top_a: f64,
    top_p: f64,
    top_k: u32,
    typical: f64,
    stop_sequence: &'a [String],
    prompt: &'a str,
}

impl<'a> GenerateRequest<'a> {
    fn new(config: &GenerationConfig, stop_sequence: &'a [String], prompt: &'a str) -> Self {
        Self {
            use_story: config.use_story,
            use_authors_note: config.use_authors_note,
            use_world_info: config.use_world_info,
            use_memory: config.use_memory,
            max_context_length: config.max_context_length,
            max_length: config.max_length,
            rep_pen: config.rep_pen,
            rep_pen_range: config.rep_pen_range,
            rep_pen_slope: config.rep_pen_slope,
            temperature: config.temperature,
            tfs: config.tfs,
            top_a: config.top_a,
            top_p: config.top_p,
            top_k: config.top_k,
            typical: config.typical,
            stop_sequence,
            prompt,
        }
    }
}

#[derive(Deserialize)]
struct GenerateResponse {
    results: Vec<GenerationResult>,
}

#[derive(Deserialize)]
struct GenerationResult {
    text: String,
}

/// Strip a trailing `/api` or, failing that, one trailing `/`.
pub fn normalize_endpoint(endpoint: &str) -> &str {
    if let Some(base) = endpoint.strip_suffix("/api") {
        base
    } else if let Some(base) = endpoint.strip_suffix('/') {
        base
    } else {
        endpoint
    }
}

/// Cut each stop sequence the text ends with (checked in order) at its last
/// occurrence, then drop trailing whitespace. No-op for an empty list.
pub fn strip_stop_sequences(text: &str, stop: &[String]) -> String {
    if stop.is_empty() {
        return text.to_string();
    }

    let mut text = text;
    for sequence in stop {
        if text.ends_with(sequence.as_str()) {
            if let Some(idx) = text.rfind(sequence.as_str()) {
                text = &text[..idx];
            }
        }
    }
    text.trim_end().to_string()
}

/// HTTP client for the KoboldAI generate API.
///
/// Implements [`TextGenerator`] so callers such as
/// [`crate::application::RespondUseCase`] stay decoupled from transport and
/// serialization details.
///
/// A non-200 reply is logged and turned into an empty string. Transport
/// failures and undecodable bodies are returned as errors. No timeout is set
/// here; reqwest's defaults apply.
pub struct KoboldClient {
    client: reqwest::Client,
    config: GenerationConfig,
    /// Full endpoint URL (normalized base + GENERATE_PATH).
    url: String,
}

impl KoboldClient {
    pub fn new(config: GenerationConfig) -> Result<Self, DomainError> {
        config.validate()?;
        let url = format!("{}{}", normalize_endpoint(&config.endpoint), GENERATE_PATH);
        Ok(Self {
            client: reqwest::Client::new(),
            config,
            url,
        })
    }

    /// Construct with default parameters, reading the endpoint from
    /// `KOBOLD_ENDPOINT` (defaults to `http://localhost:5000`).
    pub fn from_env() -> Result<Self, DomainError> {
        Self::new(GenerationConfig::new(Self::configured_endpoint()))
    }

    /// Return the configured endpoint (for logging purposes).
    pub fn configured_endpoint() -> String {
        std::env::var(ENDPOINT_ENV_VAR).unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string())
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl TextGenerator for KoboldClient {
    async fn generate(
        &self,
        prompt: &str,
        stop: Option<&[String]>,
    ) -> Result<String, DomainError> {
        let stop_sequence = self.config.resolve_stop_sequences(stop)?;
        let request = GenerateRequest::new(&self.config, &stop_sequence, prompt);

        debug!(
            "KoboldClient: POST {} ({} stop sequences)",
            self.url,
            stop_sequence.len()
        );

        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                DomainError::request_failed(format!("KoboldClient: request failed: {e}"))
            })?;

        if response.status() != StatusCode::OK {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("KoboldClient: API returned {status}: {body}");
            return Ok(String::new());
        }

        let api_response: GenerateResponse = response.json().await.map_err(|e| {
            DomainError::invalid_response(format!("KoboldClient: failed to parse response: {e}"))
        })?;

        let text = api_response
            .results
            .into_iter()
            .next()
            .map(|r| r.text)
            .ok_or_else(|| {
                DomainError::invalid_response("KoboldClient: response contained no results")
            })?;

        debug!("KoboldClient raw response: {text}");

        Ok(strip_stop_sequences(&text, &stop_sequence)
            .trim_start()
            .to_string())
    }

    fn llm_type(&self) -> &str {
        LLM_TYPE
    }

    fn identifying_params(&self) -> Map<String, Value> {
        self.config.identifying_params()
    }
}
