use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::DomainError;

/// Sampling defaults used when a field is not overridden.
pub mod defaults {
    pub const MAX_CONTEXT_LENGTH: u32 = 2048;
    pub const MAX_LENGTH: u32 = 400;
    pub const MAX_LENGTH_LIMIT: u32 = 512;
    pub const REP_PEN: f64 = 1.21;
    pub const REP_PEN_RANGE: u32 = 1024;
    pub const REP_PEN_SLOPE: f64 = 0.9;
    pub const TEMPERATURE: f64 = 0.7;
    pub const TFS: f64 = 0.9;
    pub const TOP_A: f64 = 0.9;
    pub const TOP_P: f64 = 0.95;
    pub const TOP_K: u32 = 0;
    pub const TYPICAL: f64 = 0.5;

    pub fn max_context_length() -> u32 {
        MAX_CONTEXT_LENGTH
    }
    pub fn max_length() -> u32 {
        MAX_LENGTH
    }
    pub fn rep_pen() -> f64 {
        REP_PEN
    }
    pub fn rep_pen_range() -> u32 {
        REP_PEN_RANGE
    }
    pub fn rep_pen_slope() -> f64 {
        REP_PEN_SLOPE
    }
    pub fn temperature() -> f64 {
        TEMPERATURE
    }
    pub fn tfs() -> f64 {
        TFS
    }
    pub fn top_a() -> f64 {
        TOP_A
    }
    pub fn top_p() -> f64 {
        TOP_P
    }
    pub fn top_k() -> u32 {
        TOP_K
    }
    pub fn typical() -> f64 {
        TYPICAL
    }
}

/// Parameters controlling a remote KoboldAI generation call.
///
/// Only `endpoint` is required; every other field falls back to the values
/// in [`defaults`], both through [`GenerationConfig::new`] and when the
/// config is deserialized from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Base URL of the KoboldAI server, with or without a trailing `/api`.
    pub endpoint: String,

    /// Use the story from the KoboldAI GUI.
    #[serde(default)]
    pub use_story: bool,
    /// Use the author's note from the KoboldAI GUI. No effect unless
    /// `use_story` is also enabled.
    #[serde(default)]
    pub use_authors_note: bool,
    #[serde(default)]
    pub use_world_info: bool,
    #[serde(default)]
    pub use_memory: bool,

    /// Maximum number of tokens sent to the model.
    #[serde(default = "defaults::max_context_length")]
    pub max_context_length: u32,
    /// Number of tokens to generate (1..=512).
    #[serde(default = "defaults::max_length")]
    pub max_length: u32,
    #[serde(default = "defaults::rep_pen")]
    pub rep_pen: f64,
    #[serde(default = "defaults::rep_pen_range")]
    pub rep_pen_range: u32,
    #[serde(default = "defaults::rep_pen_slope")]
    pub rep_pen_slope: f64,
    #[serde(default = "defaults::temperature")]
    pub temperature: f64,
    /// Tail free sampling.
    #[serde(default = "defaults::tfs")]
    pub tfs: f64,
    #[serde(default = "defaults::top_a")]
    pub top_a: f64,
    #[serde(default = "defaults::top_p")]
    pub top_p: f64,
    #[serde(default = "defaults::top_k")]
    pub top_k: u32,
    #[serde(default = "defaults::typical")]
    pub typical: f64,

    /// Preset stop sequences. When non-empty they are authoritative for
    /// every call and a per-call override is rejected.
    #[serde(default)]
    pub stop_sequence: Vec<String>,
}

impl GenerationConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            use_story: false,
            use_authors_note: false,
            use_world_info: false,
            use_memory: false,
            max_context_length: defaults::MAX_CONTEXT_LENGTH,
            max_length: defaults::MAX_LENGTH,
            rep_pen: defaults::REP_PEN,
            rep_pen_range: defaults::REP_PEN_RANGE,
            rep_pen_slope: defaults::REP_PEN_SLOPE,
            temperature: defaults::TEMPERATURE,
            tfs: defaults::TFS,
            top_a: defaults::TOP_A,
            top_p: defaults::TOP_P,
            top_k: defaults::TOP_K,
            typical: defaults::TYPICAL,
            stop_sequence: Vec::new(),
        }
    }

    /// Load a config from a JSON file. Fields other than `endpoint` may be
    /// omitted.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(|e| {
            DomainError::invalid_config(format!("{}: {e}", path.display()))
        })
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_use_story(mut self, use_story: bool) -> Self {
        self.use_story = use_story;
        self
    }

    pub fn with_use_authors_note(mut self, use_authors_note: bool) -> Self {
        self.use_authors_note = use_authors_note;
        self
    }

    pub fn with_use_world_info(mut self, use_world_info: bool) -> Self {
        self.use_world_info = use_world_info;
        self
    }

    pub fn with_use_memory(mut self, use_memory: bool) -> Self {
        self.use_memory = use_memory;
        self
    }

    pub fn with_max_context_length(mut self, max_context_length: u32) -> Self {
        self.max_context_length = max_context_length;
        self
    }

    pub fn with_max_length(mut self, max_length: u32) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn with_rep_pen(mut self, rep_pen: f64) -> Self {
        self.rep_pen = rep_pen;
        self
    }

    pub fn with_rep_pen_range(mut self, rep_pen_range: u32) -> Self {
        self.rep_pen_range = rep_pen_range;
        self
    }

    pub fn with_rep_pen_slope(mut self, rep_pen_slope: f64) -> Self {
        self.rep_pen_slope = rep_pen_slope;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_tfs(mut self, tfs: f64) -> Self {
        self.tfs = tfs;
        self
    }

    pub fn with_top_a(mut self, top_a: f64) -> Self {
        self.top_a = top_a;
        self
    }

    pub fn with_top_p(mut self, top_p: f64) -> Self {
        self.top_p = top_p;
        self
    }

    pub fn with_top_k(mut self, top_k: u32) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn with_typical(mut self, typical: f64) -> Self {
        self.typical = typical;
        self
    }

    pub fn with_stop_sequence(mut self, stop_sequence: Vec<String>) -> Self {
        self.stop_sequence = stop_sequence;
        self
    }

    /// Check every field against the server's documented bounds.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.endpoint.trim().is_empty() {
            return Err(DomainError::invalid_config("endpoint must not be empty"));
        }
        if self.max_context_length < 1 {
            return Err(DomainError::invalid_config(
                "max_context_length must be at least 1",
            ));
        }
        if !(1..=defaults::MAX_LENGTH_LIMIT).contains(&self.max_length) {
            return Err(DomainError::invalid_config(format!(
                "max_length must be between 1 and {}, got {}",
                defaults::MAX_LENGTH_LIMIT,
                self.max_length
            )));
        }
        check_min("rep_pen", self.rep_pen, 1.0)?;
        check_min("rep_pen_slope", self.rep_pen_slope, 0.0)?;
        // NaN fails the comparison and is rejected with the rest.
        if !(self.temperature > 0.0) {
            return Err(DomainError::invalid_config(format!(
                "temperature must be greater than 0, got {}",
                self.temperature
            )));
        }
        check_unit("tfs", self.tfs)?;
        check_min("top_a", self.top_a, 0.0)?;
        check_unit("top_p", self.top_p)?;
        check_unit("typical", self.typical)?;
        Ok(())
    }

    /// Pick the stop sequences for one call.
    ///
    /// A non-empty preset wins; otherwise the override is used, or nothing.
    /// Supplying a non-empty override alongside a non-empty preset is an
    /// error.
    pub fn resolve_stop_sequences(
        &self,
        stop_override: Option<&[String]>,
    ) -> Result<Vec<String>, DomainError> {
        let has_override = stop_override.is_some_and(|s| !s.is_empty());
        if !self.stop_sequence.is_empty() && has_override {
            return Err(DomainError::ConflictingStopSequences);
        }

        if !self.stop_sequence.is_empty() {
            return Ok(self.stop_sequence.clone());
        }
        Ok(stop_override.map(<[String]>::to_vec).unwrap_or_default())
    }

    /// Endpoint plus every sampling field, for logging and debugging.
    pub fn identifying_params(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }
}

fn check_min(field: &str, value: f64, min: f64) -> Result<(), DomainError> {
    if value >= min {
        Ok(())
    } else {
        Err(DomainError::invalid_config(format!(
            "{field} must be at least {min}, got {value}"
        )))
    }
}

fn check_unit(field: &str, value: f64) -> Result<(), DomainError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(DomainError::invalid_config(format!(
            "{field} must be between 0 and 1, got {value}"
        )))
    }
}
