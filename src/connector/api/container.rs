use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::debug;

use crate::application::{RespondUseCase, TextGenerator};
use crate::connector::KoboldClient;
use crate::domain::GenerationConfig;

#[derive(Debug, Clone, Default)]
pub struct ContainerConfig {
    /// Overrides both the config file and `KOBOLD_ENDPOINT`.
    pub endpoint: Option<String>,
    /// JSON file holding a [`GenerationConfig`].
    pub config_file: Option<PathBuf>,
    pub max_length: Option<u32>,
    pub temperature: Option<f64>,
}

impl ContainerConfig {
    /// Resolve the generation config: file (or defaults with the env
    /// endpoint), then command-line overrides.
    pub fn generation_config(&self) -> Result<GenerationConfig> {
        let mut config = match &self.config_file {
            Some(path) => GenerationConfig::from_json_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => GenerationConfig::new(KoboldClient::configured_endpoint()),
        };

        if let Some(endpoint) = &self.endpoint {
            config = config.with_endpoint(endpoint.clone());
        }
        if let Some(max_length) = self.max_length {
            config = config.with_max_length(max_length);
        }
        if let Some(temperature) = self.temperature {
            config = config.with_temperature(temperature);
        }

        Ok(config)
    }
}

pub struct Container {
    generator: Arc<dyn TextGenerator>,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Result<Self> {
        let client = KoboldClient::new(config.generation_config()?)?;
        debug!(
            "Using KoboldAI endpoint {} ({})",
            client.config().endpoint,
            client.url()
        );

        Ok(Self::with_generator(Arc::new(client)))
    }

    /// Build around an existing generator.
    pub fn with_generator(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    pub fn generator(&self) -> Arc<dyn TextGenerator> {
        self.generator.clone()
    }

    pub fn respond_use_case(&self) -> RespondUseCase {
        RespondUseCase::new(self.generator.clone())
    }
}
