use std::sync::Arc;

use tracing::{debug, info};

use crate::application::TextGenerator;
use crate::domain::{DomainError, PromptTemplate, Substitutions, OBSERVATION};

/// One chat turn: the conversation so far, the latest user input and an
/// optional tool observation for the agent template.
#[derive(Debug, Clone, Default)]
pub struct RespondRequest {
    history: String,
    input: String,
    observation: Option<String>,
    stop: Option<Vec<String>>,
}

impl RespondRequest {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            ..Self::default()
        }
    }

    pub fn with_history(mut self, history: impl Into<String>) -> Self {
        self.history = history.into();
        self
    }

    pub fn with_observation(mut self, observation: impl Into<String>) -> Self {
        self.observation = Some(observation.into());
        self
    }

    pub fn with_stop(mut self, stop: Vec<String>) -> Self {
        self.stop = Some(stop);
        self
    }

    pub fn history(&self) -> &str {
        &self.history
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn observation(&self) -> Option<&str> {
        self.observation.as_deref()
    }

    pub fn stop(&self) -> Option<&[String]> {
        self.stop.as_deref()
    }
}

/// Renders a persona template for a chat turn and generates the reply.
pub struct RespondUseCase {
    generator: Arc<dyn TextGenerator>,
}

impl RespondUseCase {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    pub fn build_prompt(
        template: &PromptTemplate,
        request: &RespondRequest,
    ) -> Result<String, DomainError> {
        let mut substitutions = Substitutions::new()
            .history(request.history())
            .input(request.input());

        if template.placeholders().contains(&OBSERVATION) {
            substitutions = substitutions.observation(request.observation().unwrap_or_default());
        } else if request.observation().is_some() {
            debug!(
                "Template {} has no observation slot, ignoring observation",
                template.name()
            );
        }

        template.render(&substitutions)
    }

    pub async fn execute(
        &self,
        template: &PromptTemplate,
        request: &RespondRequest,
    ) -> Result<String, DomainError> {
        let prompt = Self::build_prompt(template, request)?;

        info!(
            "Generating {} reply via {} ({} prompt chars)",
            template.name(),
            self.generator.llm_type(),
            prompt.chars().count()
        );

        self.generator.generate(&prompt, request.stop()).await
    }
}
