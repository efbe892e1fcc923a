pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

#[cfg(test)]
mod test_support;

pub use application::{RespondRequest, RespondUseCase, TextGenerator};

pub use cli::{Cli, Commands};

pub use connector::{
    normalize_endpoint, strip_stop_sequences, KoboldClient, DEFAULT_ENDPOINT, ENDPOINT_ENV_VAR,
};

pub use domain::{
    render, DomainError, GenerationConfig, PromptTemplate, Substitutions, TemplateStore,
    AGENT_TEMPLATE, BOT_NAME, CONVERSATION_TEMPLATE,
};
