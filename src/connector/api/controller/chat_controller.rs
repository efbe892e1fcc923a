use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::application::RespondRequest;
use crate::domain::TemplateStore;

use super::super::Container;

pub struct ChatController<'a> {
    container: &'a Container,
}

impl<'a> ChatController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn chat(
        &self,
        input: String,
        history: Option<String>,
        history_file: Option<PathBuf>,
        agent: bool,
        observation: Option<String>,
        stop: Vec<String>,
    ) -> Result<String> {
        let history = match (history, history_file) {
            (Some(history), _) => history,
            (None, Some(path)) => std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read history from {}", path.display()))?
                .trim_end()
                .to_string(),
            (None, None) => String::new(),
        };

        let mut request = RespondRequest::new(input).with_history(history);
        if let Some(observation) = observation {
            request = request.with_observation(observation);
        }
        if !stop.is_empty() {
            request = request.with_stop(stop);
        }

        let template = if agent {
            TemplateStore::agent()
        } else {
            TemplateStore::conversation()
        };

        let use_case = self.container.respond_use_case();
        let reply = use_case.execute(&template, &request).await?;
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::test_support::RecordingGenerator;

    #[tokio::test]
    async fn history_file_is_read_and_trailing_whitespace_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.txt");
        std::fs::write(&path, "Human: yo\nTensor: wassup\n\n  ").unwrap();

        let generator = Arc::new(RecordingGenerator::new("lol"));
        let container = Container::with_generator(generator.clone());

        let reply = ChatController::new(&container)
            .chat(
                "Human: among us?".to_string(),
                None,
                Some(path),
                false,
                None,
                Vec::new(),
            )
            .await
            .unwrap();

        assert_eq!(reply, "lol");
        let call = generator.last_call();
        assert!(call
            .prompt
            .contains("### Current conversation:\nHuman: yo\nTensor: wassup\nHuman: among us?\n"));
        assert!(call.prompt.ends_with("### Response:\nTensor:"));
        assert_eq!(call.stop, None);
    }

    #[tokio::test]
    async fn missing_history_file_is_an_error() {
        let generator = Arc::new(RecordingGenerator::new("lol"));
        let container = Container::with_generator(generator.clone());

        let result = ChatController::new(&container)
            .chat(
                "Human: hey".to_string(),
                None,
                Some(PathBuf::from("/nonexistent/history.txt")),
                false,
                None,
                Vec::new(),
            )
            .await;

        assert!(result.is_err());
        assert!(generator.calls().is_empty());
    }

    #[tokio::test]
    async fn agent_flag_uses_observation_slot() {
        let generator = Arc::new(RecordingGenerator::new("found it"));
        let container = Container::with_generator(generator.clone());

        ChatController::new(&container)
            .chat(
                "Human: find a meme".to_string(),
                Some("Human: yo".to_string()),
                None,
                true,
                Some("Observation: 3 memes".to_string()),
                vec!["Human:".to_string()],
            )
            .await
            .unwrap();

        let call = generator.last_call();
        assert!(call.prompt.contains("Human: yo\nHuman: find a meme\n"));
        assert!(call
            .prompt
            .ends_with("### Response:\nObservation: 3 memes\nTensor:"));
        assert_eq!(call.stop, Some(vec!["Human:".to_string()]));
    }
}
