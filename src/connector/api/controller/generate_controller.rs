use anyhow::Result;

use super::super::Container;

pub struct GenerateController<'a> {
    container: &'a Container,
}

impl<'a> GenerateController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn generate(&self, prompt: String, stop: Vec<String>) -> Result<String> {
        let stop = (!stop.is_empty()).then_some(stop);
        let text = self
            .container
            .generator()
            .generate(&prompt, stop.as_deref())
            .await?;
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::test_support::RecordingGenerator;

    #[tokio::test]
    async fn empty_stop_list_is_sent_as_none() {
        let generator = Arc::new(RecordingGenerator::new("gg"));
        let container = Container::with_generator(generator.clone());

        let output = GenerateController::new(&container)
            .generate("Say hi".to_string(), Vec::new())
            .await
            .unwrap();

        assert_eq!(output, "gg");
        let call = generator.last_call();
        assert_eq!(call.prompt, "Say hi");
        assert_eq!(call.stop, None);
    }

    #[tokio::test]
    async fn stop_sequences_are_forwarded() {
        let generator = Arc::new(RecordingGenerator::new("gg"));
        let container = Container::with_generator(generator.clone());

        GenerateController::new(&container)
            .generate("Say hi".to_string(), vec!["You:".to_string()])
            .await
            .unwrap();

        assert_eq!(generator.last_call().stop, Some(vec!["You:".to_string()]));
    }
}
