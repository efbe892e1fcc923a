use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Map, Value};

use crate::application::TextGenerator;
use crate::domain::DomainError;

/// Generator that records every call and answers with a fixed reply.
pub(crate) struct RecordingGenerator {
    reply: String,
    calls: Mutex<Vec<RecordedCall>>,
}

#[derive(Debug, Clone)]
pub(crate) struct RecordedCall {
    pub prompt: String,
    pub stop: Option<Vec<String>>,
}

impl RecordingGenerator {
    pub(crate) fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn last_call(&self) -> RecordedCall {
        self.calls().pop().expect("generator was not called")
    }
}

#[async_trait]
impl TextGenerator for RecordingGenerator {
    async fn generate(
        &self,
        prompt: &str,
        stop: Option<&[String]>,
    ) -> Result<String, DomainError> {
        self.calls.lock().unwrap().push(RecordedCall {
            prompt: prompt.to_string(),
            stop: stop.map(<[String]>::to_vec),
        });
        Ok(self.reply.clone())
    }

    fn llm_type(&self) -> &str {
        "recording"
    }

    fn identifying_params(&self) -> Map<String, Value> {
        let mut params = Map::new();
        params.insert("endpoint".to_string(), json!("http://recording"));
        params.insert("max_length".to_string(), json!(400));
        params
    }
}
