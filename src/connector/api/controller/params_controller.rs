use anyhow::Result;
use serde_json::{json, Value};

use super::super::Container;

pub struct ParamsController<'a> {
    container: &'a Container,
}

impl<'a> ParamsController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub fn params(&self) -> Result<String> {
        let generator = self.container.generator();
        let output = json!({
            "llm_type": generator.llm_type(),
            "params": Value::Object(generator.identifying_params()),
        });
        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::test_support::RecordingGenerator;

    #[test]
    fn params_output_is_pretty_json_with_endpoint() {
        let container = Container::with_generator(Arc::new(RecordingGenerator::new("")));

        let output = ParamsController::new(&container).params().unwrap();

        assert!(output.contains('\n'));
        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["llm_type"], "recording");
        assert_eq!(value["params"]["endpoint"], "http://recording");
        assert_eq!(value["params"]["max_length"], 400);
    }
}
