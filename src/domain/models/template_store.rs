use super::{PromptTemplate, AGENT_TEMPLATE, CONVERSATION_TEMPLATE};
use crate::domain::DomainError;

static TEMPLATES: [PromptTemplate; 2] = [CONVERSATION_TEMPLATE, AGENT_TEMPLATE];

/// Fixed registry of the persona templates, looked up by name.
pub struct TemplateStore;

impl TemplateStore {
    pub fn all() -> &'static [PromptTemplate] {
        &TEMPLATES
    }

    pub fn get(name: &str) -> Result<PromptTemplate, DomainError> {
        TEMPLATES
            .iter()
            .find(|t| t.name() == name)
            .copied()
            .ok_or_else(|| DomainError::not_found(format!("Template not found: {}", name)))
    }

    pub fn conversation() -> PromptTemplate {
        CONVERSATION_TEMPLATE
    }

    pub fn agent() -> PromptTemplate {
        AGENT_TEMPLATE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Substitutions, BOT_NAME};

    #[test]
    fn test_conversation_template_renders_history_and_input() {
        let subs = Substitutions::new().history("A: hi").input("B: hello");

        let prompt = TemplateStore::conversation().render(&subs).unwrap();

        assert!(prompt.contains("A: hi\nB: hello\n"));
        assert!(!prompt.contains("{history}"));
        assert!(!prompt.contains("{input}"));
        assert!(prompt.ends_with(&format!("{}:", BOT_NAME)));
        assert!(prompt.starts_with("Below is an instruction"));
    }

    #[test]
    fn test_conversation_template_requires_input() {
        let subs = Substitutions::new().history("A: hi");

        let err = TemplateStore::conversation().render(&subs).unwrap_err();
        assert!(err.is_missing_placeholder());
    }

    #[test]
    fn test_agent_template_places_observation_before_cue() {
        let subs = Substitutions::new()
            .history("A: hi")
            .input("B: what's the weather?")
            .observation("Observation: sunny");

        let prompt = TemplateStore::agent().render(&subs).unwrap();

        assert!(prompt.ends_with("### Response:\nObservation: sunny\nTensor:"));
    }

    #[test]
    fn test_agent_template_requires_observation() {
        let subs = Substitutions::new().history("").input("hey");

        let err = TemplateStore::agent().render(&subs).unwrap_err();
        assert!(matches!(err, DomainError::MissingPlaceholder(ref name) if name == "observation"));
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(
            TemplateStore::conversation().placeholders(),
            vec!["history", "input"]
        );
        assert_eq!(
            TemplateStore::agent().placeholders(),
            vec!["history", "input", "observation"]
        );
    }

    #[test]
    fn test_get_by_name() {
        assert_eq!(TemplateStore::get("agent").unwrap(), AGENT_TEMPLATE);
        assert_eq!(TemplateStore::all().len(), 2);
        assert!(matches!(
            TemplateStore::get("missing"),
            Err(DomainError::NotFound(_))
        ));
    }
}
