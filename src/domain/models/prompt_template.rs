use std::collections::BTreeMap;

use crate::domain::DomainError;

pub const HISTORY: &str = "history";
pub const INPUT: &str = "input";
pub const OBSERVATION: &str = "observation";

/// Values for the placeholders of a [`PromptTemplate`], keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitutions {
    values: BTreeMap<String, String>,
}

impl Substitutions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn history(self, history: impl Into<String>) -> Self {
        self.set(HISTORY, history)
    }

    pub fn input(self, input: impl Into<String>) -> Self {
        self.set(INPUT, input)
    }

    /// Tool or observation result placed just before the response cue of
    /// the agent template.
    pub fn observation(self, observation: impl Into<String>) -> Self {
        self.set(OBSERVATION, observation)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

/// A named, constant prompt pattern.
///
/// Placeholders are written `{name}` where `name` is made of lowercase
/// ASCII letters and underscores. Any other brace is literal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptTemplate {
    name: &'static str,
    text: &'static str,
}

impl PromptTemplate {
    pub const fn new(name: &'static str, text: &'static str) -> Self {
        Self { name, text }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn text(&self) -> &'static str {
        self.text
    }

    /// Placeholder names used by the template, in order of first appearance.
    pub fn placeholders(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = Vec::new();
        for segment in Segments::new(self.text) {
            if let Segment::Placeholder(name) = segment {
                if !names.contains(&name) {
                    names.push(name);
                }
            }
        }
        names
    }

    /// Substitute every placeholder in one pass.
    ///
    /// Values are inserted literally and never re-scanned. Substitutions
    /// the template does not use are ignored.
    pub fn render(&self, substitutions: &Substitutions) -> Result<String, DomainError> {
        let mut out = String::with_capacity(self.text.len());
        for segment in Segments::new(self.text) {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(name) => {
                    let value = substitutions
                        .get(name)
                        .ok_or_else(|| DomainError::missing_placeholder(name))?;
                    out.push_str(value);
                }
            }
        }
        Ok(out)
    }
}

/// Free-function form of [`PromptTemplate::render`].
pub fn render(
    template: &PromptTemplate,
    substitutions: &Substitutions,
) -> Result<String, DomainError> {
    template.render(substitutions)
}

enum Segment<'a> {
    Literal(&'a str),
    Placeholder(&'a str),
}

struct Segments<'a> {
    rest: &'a str,
}

impl<'a> Segments<'a> {
    fn new(text: &'a str) -> Self {
        Self { rest: text }
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        if let Some(name) = leading_placeholder(self.rest) {
            self.rest = &self.rest[name.len() + 2..];
            return Some(Segment::Placeholder(name));
        }

        // Literal run up to the next brace that could open a placeholder.
        // The first char is always consumed so a lone `{` makes progress.
        let first = self.rest.chars().next().map_or(0, char::len_utf8);
        let end = self.rest[first..]
            .find('{')
            .map_or(self.rest.len(), |i| i + first);
        let (literal, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(Segment::Literal(literal))
    }
}

fn leading_placeholder(text: &str) -> Option<&str> {
    let inner = text.strip_prefix('{')?;
    let close = inner.find('}')?;
    let name = &inner[..close];
    let valid = !name.is_empty() && name.bytes().all(|b| b.is_ascii_lowercase() || b == b'_');
    valid.then_some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREETING: PromptTemplate = PromptTemplate::new("greeting", "Hi {name}, {name}! {mood}");

    #[test]
    fn test_render_substitutes_every_occurrence() {
        let subs = Substitutions::new().set("name", "Ann").set("mood", ":)");

        assert_eq!(GREETING.render(&subs).unwrap(), "Hi Ann, Ann! :)");
    }

    #[test]
    fn test_render_missing_placeholder() {
        let subs = Substitutions::new().set("name", "Ann");

        let err = GREETING.render(&subs).unwrap_err();
        assert!(matches!(err, DomainError::MissingPlaceholder(ref name) if name == "mood"));
    }

    #[test]
    fn test_render_ignores_unused_substitutions() {
        let subs = Substitutions::new()
            .set("name", "Ann")
            .set("mood", "ok")
            .set("extra", "unused");

        assert_eq!(render(&GREETING, &subs).unwrap(), "Hi Ann, Ann! ok");
    }

    #[test]
    fn test_render_does_not_rescan_values() {
        let template = PromptTemplate::new("t", "{history}|{input}");
        let subs = Substitutions::new().history("{input}").input("x");

        assert_eq!(template.render(&subs).unwrap(), "{input}|x");
    }

    #[test]
    fn test_non_placeholder_braces_are_literal() {
        let template = PromptTemplate::new("t", "{ } {Name} {a-b} {{input}} {");
        let subs = Substitutions::new().input("v");

        assert_eq!(template.render(&subs).unwrap(), "{ } {Name} {a-b} {v} {");
    }

    #[test]
    fn test_placeholders_in_order() {
        assert_eq!(GREETING.placeholders(), vec!["name", "mood"]);
        assert!(PromptTemplate::new("t", "plain text").placeholders().is_empty());
    }

    #[test]
    fn test_render_keeps_multibyte_text() {
        let template = PromptTemplate::new("t", "😂 {input} ✌️");
        let subs = Substitutions::new().input("héllo");

        assert_eq!(template.render(&subs).unwrap(), "😂 héllo ✌️");
    }
}
