use anyhow::Result;

use crate::domain::TemplateStore;

pub struct TemplateController;

impl TemplateController {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&self, name: Option<String>) -> Result<String> {
        match name {
            Some(name) => Ok(TemplateStore::get(&name)?.text().to_string()),
            None => Ok(self.format_template_list()),
        }
    }

    fn format_template_list(&self) -> String {
        let mut output = String::from("Available templates:\n");
        for template in TemplateStore::all() {
            output.push_str(&format!(
                "  {} ({})\n",
                template.name(),
                template.placeholders().join(", ")
            ));
        }
        output
    }
}

impl Default for TemplateController {
    fn default() -> Self {
        Self::new()
    }
}
