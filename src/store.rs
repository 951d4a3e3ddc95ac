use crate::error::{AppskelError, Result};

/// A built-in template: one boilerplate source file per target ecosystem.
///
/// Both the body and the file-name pattern may contain placeholder markers.
/// Templates are immutable once the store is built.
#[derive(Debug, Clone)]
pub struct Template {
    pub ecosystem: String,
    /// Output file name pattern, e.g. `{{.app.name}}.c`.
    pub file_name: String,
    pub body: String,
}

/// The static set of built-in templates, keyed by ecosystem.
pub struct TemplateStore {
    templates: Vec<Template>,
}

impl TemplateStore {
    /// Build the store from the templates embedded in the binary.
    pub fn builtin() -> Self {
        let templates = vec![
            Template {
                ecosystem: "c".to_string(),
                file_name: "{{.app.name}}.c".to_string(),
                body: include_str!("../templates/c.tmpl").to_string(),
            },
            Template {
                ecosystem: "cpp".to_string(),
                file_name: "{{.app.name}}.cpp".to_string(),
                body: include_str!("../templates/cpp.tmpl").to_string(),
            },
        ];
        Self { templates }
    }

    pub fn lookup(&self, ecosystem: &str) -> Result<&Template> {
        self.templates
            .iter()
            .find(|t| t.ecosystem == ecosystem)
            .ok_or_else(|| AppskelError::TemplateNotFound {
                ecosystem: ecosystem.to_string(),
            })
    }

    /// Registered ecosystem keys, in registration order.
    pub fn ecosystems(&self) -> Vec<&str> {
        self.templates.iter().map(|t| t.ecosystem.as_str()).collect()
    }
}

impl Default for TemplateStore {
    fn default() -> Self {
        Self::builtin()
    }
}
