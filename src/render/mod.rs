pub mod engine;

use crate::context::AppDescriptor;
use crate::error::Result;
use crate::store::Template;

/// A fully substituted template, ready to be written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    /// File name produced from the template's file-name pattern.
    pub file_name: String,
    pub content: String,
}

/// Render a template's body and file-name pattern against a descriptor.
///
/// Purely functional: the same inputs always produce byte-identical output.
pub fn render(template: &Template, app: &AppDescriptor) -> Result<RenderedFile> {
    let file_name = engine::substitute(&template.ecosystem, &template.file_name, app)?;
    let content = engine::substitute(&template.ecosystem, &template.body, app)?;
    Ok(RenderedFile { file_name, content })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::store::TemplateStore;

    fn app(include_libhlapi: bool) -> AppDescriptor {
        AppDescriptor {
            name: "demo".into(),
            title: "Demo App".into(),
            author: "Jane".into(),
            options: BTreeMap::from([("include_libhlapi".to_string(), include_libhlapi)]),
        }
    }

    #[test]
    fn test_render_substitutes_file_name() {
        let store = TemplateStore::builtin();
        let rendered = render(store.lookup("c").unwrap(), &app(true)).unwrap();
        assert_eq!(rendered.file_name, "demo.c");
    }

    #[test]
    fn test_render_leaves_no_markers() {
        let store = TemplateStore::builtin();
        for key in store.ecosystems() {
            let rendered = render(store.lookup(key).unwrap(), &app(false)).unwrap();
            assert!(!rendered.content.contains("{{"), "residual marker in {key}");
            assert!(!rendered.content.contains("}}"), "residual marker in {key}");
        }
    }

    #[test]
    fn test_render_is_idempotent() {
        let store = TemplateStore::builtin();
        let template = store.lookup("cpp").unwrap();
        let first = render(template, &app(true)).unwrap();
        let second = render(template, &app(true)).unwrap();
        assert_eq!(first, second);
    }
}
