use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{AppskelError, Result};

/// The user-supplied values a template is rendered against.
///
/// Constructed once per scaffold invocation and never mutated during
/// rendering.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppDescriptor {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub author: String,

    #[serde(default)]
    pub options: BTreeMap<String, bool>,
}

/// A descriptor field addressed by a placeholder path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Flag(bool),
}

impl AppDescriptor {
    /// Check that the required fields are present and well-formed.
    ///
    /// Runs before rendering so that a bad descriptor never reaches the
    /// filesystem.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("name", &self.name),
            ("title", &self.title),
            ("author", &self.author),
        ] {
            if value.trim().is_empty() {
                return Err(AppskelError::Validation {
                    field: field.to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
        }
        if self.name.contains(' ') {
            return Err(AppskelError::Validation {
                field: "name".to_string(),
                reason: "cannot contain spaces".to_string(),
            });
        }
        // The name feeds the output file name; keep it a single path component.
        if self.name.contains(['/', '\\']) || self.name.contains("..") {
            return Err(AppskelError::Validation {
                field: "name".to_string(),
                reason: "cannot contain path separators or '..'".to_string(),
            });
        }
        Ok(())
    }

    /// Resolve a placeholder path like `.app.title` or
    /// `.app.options.include_libhlapi` to the field it addresses.
    pub fn field(&self, path: &str) -> Result<FieldValue<'_>> {
        let unresolved = || AppskelError::UnresolvedReference {
            reference: path.to_string(),
        };

        let rest = path.strip_prefix(".app.").ok_or_else(unresolved)?;
        match rest {
            "name" => Ok(FieldValue::Text(&self.name)),
            "title" => Ok(FieldValue::Text(&self.title)),
            "author" => Ok(FieldValue::Text(&self.author)),
            _ => {
                let flag = rest.strip_prefix("options.").ok_or_else(unresolved)?;
                self.options
                    .get(flag)
                    .map(|b| FieldValue::Flag(*b))
                    .ok_or_else(unresolved)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor() -> AppDescriptor {
        AppDescriptor {
            name: "demo".into(),
            title: "Demo App".into(),
            author: "Jane".into(),
            options: BTreeMap::from([("include_libhlapi".to_string(), true)]),
        }
    }

    #[test]
    fn test_validate_accepts_complete_descriptor() {
        assert!(descriptor().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_author() {
        let mut app = descriptor();
        app.author = String::new();
        let err = app.validate().unwrap_err();
        assert!(matches!(err, AppskelError::Validation { field, .. } if field == "author"));
    }

    #[test]
    fn test_validate_rejects_name_with_spaces() {
        let mut app = descriptor();
        app.name = "my demo".into();
        let err = app.validate().unwrap_err();
        assert!(matches!(err, AppskelError::Validation { field, .. } if field == "name"));
    }

    #[test]
    fn test_validate_rejects_name_with_path_separators() {
        for name in ["../evil", "a/b", "a\\b", "src/.."] {
            let mut app = descriptor();
            app.name = name.into();
            let err = app.validate().unwrap_err();
            assert!(
                matches!(err, AppskelError::Validation { field, .. } if field == "name"),
                "accepted '{name}'"
            );
        }
    }

    #[test]
    fn test_field_lookup() {
        let app = descriptor();
        assert_eq!(app.field(".app.title").unwrap(), FieldValue::Text("Demo App"));
        assert_eq!(
            app.field(".app.options.include_libhlapi").unwrap(),
            FieldValue::Flag(true)
        );
    }

    #[test]
    fn test_field_lookup_unknown_path() {
        let app = descriptor();
        for path in [".app.version", ".app.options.missing", "title", ".other.name"] {
            let err = app.field(path).unwrap_err();
            assert!(matches!(err, AppskelError::UnresolvedReference { .. }));
        }
    }

    #[test]
    fn test_descriptor_from_json() {
        let app: AppDescriptor = serde_json::from_str(
            r#"{"name": "demo", "title": "Demo App", "author": "Jane",
                "options": {"include_libhlapi": false}}"#,
        )
        .unwrap();
        assert_eq!(app.name, "demo");
        assert_eq!(app.options.get("include_libhlapi"), Some(&false));
    }
}
