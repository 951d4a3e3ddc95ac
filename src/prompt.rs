use crate::context::AppDescriptor;
use crate::error::{AppskelError, Result};
use crate::store::TemplateStore;

pub struct PromptOptions {
    /// Never prompt; missing fields fall through to validation instead.
    pub no_input: bool,
}

/// Fill in the ecosystem and any missing descriptor fields, prompting the
/// user interactively unless `no_input` is set.
///
/// The default application name is derived from the title, lowercased with
/// spaces replaced by underscores.
pub fn complete_request(
    store: &TemplateStore,
    ecosystem: Option<String>,
    mut app: AppDescriptor,
    options: &PromptOptions,
) -> Result<(String, AppDescriptor)> {
    if options.no_input {
        let ecosystem = ecosystem.ok_or_else(|| AppskelError::Validation {
            field: "ecosystem".to_string(),
            reason: "must be given with --no-input".to_string(),
        })?;
        return Ok((ecosystem, app));
    }

    let ecosystem = match ecosystem {
        Some(key) => key,
        None => {
            let choices: Vec<String> = store.ecosystems().iter().map(|s| s.to_string()).collect();
            inquire::Select::new("Ecosystem", choices)
                .prompt()
                .map_err(|_| AppskelError::PromptCancelled)?
        }
    };

    if app.title.is_empty() {
        app.title = inquire::Text::new("Application title")
            .prompt()
            .map_err(|_| AppskelError::PromptCancelled)?;
    }

    if app.name.is_empty() {
        let default_name = app.title.to_lowercase().replace(' ', "_");
        app.name = inquire::Text::new("Application name")
            .with_default(&default_name)
            .prompt()
            .map_err(|_| AppskelError::PromptCancelled)?;
    }

    if app.author.is_empty() {
        app.author = inquire::Text::new("Author")
            .prompt()
            .map_err(|_| AppskelError::PromptCancelled)?;
    }

    Ok((ecosystem, app))
}
