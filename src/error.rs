use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum AppskelError {
    #[error("No template registered for ecosystem '{ecosystem}'")]
    #[diagnostic(help("Run `appskel list` to see the available ecosystems"))]
    TemplateNotFound { ecosystem: String },

    #[error("Invalid application descriptor: {field} {reason}")]
    Validation { field: String, reason: String },

    #[error("Unresolved template reference '{reference}'")]
    #[diagnostic(help(
        "Templates may only reference .app.name, .app.title, .app.author, and .app.options.*"
    ))]
    UnresolvedReference { reference: String },

    #[error("Template syntax error in '{template}': {message}")]
    TemplateSyntax { template: String, message: String },

    #[error("Failed to parse descriptor file")]
    #[diagnostic(help("Check the JSON syntax of the descriptor file"))]
    DescriptorParse {
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Prompt cancelled by user")]
    PromptCancelled,
}

pub type Result<T> = std::result::Result<T, AppskelError>;
