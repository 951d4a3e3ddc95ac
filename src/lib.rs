pub mod context;
pub mod emit;
pub mod error;
pub mod prompt;
pub mod render;
pub mod store;

use std::path::{Path, PathBuf};

use console::style;

use crate::context::AppDescriptor;
use crate::error::{AppskelError, Result};
use crate::render::RenderedFile;
use crate::store::TemplateStore;

pub struct ScaffoldOptions {
    pub ecosystem: String,
    pub app: AppDescriptor,
    /// Destination directory; defaults to the current directory.
    pub output: Option<String>,
}

/// A scaffold that has been rendered but not yet written to disk.
#[derive(Debug)]
pub struct ScaffoldPlan {
    pub rendered: RenderedFile,
    pub output_dir: PathBuf,
}

/// Prepare a scaffold: look up the template, validate the descriptor, and
/// render in memory. No files are written.
pub fn plan_scaffold(store: &TemplateStore, options: ScaffoldOptions) -> Result<ScaffoldPlan> {
    let template = store.lookup(&options.ecosystem)?;
    options.app.validate()?;

    let output_dir = if let Some(out) = &options.output {
        Path::new(out).to_path_buf()
    } else {
        std::env::current_dir().map_err(|e| AppskelError::Io {
            context: "getting current directory".into(),
            source: e,
        })?
    };

    let rendered = render::render(template, &options.app)?;

    Ok(ScaffoldPlan {
        rendered,
        output_dir,
    })
}

/// Execute a previously planned scaffold: write the rendered file.
pub fn execute_scaffold(plan: ScaffoldPlan) -> Result<PathBuf> {
    let path = emit::write_rendered(&plan.rendered, &plan.output_dir)?;

    println!(
        "\n{} Generated {}",
        style("\u{2713}").green().bold(),
        style(path.display()).cyan()
    );

    Ok(path)
}

/// Scaffold a starter application: render the ecosystem's template against
/// the descriptor and write the result. Aborts on the first error; validation
/// failures happen before anything touches the filesystem.
pub fn scaffold(store: &TemplateStore, options: ScaffoldOptions) -> Result<PathBuf> {
    let plan = plan_scaffold(store, options)?;
    execute_scaffold(plan)
}
