use appskel::context::AppDescriptor;
use appskel::error::AppskelError;
use appskel::prompt::{complete_request, PromptOptions};
use appskel::store::TemplateStore;
use appskel::ScaffoldOptions;
use console::style;
use miette::Result;

#[allow(clippy::too_many_arguments)]
pub fn run(
    ecosystem: Option<String>,
    output: Option<String>,
    name: Option<String>,
    title: Option<String>,
    author: Option<String>,
    options: Vec<String>,
    descriptor: Option<String>,
    no_input: bool,
    dry_run: bool,
) -> Result<()> {
    let mut app = match descriptor {
        Some(path) => load_descriptor(&path)?,
        None => AppDescriptor::default(),
    };

    // Command-line flags win over the descriptor file.
    if let Some(name) = name {
        app.name = name;
    }
    if let Some(title) = title {
        app.title = title;
    }
    if let Some(author) = author {
        app.author = author;
    }
    for opt in options {
        let (flag, value) = parse_option(&opt)?;
        app.options.insert(flag, value);
    }

    let store = TemplateStore::builtin();
    let (ecosystem, app) = complete_request(&store, ecosystem, app, &PromptOptions { no_input })?;

    let scaffold_options = ScaffoldOptions {
        ecosystem,
        app,
        output,
    };

    if dry_run {
        let plan = appskel::plan_scaffold(&store, scaffold_options)?;

        println!(
            "\n{} Dry run \u{2014} would generate {}:",
            style("==>").cyan().bold(),
            style(plan.output_dir.join(&plan.rendered.file_name).display()).cyan()
        );
        println!("  {}", style("\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}").dim());
        for line in plan.rendered.content.lines() {
            println!("  {}", line);
        }
        println!("  {}", style("\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}").dim());
        println!(
            "\n{} Dry run \u{2014} no files written.",
            style("\u{2139}").blue().bold()
        );
    } else {
        appskel::scaffold(&store, scaffold_options)?;
    }

    Ok(())
}

fn load_descriptor(path: &str) -> std::result::Result<AppDescriptor, AppskelError> {
    let text = std::fs::read_to_string(path).map_err(|e| AppskelError::Io {
        context: format!("reading descriptor {path}"),
        source: e,
    })?;
    serde_json::from_str(&text).map_err(|e| AppskelError::DescriptorParse { source: e })
}

/// Parse a `--option` value: `flag` enables it, `flag=true`/`flag=false` sets
/// it explicitly.
fn parse_option(input: &str) -> std::result::Result<(String, bool), AppskelError> {
    match input.split_once('=') {
        None => Ok((input.to_string(), true)),
        Some((flag, "true")) => Ok((flag.to_string(), true)),
        Some((flag, "false")) => Ok((flag.to_string(), false)),
        Some((flag, other)) => Err(AppskelError::Validation {
            field: format!("options.{flag}"),
            reason: format!("expected true or false, got '{other}'"),
        }),
    }
}
