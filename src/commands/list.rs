use appskel::store::TemplateStore;
use console::style;
use miette::Result;

pub fn run() -> Result<()> {
    let store = TemplateStore::builtin();
    let keys = store.ecosystems();

    println!(
        "{} ({} template{})\n",
        style("Available ecosystems").bold(),
        keys.len(),
        if keys.len() == 1 { "" } else { "s" }
    );

    for key in keys {
        let template = store.lookup(key)?;
        println!(
            "  {} {}",
            style(format!("{key:<6}")).cyan(),
            style(&template.file_name).dim()
        );
    }

    Ok(())
}
