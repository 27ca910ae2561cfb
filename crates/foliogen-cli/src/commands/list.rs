use anyhow::Result;
use console::style;
use foliogen_core::Template;

/// List the bundled templates without generating anything
///
/// Two output modes:
/// - Human-readable: name + one-line description per template
/// - Machine-readable: JSON array for scripting (`--list --json`)
pub fn handle(json: bool) -> Result<()> {
    if json {
        let templates: Vec<_> = Template::ALL
            .iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name(),
                    "description": t.description(),
                    "default": *t == Template::default(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&templates)?);
    } else {
        println!("📋 Available templates:");
        for template in Template::ALL {
            let marker = if template == Template::default() {
                " (default)"
            } else {
                ""
            };
            println!(
                "   {} - {}{}",
                style(template.name()).bold(),
                template.description(),
                marker
            );
        }
    }

    Ok(())
}
