// crates/foliogen-cli/src/commands/generate.rs - Portfolio Generation Command
//
// The default operation: scaffold a portfolio folder from a bundled
// template. The core library does the filesystem work; this handler owns
// the user-facing conversation around it.
//
// CREATED STRUCTURE:
// ```
// <folder>/
// ├── index.html
// ├── styles.css
// ├── script.js
// └── assets/
//     └── README.md
// ```
//
// EXAMPLES:
// ```bash
// foliogen                          # MyPortfolio/ with the developer template
// foliogen Demo -t photographer     # Demo/ with the photographer template
// mkdir site && foliogen site       # existing folder: warn, then reuse
// ```

use anyhow::Result;
use std::env;

use foliogen_core::Template;

/// Scaffold a portfolio folder and report the result
///
/// Behavior around an existing destination is warn-and-proceed: the folder
/// is reused and the fixed asset filenames inside it are overwritten. The
/// warning goes to stdout (it is a diagnostic, not an error).
pub fn handle(folder_name: &str, template_name: &str) -> Result<()> {
    // Mirror the destination resolution the generator will do, purely for
    // the user-facing warning; the generator re-checks and emits its own
    // tracing event
    let destination = env::current_dir()?.join(folder_name);
    if destination.exists() {
        println!(
            "⚠️  Warning: Folder '{}' already exists. Contents may be overwritten.",
            folder_name
        );
    }

    let portfolio_path = foliogen_core::generate(folder_name, template_name)?;

    println!("✅ Portfolio successfully created!");
    println!("📁 Location: {}", portfolio_path.display());
    println!("🌐 Open index.html in your browser to view your portfolio.");

    // Only call out the template choice when it isn't the default
    if template_name != Template::default().name() {
        println!("🎨 Template: {}", template_name);
    }

    Ok(())
}
