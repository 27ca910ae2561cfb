use clap::Parser;

/// Main CLI structure
///
/// One flat command surface, no subcommands: `foliogen [FOLDER] [-t NAME]`.
/// The template argument is kept as a plain string here and validated by
/// the core library, so an unknown name goes through the normal error path
/// (exit code 1) instead of clap's usage error.
#[derive(Parser)]
#[command(name = "foliogen")]
#[command(about = "Generate a portfolio project folder with HTML, CSS, and JS files")]
#[command(version)]
pub struct Cli {
    /// Name of the portfolio folder to create
    #[arg(default_value = "MyPortfolio")]
    pub folder_name: String,

    /// Portfolio template to use (see --list for available templates)
    #[arg(short, long, default_value = "developer")]
    pub template: String,

    /// List available templates and exit without generating anything
    #[arg(short, long)]
    pub list: bool,

    /// Output the template list as JSON (for scripting; requires --list)
    #[arg(long, requires = "list")]
    pub json: bool,
}
