// crates/foliogen-cli/src/main.rs - CLI Application Entry Point
//
// This is the entry point for the foliogen CLI tool. The command surface is
// a single subject with no subcommands: point it at a folder name, pick a
// template, get a scaffolded portfolio.
//
// CONTROL FLOW:
// ┌──────────────┐   ┌──────────────┐   ┌────────────────────┐
// │  User Input  │──▶│  CLI Parser  │──▶│  Command Handlers  │
// │    (clap)    │   │  (main fn)   │   │  (commands/*.rs)   │
// └──────────────┘   └──────────────┘   └─────────┬──────────┘
//                                                 │
//                                                 ▼
//                                       ┌────────────────────┐
//                                       │   foliogen-core    │
//                                       │ (registry + files) │
//                                       └────────────────────┘
//
// OUTPUT CONVENTIONS:
// - Success and diagnostics go to stdout, marked with ✅/📁/🌐/🎨/⚠️/📋
// - Errors go to stderr as a single ❌-prefixed line, exit code 1
// - Structured log events (tracing) go to stderr, RUST_LOG-filtered,
//   errors-only by default

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;

use cli::Cli;

/// Main entry point - parse, set up the ambient pieces, dispatch, report
///
/// 1. Parse command-line arguments using clap (handles --help/--version)
/// 2. Initialize tracing so library warn/error events have somewhere to go
/// 3. Install the Ctrl-C handler so interruption exits cleanly with code 1
/// 4. Dispatch to the list or generate handler
/// 5. Report any error as one ❌-prefixed stderr line, exit code 1
fn main() {
    let cli = Cli::parse();

    init_tracing();
    install_interrupt_handler();

    let result = if cli.list {
        commands::list::handle(cli.json)
    } else {
        commands::generate::handle(&cli.folder_name, &cli.template)
    };

    if let Err(err) = result {
        // Single line, alternate format so anyhow context chains stay on it
        eprintln!("❌ {err:#}");
        std::process::exit(1);
    }
}

/// Initialize the tracing subscriber
///
/// Events go to stderr so stdout stays reserved for command output.
/// Default filter is errors-only; RUST_LOG overrides (e.g.
/// `RUST_LOG=foliogen_core=debug`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

/// Install the Ctrl-C handler
///
/// Generation is a short linear sequence of writes, so there is nothing to
/// roll back - interruption just reports and exits with code 1. Partially
/// written files may remain, same as any other mid-run failure.
fn install_interrupt_handler() {
    let result = ctrlc::set_handler(|| {
        eprintln!("\n❌ Operation cancelled by user.");
        std::process::exit(1);
    });

    // Not fatal: without the handler the OS default disposition still
    // terminates the process, just without our message
    if let Err(err) = result {
        tracing::warn!(error = %err, "could not install Ctrl-C handler");
    }
}
