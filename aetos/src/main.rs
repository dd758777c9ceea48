pub mod commands;
pub mod config;
pub mod pip;

use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use config::ConfigStore;

#[derive(Parser)]
#[command(
    name = "aetos",
    version,
    about = "pip wrapper that redirects package operations to a configured mirror",
    long_about = "Aetos relays pip commands with --index-url and --trusted-host \
                  injected from a persisted per-user preference.",
    after_help = "Examples:\n  \
                  aetos install requests          Install a package via the mirror\n  \
                  aetos uninstall requests        Uninstall a package\n  \
                  aetos list                      List installed packages\n  \
                  aetos show requests             Show package information\n  \
                  aetos config show               Show the current index URL\n  \
                  aetos config set <url>          Change the index URL\n  \
                  aetos config reset              Restore the default index URL"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Show or change the configured index URL
    Config {
        /// Action: show (default), set <url>, or reset
        #[arg(trailing_var_arg = true)]
        args: Vec<String>,
    },

    /// Any other verb is relayed to pip with the index flags injected
    #[command(external_subcommand)]
    Pip(Vec<String>),
}

fn main() {
    init_tracing();

    let cli = Cli::parse();

    let store = match ConfigStore::per_user() {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(1);
        }
    };

    match cli.command {
        Some(Command::Config { args }) => {
            if let Err(e) = commands::config::run(&store, &args) {
                eprintln!("Config error: {}", e);
                std::process::exit(1);
            }
        }
        Some(Command::Pip(argv)) => {
            // First element is the verb itself; the rest passes through.
            if let Some((verb, passthrough)) = argv.split_first() {
                if let Err(e) = commands::delegate::run(&store, verb, passthrough) {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
        None => {
            // No command at all: show usage and fail, matching scripted use.
            let _ = Cli::command().print_help();
            println!();
            std::process::exit(1);
        }
    }
}

/// Diagnostics go to stderr and stay off unless AETOS_LOG is set.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("AETOS_LOG").unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
