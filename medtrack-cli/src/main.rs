//! Medtrack CLI - your medications in the terminal

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::{keys, meds, open, session};

/// Medtrack - keep track of your medications
#[derive(Parser)]
#[command(name = "mt", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in as the given user (no password check)
    Login {
        /// Email identifying the user
        email: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Log out the current user
    Logout,

    /// Show the logged-in user
    Whoami {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show what the app would display for a path
    Open {
        /// Path such as /medications or /login
        path: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage your medication list
    Meds {
        #[command(subcommand)]
        command: meds::MedsCommands,
    },

    /// List keys in the local store
    Keys {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr; RUST_LOG overrides the default `warn` level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Login { email, json } => session::run_login(&email, json),
        Commands::Logout => session::run_logout(),
        Commands::Whoami { json } => session::run_whoami(json),
        Commands::Open { path, json } => open::run(&path, json),
        Commands::Meds { command } => meds::run(command),
        Commands::Keys { json } => keys::run(json),
    }
}
