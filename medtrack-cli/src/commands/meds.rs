//! Meds command - list and add medications for the logged-in user

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;
use dialoguer::Input;
use medtrack_core::{Error, OperationResult};

use super::{get_context, login_required};
use crate::output;

#[derive(Subcommand)]
pub enum MedsCommands {
    /// Show your medications
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add a medication
    Add {
        /// Medication name
        #[arg(long)]
        name: Option<String>,
        /// Dosage (e.g., 500mg)
        #[arg(long)]
        dosage: Option<String>,
        /// Frequency (e.g., Twice a day)
        #[arg(long)]
        frequency: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(command: MedsCommands) -> Result<()> {
    match command {
        MedsCommands::List { json } => run_list(json),
        MedsCommands::Add { name, dosage, frequency, json } => {
            run_add(name, dosage, frequency, json)
        }
    }
}

fn run_list(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let view = ctx.medications_view().map_err(login_required)?;
    let medications = view.medications();

    if json {
        println!("{}", serde_json::to_string_pretty(medications)?);
        return Ok(());
    }

    println!("{}", "My Medications".bold());
    println!();

    if medications.is_empty() {
        println!("{}", "No medications added yet.".dimmed());
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["#", "Name", "Dosage", "Frequency"]);
    for (i, med) in medications.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            med.name.clone(),
            med.dosage.clone(),
            med.frequency.clone(),
        ]);
    }
    println!("{}", table);

    Ok(())
}

/// Use the flag value, or ask for it when someone is at the terminal
///
/// Without a terminal a missing field stays empty and the add is rejected
/// like any incomplete form.
fn field(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None if atty::is(atty::Stream::Stdin) => Ok(Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?),
        None => Ok(String::new()),
    }
}

fn run_add(
    name: Option<String>,
    dosage: Option<String>,
    frequency: Option<String>,
    json: bool,
) -> Result<()> {
    let ctx = get_context()?;
    let mut view = ctx.medications_view().map_err(login_required)?;

    let name = field(name, "Medication Name")?;
    let dosage = field(dosage, "Dosage (e.g., 500mg)")?;
    let frequency = field(frequency, "Frequency (e.g., Twice a day)")?;

    let result = view.add(&name, &dosage, &frequency);
    tracing::debug!(ok = result.is_ok(), total = view.medications().len(), "Add medication");

    if json {
        let failed = result.is_err();
        let envelope: OperationResult<_> = result.into();
        println!("{}", serde_json::to_string_pretty(&envelope)?);
        if failed {
            std::process::exit(1);
        }
        return Ok(());
    }

    match result {
        Ok(med) => {
            output::success(&format!(
                "Added {} ({}, {})",
                med.name.bold(),
                med.dosage,
                med.frequency
            ));
            Ok(())
        }
        Err(Error::Validation(msg)) => anyhow::bail!(msg),
        Err(e) => Err(e.into()),
    }
}
