//! CLI command implementations

pub mod keys;
pub mod meds;
pub mod open;
pub mod session;

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use medtrack_core::{Error, MedtrackContext};

use crate::output;

/// Shown whenever a guarded command runs without a session
pub const LOGIN_REQUIRED_MESSAGE: &str = "Please login to view and manage your medications.";

/// Get the medtrack directory from environment or default
pub fn get_medtrack_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("MEDTRACK_DIR") {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|home| home.join(".medtrack"))
        .ok_or_else(|| anyhow!("Could not find home directory; set MEDTRACK_DIR"))
}

/// Get or create medtrack context
pub fn get_context() -> Result<MedtrackContext> {
    let medtrack_dir = get_medtrack_dir()?;

    std::fs::create_dir_all(&medtrack_dir)
        .with_context(|| format!("Failed to create medtrack directory: {:?}", medtrack_dir))?;

    MedtrackContext::new(&medtrack_dir).context("Failed to initialize medtrack context")
}

/// Turn a missing session into the login notice plus redirect
pub fn login_required(err: Error) -> anyhow::Error {
    if err.is_unauthorized() {
        output::warning(LOGIN_REQUIRED_MESSAGE);
        anyhow!("Redirecting to /login. Run 'mt login <email>' first.")
    } else {
        err.into()
    }
}
