//! Open command - resolve a path the way the app's router would

use anyhow::Result;
use colored::Colorize;
use medtrack_core::services::Navigation;

use super::{get_context, LOGIN_REQUIRED_MESSAGE};

pub fn run(path: &str, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let navigation = ctx.router.navigate(path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&navigation)?);
        return Ok(());
    }

    match navigation {
        Navigation::Render { route } => {
            println!("{} {}", "Rendering".green(), route);
        }
        Navigation::Redirect { from, to } => {
            println!("{}", LOGIN_REQUIRED_MESSAGE.yellow());
            println!("{} {} -> {}", "Redirecting".yellow(), from, to);
        }
    }

    Ok(())
}
