//! Session commands - login, logout, whoami

use anyhow::Result;
use colored::Colorize;
use medtrack_core::UserSession;

use super::get_context;
use crate::output;

pub fn run_login(email: &str, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let session = ctx.session_service.login(email.trim())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&session)?);
        return Ok(());
    }

    output::success(&format!("Logged in as {}", session.email.bold()));
    Ok(())
}

pub fn run_logout() -> Result<()> {
    let ctx = get_context()?;
    ctx.session_service.logout()?;
    output::success("Logged out");
    Ok(())
}

pub fn run_whoami(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let access = ctx.router.guard().check()?;
    let session = ctx.session_service.current()?;

    if json {
        let value = serde_json::json!({
            "authorized": access.is_authorized(),
            "policy": ctx.router.guard().policy(),
            "session": session,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    match classify(access.is_authorized(), session) {
        Whoami::LoggedIn(session) => {
            println!("Logged in as {}", session.email.bold());
            if let Some(at) = session.logged_in_at {
                println!("  Since: {}", at.with_timezone(&chrono::Local).format("%Y-%m-%d %H:%M"));
            }
        }
        Whoami::Unreadable => {
            output::warning("A session value is stored but it has no readable email.");
        }
        Whoami::LoggedOut => {
            println!("{}", "Not logged in".yellow());
        }
    }

    Ok(())
}

#[derive(Debug, PartialEq)]
enum Whoami {
    LoggedIn(UserSession),
    /// The guard lets it through but there is no email to show
    Unreadable,
    LoggedOut,
}

fn classify(authorized: bool, session: Option<UserSession>) -> Whoami {
    match (authorized, session) {
        (true, Some(session)) if session.is_usable() => Whoami::LoggedIn(session),
        (true, _) => Whoami::Unreadable,
        (false, _) => Whoami::LoggedOut,
    }
}
