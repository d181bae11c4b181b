//! Keys command - list what the local store holds

use anyhow::Result;
use colored::Colorize;

use super::get_context;
use crate::output;

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let keys = ctx.store.keys()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&keys)?);
        return Ok(());
    }

    if keys.is_empty() {
        println!("{}", "Local store is empty".dimmed());
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["Key", "Size"]);
    for key in &keys {
        let size = ctx.store.get_item(key)?.map(|v| v.len()).unwrap_or(0);
        table.add_row(vec![key.clone(), format!("{} bytes", size)]);
    }
    println!("{}", table);

    Ok(())
}
