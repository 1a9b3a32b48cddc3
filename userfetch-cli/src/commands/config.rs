//! Config command - show the resolved configuration

use anyhow::Result;
use colored::Colorize;
use userfetch_core::config::{LOCATOR_ENV, TIMEOUT_SECS_ENV};

use super::load_config;
use crate::output;

pub fn run(json: bool) -> Result<()> {
    let (dir, config) = load_config()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    println!("{}", "Userfetch Configuration".bold());
    println!();

    let timeout = config
        .timeout_secs
        .map(|secs| format!("{}s", secs))
        .unwrap_or_else(|| "transport default".to_string());

    let mut table = output::create_table();
    table.add_row(vec!["Directory", &dir.display().to_string()]);
    table.add_row(vec!["Locator", &config.locator]);
    table.add_row(vec!["Timeout", &timeout]);
    println!("{}", table);
    println!();

    println!("Overrides: {}, {}", LOCATOR_ENV, TIMEOUT_SECS_ENV);

    Ok(())
}
