//! Fetch command - retrieve and print a user record

use std::sync::mpsc;

use anyhow::{Context, Result};
use tokio::runtime::Runtime;
use userfetch_core::{OperationResult, UserFetchContext, UserRecord};

use super::load_config;
use crate::output;

pub fn run(
    locator: Option<String>,
    callback: bool,
    timeout: Option<u64>,
    json: bool,
) -> Result<()> {
    let (_, mut config) = load_config()?;
    if timeout.is_some() {
        config.timeout_secs = timeout;
    }

    let runtime = Runtime::new().context("Failed to start async runtime")?;
    let ctx = UserFetchContext::from_config(config, runtime.handle().clone())?;
    let locator = locator.unwrap_or_else(|| ctx.config.locator.clone());

    let result = if callback {
        let (tx, rx) = mpsc::channel();
        let _task = ctx.fetcher.fetch_user_with(locator.clone(), move |result| {
            let _ = tx.send(result);
        });

        if !json {
            output::info("request sent, waiting for response...");
        }

        rx.recv()
            .context("Fetch task ended without reporting a result")?
    } else {
        runtime.block_on(ctx.fetcher.fetch_user(&locator))
    };

    if json {
        let report = match &result {
            Ok(user) => OperationResult::ok(user.clone()),
            Err(e) => OperationResult::fail(e),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    match result {
        Ok(user) => {
            if !json {
                print_user(&user);
            }
            Ok(())
        }
        Err(e) => {
            let kind = e.kind();
            Err(anyhow::Error::new(e)
                .context(format!("[{}] failed to fetch user from {}", kind, locator)))
        }
    }
}

fn print_user(user: &UserRecord) {
    output::success(&format!("Fetched user {}", user.id));

    let mut table = output::create_table();
    table.set_header(vec!["Field", "Value"]);
    table.add_row(vec!["ID", &user.id.to_string()]);
    table.add_row(vec!["Name", &user.name]);
    table.add_row(vec!["Email", &user.email]);

    println!("{}", table);
}
