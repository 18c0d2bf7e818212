//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CONFIG_FILE_NAMES};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(none, using defaults)"),
    }

    let store = &ctx.config.store;
    ctx.output.info("");
    ctx.output.info("[store]");
    ctx.output.kv("currency", store.currency.code());

    let checkout = &ctx.config.checkout;
    ctx.output.info("");
    ctx.output.info("[checkout]");
    ctx.output.kv("validation", &format!("{:?}", checkout.validation).to_lowercase());
    ctx.output.kv("quantity_policy", &format!("{:?}", checkout.quantity_policy).to_lowercase());
    ctx.output.kv("submit_latency_ms", &checkout.submit_latency_ms.to_string());
    match checkout.submit_timeout_ms {
        Some(ms) => ctx.output.kv("submit_timeout_ms", &ms.to_string()),
        None => ctx.output.kv("submit_timeout_ms", "(none)"),
    }

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;
    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}
