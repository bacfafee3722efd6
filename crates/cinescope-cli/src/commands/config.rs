use super::prompts;
use super::AppContext;
use crate::output::{styled_table, Output};
use crate::ConfigCommands;
use cinescope_config::{Config, LoggingConfig};
use color_eyre::Result;
use comfy_table::Cell;
use owo_colors::OwoColorize;
use serde_json::json;

pub fn run_config(ctx: &AppContext, cmd: ConfigCommands, output: &Output) -> Result<()> {
    match cmd {
        ConfigCommands::Show => show_config(ctx, output),
        ConfigCommands::SetApiKey { key } => set_api_key(ctx, key, output),
    }
}

fn show_config(ctx: &AppContext, output: &Output) -> Result<()> {
    let config = &ctx.config;
    let config_file = ctx.paths.config_file();

    if !output.is_human() {
        output.json(&json!({
            "config_file": config_file.display().to_string(),
            "storage_file": ctx.paths.storage_file().display().to_string(),
            "omdb": {
                "api_key": config.masked_api_key(),
                "api_key_configured": config.is_api_key_configured(),
                "base_url": config.omdb.base_url,
            },
            "cache": { "ttl_seconds": config.cache.ttl_seconds },
            "home": { "categories": config.home.categories },
            "logging": {
                "level": config.logging.level,
                "file": config.logging.file.as_ref().map(|p| p.display().to_string()),
            },
        }));
        return Ok(());
    }

    if !config_file.exists() {
        output.warn(format!("Configuration file not found at: {}", config_file.display()));
        output.info("Defaults are in use. Run 'cinescope config set-api-key' to create it.");
    }

    let mut table = styled_table(vec!["Setting", "Value"]);
    table.add_row(vec![Cell::new("Config File"), Cell::new(config_file.display())]);
    table.add_row(vec![Cell::new("Storage File"), Cell::new(ctx.paths.storage_file().display())]);
    let key_status = if config.is_api_key_configured() {
        config.masked_api_key().green().to_string()
    } else {
        "not set".red().to_string()
    };
    table.add_row(vec![Cell::new("OMDb API Key"), Cell::new(key_status)]);
    table.add_row(vec![Cell::new("OMDb Base URL"), Cell::new(&config.omdb.base_url)]);
    table.add_row(vec![
        Cell::new("Cache TTL"),
        Cell::new(format!("{}s", config.cache.ttl_seconds)),
    ]);
    table.add_row(vec![
        Cell::new("Home Categories"),
        Cell::new(config.home.categories.join(", ")),
    ]);
    table.add_row(vec![Cell::new("Log Level"), Cell::new(&config.logging.level)]);
    table.add_row(vec![Cell::new("Log File"), Cell::new(log_file_display(&config.logging))]);
    println!("{}", table);

    Ok(())
}

fn log_file_display(logging: &LoggingConfig) -> String {
    logging
        .file
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "stderr".to_string())
}

fn set_api_key(ctx: &AppContext, key: Option<String>, output: &Output) -> Result<()> {
    let key = match key {
        Some(key) => key.trim().to_string(),
        None => prompts::prompt_secret("OMDb API key")?,
    };
    if key.is_empty() {
        return Err(color_eyre::eyre::eyre!("API key cannot be empty"));
    }

    let config_file = ctx.paths.config_file();
    // Re-read the file so values from OMDB_API_KEY are not written back
    let mut config = if config_file.exists() {
        Config::load_from_file(&config_file)
            .map_err(|e| color_eyre::eyre::eyre!("Failed to load config from {}: {}", config_file.display(), e))?
    } else {
        Config::default()
    };
    config.omdb.api_key = key;
    config
        .save_to_file(&config_file)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to save config to {}: {}", config_file.display(), e))?;

    tracing::info!("Saved OMDb API key to {}", config_file.display());
    output.success(format!("API key saved ({})", config.masked_api_key()));
    Ok(())
}
