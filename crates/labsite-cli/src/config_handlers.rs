//! Handlers for the `config` subcommands.
//!
//! `path`, `get`, `set` and `init` operate on `labsite.toml`. The dotted-key
//! helpers address nested tables such as `roster.headings.pi`.

use std::path::PathBuf;

use labsite_core::{Error, Result};

use crate::cli::ConfigAction;
use crate::config::SiteConfig;

// ============================================================================
// Command dispatch
// ============================================================================

/// Handle a config subcommand.
pub fn handle_config_command(config_path: Option<&str>, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Path => cmd_config_path(config_path),
        ConfigAction::Get { key } => {
            println!("{}", cmd_config_get(config_path, &key)?);
            Ok(())
        }
        ConfigAction::Set { key, value } => cmd_config_set(config_path, &key, &value),
        ConfigAction::Init { file, force } => {
            let target = file.as_deref().or(config_path);
            cmd_config_init(target, force)
        }
    }
}

// ============================================================================
// Command handlers
// ============================================================================

/// Show the resolved config file path.
pub fn cmd_config_path(config_path: Option<&str>) -> Result<()> {
    let path = SiteConfig::resolve_config_path(config_path);
    println!("{}", path.display());
    if !path.exists() {
        eprintln!(
            "(file does not exist; run `{} config init` to create it)",
            SiteConfig::project_name()
        );
    }
    Ok(())
}

/// Look up a configuration value by dotted key.
///
/// Reads the effective configuration, so keys left at their defaults
/// resolve too.
pub fn cmd_config_get(config_path: Option<&str>, key: &str) -> Result<String> {
    let config = SiteConfig::load(config_path)?;
    let value = toml::Value::try_from(&config).map_err(|e| Error::config(e.to_string()))?;
    get_nested_value(&value, key)
        .map(format_toml_value)
        .ok_or_else(|| Error::config(format!("Key '{key}' not found in configuration")))
}

/// Set a configuration value by dotted key in the config file.
///
/// The edited file is validated before it is written back.
pub fn cmd_config_set(config_path: Option<&str>, key: &str, value: &str) -> Result<()> {
    let path = SiteConfig::resolve_config_path(config_path);
    if !path.exists() {
        return Err(Error::config(format!(
            "Config file does not exist at {}. Run `{} config init` first.",
            path.display(),
            SiteConfig::project_name()
        )));
    }

    let content = std::fs::read_to_string(&path).map_err(|e| Error::io_with_path(e, &path))?;
    let mut doc: toml::Value = toml::from_str(&content)
        .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))?;

    set_nested_value(&mut doc, key, parse_value(value))?;

    let toml_str = toml::to_string_pretty(&doc).map_err(|e| Error::config(e.to_string()))?;
    SiteConfig::from_toml_str(&toml_str)?;
    std::fs::write(&path, toml_str).map_err(|e| Error::io_with_path(e, &path))?;

    println!("Set {key} = {value} in {}", path.display());
    Ok(())
}

/// Write a default configuration file.
pub fn cmd_config_init(file: Option<&str>, force: bool) -> Result<()> {
    let path: PathBuf = SiteConfig::resolve_config_path(file);

    if path.exists() && !force {
        return Err(Error::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
    }

    let toml_str = SiteConfig::default().to_toml_string()?;
    std::fs::write(&path, &toml_str).map_err(|e| Error::io_with_path(e, &path))?;

    println!("Config file created at {}", path.display());
    Ok(())
}

// ============================================================================
// TOML dotted-key helpers
// ============================================================================

/// Navigate a dotted key path in a TOML value tree.
pub fn get_nested_value<'a>(value: &'a toml::Value, key: &str) -> Option<&'a toml::Value> {
    key.split('.')
        .try_fold(value, |current, part| current.as_table()?.get(part))
}

/// Set a value at a dotted key path, creating intermediate tables as needed.
pub fn set_nested_value(root: &mut toml::Value, key: &str, value: toml::Value) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();
    let Some((last, parents)) = parts.split_last() else {
        return Err(Error::config("Empty key path"));
    };
    if last.is_empty() {
        return Err(Error::config("Empty key path"));
    }

    let mut current = root;
    for part in parents {
        let table = current
            .as_table_mut()
            .ok_or_else(|| Error::config("Cannot navigate into a non-table value"))?;
        current = table
            .entry(part.to_string())
            .or_insert_with(|| toml::Value::Table(toml::map::Map::new()));
    }

    let table = current
        .as_table_mut()
        .ok_or_else(|| Error::config("Cannot set key on a non-table value"))?;
    table.insert(last.to_string(), value);
    Ok(())
}

/// Parse a command-line string into a TOML value.
///
/// Priority: bool, then integer, then string. Floats are not used by the
/// site config, so `1.0` stays a string.
pub fn parse_value(s: &str) -> toml::Value {
    match s {
        "true" => toml::Value::Boolean(true),
        "false" => toml::Value::Boolean(false),
        _ => match s.parse::<i64>() {
            Ok(i) => toml::Value::Integer(i),
            Err(_) => toml::Value::String(s.to_string()),
        },
    }
}

/// Format a TOML value for display on stdout.
pub fn format_toml_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Integer(i) => i.to_string(),
        toml::Value::Float(f) => f.to_string(),
        toml::Value::Boolean(b) => b.to_string(),
        toml::Value::Datetime(dt) => dt.to_string(),
        toml::Value::Array(_) | toml::Value::Table(_) => {
            toml::to_string_pretty(value).unwrap_or_else(|_| format!("{value:?}"))
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
