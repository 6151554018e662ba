//! Config command handler
//!
//! Reads and edits the on-disk configuration. Runtime CLI overrides never reach
//! this handler, so `set` and `unset` persist exactly what the user asked for.

use crate::args::ConfigSubcommand;
use edu_catalog::config::Config;
use edu_catalog::{error, info, warn};
use std::fmt::Write as _;
use std::io::{self, Write};
use std::path::Path;

/// Config keys grouped by the TOML section they live in
const SECTIONS: [(&str, &[&str]); 4] = [
    ("logging", &["level", "file", "verbose"]),
    (
        "paths",
        &["curriculum_file", "base_courses_file", "exports_dir", "reports_dir"],
    ),
    (
        "catalog",
        &["language", "match_language", "id_base", "placeholder_content"],
    ),
    ("assistant", &["api_key", "model", "temperature"]),
];

const SECRET_KEYS: [&str; 1] = ["api_key"];

/// Dispatch config subcommands
pub fn run(
    subcommand: Option<ConfigSubcommand>,
    config: &mut Config,
    defaults: &Config,
) -> Result<(), String> {
    match subcommand {
        None | Some(ConfigSubcommand::Get { key: None }) => {
            show_all(config);
            Ok(())
        }
        Some(ConfigSubcommand::Get { key: Some(key) }) => show_key(config, &key),
        Some(ConfigSubcommand::Set { key, value }) => set_key(config, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => unset_key(config, defaults, &key),
        Some(ConfigSubcommand::Reset) => reset(),
    }
}

fn show_all(config: &Config) {
    println!(
        "\n=== Catalog configuration ({}) ===\n",
        Config::get_config_file_path().display()
    );
    print!("{config}");
}

fn show_key(config: &Config, key: &str) -> Result<(), String> {
    let value = config.get(key).ok_or_else(|| unknown_key_message(key))?;
    if is_secret(key) {
        println!("{}", mask(&value));
    } else {
        println!("{value}");
    }
    Ok(())
}

fn set_key(config: &mut Config, key: &str, value: &str) -> Result<(), String> {
    config.set(key, value).map_err(|e| {
        error!("config set {key} failed: {e}");
        if config.get(key).is_none() {
            unknown_key_message(key)
        } else {
            format!("✗ {e}")
        }
    })?;

    if matches!(bare_key(key).as_str(), "curriculum_file" | "base_courses_file")
        && !value.is_empty()
        && !Path::new(value).exists()
    {
        warn!("{key} points to a missing file: {value}");
    }

    save(config)?;
    info!("Config {key} updated");

    let shown = if is_secret(key) { mask(value) } else { value.to_string() };
    println!("✓ [{}] {} = {shown}", section_of(key).unwrap_or("?"), bare_key(key));
    Ok(())
}

fn unset_key(config: &mut Config, defaults: &Config, key: &str) -> Result<(), String> {
    config.unset(key, defaults).map_err(|e| {
        error!("config unset {key} failed: {e}");
        unknown_key_message(key)
    })?;
    save(config)?;

    let restored = config.get(key).unwrap_or_default();
    let shown = if is_secret(key) { mask(&restored) } else { restored };
    println!("✓ Restored {} to its default: {shown:?}", bare_key(key));
    Ok(())
}

fn reset() -> Result<(), String> {
    let path = Config::get_config_file_path();
    if !path.exists() {
        println!("✓ Config is already at defaults");
        return Ok(());
    }

    print!("Delete {} and return to defaults? (y/n): ", path.display());
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();
    let response = response.trim();

    if response.eq_ignore_ascii_case("y") || response.eq_ignore_ascii_case("yes") {
        Config::reset().map_err(|e| format!("✗ Failed to remove {}: {e}", path.display()))?;
        info!("Config file removed: {}", path.display());
        println!("✓ Config reset to defaults");
    } else {
        println!("✗ Reset cancelled");
    }
    Ok(())
}

fn save(config: &Config) -> Result<(), String> {
    config.save().map_err(|e| {
        error!("Failed to save config: {e}");
        format!(
            "✗ Failed to save {}: {e}",
            Config::get_config_file_path().display()
        )
    })
}

/// Field name without a `section.` prefix, dashes as underscores
fn bare_key(key: &str) -> String {
    key.rsplit('.').next().unwrap_or(key).replace('-', "_")
}

fn section_of(key: &str) -> Option<&'static str> {
    let key = bare_key(key);
    SECTIONS
        .iter()
        .find(|(_, keys)| keys.contains(&key.as_str()))
        .map(|(section, _)| *section)
}

fn is_secret(key: &str) -> bool {
    SECRET_KEYS.contains(&bare_key(key).as_str())
}

fn mask(value: &str) -> String {
    if value.is_empty() {
        String::new()
    } else {
        "********".to_string()
    }
}

/// Error text for an unrecognized key, listing the valid keys per section
fn unknown_key_message(key: &str) -> String {
    let mut message = format!("✗ Unknown config key: '{key}'. Known keys:");
    for (section, keys) in SECTIONS {
        let _ = write!(message, "\n  [{section}] {}", keys.join(", "));
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use edu_catalog::config::KEYS;

    #[test]
    fn test_sections_cover_every_key() {
        let grouped: Vec<&str> = SECTIONS.iter().flat_map(|(_, keys)| keys.iter().copied()).collect();
        assert_eq!(grouped.len(), KEYS.len());
        for key in KEYS {
            assert!(section_of(key).is_some(), "key '{key}' has no section");
        }
    }

    #[test]
    fn test_section_of_accepts_prefixed_and_dashed_keys() {
        assert_eq!(section_of("id-base"), Some("catalog"));
        assert_eq!(section_of("catalog.match_language"), Some("catalog"));
        assert_eq!(section_of("reports_dir"), Some("paths"));
        assert_eq!(section_of("colour"), None);
    }

    #[test]
    fn test_unknown_key_message_names_sections() {
        let message = unknown_key_message("idbase");
        assert!(message.starts_with("✗ Unknown config key: 'idbase'"));
        assert!(message.contains("[catalog] language, match_language, id_base, placeholder_content"));
        assert!(message.contains("[assistant] api_key, model, temperature"));
    }

    #[test]
    fn test_secrets_are_masked() {
        assert!(is_secret("assistant.api-key"));
        assert!(!is_secret("model"));
        assert_eq!(mask("sk-123"), "********");
        assert_eq!(mask(""), "");
    }

    #[test]
    fn test_show_key_rejects_unknown_key() {
        let config = Config::from_defaults();
        let err = show_key(&config, "nope").expect_err("unknown key should fail");
        assert!(err.contains("[paths]"));
        assert!(show_key(&config, "level").is_ok());
    }
}
