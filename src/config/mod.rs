mod schema;

pub use schema::{Config, SearchConfig, ThemeMode};

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Get the config directory path (~/.config/gh-prs/)
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("gh-prs"))
}

/// Get the default config file path (~/.config/gh-prs/config.yaml)
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// With an explicit `path` the file must exist. Without one, the default
/// location is tried and a missing file simply yields the defaults.
///
/// # Errors
///
/// Returns an error if:
/// - An explicit config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found at {}", path.display());
            }
            read_config(&path)
        }
        None => match get_config_path() {
            Some(path) if path.exists() => read_config(&path),
            _ => Ok(Config::default()),
        },
    }
}

fn read_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;
    parse_config(&content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", path.display()))
}

/// Parse config from YAML text. An empty document means all defaults.
pub fn parse_config(content: &str) -> Result<Config> {
    if content.trim().is_empty() {
        return Ok(Config::default());
    }
    let config: Config = serde_saphyr::from_str(content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_parse_full_config() {
        let yaml = "org: acme\ninclude_drafts: true\nlimit: 30\ntheme: light\n";
        let config = parse_config(yaml).unwrap();
        assert_eq!(config.org.as_deref(), Some("acme"));
        assert!(config.include_drafts);
        assert_eq!(config.limit, 30);
        assert_eq!(config.theme, ThemeMode::Light);
    }

    #[test]
    fn test_parse_partial_config_uses_defaults() {
        let config = parse_config("org: acme\n").unwrap();
        assert!(!config.include_drafts);
        assert_eq!(config.limit, 100);
        assert_eq!(config.theme, ThemeMode::Auto);
    }

    #[test]
    fn test_parse_empty_config() {
        assert_eq!(parse_config("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_invalid_theme_fails() {
        assert!(parse_config("theme: neon\n").is_err());
    }

    #[test]
    fn test_load_explicit_missing_file_fails() {
        let path = env::temp_dir().join("gh_prs_test_missing_config.yaml");
        let _ = std::fs::remove_file(&path);
        let err = load_config(Some(path)).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_load_explicit_file() {
        let path = env::temp_dir().join("gh_prs_test_load_config.yaml");
        std::fs::write(&path, "org: widgets\n").unwrap();

        let config = load_config(Some(path.clone())).unwrap();
        assert_eq!(config.org.as_deref(), Some("widgets"));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_search_config_flags_override_file() {
        let config = Config {
            org: Some("from-file".to_string()),
            ..Config::default()
        };
        let search = SearchConfig::from_parts(&config, Some("from-flag".to_string()), true, true);
        assert_eq!(search.org.as_deref(), Some("from-flag"));
        assert!(search.include_drafts);
        assert!(search.verbose);
    }

    #[test]
    fn test_search_config_blank_org_is_unset() {
        let search = SearchConfig::from_parts(&Config::default(), Some("  ".to_string()), false, false);
        assert_eq!(search.org, None);
    }

    #[test]
    fn test_search_config_falls_back_to_file() {
        let config = Config {
            org: Some("acme".to_string()),
            include_drafts: true,
            ..Config::default()
        };
        let search = SearchConfig::from_parts(&config, None, false, false);
        assert_eq!(search.org.as_deref(), Some("acme"));
        assert!(search.include_drafts);
    }
}
