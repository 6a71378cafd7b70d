use serde::{Deserialize, Serialize};

fn default_limit() -> u32 {
    100
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Organization to search in; auto-detected from the current repo when unset
    #[serde(default)]
    pub org: Option<String>,
    #[serde(default)]
    pub include_drafts: bool,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub theme: ThemeMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            org: None,
            include_drafts: false,
            limit: default_limit(),
            theme: ThemeMode::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Auto,
    Dark,
    Light,
}

/// Everything the record source needs to build one query.
///
/// Assembled once from the config file and command-line flags, then passed
/// explicitly to the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub org: Option<String>,
    pub include_drafts: bool,
    pub verbose: bool,
    pub limit: u32,
}

impl SearchConfig {
    /// Merge flags over the file config. Flags win; a blank org counts as unset.
    pub fn from_parts(
        config: &Config,
        org_flag: Option<String>,
        include_drafts_flag: bool,
        verbose: bool,
    ) -> Self {
        let org = org_flag
            .or_else(|| config.org.clone())
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty());

        Self {
            org,
            include_drafts: include_drafts_flag || config.include_drafts,
            verbose,
            limit: config.limit.max(1),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::from_parts(&Config::default(), None, false, false)
    }
}
