use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::listing::DEFAULT_PREVIEW_LENGTH;

pub const CONFIG_FILE_NAME: &str = ".smaliresrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_public_xml")]
    pub public_xml: String,
    #[serde(default = "default_strings_xml")]
    pub strings_xml: String,
    #[serde(default = "default_smali_roots")]
    pub smali_roots: Vec<String>,
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
    #[serde(default = "default_preview_length")]
    pub preview_length: usize,
}

fn default_public_xml() -> String {
    "res/values/public.xml".to_string()
}

fn default_strings_xml() -> String {
    "res/values/strings.xml".to_string()
}

fn default_smali_roots() -> Vec<String> {
    ["smali", "smali_classes*"].map(String::from).to_vec()
}

fn default_ignores() -> Vec<String> {
    vec!["**/R.smali".to_string()]
}

fn default_preview_length() -> usize {
    DEFAULT_PREVIEW_LENGTH
}

impl Default for Config {
    fn default() -> Self {
        Self {
            public_xml: default_public_xml(),
            strings_xml: default_strings_xml(),
            smali_roots: default_smali_roots(),
            ignores: default_ignores(),
            preview_length: default_preview_length(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error for invalid glob patterns or a zero preview length.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        for pattern in &self.smali_roots {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'smaliRoots': \"{}\"", pattern)
                })?;
            }
        }

        if self.preview_length == 0 {
            bail!("'previewLength' must be greater than 0");
        }

        Ok(())
    }
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

/// Load `.smaliresrc.json` from the project root, falling back to defaults.
pub fn load_config(project_root: &Path) -> Result<ConfigLoadResult> {
    let path = project_root.join(CONFIG_FILE_NAME);
    if !path.is_file() {
        return Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        });
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;
    config.validate()?;
    Ok(ConfigLoadResult {
        config,
        from_file: true,
    })
}
