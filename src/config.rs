//! Project configuration: `.uicrc.json` loading, validation, and defaults.
//!
//! Mirrors the teacher crate's `.glotrc.json` convention: walk upward from a
//! start directory looking for the config file, stop at a `.git` boundary,
//! fall back to built-in defaults when nothing is found.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".uicrc.json";

pub const DEFAULT_EXCLUDES: &[&str] = &[
    "node_modules/**",
    "dist/**",
    "build/**",
    ".next/**",
    "coverage/**",
    "**/__tests__/**",
    "**/*.test.tsx",
    "**/*.test.jsx",
    "**/*.spec.tsx",
    "**/*.spec.jsx",
    "**/*.stories.tsx",
    "**/*.stories.jsx",
    "vitest.setup.tsx",
    "vitest.setup.jsx",
    "jest.setup.tsx",
    "jest.setup.jsx",
];

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_includes")]
    pub includes: Vec<String>,
    #[serde(default)]
    pub excludes: Vec<String>,
    #[serde(default = "default_framework")]
    pub framework: String,
    /// Custom JSX component name -> native interactive type.
    #[serde(default)]
    pub component_map: HashMap<String, String>,
    /// Directory recursion bound; `None` means unbounded.
    #[serde(default)]
    pub max_depth: Option<usize>,
}

fn default_includes() -> Vec<String> {
    vec!["**/*.tsx".to_string(), "**/*.jsx".to_string()]
}

fn default_framework() -> String {
    "app-router".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            includes: default_includes(),
            excludes: Vec::new(),
            framework: default_framework(),
            component_map: HashMap::new(),
            max_depth: None,
        }
    }
}

impl Config {
    /// All excludes in effect: caller-supplied excludes unioned with the
    /// built-in defaults.
    pub fn effective_excludes(&self) -> Vec<String> {
        let mut all: Vec<String> = DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect();
        for pattern in &self.excludes {
            if !all.contains(pattern) {
                all.push(pattern.clone());
            }
        }
        all
    }

    /// Validate every glob pattern eagerly, the way the teacher validates
    /// `ignores`/`includes` in `Config::validate`.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.excludes {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'excludes': \"{pattern}\""))?;
        }
        for pattern in &self.includes {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'includes': \"{pattern}\""))?;
        }
        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    serde_json::to_string_pretty(&Config::default()).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();
    loop {
        let candidate = current.join(CONFIG_FILE_NAME);
        if candidate.exists() {
            return Some(candidate);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

pub struct ConfigLoadResult {
    pub config: Config,
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {path:?}"))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {path:?}"))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
