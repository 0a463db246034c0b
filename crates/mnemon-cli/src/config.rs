//! Application configuration.
//!
//! Search order: an explicit `--config` path, `mnemon.toml` in the
//! current directory, then `~/.config/mnemon/config.toml`. No file at
//! all means defaults; CLI flags override whatever was loaded.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level mnemon configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub speech: SpeechConfig,
    #[serde(default)]
    pub summary: SummaryConfig,
}

/// How `--say` produces audio.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// Program invoked for speech; the text is appended as the last argument.
    #[serde(default = "default_speech_command")]
    pub command: String,
    /// Extra arguments placed before the text (e.g. a voice selection).
    #[serde(default)]
    pub args: Vec<String>,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            command: default_speech_command(),
            args: Vec::new(),
        }
    }
}

fn default_speech_command() -> String {
    "say".to_string()
}

/// Defaults for the words and words-summary commands.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SummaryConfig {
    /// Default output style for words-summary.
    #[serde(default)]
    pub org_mode: bool,
    /// Default nouns-only filtering.
    #[serde(default)]
    pub nouns_only: bool,
}

/// Load config from an explicit path, or search the default locations.
pub fn load(path: Option<&Path>) -> Result<AppConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("mnemon.toml");
        if local.exists() {
            Some(local)
        } else if let Some(dir) = dirs::config_dir() {
            let global = dir.join("mnemon").join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))
        }
        None => Ok(AppConfig::default()),
    }
}

/// Expand a leading `~/` against the home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = AppConfig::default();
        assert_eq!(config.speech.command, "say");
        assert!(config.speech.args.is_empty());
        assert!(!config.summary.org_mode);
        assert!(!config.summary.nouns_only);
    }

    #[test]
    fn parse_partial_config() {
        let toml_str = r#"
[speech]
command = "espeak"
args = ["-v", "en-us"]
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.speech.command, "espeak");
        assert_eq!(config.speech.args, vec!["-v", "en-us"]);
        // unspecified sections fall back to defaults
        assert!(!config.summary.org_mode);
    }

    #[test]
    fn parse_summary_defaults() {
        let toml_str = r#"
[summary]
org_mode = true
nouns_only = true
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert!(config.summary.org_mode);
        assert!(config.summary.nouns_only);
        assert_eq!(config.speech.command, "say");
    }

    #[test]
    fn load_missing_explicit_path_fails() {
        assert!(load(Some(Path::new("/no/such/mnemon.toml"))).is_err());
    }

    #[test]
    fn expand_tilde_leaves_plain_paths_alone() {
        assert_eq!(expand_tilde("/etc/passwd"), PathBuf::from("/etc/passwd"));
        assert_eq!(expand_tilde("relative.conf"), PathBuf::from("relative.conf"));
    }

    #[test]
    fn expand_tilde_uses_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~/x.conf"), home.join("x.conf"));
        }
    }
}
