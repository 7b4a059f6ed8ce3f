use crate::error::{PhonebookError, Result};
use crate::store::DuplicatePolicy;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PROMPT: &str = "Enter a command: ";
const DEFAULT_GREETING: &str = "Welcome to the assistant bot!";

/// Session settings, read from `config.json`. Contacts themselves are never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhonebookConfig {
    /// What `add` does when the name already exists
    #[serde(default)]
    pub on_duplicate: DuplicatePolicy,

    /// Printed before every input line
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Printed once when the session starts
    #[serde(default = "default_greeting")]
    pub greeting: String,
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

fn default_greeting() -> String {
    DEFAULT_GREETING.to_string()
}

impl Default for PhonebookConfig {
    fn default() -> Self {
        Self {
            on_duplicate: DuplicatePolicy::default(),
            prompt: default_prompt(),
            greeting: default_greeting(),
        }
    }
}

impl PhonebookConfig {
    /// The per-user config file, if the platform has a config directory.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "phonebook", "phonebook")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
    }

    /// Load config from `path`, or return defaults if the file does not exist
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: PhonebookConfig = serde_json::from_str(&content)?;
        if config.prompt.contains('\n') {
            return Err(PhonebookError::Config(format!(
                "prompt in {} must be a single line",
                path.display()
            )));
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = PhonebookConfig::default();
        assert_eq!(config.on_duplicate, DuplicatePolicy::Overwrite);
        assert_eq!(config.prompt, "Enter a command: ");
        assert_eq!(config.greeting, "Welcome to the assistant bot!");
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let config = PhonebookConfig::load(temp.path().join(CONFIG_FILENAME)).unwrap();
        assert_eq!(config, PhonebookConfig::default());
    }

    #[test]
    fn test_load_full_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        fs::write(
            &path,
            r#"{ "on_duplicate": "reject", "prompt": "> ", "greeting": "Hi" }"#,
        )
        .unwrap();

        let loaded = PhonebookConfig::load(&path).unwrap();
        assert_eq!(
            loaded,
            PhonebookConfig {
                on_duplicate: DuplicatePolicy::Reject,
                prompt: "> ".to_string(),
                greeting: "Hi".to_string(),
            }
        );
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        fs::write(&path, r#"{ "on_duplicate": "reject" }"#).unwrap();

        let loaded = PhonebookConfig::load(&path).unwrap();
        assert_eq!(loaded.on_duplicate, DuplicatePolicy::Reject);
        assert_eq!(loaded.prompt, "Enter a command: ");
    }

    #[test]
    fn test_malformed_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        fs::write(&path, r#"{ "on_duplicate": "merge" }"#).unwrap();

        assert!(matches!(
            PhonebookConfig::load(&path),
            Err(PhonebookError::Serialization(_))
        ));
    }

    #[test]
    fn test_multiline_prompt_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        fs::write(&path, r#"{ "prompt": "a\nb" }"#).unwrap();

        assert!(matches!(
            PhonebookConfig::load(&path),
            Err(PhonebookError::Config(_))
        ));
    }
}
