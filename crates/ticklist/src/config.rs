use serde::{Deserialize, Serialize};

pub const DEFAULT_STORAGE_KEY: &str = "todos";
pub const DEFAULT_TICK_INTERVAL_MS: u32 = 1000;
pub const DEFAULT_INPUT_PLACEHOLDER: &str = "What needs to be done?";

/// How `Event::Add` treats the submitted text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddPolicy {
    /// Use the text verbatim, empty titles included.
    #[default]
    AsGiven,
    /// Trim the text and ignore submissions that end up empty.
    TrimNonEmpty,
}

/// Which key the delete control of a rendered item is bound to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeleteBy {
    /// `Event::Remove(id)`, removes exactly one item.
    #[default]
    Id,
    /// `Event::Delete(created_at)`, removes every item created in the same millisecond.
    CreatedAt,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Local storage key holding the persisted list.
    pub storage_key: String,
    pub tick_interval_ms: u32,
    pub add_policy: AddPolicy,
    pub delete_by: DeleteBy,
    /// Render a delete control next to every item.
    pub show_delete: bool,
    pub input_placeholder: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            add_policy: AddPolicy::default(),
            delete_by: DeleteBy::default(),
            show_delete: true,
            input_placeholder: DEFAULT_INPUT_PLACEHOLDER.to_owned(),
        }
    }
}

impl Config {
    /// Parse a config from JSON, filling unspecified fields with defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = Config::from_json(r#"{"storage_key": "my-todos", "add_policy": "trim_non_empty"}"#)
            .unwrap();
        assert_eq!(config.storage_key, "my-todos");
        assert_eq!(config.add_policy, AddPolicy::TrimNonEmpty);
        assert_eq!(config.tick_interval_ms, DEFAULT_TICK_INTERVAL_MS);
        assert!(config.show_delete);
    }

    #[test]
    fn unknown_policy_is_rejected() {
        assert!(Config::from_json(r#"{"delete_by": "title"}"#).is_err());
    }
}
