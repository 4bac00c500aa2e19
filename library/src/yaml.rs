use serde::Deserialize;

use crate::config::Mode;
use crate::pack::ToolCommand;

/// Contents of `hashgen.yaml`. Every key is optional; anything left out
/// falls back to the built-in defaults.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct YamlConfig {
    pub mode: Option<Mode>,
    pub files: Option<Vec<String>>,
    pub repacker: Option<ToolCommand>,
    pub compressor: Option<ToolCommand>,
}

impl YamlConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        // An empty (or comment-only) document parses as null, not as an empty map.
        if yaml.lines().all(|l| l.trim().is_empty() || l.trim_start().starts_with('#')) {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
    }
}
