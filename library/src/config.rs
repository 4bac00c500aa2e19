// Resolves what a run operates on: CLI overrides win over hashgen.yaml, which
// wins over the built-in defaults.

use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::HashGenError;
use crate::file_errors::{FileOperation, IoResultExt};
use crate::pack::{ExternalPacker, ToolCommand};
use crate::yaml::YamlConfig;

pub const DEFAULT_CONFIG_FILE_NAME: &str = "hashgen.yaml";

/// Published as-is; the launcher hashes these files whole.
pub const HASH_ONLY_FILES: &[&str] = &[
    "launcher.jar",
    "client.jar",
    "lwjgl.jar.pack.lzma",
    "lwjgl_util.jar.pack.lzma",
    "jinput.jar.pack.lzma",
    "windows_natives.jar.lzma",
    "macosx_natives.jar.lzma",
    "linux_natives.jar.lzma",
    "solaris_natives.jar.lzma",
];

/// Jars that are packed to `.pack.lzma` before publishing.
pub const PACKED_FILES: &[&str] = &[
    "launcher.jar",
    "client.jar",
    "lwjgl.jar",
    "lwjgl_util.jar",
    "jinput.jar",
];

/// Which digest is published for each file. A run uses exactly one mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum Mode {
    /// SHA-1 of the file itself; nothing is packed.
    #[serde(rename = "hash")]
    HashOnly,
    /// SHA-1 of the original jar, published under its `.pack.lzma` name.
    #[serde(rename = "pack")]
    PackThenHash,
    /// SHA-1 of the jar's manifest, published under its `.pack.lzma` name.
    /// This is what the launcher compares local jars against.
    #[default]
    #[serde(rename = "manifest")]
    ManifestThenPack,
}

impl Mode {
    pub fn default_files(self) -> &'static [&'static str] {
        match self {
            Mode::HashOnly => HASH_ONLY_FILES,
            Mode::PackThenHash | Mode::ManifestThenPack => PACKED_FILES,
        }
    }

    pub fn packs(self) -> bool {
        !matches!(self, Mode::HashOnly)
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::HashOnly => write!(f, "hash"),
            Mode::PackThenHash => write!(f, "pack"),
            Mode::ManifestThenPack => write!(f, "manifest"),
        }
    }
}

/// Settings given on the command line. Empty / None means "not given".
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub mode: Option<Mode>,
    pub files: Vec<String>,
    pub base_dir: Option<PathBuf>,
    pub config_path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub mode: Mode,
    /// Processed in this order.
    pub files: Vec<String>,
    /// Directory the file names are relative to.
    pub base_dir: PathBuf,
    pub packer: ExternalPacker,
}

impl ResolvedConfig {
    /// Merges without validating the file list.
    fn merge(yaml: YamlConfig, overrides: Overrides) -> Self {
        let mode = overrides.mode.or(yaml.mode).unwrap_or_default();
        let files = if !overrides.files.is_empty() {
            overrides.files
        } else if let Some(files) = yaml.files {
            files
        } else {
            mode.default_files().iter().map(|f| f.to_string()).collect()
        };

        let packer = ExternalPacker {
            repacker: yaml.repacker.unwrap_or_else(ToolCommand::default_repacker),
            compressor: yaml
                .compressor
                .unwrap_or_else(ToolCommand::default_compressor),
        };

        Self {
            mode,
            files,
            base_dir: overrides.base_dir.unwrap_or_else(|| PathBuf::from(".")),
            packer,
        }
    }

    fn check_files(&self) -> anyhow::Result<()> {
        if self.files.is_empty() {
            anyhow::bail!(HashGenError::InvalidConfig(
                "the file list is empty".to_string()
            ));
        }
        if let Some(blank) = self.files.iter().find(|f| f.trim().is_empty()) {
            anyhow::bail!(HashGenError::InvalidConfig(format!(
                "blank file name {:?}",
                blank
            )));
        }
        Ok(())
    }

    pub fn resolve(yaml: YamlConfig, overrides: Overrides) -> anyhow::Result<Self> {
        let config = Self::merge(yaml, overrides);
        config.check_files()?;
        Ok(config)
    }

    fn load_yaml_for(overrides: &Overrides) -> anyhow::Result<YamlConfig> {
        let base_dir = overrides
            .base_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        load_yaml(overrides.config_path.as_deref(), &base_dir)
    }

    /// Reads the YAML config (if any) and merges it with `overrides`.
    pub fn load(overrides: Overrides) -> anyhow::Result<Self> {
        let yaml = Self::load_yaml_for(&overrides)?;
        Self::resolve(yaml, overrides)
    }

    /// Like [ResolvedConfig::load], for checking an existing index. The file
    /// list comes from the index there, so an empty configured list is fine.
    pub fn load_for_verify(overrides: Overrides) -> anyhow::Result<Self> {
        let yaml = Self::load_yaml_for(&overrides)?;
        Ok(Self::merge(yaml, overrides))
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.base_dir.join(name)
    }
}

/// An explicitly named config file must exist; the default one is optional.
pub fn load_yaml(explicit: Option<&Path>, base_dir: &Path) -> anyhow::Result<YamlConfig> {
    let path = match explicit {
        Some(path) => path.to_owned(),
        None => {
            let default_path = base_dir.join(DEFAULT_CONFIG_FILE_NAME);
            if !default_path.is_file() {
                hashgen_debug!("No {} found, using defaults", default_path.display());
                return Ok(YamlConfig::default());
            }
            default_path
        }
    };

    hashgen_info!("Reading config from {}", path.display());
    let text = std::fs::read_to_string(&path).with_file_context(FileOperation::ReadFile, &path)?;
    YamlConfig::from_yaml(&text).map_err(|e| {
        HashGenError::InvalidConfig(format!("{}: {}", path.display(), e)).into()
    })
}
