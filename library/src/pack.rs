use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::Context;
use serde::Deserialize;

use crate::error::HashGenError;

pub const PACK_SUFFIX: &str = ".pack";
pub const LZMA_SUFFIX: &str = ".lzma";

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}

/// `client.jar` -> `client.jar.pack`
pub fn packed_name(path: &Path) -> PathBuf {
    with_suffix(path, PACK_SUFFIX)
}

/// `client.jar` -> `client.jar.pack.lzma`
pub fn compressed_name(path: &Path) -> PathBuf {
    with_suffix(&packed_name(path), LZMA_SUFFIX)
}

/// Turns a .jar into the `.pack.lzma` artifact that gets published.
#[cfg_attr(test, mockall::automock)]
pub trait Packer {
    /// Packs `jar` and returns the path of the `.pack.lzma` file it produced.
    fn pack(&self, jar: &Path) -> anyhow::Result<PathBuf>;
}

/// One external program plus the arguments that always precede the file
/// arguments.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolCommand {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl ToolCommand {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_owned(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// `pack200 --no-gzip <out>.pack <in>.jar`
    pub fn default_repacker() -> Self {
        Self::new("pack200", &["--no-gzip"])
    }

    /// `lzma -z -k -f <in>.pack`, keeping the `.pack` next to the `.pack.lzma`.
    pub fn default_compressor() -> Self {
        Self::new("lzma", &["-z", "-k", "-f"])
    }

    /// Runs the tool with `files` appended and waits for it. Files are passed
    /// as separate arguments, never through a shell.
    fn run(&self, files: &[&Path]) -> anyhow::Result<()> {
        hashgen_debug!("Running {} {:?} {:?}", self.program, self.args, files);
        let output = Command::new(&self.program)
            .args(&self.args)
            .args(files)
            .output()
            .with_context(|| format!("Failed to execute {}", self.program))?;

        if !output.status.success() {
            return Err(HashGenError::ToolFailed {
                tool: self.program.clone(),
                status: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            }
            .into());
        }
        Ok(())
    }
}

/// Packs by shelling out to a Java-archive repacker followed by an LZMA
/// compressor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalPacker {
    pub repacker: ToolCommand,
    pub compressor: ToolCommand,
}

impl Default for ExternalPacker {
    fn default() -> Self {
        Self {
            repacker: ToolCommand::default_repacker(),
            compressor: ToolCommand::default_compressor(),
        }
    }
}

fn expect_output(tool: &ToolCommand, path: &Path) -> anyhow::Result<()> {
    if !path.is_file() {
        return Err(HashGenError::MissingToolOutput {
            tool: tool.program.clone(),
            path: path.to_owned(),
        }
        .into());
    }
    Ok(())
}

impl Packer for ExternalPacker {
    fn pack(&self, jar: &Path) -> anyhow::Result<PathBuf> {
        let packed = packed_name(jar);
        let compressed = compressed_name(jar);

        hashgen_info!("Packing {}", jar.display());
        self.repacker.run(&[packed.as_path(), jar])?;
        expect_output(&self.repacker, &packed)?;

        self.compressor.run(&[packed.as_path()])?;
        expect_output(&self.compressor, &compressed)?;

        Ok(compressed)
    }
}
