// Walks the configured file list and produces one index line per file.

use std::io::Write;
use std::path::Path;

use anyhow::Context;

use crate::config::{Mode, ResolvedConfig};
use crate::digest::hash_file;
use crate::file_errors::{FileOperation, IoResultExt};
use crate::index::ResultLine;
use crate::manifest::hash_manifest;
use crate::pack::{Packer, LZMA_SUFFIX, PACK_SUFFIX};

fn file_size(path: &Path) -> anyhow::Result<u64> {
    Ok(std::fs::metadata(path)
        .with_file_context(FileOperation::GetMetadata, path)?
        .len())
}

/// The digest `mode` publishes for the (unpacked) file at `path`.
fn digest_for(mode: Mode, path: &Path) -> anyhow::Result<String> {
    match mode {
        Mode::HashOnly | Mode::PackThenHash => hash_file(path),
        Mode::ManifestThenPack => hash_manifest(path),
    }
}

fn published_name(mode: Mode, name: &str) -> String {
    if mode.packs() {
        format!("{}{}{}", name, PACK_SUFFIX, LZMA_SUFFIX)
    } else {
        name.to_owned()
    }
}

/// Produces the index line for one file. The digest is always taken from
/// the unpacked input; in packing modes the name and size are those of the
/// `.pack.lzma` written next to it.
pub fn process<P: Packer + ?Sized>(
    config: &ResolvedConfig,
    packer: &P,
    name: &str,
) -> anyhow::Result<ResultLine> {
    let path = config.path_for(name);
    let digest = digest_for(config.mode, &path)?;

    let output_path = if config.mode.packs() {
        packer
            .pack(&path)
            .with_context(|| format!("Failed to pack {}", path.display()))?
    } else {
        path
    };

    let line = ResultLine {
        name: published_name(config.mode, name),
        size: file_size(&output_path)?,
        digest,
    };
    hashgen_info!("{}", line);
    Ok(line)
}

/// Processes every configured file in order, writing each line as soon as it
/// is known. The first failure aborts the run; lines already written and
/// files already packed are left as they are.
pub fn run<P, W>(config: &ResolvedConfig, packer: &P, out: &mut W) -> anyhow::Result<usize>
where
    P: Packer + ?Sized,
    W: Write,
{
    hashgen_debug!(
        "Processing {} files in {} mode",
        config.files.len(),
        config.mode
    );
    for name in &config.files {
        let line = match process(config, packer, name) {
            Ok(line) => line,
            Err(e) => {
                hashgen_error!("Failed to process {}: {:#}", name, e);
                return Err(e);
            }
        };
        writeln!(out, "{}", line)?;
        out.flush()?;
    }
    Ok(config.files.len())
}

/// Outcome of comparing local files against a published index.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct VerifyReport {
    pub matched: usize,
    pub mismatched: Vec<String>,
    pub missing: Vec<String>,
}

impl VerifyReport {
    pub fn is_ok(&self) -> bool {
        self.mismatched.is_empty() && self.missing.is_empty()
    }
}

/// Maps a published name back to the local file it was generated from.
fn source_name(mode: Mode, published: &str) -> &str {
    if mode.packs() {
        published
            .strip_suffix(LZMA_SUFFIX)
            .and_then(|n| n.strip_suffix(PACK_SUFFIX))
            .unwrap_or(published)
    } else {
        published
    }
}

/// Checks local files against `index` the way the launcher decides whether a
/// download is needed. Nothing is packed.
pub fn verify<W: Write>(
    config: &ResolvedConfig,
    index: &[ResultLine],
    out: &mut W,
) -> anyhow::Result<VerifyReport> {
    let mut report = VerifyReport::default();
    for entry in index {
        let path = config.path_for(source_name(config.mode, &entry.name));
        if !path.exists() {
            writeln!(out, "{}: MISSING", entry.name)?;
            report.missing.push(entry.name.clone());
            continue;
        }
        match digest_for(config.mode, &path) {
            Ok(local) if local.eq_ignore_ascii_case(&entry.digest) => {
                writeln!(out, "{}: OK", entry.name)?;
                report.matched += 1;
            }
            Ok(local) => {
                writeln!(
                    out,
                    "{}: MISMATCH ({} vs {})",
                    entry.name, local, entry.digest
                )?;
                report.mismatched.push(entry.name.clone());
            }
            // The launcher re-downloads anything it cannot hash.
            Err(e) => {
                hashgen_warn!("Could not hash {}: {:#}", path.display(), e);
                writeln!(out, "{}: UNREADABLE ({:#})", entry.name, e)?;
                report.mismatched.push(entry.name.clone());
            }
        }
    }
    Ok(report)
}
