// Digest of the manifest entry inside a .jar. The launcher compares this
// against the index instead of hashing the whole archive, so re-packing a jar
// (which changes its bytes but not its manifest) does not force a download.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use anyhow::Context;
use zip::result::ZipError;
use zip::ZipArchive;

use crate::digest::hash_reader;
use crate::error::HashGenError;
use crate::file_errors::{describe_io_error, FileOperation, IoResultExt};

pub const MANIFEST_PATH: &str = "META-INF/MANIFEST.MF";

/// At most this many bytes of the manifest are hashed.
pub const MANIFEST_READ_LIMIT: u64 = 64 * 1024;

fn open_archive(jar_path: &Path) -> anyhow::Result<ZipArchive<File>> {
    let file = File::open(jar_path).with_file_context(FileOperation::OpenFile, jar_path)?;
    ZipArchive::new(file).map_err(|e| match e {
        ZipError::Io(io_error) => {
            let message = describe_io_error(&io_error, FileOperation::OpenArchive, jar_path);
            anyhow::Error::new(io_error).context(message)
        }
        other => anyhow::Error::new(other)
            .context(format!("Failed to open archive '{}'", jar_path.display())),
    })
}

/// Reads every entry through to its end. The zip reader checks each entry's
/// CRC once it is fully consumed, so a damaged jar fails here instead of
/// being published.
fn check_entries(archive: &mut ZipArchive<File>, jar_path: &Path) -> anyhow::Result<()> {
    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .with_context(|| format!("Failed to open entry {} in {}", i, jar_path.display()))?;
        let name = entry.name().to_owned();
        io::copy(&mut entry, &mut io::sink())
            .with_context(|| format!("Corrupt entry {} in {}", name, jar_path.display()))?;
    }
    hashgen_debug!("{} entries ok in {}", archive.len(), jar_path.display());
    Ok(())
}

/// SHA-1 of the first [MANIFEST_READ_LIMIT] bytes of `META-INF/MANIFEST.MF`
/// inside the archive at `jar_path`.
pub fn hash_manifest(jar_path: &Path) -> anyhow::Result<String> {
    let mut archive = open_archive(jar_path)?;
    check_entries(&mut archive, jar_path)?;

    let entry = match archive.by_name(MANIFEST_PATH) {
        Ok(entry) => entry,
        Err(ZipError::FileNotFound) => {
            return Err(HashGenError::MissingManifest(jar_path.to_owned()).into())
        }
        Err(e) => {
            return Err(anyhow::Error::new(e).context(format!(
                "Failed to open {} in {}",
                MANIFEST_PATH,
                jar_path.display()
            )))
        }
    };
    let digest = hash_reader(&mut entry.take(MANIFEST_READ_LIMIT))
        .with_context(|| format!("Failed to read {} in {}", MANIFEST_PATH, jar_path.display()))?;
    hashgen_debug!("manifest sha1({}) = {}", jar_path.display(), digest);
    Ok(digest)
}
