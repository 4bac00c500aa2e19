use std::io::Write;
use std::path::{Path, PathBuf};

use hashgen::pack::{compressed_name, packed_name};
use hashgen::{ExternalPacker, Mode, Packer, ResolvedConfig};

pub fn write_jar(jar_path: &Path, entries: &[(&str, &[u8])]) {
    let mut zip = zip::ZipWriter::new(std::fs::File::create(jar_path).unwrap());
    let options =
        zip::write::FileOptions::default().compression_method(zip::CompressionMethod::Deflated);
    for (name, contents) in entries {
        zip.start_file(*name, options).unwrap();
        zip.write_all(contents).unwrap();
    }
    zip.finish().unwrap();
}

pub fn config(base_dir: &Path, mode: Mode, files: &[&str]) -> ResolvedConfig {
    ResolvedConfig {
        mode,
        files: files.iter().map(|f| f.to_string()).collect(),
        base_dir: base_dir.to_owned(),
        packer: ExternalPacker::default(),
    }
}

/// Writes `.pack` and `.pack.lzma` without pack200 / lzma being installed.
pub struct CopyPacker;

impl Packer for CopyPacker {
    fn pack(&self, jar: &Path) -> anyhow::Result<PathBuf> {
        let contents = std::fs::read(jar)?;
        std::fs::write(packed_name(jar), &contents)?;
        let compressed = compressed_name(jar);
        std::fs::write(&compressed, &contents[..contents.len() / 2])?;
        Ok(compressed)
    }
}
