/// Helper methods for tests.
use std::cell::RefCell;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::{Mode, ResolvedConfig};
use crate::pack::{compressed_name, packed_name, ExternalPacker, Packer};

/// Writes a .jar at `jar_path` holding `entries` (name, contents), stored
/// uncompressed.
pub fn write_fake_jar(jar_path: &Path, entries: &[(&str, &[u8])]) {
    let mut zip = zip::ZipWriter::new(std::fs::File::create(jar_path).unwrap());
    let options =
        zip::write::FileOptions::default().compression_method(zip::CompressionMethod::Stored);
    for (name, contents) in entries {
        zip.start_file(*name, options).unwrap();
        zip.write_all(contents).unwrap();
    }
    zip.finish().unwrap();
}

pub fn config_for(base_dir: &Path, mode: Mode, files: &[&str]) -> ResolvedConfig {
    ResolvedConfig {
        mode,
        files: files.iter().map(|f| f.to_string()).collect(),
        base_dir: base_dir.to_owned(),
        packer: ExternalPacker::default(),
    }
}

/// Packs without external tools: `.pack` is a copy of the jar and
/// `.pack.lzma` is the copy with a short header, so its size differs from
/// the input.
#[derive(Default)]
pub struct FakePacker {
    pub packed: RefCell<Vec<PathBuf>>,
}

impl Packer for FakePacker {
    fn pack(&self, jar: &Path) -> anyhow::Result<PathBuf> {
        let contents = std::fs::read(jar)?;
        std::fs::write(packed_name(jar), &contents)?;
        let compressed = compressed_name(jar);
        let mut lzma = b"fake-lzma:".to_vec();
        lzma.extend_from_slice(&contents);
        std::fs::write(&compressed, lzma)?;
        self.packed.borrow_mut().push(jar.to_owned());
        Ok(compressed)
    }
}
