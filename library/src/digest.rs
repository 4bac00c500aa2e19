use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use sha1::{Digest, Sha1}; // Digest is needed for Sha1::new();

use crate::file_errors::{FileOperation, IoResultExt};

/// Size of the buffer files are streamed through.
pub const BLOCK_SIZE: usize = 64 * 1024;

/// Streams `reader` through SHA-1 until end-of-stream and returns the
/// lowercase hex digest (always 40 characters).
pub fn hash_reader<R: Read>(reader: &mut R) -> std::io::Result<String> {
    let mut hasher = Sha1::new();
    let mut buffer = vec![0u8; BLOCK_SIZE];
    loop {
        let read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buffer[..read]);
    }
    Ok(hex::encode(hasher.finalize()))
}

/// SHA-1 of the whole file at `path`.
pub fn hash_file(path: &Path) -> anyhow::Result<String> {
    let mut file = File::open(path).with_file_context(FileOperation::OpenFile, path)?;
    let digest = hash_reader(&mut file).with_file_context(FileOperation::ReadFile, path)?;
    hashgen_debug!("sha1({}) = {}", path.display(), digest);
    Ok(digest)
}
