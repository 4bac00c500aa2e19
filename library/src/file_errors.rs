// Adds context to failed file operations: which operation, on which path,
// and a hint for the common causes when running the generator by hand.

use std::io::ErrorKind;
use std::path::Path;

/// Describes the type of file operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOperation {
    OpenFile,
    ReadFile,
    OpenArchive,
    GetMetadata,
}

impl std::fmt::Display for FileOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileOperation::OpenFile => write!(f, "open file"),
            FileOperation::ReadFile => write!(f, "read file"),
            FileOperation::OpenArchive => write!(f, "open archive"),
            FileOperation::GetMetadata => write!(f, "get file metadata"),
        }
    }
}

/// Builds the message for a failed file operation on `path`, with a
/// "Possible cause" line when the error kind suggests one.
pub fn describe_io_error(error: &std::io::Error, operation: FileOperation, path: &Path) -> String {
    let base_message = format!("Failed to {} '{}': {}", operation, path.display(), error);

    match hint_for(error, operation) {
        Some(hint) => format!("{}\nPossible cause: {}", base_message, hint),
        None => base_message,
    }
}

fn hint_for(error: &std::io::Error, operation: FileOperation) -> Option<&'static str> {
    match error.kind() {
        ErrorKind::NotFound => Some(
            "Files are looked up relative to the working directory \
            (or the directory given with --dir).",
        ),
        ErrorKind::PermissionDenied => Some(match operation {
            FileOperation::GetMetadata => "The directory containing this file is not readable",
            _ => "The file is not readable by the current user",
        }),
        ErrorKind::InvalidData if operation == FileOperation::OpenArchive => {
            Some("The file is not a valid .jar (zip) archive.")
        }
        _ => None,
    }
}

/// A trait extension for adding file context to IO Results.
pub trait IoResultExt<T> {
    fn with_file_context(self, operation: FileOperation, path: &Path) -> anyhow::Result<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_file_context(self, operation: FileOperation, path: &Path) -> anyhow::Result<T> {
        self.map_err(|e| {
            let message = describe_io_error(&e, operation, path);
            anyhow::Error::new(e).context(message)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn not_found_mentions_lookup_directory() {
        let error = Error::new(ErrorKind::NotFound, "No such file or directory");
        let path = Path::new("client.jar");
        let message = describe_io_error(&error, FileOperation::OpenFile, path);

        assert!(message.contains("Failed to open file 'client.jar'"));
        assert!(message.contains("--dir"));
    }

    #[test]
    fn permission_denied_has_hint() {
        let error = Error::new(ErrorKind::PermissionDenied, "Permission denied");
        let path = Path::new("/srv/dist/launcher.jar");
        let message = describe_io_error(&error, FileOperation::ReadFile, path);

        assert!(message.contains("Failed to read file"));
        assert!(message.contains("Possible cause: The file is not readable"));
    }

    #[test]
    fn other_errors_have_no_hint() {
        let error = Error::new(ErrorKind::Interrupted, "interrupted");
        let message = describe_io_error(&error, FileOperation::ReadFile, Path::new("a.jar"));

        assert!(!message.contains("Possible cause"));
    }

    #[test]
    fn context_is_attached_to_error_chain() {
        let result: std::io::Result<()> = Err(Error::new(ErrorKind::NotFound, "gone"));
        let err = result
            .with_file_context(FileOperation::GetMetadata, Path::new("a.jar"))
            .unwrap_err();

        assert!(err.to_string().starts_with("Failed to get file metadata 'a.jar'"));
        assert_eq!(
            err.downcast_ref::<std::io::Error>().map(|e| e.kind()),
            Some(ErrorKind::NotFound)
        );
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(format!("{}", FileOperation::OpenArchive), "open archive");
        assert_eq!(format!("{}", FileOperation::GetMetadata), "get file metadata");
    }
}
