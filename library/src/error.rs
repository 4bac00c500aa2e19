use std::fmt::{Display, Formatter};
use std::path::PathBuf;

#[derive(Debug, PartialEq)]
pub enum HashGenError {
    /// The archive has no META-INF/MANIFEST.MF entry.
    MissingManifest(PathBuf),
    /// An external tool could not be started or exited non-zero.
    ToolFailed {
        tool: String,
        status: Option<i32>,
        stderr: String,
    },
    /// A tool reported success but did not leave its output behind.
    MissingToolOutput { tool: String, path: PathBuf },
    InvalidConfig(String),
    MalformedIndexLine(String),
}

impl std::error::Error for HashGenError {}

impl Display for HashGenError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            HashGenError::MissingManifest(path) => {
                write!(f, "No META-INF/MANIFEST.MF in {}", path.display())
            }
            HashGenError::ToolFailed {
                tool,
                status,
                stderr,
            } => {
                match status {
                    Some(code) => write!(f, "{} exited with status {}", tool, code)?,
                    None => write!(f, "{} was terminated by a signal", tool)?,
                }
                if !stderr.is_empty() {
                    write!(f, ": {}", stderr.trim_end())?;
                }
                Ok(())
            }
            HashGenError::MissingToolOutput { tool, path } => {
                write!(f, "{} did not produce {}", tool, path.display())
            }
            HashGenError::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
            HashGenError::MalformedIndexLine(line) => {
                write!(f, "Malformed index line: {:?}", line)
            }
        }
    }
}
