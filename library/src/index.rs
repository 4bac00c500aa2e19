use std::fmt::{Display, Formatter};

use crate::error::HashGenError;

/// One line of the published index: `<name> <size> <sha1>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultLine {
    pub name: String,
    pub size: u64,
    pub digest: String,
}

impl Display for ResultLine {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.name, self.size, self.digest)
    }
}

impl ResultLine {
    /// Parses a line the way the launcher reads the index: fields are
    /// separated by single spaces and the digest is compared lowercased.
    pub fn parse(line: &str) -> Result<Self, HashGenError> {
        let malformed = || HashGenError::MalformedIndexLine(line.to_owned());
        let mut fields = line.split(' ');
        let name = fields.next().filter(|n| !n.is_empty()).ok_or_else(malformed)?;
        let size = fields
            .next()
            .and_then(|s| s.parse::<u64>().ok())
            .ok_or_else(malformed)?;
        let digest = fields.next().filter(|d| !d.is_empty()).ok_or_else(malformed)?;
        if fields.next().is_some() {
            return Err(malformed());
        }
        Ok(Self {
            name: name.to_owned(),
            size,
            digest: digest.to_lowercase(),
        })
    }
}

/// Parses every non-empty line of an index file.
pub fn parse_index(text: &str) -> Result<Vec<ResultLine>, HashGenError> {
    text.lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
        .map(ResultLine::parse)
        .collect()
}
