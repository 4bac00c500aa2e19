// This is a required file for rust libraries which declares what files are
// part of the library and what interfaces are public from the library.

#[macro_use]
mod logging_macros;

pub mod config;
pub mod digest;
pub mod driver;
pub mod error;
pub mod file_errors;
pub mod index;
pub mod logging;
pub mod manifest;
pub mod pack;
mod yaml;

#[cfg(test)]
mod test_utils;

pub use self::config::{Mode, Overrides, ResolvedConfig};
pub use self::driver::{process, run, verify, VerifyReport};
pub use self::error::HashGenError;
pub use self::index::{parse_index, ResultLine};
pub use self::pack::{ExternalPacker, Packer, ToolCommand};
pub use self::yaml::YamlConfig;

#[cfg(test)]
extern crate tempdir;
