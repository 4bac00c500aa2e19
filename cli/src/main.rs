use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};

use hashgen::{Mode, Overrides, ResolvedConfig};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Generates the size/SHA-1 index for published client files",
    long_about = None,
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    common: CommonArgs,

    /// Files to process, in order (default: the built-in list for the mode)
    files: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare local files against a previously generated index
    Verify {
        /// Index file with `<name> <size> <sha1>` lines
        index: PathBuf,

        #[command(flatten)]
        common: CommonArgs,
    },
}

#[derive(Args, Clone, Default)]
struct CommonArgs {
    /// Which digest to publish
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// YAML config (default: hashgen.yaml in --dir, if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory the files are read from and packed into
    #[arg(long)]
    dir: Option<PathBuf>,

    /// Log more (-v info, -vv debug). Logs go to stderr.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    /// SHA-1 of each file as-is, no packing
    Hash,
    /// Pack each jar, publish the SHA-1 of the original jar
    Pack,
    /// Pack each jar, publish the SHA-1 of its META-INF/MANIFEST.MF
    Manifest,
}

impl From<ModeArg> for Mode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Hash => Mode::HashOnly,
            ModeArg::Pack => Mode::PackThenHash,
            ModeArg::Manifest => Mode::ManifestThenPack,
        }
    }
}

impl CommonArgs {
    fn overrides(&self, files: Vec<String>) -> Overrides {
        Overrides {
            mode: self.mode.map(Mode::from),
            files,
            base_dir: self.dir.clone(),
            config_path: self.config.clone(),
        }
    }
}

/// Ok(true) when everything checked out.
fn generate(common: &CommonArgs, files: Vec<String>) -> anyhow::Result<bool> {
    let config = ResolvedConfig::load(common.overrides(files))?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    hashgen::run(&config, &config.packer, &mut out)?;
    Ok(true)
}

fn verify(common: &CommonArgs, index_path: &Path) -> anyhow::Result<bool> {
    let config = ResolvedConfig::load_for_verify(common.overrides(Vec::new()))?;
    let text = std::fs::read_to_string(index_path)
        .with_context(|| format!("Failed to read index {}", index_path.display()))?;
    let index = hashgen::parse_index(&text)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let report = hashgen::verify(&config, &index, &mut out)?;
    log::info!(
        "{} ok, {} mismatched, {} missing",
        report.matched,
        report.mismatched.len(),
        report.missing.len()
    );
    Ok(report.is_ok())
}

/// 0 on success, 1 on a failed check or an error (printed to stderr).
fn exit_status(result: anyhow::Result<bool>) -> u8 {
    match result {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let result = match &cli.command {
        Some(Commands::Verify { index, common }) => {
            hashgen::logging::init_logging(common.verbose);
            verify(common, index)
        }
        None => {
            hashgen::logging::init_logging(cli.common.verbose);
            generate(&cli.common, cli.files.clone())
        }
    };
    ExitCode::from(exit_status(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_generates_with_defaults() {
        let cli = Cli::try_parse_from(["hashgen"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.files.is_empty());
        let overrides = cli.common.overrides(cli.files.clone());
        assert_eq!(overrides.mode, None);
        assert_eq!(overrides.base_dir, None);
    }

    #[test]
    fn parses_generate_flags() {
        let cli = Cli::try_parse_from([
            "hashgen", "--mode", "hash", "--dir", "/srv/dist", "-vv", "a.jar", "b.jar",
        ])
        .unwrap();
        assert_eq!(cli.common.verbose, 2);
        let overrides = cli.common.overrides(cli.files.clone());
        assert_eq!(overrides.mode, Some(Mode::HashOnly));
        assert_eq!(overrides.files, vec!["a.jar", "b.jar"]);
        assert_eq!(overrides.base_dir, Some(PathBuf::from("/srv/dist")));
    }

    #[test]
    fn parses_verify() {
        let cli = Cli::try_parse_from(["hashgen", "verify", "index.txt", "--mode", "pack"]).unwrap();
        match cli.command {
            Some(Commands::Verify { index, common }) => {
                assert_eq!(index, PathBuf::from("index.txt"));
                assert_eq!(common.overrides(Vec::new()).mode, Some(Mode::PackThenHash));
            }
            None => panic!("expected verify"),
        }
    }

    #[test]
    fn maps_results_to_exit_status() {
        assert_eq!(exit_status(Ok(true)), 0);
        assert_eq!(exit_status(Ok(false)), 1);
        assert_eq!(exit_status(Err(anyhow::anyhow!("pack200 exited with status 1"))), 1);
    }

    #[test]
    fn rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["hashgen", "--mode", "md5"]).is_err());
    }
}
