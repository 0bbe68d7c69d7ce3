/// Command-line arguments.
///
/// Every argument is optional: whatever is missing after flags and the
/// `--config` file are applied is asked for interactively.
use booklister_core::NamingPolicy;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(name = "booklister")]
#[command(author, version, about = "List ebook files under directory trees into CSV reports")]
#[command(long_about = "Scans each root directory recursively for pdf, epub, doc, txt, djvu, \
    cbz and cbr files and writes one CSV report per root.\n\n\
    Roots and naming that are not given as arguments are prompted for.")]
pub struct Cli {
    /// Root directories to scan
    #[arg(value_name = "ROOT")]
    pub roots: Vec<PathBuf>,

    /// Root directories as one pipe-delimited line, e.g. "/books|/comics"
    #[arg(long, value_name = "PATHS", conflicts_with = "roots")]
    pub paths: Option<String>,

    /// Name each report <uuid>.csv
    #[arg(long, group = "naming")]
    pub random: bool,

    /// Name each report <NAME>_<index>.csv
    #[arg(long, value_name = "NAME", group = "naming")]
    pub base: Option<String>,

    /// Name each report after its root directory
    #[arg(long, group = "naming")]
    pub folder_names: bool,

    /// Abort a root's scan on the first unreadable file instead of skipping it
    #[arg(long)]
    pub strict: bool,

    /// Directory to write reports to (default: current directory)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// JSON run configuration; flags override its fields
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print per-format totals for every exported root
    #[arg(long)]
    pub summary: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Naming policy chosen by flags, if any.
    pub fn naming(&self) -> Option<NamingPolicy> {
        if self.random {
            Some(NamingPolicy::Random)
        } else if let Some(base) = &self.base {
            Some(NamingPolicy::FixedBase(base.clone()))
        } else if self.folder_names {
            Some(NamingPolicy::FolderName)
        } else {
            None
        }
    }

    /// Log level for the stderr subscriber.
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        }
    }
}

/// Parse the process arguments.
pub fn parse_args() -> Cli {
    Cli::parse()
}
