use clap::Parser;
use std::path::PathBuf;

use crate::analyzer::podlint::LintConfig;

#[derive(Parser, Debug)]
#[command(name = "podlint")]
#[command(version = crate::VERSION)]
#[command(about = "Validate a Kubernetes Pod manifest")]
#[command(long_about = "Reads one YAML Pod manifest, checks it against a fixed set of structural and semantic rules, and prints one line per violation. Exits 0 once validation completes, whatever the number of violations.")]
pub struct Cli {
    /// Path to the Pod manifest to validate
    #[arg(value_name = "FILE")]
    pub path: PathBuf,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Skip a rule by code (e.g. PL010); may be repeated
    #[arg(long, value_name = "CODE")]
    pub ignore: Vec<String>,
}

impl Cli {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        env_logger::Builder::from_default_env()
            .filter_level(level)
            .init();
    }

    /// Build the lint configuration from the flags
    pub fn lint_config(&self) -> LintConfig {
        LintConfig::default().ignore_all(self.ignore.iter().cloned())
    }
}
