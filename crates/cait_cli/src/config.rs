//! Command-line and environment configuration.
//!
//! # Responsibility
//! - Parse arguments, falling back to `CAIT_*` environment variables.
//! - Resolve record directories relative to the dataset root.

use cait_core::{default_log_level, LogConfig};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

const ACCESSIONS_DIR: &str = "accessions";
const SUBJECTS_DIR: &str = "subjects";
const DIGITAL_OBJECTS_DIR: &str = "digital_objects";

#[derive(Debug, Parser)]
#[command(name = "cait")]
#[command(about = "Browse exported archival records: title index and accession views")]
pub struct Cli {
    /// Dataset root holding exported record directories
    #[arg(long, env = "CAIT_DATASETS", default_value = ".", global = true)]
    pub datasets: PathBuf,

    /// Log level (trace|debug|info|warn|error)
    #[arg(long, env = "CAIT_LOG_LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Absolute directory for rotating log files; logs go to stderr when unset
    #[arg(long, env = "CAIT_LOG_DIR", global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build the accession title index and print navigation markup
    Index {
        /// Record tree to walk; defaults to the dataset root
        root: Option<PathBuf>,
        /// Print the index as a JSON object keyed by URI
        #[arg(long)]
        json: bool,
    },

    /// Print normalized accession views as JSON
    View {
        #[arg(long)]
        accessions: Option<PathBuf>,
        #[arg(long)]
        subjects: Option<PathBuf>,
        #[arg(long)]
        digital_objects: Option<PathBuf>,
        /// Only print the accession with this URI
        #[arg(long)]
        uri: Option<String>,
    },

    /// List subject titles in file order
    Subjects {
        /// Subject directory; defaults to `<datasets>/subjects`
        dir: Option<PathBuf>,
    },

    /// Print the core version
    Version,
}

impl Cli {
    pub fn log_config(&self) -> LogConfig {
        let level = self
            .log_level
            .clone()
            .unwrap_or_else(|| default_log_level().to_string());
        match &self.log_dir {
            Some(dir) => LogConfig::directory(level, dir),
            None => LogConfig::stderr(level),
        }
    }

    pub fn index_root(&self, root: Option<&Path>) -> PathBuf {
        root.map(Path::to_path_buf)
            .unwrap_or_else(|| self.datasets.clone())
    }

    pub fn accessions_dir(&self, explicit: Option<&Path>) -> PathBuf {
        self.dataset_dir(explicit, ACCESSIONS_DIR)
    }

    pub fn subjects_dir(&self, explicit: Option<&Path>) -> PathBuf {
        self.dataset_dir(explicit, SUBJECTS_DIR)
    }

    pub fn digital_objects_dir(&self, explicit: Option<&Path>) -> PathBuf {
        self.dataset_dir(explicit, DIGITAL_OBJECTS_DIR)
    }

    fn dataset_dir(&self, explicit: Option<&Path>, child: &str) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.datasets.join(child))
    }
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use cait_core::LogTarget;
    use clap::Parser;
    use std::path::{Path, PathBuf};

    #[test]
    fn view_directories_default_under_dataset_root() {
        let cli = Cli::try_parse_from(["cait", "--datasets", "/data", "view"]).unwrap();

        assert_eq!(cli.accessions_dir(None), PathBuf::from("/data/accessions"));
        assert_eq!(cli.subjects_dir(None), PathBuf::from("/data/subjects"));
        assert_eq!(
            cli.digital_objects_dir(Some(Path::new("/elsewhere"))),
            PathBuf::from("/elsewhere")
        );
    }

    #[test]
    fn index_root_prefers_positional_argument() {
        let cli = Cli::try_parse_from(["cait", "index", "/tree", "--json", "--datasets", "/data"])
            .unwrap();

        match &cli.command {
            Command::Index { root, json } => {
                assert!(*json);
                assert_eq!(cli.index_root(root.as_deref()), PathBuf::from("/tree"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(cli.index_root(None), PathBuf::from("/data"));
    }

    #[test]
    fn log_config_targets_directory_when_given() {
        let cli = Cli::try_parse_from([
            "cait",
            "--log-level",
            "warn",
            "--log-dir",
            "/var/log/cait",
            "version",
        ])
        .unwrap();

        let config = cli.log_config();
        assert_eq!(config.level, "warn");
        assert_eq!(
            config.target,
            LogTarget::Directory(PathBuf::from("/var/log/cait"))
        );
    }
}
