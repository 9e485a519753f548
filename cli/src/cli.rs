use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "relkit")]
#[command(
    author,
    version,
    about = "Release helpers for build scripts: run commands, pack directories, read release notes"
)]
pub struct Cli {
    /// Enable verbose output with additional diagnostics
    #[clap(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a shell command and fail the build when it fails
    Exec {
        /// Command line handed to the platform shell
        command: String,

        /// Message reported when the command exits non-zero
        #[clap(short = 'm', long, default_value = "Command failed")]
        error_message: String,

        /// Don't echo the command before running it
        #[clap(long, default_value_t = false)]
        silent: bool,

        /// Report a failing command without failing the build
        #[clap(long, default_value_t = false)]
        tolerate_failure: bool,

        /// Print the full result as JSON instead of the captured output
        #[clap(long, default_value_t = false)]
        json: bool,
    },

    /// Print the release notes of one version from CHANGELOG.md
    Notes {
        /// Version whose `## v.<version>` section is printed
        #[clap(value_name = "VERSION", required_unless_present = "list")]
        release: Option<String>,

        /// Repository directory holding the changelog
        #[clap(short, long, default_value = ".")]
        dir: PathBuf,

        /// Changelog file name inside the repository directory
        #[clap(long, default_value = "CHANGELOG.md")]
        file: String,

        /// List the numbered releases in the changelog instead
        #[clap(long, default_value_t = false)]
        list: bool,
    },

    /// Pack a directory into a zip archive
    Pack {
        /// Directory (or file) to pack
        source: PathBuf,

        /// Archive path (defaults to <source name>.zip)
        #[clap(short, long)]
        output: Option<PathBuf>,
    },

    /// Create a directory and any missing parents
    Mkdir {
        /// Directory to create
        path: PathBuf,

        /// Remove the directory first if it already exists
        #[clap(long, default_value_t = false)]
        overwrite: bool,
    },
}
