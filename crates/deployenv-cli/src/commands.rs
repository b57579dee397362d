//! Available subcommands.

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Show the resolved deployment environment and capability flags
    Paths,

    /// Print a fresh scratch file path for an installer download
    ScratchPath {
        /// File name prefix, e.g. "Chatty_installer"
        base_name: String,
    },

    /// Delete installer downloads older than the retention window
    Sweep,
}
