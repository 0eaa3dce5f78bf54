//! CLI argument definitions for the docfeed binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Output format
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Format {
    /// Aligned columns for reading in a terminal
    Human,
    /// Machine-readable JSON on stdout
    Json,
}

/// docfeed connector toolbox
#[derive(Parser, Debug)]
#[command(name = "docfeed")]
#[command(about = "docfeed: inspect anchor and ACL metadata before it is fed to a search system")]
#[command(version)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, default_value = "human", env = "DOCFEED_FORMAT")]
    pub format: Format,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Record a document's links and show them grouped by anchor text
    Anchors(InputArgs),
    /// Validate an ACL document and show its normalized form
    Acl(InputArgs),
}

/// Arguments shared by commands that read one JSON document
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// JSON file to read. Reads stdin when omitted
    #[arg(short, long, env = "DOCFEED_INPUT")]
    pub input: Option<PathBuf>,
}
