use clap::Parser;
use docfeed::constants::LOG_TARGET;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};
use output::OutputFormat;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing; logs go to stderr so stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(format!("{LOG_TARGET}=info").parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let format = OutputFormat::from(cli.format);
    match &cli.command {
        Commands::Anchors(args) => commands::anchors::run(args, format),
        Commands::Acl(args) => commands::acl::run(args, format),
    }
}
