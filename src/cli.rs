use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Layout;

#[derive(Parser, Debug)]
#[command(name = "irc-numerics")]
#[command(about = "Generate the IRC numeric reply constants table", long_about = None)]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub generate: GenerateArgs,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the constants table (the default when no subcommand is given)
    Generate(GenerateArgs),

    /// Write a default .irc-numerics.toml in the current directory
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateArgs {
    /// Registry YAML file (defaults to the configured path, numerics.yml)
    #[arg(short, long)]
    pub registry: Option<PathBuf>,

    /// Configuration file (defaults to searching for .irc-numerics.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Package declared in the generated file
    #[arg(long)]
    pub package: Option<String>,

    /// Indentation of the generated block
    #[arg(long, value_enum)]
    pub layout: Option<Layout>,

    /// Compare against --output instead of writing it; fail when stale
    #[arg(long, requires = "output")]
    pub check: bool,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

impl Cli {
    /// The generate arguments, whether given bare or under `generate`.
    pub fn into_command(self) -> Commands {
        self.command.unwrap_or(Commands::Generate(self.generate))
    }
}

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    Cli::parse()
}
