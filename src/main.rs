use anyhow::Result;
use irc_numerics::cli::{parse_args, Commands};
use irc_numerics::commands;
use irc_numerics::observability::init_logging;

fn main() -> Result<()> {
    match parse_args().into_command() {
        Commands::Generate(args) => {
            init_logging(args.verbosity);
            commands::handle_generate(args)
        }
        Commands::Init { force } => {
            init_logging(0);
            commands::init_config(force)
        }
    }
}
