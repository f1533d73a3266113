use crate::commands::Commands;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "manage-users")]
#[command(about = "Manage dashboard users and registration tokens")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log progress (level from TB_LOG_LEVEL)
    #[arg(long, short, global = true)]
    pub verbose: bool,
}
