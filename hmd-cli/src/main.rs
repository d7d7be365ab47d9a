//! HMD CLI - Command line tool for the human mobility dataset.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "hmd-cli",
    version,
    about = "Human mobility dataset toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: hmd_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("[HMD] cli: starting");
    hmd_cmd::run(cli.command)
}
