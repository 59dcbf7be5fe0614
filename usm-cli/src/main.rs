//! USM CLI - Command line tool for the US state mortality dashboard.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "usm-cli",
    version,
    about = "US state mortality dashboard toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: usm_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    usm_cmd::run(cli.command)
}
