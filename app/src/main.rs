use clap::Parser;

use helios_lib::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    helios_lib::run(Cli::parse()).await
}
