use anyhow::Result;
use clap::Parser;
use inquest::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
