mod commands;
mod output;

use anyhow::Result;
use clap::Parser;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "scryfall")]
#[command(about = "Search Scryfall and print the results as spreadsheet rows")]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    output: OutputFormat,

    /// Omit the header row of field names
    #[arg(long)]
    no_header: bool,

    #[command(flatten)]
    search: commands::search::SearchCliArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("scryfall=info".parse::<tracing_subscriber::filter::Directive>()?),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    commands::search::run(&cli.search, &cli.output, !cli.no_header).await?;

    Ok(())
}
