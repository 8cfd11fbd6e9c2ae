use anyhow::Result;
use clap::Args;
use scryfall_sheets_lib::{scryfall, Client, SearchArgs};

use crate::output::{print_csv, print_json, print_markdown, print_table, OutputFormat};

/// Positional arguments in the same order as the spreadsheet function:
/// `SCRYFALL(query, fields, num_results, order, dir, unique)`.
#[derive(Args)]
pub struct SearchCliArgs {
    /// Scryfall search query, e.g. "name:braids type:legendary"
    pub query: Option<String>,

    /// Space or comma separated fields to return (default: name)
    pub fields: Option<String>,

    /// Number of results, at most 700 (default: 150)
    #[arg(allow_negative_numbers = true)]
    pub num_results: Option<i64>,

    /// Sort order, e.g. name, cmc, price (default: name)
    pub order: Option<String>,

    /// Sort direction: auto, asc, or desc (default: auto)
    pub dir: Option<String>,

    /// Duplicate handling: cards, art, or prints (default: cards)
    pub unique: Option<String>,

    /// Base URL of the Scryfall API
    #[arg(long, hide = true, default_value = "https://api.scryfall.com")]
    pub api_url: String,
}

impl SearchCliArgs {
    fn to_search_args(&self) -> SearchArgs {
        SearchArgs {
            query: self.query.clone(),
            fields: self.fields.clone(),
            num_results: self.num_results,
            order: self.order.clone(),
            dir: self.dir.clone(),
            unique: self.unique.clone(),
        }
    }
}

pub async fn run(args: &SearchCliArgs, format: &OutputFormat, header: bool) -> Result<()> {
    let client = Client::with_base_url(&args.api_url)?;
    let matrix = scryfall(&client, &args.to_search_args()).await?;

    eprintln!("{} row(s)", matrix.rows.len());

    match format {
        OutputFormat::Table => print_table(&matrix, header),
        OutputFormat::Json => print_json(&matrix.rows),
        OutputFormat::Csv => print_csv(&matrix, header)?,
        OutputFormat::Markdown => print_markdown(&matrix, header),
    }

    Ok(())
}
