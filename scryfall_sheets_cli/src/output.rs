use anyhow::Result;
use scryfall_sheets_lib::ResultMatrix;
use tabled::builder::Builder;
use tabled::settings::Style;
use tabled::Table;

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    #[value(alias = "md")]
    Markdown,
}

// -- Record builders --

fn build_records(matrix: &ResultMatrix, header: bool) -> Vec<Vec<String>> {
    let mut records = Vec::with_capacity(matrix.rows.len() + 1);
    if header {
        records.push(matrix.fields.clone());
    }
    for row in &matrix.rows {
        records.push(row.iter().map(|cell| cell.to_string()).collect());
    }
    records
}

fn build_table(matrix: &ResultMatrix, header: bool) -> Table {
    let mut builder = Builder::default();
    for record in build_records(matrix, header) {
        builder.push_record(record);
    }
    builder.build()
}

fn render_markdown(matrix: &ResultMatrix, header: bool) -> String {
    let mut table = build_table(matrix, header);
    table.with(Style::markdown());
    table.to_string()
}

fn render_csv(matrix: &ResultMatrix, header: bool) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    for record in build_records(matrix, header) {
        wtr.write_record(&record)?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV output: {}", e.error()))?;
    Ok(String::from_utf8(bytes)?)
}

// -- Table output --

pub fn print_table(matrix: &ResultMatrix, header: bool) {
    println!("{}", build_table(matrix, header));
}

// -- Markdown output --

pub fn print_markdown(matrix: &ResultMatrix, header: bool) {
    println!("{}", render_markdown(matrix, header));
}

// -- CSV output --

pub fn print_csv(matrix: &ResultMatrix, header: bool) -> Result<()> {
    print!("{}", render_csv(matrix, header)?);
    Ok(())
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}
