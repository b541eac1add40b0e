//! Refsheet CLI - create, edit, and resolve lookup-reference sheets

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use refsheet::prelude::*;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "refsheet")]
#[command(
    author,
    version,
    about = "Typed-column sheets with cell-to-cell lookup references"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new sheet and print its id
    Create {
        /// Column definitions as NAME:TYPE (types: string, integer, boolean)
        #[arg(required = true)]
        columns: Vec<String>,

        /// Number of rows in every column
        #[arg(short, long, default_value_t = DEFAULT_ROWS)]
        rows: usize,

        /// Directory holding sheet documents
        #[arg(short, long, default_value = ".refsheet")]
        data_dir: PathBuf,
    },

    /// Print a sheet with every reference chain resolved
    Show {
        /// Sheet id (24 hex characters)
        id: String,

        /// Print the stored cells without resolving lookups
        #[arg(long)]
        raw: bool,

        /// Emit the sheet as a JSON document
        #[arg(long)]
        json: bool,

        /// Directory holding sheet documents
        #[arg(short, long, default_value = ".refsheet")]
        data_dir: PathBuf,
    },

    /// Write a value or lookup into a cell
    Set {
        /// Sheet id (24 hex characters)
        id: String,

        /// Column name
        column: String,

        /// Row index (0-based)
        row: usize,

        /// The value, or a lookup(<column>,<row>) expression with --lookup
        value: String,

        /// Treat the value as a lookup expression
        #[arg(short, long)]
        lookup: bool,

        /// Directory holding sheet documents
        #[arg(short, long, default_value = ".refsheet")]
        data_dir: PathBuf,
    },

    /// List the ids of all stored sheets
    List {
        /// Directory holding sheet documents
        #[arg(short, long, default_value = ".refsheet")]
        data_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Create {
            columns,
            rows,
            data_dir,
        } => create(&data_dir, &columns, rows),
        Commands::Show {
            id,
            raw,
            json,
            data_dir,
        } => show(&data_dir, &id, raw, json),
        Commands::Set {
            id,
            column,
            row,
            value,
            lookup,
            data_dir,
        } => set(&data_dir, &id, &column, row, &value, lookup),
        Commands::List { data_dir } => list(&data_dir),
    }
}

fn create(data_dir: &Path, columns: &[String], rows: usize) -> Result<()> {
    let specs = columns
        .iter()
        .map(|s| parse_column_spec(s))
        .collect::<Result<Vec<_>>>()?;

    let service = SheetService::open(data_dir)
        .with_context(|| format!("Failed to open store at '{}'", data_dir.display()))?;
    let id = service.create(specs, rows)?;

    println!("{id}");
    Ok(())
}

/// Parse a NAME:TYPE column definition
fn parse_column_spec(spec: &str) -> Result<ColumnSpec> {
    let (name, type_name) = spec
        .split_once(':')
        .with_context(|| format!("Column '{}' must be NAME:TYPE", spec))?;
    let value_type: ValueType = type_name
        .parse()
        .with_context(|| format!("Bad value type in '{}'", spec))?;
    Ok(ColumnSpec::new(name, value_type))
}

fn show(data_dir: &Path, id: &str, raw: bool, json: bool) -> Result<()> {
    let service = SheetService::open(data_dir)
        .with_context(|| format!("Failed to open store at '{}'", data_dir.display()))?;

    let sheet = if raw {
        service
            .raw(id)
            .with_context(|| format!("Failed to load sheet '{}'", id))?
    } else {
        let (sheet, stats) = service
            .resolved(id)
            .with_context(|| format!("Failed to load sheet '{}'", id))?;
        if stats.lookup_cells > 0 {
            eprintln!(
                "Resolved {} lookup cells ({} errors)",
                stats.cells_resolved, stats.errors
            );
        }
        sheet
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&sheet)?);
    } else {
        print_sheet(&sheet, raw);
    }
    Ok(())
}

/// Render a sheet as an aligned text table
///
/// In raw mode lookup cells print as their `lookup(<column>,<row>)` form;
/// otherwise cells print their (resolved) literal values.
fn print_sheet(sheet: &Sheet, raw: bool) {
    let headers: Vec<String> = sheet
        .columns()
        .iter()
        .map(|c| format!("{} ({})", c.name(), c.value_type()))
        .collect();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();

    let mut grid: Vec<Vec<String>> = Vec::with_capacity(sheet.rows());
    for row in 0..sheet.rows() {
        let mut line = Vec::with_capacity(sheet.columns().len());
        for (i, column) in sheet.columns().iter().enumerate() {
            let text = match column.cell(row) {
                Some(cell) if raw => cell.content().to_string(),
                Some(cell) => cell.display_value().to_string(),
                None => String::new(),
            };
            widths[i] = widths[i].max(text.len());
            line.push(text);
        }
        grid.push(line);
    }

    let row_width = sheet.rows().saturating_sub(1).to_string().len().max(3);

    let mut header = format!("{:>width$}", "row", width = row_width);
    for (text, width) in headers.iter().zip(widths.iter().copied()) {
        header.push_str(&format!("  {:width$}", text, width = width));
    }
    println!("{}", header);

    for (row, line) in grid.iter().enumerate() {
        let mut out = format!("{:>width$}", row, width = row_width);
        for (text, width) in line.iter().zip(widths.iter().copied()) {
            out.push_str(&format!("  {:width$}", text, width = width));
        }
        println!("{}", out.trim_end());
    }
}

fn set(
    data_dir: &Path,
    id: &str,
    column: &str,
    row: usize,
    value: &str,
    lookup: bool,
) -> Result<()> {
    let service = SheetService::open(data_dir)
        .with_context(|| format!("Failed to open store at '{}'", data_dir.display()))?;

    let mode = if lookup { SetMode::Lookup } else { SetMode::Value };
    service.update_cell(id, column, row, value, mode)?;

    println!("Updated cell {},{}", column, row);
    Ok(())
}

fn list(data_dir: &Path) -> Result<()> {
    let service = SheetService::open(data_dir)
        .with_context(|| format!("Failed to open store at '{}'", data_dir.display()))?;

    for id in service.list()? {
        println!("{id}");
    }
    Ok(())
}
