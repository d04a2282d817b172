//! sheet2html - render spreadsheet grid snapshots as HTML tables

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sheet_html::{
    EnrichedGrid, GridSnapshot, HtmlTable, HtmlWriteOptions, HtmlWriter, MergeIndex,
    DEFAULT_CELL_BORDER,
};
use sheet_html_core::{CellAddress, CellRange, Grid};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "sheet2html")]
#[command(
    author,
    version,
    about = "Render spreadsheet grid snapshots as styled HTML tables"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a grid snapshot to HTML on stdout or a file
    #[command(alias = "html")]
    Render {
        /// Grid snapshot (JSON)
        input: PathBuf,

        /// Output HTML file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Wrap the table in a complete HTML document
        #[arg(short, long)]
        full_page: bool,

        /// Document title (implies --full-page)
        #[arg(short, long)]
        title: Option<String>,

        /// Embed cell text and notes without escaping
        #[arg(long)]
        raw: bool,

        /// CSS border applied to every cell
        #[arg(long, default_value = DEFAULT_CELL_BORDER)]
        border: String,
    },

    /// Show grid dimensions and merge statistics
    Info {
        /// Grid snapshot (JSON)
        input: PathBuf,
    },

    /// Print one attribute of a cell, by attribute name
    Attr {
        /// Grid snapshot (JSON)
        input: PathBuf,

        /// Cell address in A1 notation
        address: String,

        /// Attribute name (e.g. value, fontWeight, mergeInfo)
        attribute: String,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            input,
            output,
            full_page,
            title,
            raw,
            border,
        } => {
            let mut options = HtmlWriteOptions::new()
                .with_escape_content(!raw)
                .with_cell_border(border)
                .with_full_page(full_page || title.is_some());
            if let Some(title) = title {
                options = options.with_page_title(title);
            }
            render(&input, output.as_deref(), &options)
        }
        Commands::Info { input } => show_info(&input),
        Commands::Attr {
            input,
            address,
            attribute,
        } => show_attribute(&input, &address, &attribute),
    }
}

fn load(input: &Path) -> Result<(Grid, Vec<CellRange>)> {
    GridSnapshot::read_file(input)
        .and_then(GridSnapshot::into_parts)
        .with_context(|| format!("Failed to load snapshot '{}'", input.display()))
}

fn render(input: &Path, output: Option<&Path>, options: &HtmlWriteOptions) -> Result<()> {
    let (grid, merges) = load(input)?;

    if let Some(output_path) = output {
        HtmlWriter::write_file(&grid, &merges, output_path, options)
            .with_context(|| format!("Failed to write '{}'", output_path.display()))?;
        log::info!(
            "wrote {}x{} table to '{}'",
            grid.row_count(),
            grid.col_count(),
            output_path.display()
        );
    } else {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        HtmlWriter::write(&grid, &merges, &mut handle, options).context("Failed to render HTML")?;
        handle
            .write_all(b"\n")
            .context("Failed to write to stdout")?;
    }

    Ok(())
}

fn show_info(input: &Path) -> Result<()> {
    let (grid, merges) = load(input)?;
    let table = HtmlTable::build(&grid, &merges, &HtmlWriteOptions::default())
        .context("Failed to render grid")?;

    println!("File: {}", input.display());
    match (grid.cell(0, 0), grid.rows().last().and_then(|r| r.last())) {
        (Some(first), Some(last)) => {
            println!("Range: {}", CellRange::new(first.address, last.address))
        }
        _ => println!("Range: empty"),
    }
    println!("Size: {} rows x {} columns", grid.row_count(), grid.col_count());
    println!("Merged regions: {}", merges.len());
    println!("Suppressed positions: {}", table.suppressed_count());
    println!(
        "Cells with notes: {}",
        grid.iter().filter(|cell| cell.has_note()).count()
    );

    Ok(())
}

fn show_attribute(input: &Path, address: &str, attribute: &str) -> Result<()> {
    let (grid, merges) = load(input)?;
    let address: CellAddress = address
        .parse()
        .with_context(|| format!("Invalid cell address '{}'", address))?;

    let index = MergeIndex::build_for(&grid, &merges)?;
    let joined = EnrichedGrid::join(&grid, &index)?;
    let cell = joined
        .iter()
        .find(|cell| cell.record.address == address)
        .with_context(|| format!("Cell {} is not in the snapshot", address))?;

    let value = cell.attribute_by_name(attribute)?;
    println!("{}", value);

    Ok(())
}
