use std::path::PathBuf;

use clap::Parser;

use dirpane::logging;
use dirpane::model::{self, FixedRowMetrics};

/// Headless front end for the browser core: prints the rows the renderer
/// would draw.
#[derive(Parser, Debug)]
#[command(name = "dirpane", version, about)]
struct Cli {
    /// Root directory to list (defaults to the home directory)
    path: Option<PathBuf>,

    /// Expand directories one level below the root
    #[arg(short, long)]
    recursive: bool,
}

fn main() {
    logging::init();
    let cli = Cli::parse();

    let root = cli
        .path
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."));

    let listing = model::build(&root, cli.recursive, &FixedRowMetrics::default());
    for row in listing.rows() {
        println!(
            "{} {:>9} {:>5}  {:indent$}{}",
            row.permission_text,
            row.size_text,
            row.kind.label(),
            "",
            row.name,
            indent = row.depth * 2,
        );
    }
}
