mod display;

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;
use log::{debug, error, info};
use thiserror::Error;

use huffman_codes::HuffmanModel;

use crate::display::{
    DEFAULT_ORDER, SortKey, render_summary, render_table, render_tree, sort_entries,
};

#[derive(Parser)]
#[command(name = "huffcodes", version)]
#[command(about = "Prints the Huffman code table for a piece of text.", long_about = None)]
struct Cli {
    /// Text file to read. Reads stdin when neither FILE nor --string is given.
    #[arg(conflicts_with = "string")]
    file: Option<PathBuf>,

    /// Use TEXT as input instead of a file.
    #[arg(short, long, value_name = "TEXT")]
    string: Option<String>,

    /// Sort keys (char, count, code, length); prefix with '-' for descending,
    /// e.g. --sort=-count,code
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    sort: Vec<SortKey>,

    /// Also print the tree.
    #[arg(long)]
    tree: bool,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("cannot read {path}: {source}")]
    Io { path: String, source: io::Error },

    #[error("{path} is not valid UTF-8 text")]
    InvalidUtf8 { path: String },
}

fn read_input(cli: &Cli) -> Result<String, CliError> {
    if let Some(text) = &cli.string {
        return Ok(text.clone());
    }

    match &cli.file {
        Some(path) => {
            info!("Reading input file: {}", path.display());
            fs::read_to_string(path).map_err(|source| classify(path.display().to_string(), source))
        }
        None => {
            info!("Reading input from stdin");
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(|source| classify("<stdin>".to_string(), source))?;
            Ok(text)
        }
    }
}

fn classify(path: String, source: io::Error) -> CliError {
    if source.kind() == io::ErrorKind::InvalidData {
        CliError::InvalidUtf8 { path }
    } else {
        CliError::Io { path, source }
    }
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let text = match read_input(&cli) {
        Ok(text) => text,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };
    debug!("Input holds {} characters", text.chars().count());

    let model = HuffmanModel::from_text(&text);

    let keys: &[SortKey] = if cli.sort.is_empty() {
        &DEFAULT_ORDER
    } else {
        &cli.sort
    };
    let mut rows = model.frequency_table();
    sort_entries(&mut rows, keys);

    print!("{}", render_table(&rows));
    println!();
    print!("{}", render_summary(&model));

    if cli.tree {
        println!();
        print!("{}", render_tree(model.tree()));
    }
}
