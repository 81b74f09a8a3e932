//! homedeck - terminal homepage with list utilities.
//!
//! Usage:
//!   homedeck                          # dashboard
//!   homedeck compare a.txt b.txt      # compare two lists
//!   homedeck to-csv list.txt --dedup  # one-per-line list to CSV
//!   homedeck dupes data.csv --lists a,b
//!   homedeck bookmarks export out.json

use tikv_jemallocator::Jemalloc;
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use std::fs::{self, OpenOptions};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::{Parser, Subcommand};
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

use homedeck::clipboard::SystemClipboard;
use homedeck::commands::{
    bookmarks_text, compare_text, dupes_text, from_csv_text, to_csv_text,
};
use homedeck::config::Config;
use homedeck::error::Result;
use homedeck::tui::App;
use homedeck::widgets::{BookmarkStore, ImportMode};

/// Terminal homepage with list utilities.
#[derive(Parser)]
#[command(name = "homedeck", about = "Terminal homepage with list utilities", version)]
struct Args {
    /// Config file (default: <config dir>/homedeck/config.toml).
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Directory for the note, bookmarks and preferences.
    #[arg(long, global = true, value_name = "PATH")]
    data_dir: Option<PathBuf>,

    /// Log file for the dashboard (default: <data dir>/homedeck.log).
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Increase logging verbosity (-v for debug, -vv for trace). Default is info level.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode - only show errors.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Compare two lists and print common and unique values.
    Compare {
        /// First list file, `-` for stdin.
        a: PathBuf,
        /// Second list file, `-` for stdin.
        b: PathBuf,
        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Convert a one-item-per-line list into a CSV line.
    ToCsv {
        /// Input file (default: stdin).
        file: Option<PathBuf>,
        #[arg(long, default_value = ",")]
        separator: String,
        /// Enclose items in `"` instead of `'`.
        #[arg(long)]
        double_quotes: bool,
        /// Remove duplicate items.
        #[arg(long)]
        dedup: bool,
    },
    /// Convert a CSV line back into a list.
    FromCsv {
        /// Input file (default: stdin).
        file: Option<PathBuf>,
        #[arg(long, default_value = ",")]
        separator: String,
        /// Items are enclosed in `"` instead of `'`.
        #[arg(long)]
        double_quotes: bool,
    },
    /// Count duplicate records per list.
    Dupes {
        /// Input file (default: stdin).
        file: Option<PathBuf>,
        /// Lists to analyze. Without it the available lists are printed.
        #[arg(long, value_delimiter = ',')]
        lists: Option<Vec<String>>,
        #[arg(long, default_value = ",")]
        separator: String,
        /// Separator used to join record fields.
        #[arg(long, default_value = "|")]
        join: String,
    },
    /// Manage bookmarks.
    Bookmarks {
        #[command(subcommand)]
        action: BookmarksAction,
    },
}

#[derive(Subcommand)]
enum BookmarksAction {
    /// Print saved bookmarks.
    List,
    /// Write bookmarks as JSON.
    Export { path: PathBuf },
    /// Read bookmarks from JSON.
    Import {
        path: PathBuf,
        /// Keep existing bookmarks and skip URLs already present.
        #[arg(long)]
        merge: bool,
    },
    /// Add a bookmark.
    Add { name: String, url: String },
}

/// Initializes the tracing subscriber with the appropriate log level.
/// Default level is INFO. Use -q for quiet mode (errors only).
///
/// The dashboard owns the terminal, so its logs go to `log_file`.
fn init_logging(verbose: u8, quiet: bool, log_file: Option<&Path>) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = format!("homedeck={level}").parse() {
        filter = filter.add_directive(directive);
    }

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let file = log_file.and_then(|path| {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).ok()?;
        }
        OpenOptions::new().create(true).append(true).open(path).ok()
    });
    match file {
        Some(file) => builder.with_ansi(false).with_writer(Mutex::new(file)).init(),
        None if log_file.is_some() => builder.with_writer(io::sink).init(),
        None => builder.with_writer(io::stderr).init(),
    }
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => Ok(fs::read_to_string(path)?),
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn run_command(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Compare { a, b, json } => {
            let a = read_input(Some(a.as_path()))?;
            let b = read_input(Some(b.as_path()))?;
            print!("{}", compare_text(&a, &b, json)?);
            if json {
                println!();
            }
        }
        Command::ToCsv {
            file,
            separator,
            double_quotes,
            dedup,
        } => {
            let input = read_input(file.as_deref())?;
            println!("{}", to_csv_text(&input, &separator, double_quotes, dedup)?);
        }
        Command::FromCsv {
            file,
            separator,
            double_quotes,
        } => {
            let input = read_input(file.as_deref())?;
            println!("{}", from_csv_text(&input, &separator, double_quotes)?);
        }
        Command::Dupes {
            file,
            lists,
            separator,
            join,
        } => {
            let input = read_input(file.as_deref())?;
            println!(
                "{}",
                dupes_text(&input, &separator, &join, lists.as_deref())?
            );
        }
        Command::Bookmarks { action } => run_bookmarks(action, config)?,
    }
    Ok(())
}

fn run_bookmarks(action: BookmarksAction, config: &Config) -> Result<()> {
    let mut store = BookmarkStore::load(&config.data_dir);
    match action {
        BookmarksAction::List => {
            let text = bookmarks_text(&store);
            if !text.is_empty() {
                println!("{text}");
            }
        }
        BookmarksAction::Export { path } => {
            store.export(&path)?;
            info!(path = %path.display(), count = store.len(), "bookmarks exported");
        }
        BookmarksAction::Import { path, merge } => {
            let mode = if merge {
                ImportMode::Merge
            } else {
                ImportMode::Replace
            };
            let added = store.import(&path, mode)?;
            println!("Imported {added} bookmarks");
        }
        BookmarksAction::Add { name, url } => {
            let bookmark = store.add(&name, &url)?;
            println!("{}\t{}", bookmark.name, bookmark.url);
        }
    }
    Ok(())
}

fn run(args: Args) -> Result<()> {
    let mut config = Config::load(args.config.as_deref())?;
    if let Some(dir) = args.data_dir {
        config.data_dir = dir;
    }

    match args.command {
        Some(command) => {
            init_logging(args.verbose, args.quiet, args.log_file.as_deref());
            run_command(command, &config)
        }
        None => {
            let log_file = args.log_file.unwrap_or_else(|| config.log_path());
            init_logging(args.verbose, args.quiet, Some(&log_file));
            info!(data_dir = %config.data_dir.display(), "starting dashboard");
            let app = App::new(&config, Box::new(SystemClipboard::new()));
            app.run(config.tick_rate())?;
            Ok(())
        }
    }
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
