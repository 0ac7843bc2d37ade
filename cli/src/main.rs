//! formdump CLI - form template audit tool

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

use formdump::{FormCatalog, FormDumper, ParseOptions, ReportOptions, DEFAULT_BASE_PATH};

#[derive(Parser, Debug)]
#[command(name = "formdump")]
#[command(author = "iyulab")]
#[command(version)]
#[command(
    about = "Print the text, formatting hints and tables of Word form templates",
    long_about = None
)]
struct Cli {
    /// Documents to report directly instead of the catalog
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Base directory the catalog paths are relative to
    #[arg(short, long, value_name = "DIR", env = "FORMDUMP_BASE")]
    base: Option<PathBuf>,

    /// JSON catalog replacing the built-in form list
    #[arg(short, long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Table rows printed before the remainder is summarized
    #[arg(long, value_name = "N", default_value_t = formdump::render::DEFAULT_MAX_ROWS)]
    max_rows: usize,

    /// Skip damaged styles or relationship parts instead of failing
    #[arg(long)]
    lenient: bool,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut parse_options = ParseOptions::new();
    if cli.lenient {
        parse_options = parse_options.lenient();
    }
    let dumper = FormDumper::new()
        .with_parse_options(parse_options)
        .with_report_options(ReportOptions::new().with_max_rows(cli.max_rows));

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if !cli.files.is_empty() {
        dumper.report_files(&cli.files, &mut out)?;
        out.flush()?;
        return Ok(());
    }

    let catalog = match cli.catalog {
        Some(ref path) => FormCatalog::from_path(path)
            .map_err(|e| format!("{}: {}", path.display(), e))?,
        None => FormCatalog::builtin(),
    };
    let base = resolve_base(cli.base, &catalog);
    log::debug!(
        "Reporting {} files under {}",
        catalog.file_count(),
        base.display()
    );

    dumper.report(&catalog, &base, &mut out)?;
    out.flush()?;
    Ok(())
}

/// `--base` wins over the catalog's own base path.
fn resolve_base(flag: Option<PathBuf>, catalog: &FormCatalog) -> PathBuf {
    flag.or_else(|| catalog.base_path.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_BASE_PATH))
}
