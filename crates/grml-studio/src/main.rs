use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use grml_engine::DrawList;
use grml_engine::logging::{LoggingConfig, init_logging};
use grml_script::{FileSource, ImportOptions, Importer};

/// Import a graphics script and print the drawing calls it produces.
#[derive(Debug, Parser)]
#[command(name = "grml-studio", version)]
struct Args {
    /// Script to import.
    path: PathBuf,

    /// Report attributes whose names differ from the reference ordering.
    #[arg(long)]
    validate_names: bool,

    /// Print call counts per element after the call list.
    #[arg(long)]
    summary: bool,

    /// Do not print individual calls.
    #[arg(long, short)]
    quiet: bool,

    /// Log filter in env_logger syntax, e.g. "debug" or "grml_script=trace".
    #[arg(long, value_name = "FILTER")]
    log: Option<String>,

    /// Exit with an error when any diagnostic was reported.
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut logging = LoggingConfig::default();
    if let Some(filter) = &args.log {
        logging = logging.with_filter(filter.as_str());
    }
    init_logging(logging);

    let options = ImportOptions::default().validate_attribute_names(args.validate_names);
    let mut list = DrawList::new();
    let report = Importer::new(options)
        .import_from(FileSource::new(&args.path), &mut list)
        .with_context(|| format!("importing {}", args.path.display()))?;

    if !args.quiet {
        for (i, cmd) in list.items().iter().enumerate() {
            println!("{:>5}  {:?}", i, cmd);
        }
    }

    if args.summary {
        println!();
        for (name, count) in list.count_by_name() {
            println!("  {:<18} {:>6}", name, count);
        }
    }

    log::info!(
        "{}: {} lines, {} calls, {} diagnostics",
        args.path.display(),
        report.lines,
        report.dispatched,
        report.diagnostics.len()
    );

    if args.strict && !report.is_clean() {
        bail!("{} diagnostic(s) reported", report.diagnostics.len());
    }
    Ok(())
}
