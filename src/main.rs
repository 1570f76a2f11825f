//! lexbrief - analyze one legal case document
//!
//! Usage: lexbrief [OPTIONS] <FILE>
//!
//! Prints exactly one JSON line to stdout. Diagnostics go to stderr.

use clap::Parser;
use lexbrief_lib::{logging, pipeline, Analyzer, ModelHandle, Settings, Summarizer};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "lexbrief", version, about = "Summarize and classify a legal case document (PDF/DOCX)")]
struct Cli {
    /// Case document to analyze (.pdf, .docx or .doc)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Settings file (JSON); defaults to <config dir>/lexbrief/settings.json
    #[arg(long, value_name = "FILE", env = "LEXBRIEF_CONFIG")]
    config: Option<PathBuf>,

    /// Hugging Face id of the T5 summarization model
    #[arg(long, value_name = "HF_ID")]
    model: Option<String>,

    /// Skip loading the summarization model
    #[arg(long, default_value_t = false)]
    no_model: bool,

    /// More diagnostics on stderr (-v info, -vv debug); RUST_LOG wins
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // No document: fail without touching stdout
    let Some(path) = cli.file else {
        return ExitCode::FAILURE;
    };

    let mut settings = Settings::resolve(cli.config.as_deref());
    if let Some(model) = cli.model {
        settings.summarizer_model = model;
    }
    if cli.no_model {
        settings.load_model = false;
    }

    let report = pipeline::run(&path, || {
        Analyzer::new(Summarizer::new(ModelHandle::load(&settings), &settings))
    });

    let mut stdout = std::io::stdout().lock();
    if writeln!(stdout, "{}", report.output.to_json_line())
        .and_then(|_| stdout.flush())
        .is_err()
    {
        return ExitCode::FAILURE;
    }

    ExitCode::from(report.exit_code)
}
