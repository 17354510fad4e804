mod input;
mod model;
mod pipeline;
mod report;
mod tracing;

use std::path::PathBuf;

use clap::{CommandFactory, Parser};

use crate::input::check_paths;
use crate::model::NumberPattern;
use crate::pipeline::{PipelineConfig, PipelineEnd, PipelineReport, run_pipeline};
use crate::report::build_summary;
use crate::report::json::write_summary;

/// Join LTC term scores with CUI vectors and write a vcluster matrix.
#[derive(Debug, Parser)]
#[command(name = "kira-vcluster", version)]
struct Args {
    /// LTC file: rank, score, CUI and term per line, tab separated
    ltc_file: PathBuf,

    /// CUI vectors file; the matrix is written to <file>.vcluster
    cui_vectors_file: PathBuf,

    /// Build the score table only; no matrix is written
    #[arg(long)]
    table_only: bool,

    /// Pattern used to pick vector components out of each line
    #[arg(long, value_enum, default_value_t = NumberPattern::Compat)]
    number_pattern: NumberPattern,

    /// Write a JSON run summary to this path
    #[arg(long)]
    summary: Option<PathBuf>,
}

fn main() {
    crate::tracing::init();
    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), String> {
    let errors = check_paths(&[args.ltc_file.as_path(), args.cui_vectors_file.as_path()]);
    if !errors.is_empty() {
        let mut message = String::new();
        for err in &errors {
            message.push_str(&format!("\tError: {err}\n"));
        }
        message.push_str(&usage());
        return Err(message);
    }

    let summary_path = args.summary.clone();
    let config = build_config(args);
    let report = run_pipeline(&config).map_err(|e| e.to_string())?;
    log_report(&report);

    if let Some(path) = summary_path {
        let summary = build_summary(&config, &report);
        write_summary(&path, &summary)
            .map_err(|e| format!("failed to write summary {}: {e}", path.display()))?;
        crate::info!("wrote summary {}", path.display());
    }

    Ok(())
}

fn build_config(args: Args) -> PipelineConfig {
    PipelineConfig {
        scores_path: args.ltc_file,
        vectors_path: args.cui_vectors_file,
        end: if args.table_only {
            PipelineEnd::TableOnly
        } else {
            PipelineEnd::Matrix
        },
        number_pattern: args.number_pattern,
    }
}

fn usage() -> String {
    Args::command().render_usage().to_string()
}

fn log_report(report: &PipelineReport) {
    match &report.join {
        None => crate::info!(
            "table only: {} CUIs, {} terms; no matrix written",
            report.n_cuis,
            report.n_terms
        ),
        Some(join) => crate::info!(
            "done: {} rows x {} columns -> {}",
            join.shape.rows,
            join.shape.columns,
            join.output_path.display()
        ),
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
