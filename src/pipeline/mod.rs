use std::path::{Path, PathBuf};

use crate::input::InputError;
use crate::model::{LineStats, NumberPattern};

pub mod stage1_scores;
pub mod stage2_join;
pub mod stage3_matrix;

use stage1_scores::run_stage1;
use stage2_join::run_stage2;
use stage3_matrix::{MatrixShape, matrix_output_path, write_matrix};

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("no matching vectors found")]
    NoMatchingVectors,
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Where the pipeline stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineEnd {
    /// Build the score table and stop; nothing is written.
    TableOnly,
    /// Build the table, join the vectors and write the `.vcluster` file.
    Matrix,
}

impl PipelineEnd {
    pub fn name(self) -> &'static str {
        match self {
            PipelineEnd::TableOnly => "table-only",
            PipelineEnd::Matrix => "matrix",
        }
    }
}

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub scores_path: PathBuf,
    pub vectors_path: PathBuf,
    pub end: PipelineEnd,
    pub number_pattern: NumberPattern,
}

#[derive(Debug, Clone)]
pub struct JoinReport {
    pub stats: LineStats,
    pub output_path: PathBuf,
    pub shape: MatrixShape,
    pub ragged_rows: usize,
}

#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub score_stats: LineStats,
    pub n_cuis: usize,
    pub n_terms: usize,
    pub join: Option<JoinReport>,
}

pub fn run_pipeline(config: &PipelineConfig) -> Result<PipelineReport, PipelineError> {
    let stage1 = run_stage1(&config.scores_path)?;
    let n_cuis = stage1.table.n_cuis();
    let n_terms = stage1.table.n_terms();

    if config.end == PipelineEnd::TableOnly {
        return Ok(PipelineReport {
            score_stats: stage1.stats,
            n_cuis,
            n_terms,
            join: None,
        });
    }

    let stage2 = run_stage2(&config.vectors_path, &stage1.table, config.number_pattern)?;
    let output_path = matrix_output_path(&config.vectors_path);
    let stage3 = write_matrix(&output_path, &stage2.vectors)?;

    Ok(PipelineReport {
        score_stats: stage1.stats,
        n_cuis,
        n_terms,
        join: Some(JoinReport {
            stats: stage2.stats,
            output_path: stage3.path,
            shape: stage3.shape,
            ragged_rows: stage3.ragged_rows,
        }),
    })
}

pub(crate) fn log_skips(stage: &str, path: &Path, stats: &LineStats) {
    if stats.skipped() > 0 {
        crate::debug!(
            "{}: skipped {} of {} lines in {} (malformed={}, unknown_cui={})",
            stage,
            stats.skipped(),
            stats.lines_read,
            path.display(),
            stats.skipped_malformed,
            stats.skipped_unknown_cui
        );
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;
