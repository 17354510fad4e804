use serde::Serialize;

use crate::model::LineStats;
use crate::pipeline::stage3_matrix::MatrixShape;
use crate::pipeline::{PipelineConfig, PipelineReport};

pub mod json;

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub tool: String,
    pub version: String,
    pub inputs: SummaryInputs,
    pub end: String,
    pub number_pattern: String,
    pub score_table: ScoreTableSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vectors: Option<VectorSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryInputs {
    pub scores: String,
    pub vectors: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreTableSummary {
    pub lines: LineStats,
    pub n_cuis: usize,
    pub n_terms: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct VectorSummary {
    pub lines: LineStats,
    pub matrix: MatrixShape,
    pub ragged_rows: usize,
    pub output: String,
}

pub fn build_summary(config: &PipelineConfig, report: &PipelineReport) -> RunSummary {
    RunSummary {
        tool: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        inputs: SummaryInputs {
            scores: config.scores_path.display().to_string(),
            vectors: config.vectors_path.display().to_string(),
        },
        end: config.end.name().to_string(),
        number_pattern: config.number_pattern.name().to_string(),
        score_table: ScoreTableSummary {
            lines: report.score_stats,
            n_cuis: report.n_cuis,
            n_terms: report.n_terms,
        },
        vectors: report.join.as_ref().map(|join| VectorSummary {
            lines: join.stats,
            matrix: join.shape,
            ragged_rows: join.ragged_rows,
            output: join.output_path.display().to_string(),
        }),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
