use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::input::read_lines;
use crate::model::{LineParse, LineStats, NumberPattern, ScoreTable, VectorRecord};
use crate::pipeline::{PipelineError, log_skips};

// The CUI is not required to be followed by a separator.
static VECTOR_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(C[0-9]{7})(.+)").expect("valid vector line pattern"));

#[derive(Debug, Clone)]
pub struct Stage2Output {
    pub vectors: Vec<VectorRecord>,
    pub stats: LineStats,
}

pub fn run_stage2(
    path: &Path,
    table: &ScoreTable,
    pattern: NumberPattern,
) -> Result<Stage2Output, PipelineError> {
    let lines = read_lines(path)?;
    let out = join_vectors(&lines, table, pattern);
    log_skips("vector join", path, &out.stats);
    crate::info!(
        "vector join: kept {} of {} lines from {} (pattern={})",
        out.stats.parsed,
        out.stats.lines_read,
        path.display(),
        pattern.name()
    );
    let empty = out.vectors.iter().filter(|v| v.is_empty()).count();
    if empty > 0 {
        crate::warn!("{} kept vectors have no numeric components", empty);
    }
    Ok(out)
}

pub fn join_vectors<S: AsRef<str>>(
    lines: &[S],
    table: &ScoreTable,
    pattern: NumberPattern,
) -> Stage2Output {
    let mut vectors = Vec::new();
    let mut stats = LineStats::default();
    for line in lines {
        let outcome = parse_vector_line(line.as_ref(), table, pattern);
        stats.record(&outcome);
        if let LineParse::Record(record) = outcome {
            vectors.push(record);
        }
    }
    Stage2Output { vectors, stats }
}

pub fn parse_vector_line(
    line: &str,
    table: &ScoreTable,
    pattern: NumberPattern,
) -> LineParse<VectorRecord> {
    let Some(caps) = VECTOR_LINE.captures(line) else {
        return LineParse::Malformed;
    };
    let cui = &caps[1];
    if !table.contains_cui(cui) {
        return LineParse::UnknownCui;
    }
    LineParse::Record(VectorRecord {
        cui: cui.to_string(),
        values: pattern.extract(&caps[2]),
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_join.rs"]
mod tests;
