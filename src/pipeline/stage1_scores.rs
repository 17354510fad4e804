use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::input::read_lines;
use crate::model::{LineParse, LineStats, ScoreEntry, ScoreTable};
use crate::pipeline::{PipelineError, log_skips};

// rank \t score \t cui \t term
static LTC_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+\t([0-9]+\.[0-9]+)\t(C[0-9]{7})\t(.+)").expect("valid LTC line pattern")
});

#[derive(Debug, Clone)]
pub struct Stage1Output {
    pub table: ScoreTable,
    pub stats: LineStats,
}

pub fn run_stage1(path: &Path) -> Result<Stage1Output, PipelineError> {
    let lines = read_lines(path)?;
    let out = build_score_table(&lines);
    log_skips("score table", path, &out.stats);
    if out.table.is_empty() {
        crate::warn!("no LTC lines matched in {}", path.display());
    }
    crate::info!(
        "score table: {} CUIs, {} terms from {} ({} lines)",
        out.table.n_cuis(),
        out.table.n_terms(),
        path.display(),
        out.stats.lines_read
    );
    Ok(out)
}

pub fn build_score_table<S: AsRef<str>>(lines: &[S]) -> Stage1Output {
    let mut table = ScoreTable::new();
    let mut stats = LineStats::default();
    for line in lines {
        let outcome = parse_score_line(line.as_ref());
        stats.record(&outcome);
        if let LineParse::Record(entry) = outcome {
            table.insert(entry);
        }
    }
    Stage1Output { table, stats }
}

pub fn parse_score_line(line: &str) -> LineParse<ScoreEntry> {
    let Some(caps) = LTC_LINE.captures(line) else {
        return LineParse::Malformed;
    };
    LineParse::Record(ScoreEntry {
        score: caps[1].to_string(),
        cui: caps[2].to_string(),
        term: caps[3].to_string(),
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_scores.rs"]
mod tests;
