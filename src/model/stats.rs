use serde::Serialize;

/// Outcome of parsing a single input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineParse<T> {
    Record(T),
    /// Line does not have the expected shape.
    Malformed,
    /// Well-formed vector line whose CUI has no score entry.
    UnknownCui,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LineStats {
    pub lines_read: usize,
    pub parsed: usize,
    pub skipped_malformed: usize,
    pub skipped_unknown_cui: usize,
}

impl LineStats {
    pub fn record<T>(&mut self, outcome: &LineParse<T>) {
        self.lines_read += 1;
        match outcome {
            LineParse::Record(_) => self.parsed += 1,
            LineParse::Malformed => self.skipped_malformed += 1,
            LineParse::UnknownCui => self.skipped_unknown_cui += 1,
        }
    }

    pub fn skipped(&self) -> usize {
        self.skipped_malformed + self.skipped_unknown_cui
    }
}
