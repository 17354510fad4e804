use std::collections::BTreeMap;

/// One parsed LTC line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEntry {
    pub cui: String,
    pub term: String,
    pub score: String,
}

/// `cui -> term -> score`, scores kept exactly as written in the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreTable {
    by_cui: BTreeMap<String, BTreeMap<String, String>>,
}

impl ScoreTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later entries for the same `(cui, term)` replace earlier ones.
    pub fn insert(&mut self, entry: ScoreEntry) {
        self.by_cui
            .entry(entry.cui)
            .or_default()
            .insert(entry.term, entry.score);
    }

    pub fn contains_cui(&self, cui: &str) -> bool {
        self.by_cui.contains_key(cui)
    }

    #[cfg(test)]
    pub fn score(&self, cui: &str, term: &str) -> Option<&str> {
        self.by_cui
            .get(cui)
            .and_then(|terms| terms.get(term))
            .map(String::as_str)
    }

    pub fn n_cuis(&self) -> usize {
        self.by_cui.len()
    }

    pub fn n_terms(&self) -> usize {
        self.by_cui.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_cui.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/scores.rs"]
mod tests;
