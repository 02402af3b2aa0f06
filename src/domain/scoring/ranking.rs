//! Ranking - options ordered by total score, best first.

use serde::{Deserialize, Serialize};

/// One option's place in the results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredOption {
    pub name: String,
    pub total_score: u32,
    /// 1-based place in the ranking.
    pub rank: usize,
    /// Position of the option in the session's insertion order.
    pub insertion_index: usize,
}

/// Options ordered by descending total score.
///
/// Ties keep insertion order, so among equal totals the option entered
/// first ranks higher and is the one returned by [`Ranking::top`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ranking {
    entries: Vec<ScoredOption>,
}

impl Ranking {
    /// Builds a ranking from `(name, total)` pairs given in insertion order.
    pub fn from_totals<I, S>(totals: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        let mut entries: Vec<ScoredOption> = totals
            .into_iter()
            .enumerate()
            .map(|(index, (name, total))| ScoredOption {
                name: name.into(),
                total_score: total,
                rank: 0,
                insertion_index: index,
            })
            .collect();

        // sort_by is stable: equal totals stay in insertion order
        entries.sort_by(|a, b| b.total_score.cmp(&a.total_score));
        for (position, entry) in entries.iter_mut().enumerate() {
            entry.rank = position + 1;
        }

        Self { entries }
    }

    /// Returns the top-ranked option.
    pub fn top(&self) -> Option<&ScoredOption> {
        self.entries.first()
    }

    /// Returns all entries, best first.
    pub fn entries(&self) -> &[ScoredOption] {
        &self.entries
    }

    /// Finds an option's entry by name (first match).
    pub fn get(&self, name: &str) -> Option<&ScoredOption> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Returns true if the runner-up has the same total as the top option.
    pub fn is_tied_at_top(&self) -> bool {
        matches!(self.margin(), Some(0))
    }

    /// Points between the top option and the runner-up.
    ///
    /// None when fewer than two options were ranked.
    pub fn margin(&self) -> Option<u32> {
        match self.entries.as_slice() {
            [first, second, ..] => Some(first.total_score - second.total_score),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
