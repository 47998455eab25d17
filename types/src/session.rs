//! Session records, the in-memory history, and per-session summaries.

use std::fmt;

use crate::Face;

/// Share of `count` in `total`, as a percentage.
///
/// Returns `0.0` when `total` is zero.
#[must_use]
pub fn percentage(count: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (count as f64 / total as f64) * 100.0
}

/// Heads/tails counts of one finished session. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionRecord {
    heads: u64,
    tails: u64,
}

impl SessionRecord {
    #[must_use]
    pub const fn new(heads: u64, tails: u64) -> Self {
        Self { heads, tails }
    }

    #[must_use]
    pub const fn heads(&self) -> u64 {
        self.heads
    }

    #[must_use]
    pub const fn tails(&self) -> u64 {
        self.tails
    }

    #[must_use]
    pub const fn total(&self) -> u64 {
        self.heads.saturating_add(self.tails)
    }
}

/// Append-only, chronological log of finished sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionHistory {
    records: Vec<SessionRecord>,
}

impl SessionHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: SessionRecord) {
        self.records.push(record);
    }

    #[must_use]
    pub fn records(&self) -> &[SessionRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn latest(&self) -> Option<&SessionRecord> {
        self.records.last()
    }

    /// One line per session, 1-indexed, oldest first.
    #[must_use]
    pub fn listing(&self) -> Vec<String> {
        self.records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                format!(
                    "Session {}: Heads = {}, Tails = {}",
                    index + 1,
                    record.heads,
                    record.tails
                )
            })
            .collect()
    }
}

/// Result of a completed toss session, rendered in the results block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSummary {
    heads: u64,
    tails: u64,
}

impl SessionSummary {
    #[must_use]
    pub const fn new(heads: u64, tails: u64) -> Self {
        Self { heads, tails }
    }

    #[must_use]
    pub const fn heads(&self) -> u64 {
        self.heads
    }

    #[must_use]
    pub const fn tails(&self) -> u64 {
        self.tails
    }

    #[must_use]
    pub const fn total(&self) -> u64 {
        self.heads.saturating_add(self.tails)
    }

    #[must_use]
    pub const fn count(&self, face: Face) -> u64 {
        match face {
            Face::Heads => self.heads,
            Face::Tails => self.tails,
        }
    }

    #[must_use]
    pub fn heads_percentage(&self) -> f64 {
        percentage(self.heads, self.total())
    }

    #[must_use]
    pub fn tails_percentage(&self) -> f64 {
        percentage(self.tails, self.total())
    }

    #[must_use]
    pub const fn record(&self) -> SessionRecord {
        SessionRecord::new(self.heads, self.tails)
    }

    /// The three result lines: total, heads, tails.
    #[must_use]
    pub fn lines(&self) -> [String; 3] {
        [
            format!("Total Flips: {}", self.total()),
            format!("Heads: {} ({:.2}%)", self.heads, self.heads_percentage()),
            format!("Tails: {} ({:.2}%)", self.tails, self.tails_percentage()),
        ]
    }
}

impl fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [total, heads, tails] = self.lines();
        write!(f, "{total}\n{heads}\n{tails}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_guards_zero_total() {
        assert!(percentage(0, 0).abs() < f64::EPSILON);
        assert!(percentage(5, 0).abs() < f64::EPSILON);
    }

    #[test]
    fn percentage_of_total() {
        assert!((percentage(1, 4) - 25.0).abs() < f64::EPSILON);
        assert!((percentage(10, 10) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn summary_formats_two_decimals() {
        let summary = SessionSummary::new(1, 2);
        assert_eq!(
            summary.to_string(),
            "Total Flips: 3\nHeads: 1 (33.33%)\nTails: 2 (66.67%)"
        );
    }

    #[test]
    fn empty_summary_reports_zero_percent() {
        let summary = SessionSummary::new(0, 0);
        assert_eq!(
            summary.lines(),
            [
                "Total Flips: 0".to_string(),
                "Heads: 0 (0.00%)".to_string(),
                "Tails: 0 (0.00%)".to_string(),
            ]
        );
    }

    #[test]
    fn summary_counts_by_face() {
        let summary = SessionSummary::new(7, 3);
        assert_eq!(summary.count(Face::Heads), 7);
        assert_eq!(summary.count(Face::Tails), 3);
        assert_eq!(summary.record(), SessionRecord::new(7, 3));
    }

    #[test]
    fn history_lists_sessions_in_order() {
        let mut history = SessionHistory::new();
        assert!(history.listing().is_empty());

        history.push(SessionRecord::new(3, 2));
        history.push(SessionRecord::new(0, 3));

        assert_eq!(history.len(), 2);
        assert_eq!(history.latest(), Some(&SessionRecord::new(0, 3)));
        assert_eq!(
            history.listing(),
            vec![
                "Session 1: Heads = 3, Tails = 2".to_string(),
                "Session 2: Heads = 0, Tails = 3".to_string(),
            ]
        );
    }

    #[test]
    fn record_total_sums_faces() {
        let record = SessionRecord::new(4, 6);
        assert_eq!(record.total(), 10);
    }
}
