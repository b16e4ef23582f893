use chrono::{DateTime, Duration, Utc};

use crate::model::AnswerRecord;

//
// ─── PERFORMANCE TIERS ─────────────────────────────────────────────────────────
//

/// Qualitative bucket for a final percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PerformanceTier {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl PerformanceTier {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PerformanceTier::Excellent => "excellent",
            PerformanceTier::Good => "good",
            PerformanceTier::Fair => "fair",
            PerformanceTier::Poor => "poor",
        }
    }
}

/// One row of a performance table: percentages at or above `min_percent` map here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerformanceBand {
    pub min_percent: u32,
    pub tier: PerformanceTier,
    pub message: String,
}

impl PerformanceBand {
    #[must_use]
    pub fn new(min_percent: u32, tier: PerformanceTier, message: impl Into<String>) -> Self {
        Self {
            min_percent,
            tier,
            message: message.into(),
        }
    }
}

/// Ordered thresholds used to pick a performance band.
///
/// Bands are kept sorted by descending `min_percent`; the first band whose threshold
/// the percentage reaches wins. A table always ends in a band at 0 so every
/// percentage classifies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerformanceTable {
    bands: Vec<PerformanceBand>,
}

impl PerformanceTable {
    /// Build a table from arbitrary bands.
    ///
    /// A catch-all `Poor` band at 0 is appended if none of the bands starts at 0.
    #[must_use]
    pub fn new(mut bands: Vec<PerformanceBand>) -> Self {
        bands.sort_by(|left, right| right.min_percent.cmp(&left.min_percent));
        if bands.last().is_none_or(|band| band.min_percent > 0) {
            bands.push(PerformanceBand::new(0, PerformanceTier::Poor, "Keep studying!"));
        }
        Self { bands }
    }

    #[must_use]
    pub fn bands(&self) -> &[PerformanceBand] {
        &self.bands
    }

    #[must_use]
    pub fn classify(&self, percentage: u32) -> &PerformanceBand {
        self.bands
            .iter()
            .find(|band| percentage >= band.min_percent)
            .unwrap_or_else(|| &self.bands[self.bands.len() - 1])
    }
}

impl Default for PerformanceTable {
    fn default() -> Self {
        Self::new(vec![
            PerformanceBand::new(
                90,
                PerformanceTier::Excellent,
                "Outstanding! You have excellent knowledge of web development!",
            ),
            PerformanceBand::new(
                80,
                PerformanceTier::Good,
                "Great job! You have a solid understanding of web development concepts.",
            ),
            PerformanceBand::new(
                70,
                PerformanceTier::Good,
                "Good work! You passed the quiz. Keep studying to improve further.",
            ),
            PerformanceBand::new(
                50,
                PerformanceTier::Fair,
                "Not bad, but there's room for improvement. Review the concepts and try again.",
            ),
            PerformanceBand::new(
                0,
                PerformanceTier::Poor,
                "Keep studying! Web development takes practice. Don't give up!",
            ),
        ])
    }
}

//
// ─── RESULTS ───────────────────────────────────────────────────────────────────
//

/// Rounds `100 * score / total` to the nearest integer, halves rounding up.
#[must_use]
pub fn score_percentage(score: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let score = score.min(total);
    let rounded = (200 * score + total) / (2 * total);
    u32::try_from(rounded).unwrap_or(100)
}

/// Read-only outcome of a completed session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResults {
    score: usize,
    total: usize,
    percentage: u32,
    passed: bool,
    timed_out: usize,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
}

impl QuizResults {
    /// Derive results from the answer log of a finished session.
    #[must_use]
    pub fn from_log(
        log: &[AnswerRecord],
        total: usize,
        passing_score_percent: u32,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Self {
        let score = log.iter().filter(|record| record.is_correct).count();
        let timed_out = log.iter().filter(|record| record.is_timeout()).count();
        let percentage = score_percentage(score, total);

        Self {
            score,
            total,
            percentage,
            passed: percentage >= passing_score_percent,
            timed_out,
            started_at,
            completed_at: completed_at.max(started_at),
        }
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn percentage(&self) -> u32 {
        self.percentage
    }

    #[must_use]
    pub fn passed(&self) -> bool {
        self.passed
    }

    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn incorrect_count(&self) -> usize {
        self.total.saturating_sub(self.score)
    }

    /// Number of questions resolved by the timer rather than an answer.
    #[must_use]
    pub fn timed_out_count(&self) -> usize {
        self.timed_out
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.completed_at - self.started_at
    }

    #[must_use]
    pub fn band<'a>(&self, table: &'a PerformanceTable) -> &'a PerformanceBand {
        table.classify(self.percentage)
    }
}
