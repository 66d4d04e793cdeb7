use crate::session::StudySession;
use chrono::{DateTime, Duration, NaiveDate, Utc};

/// Calendar period selected for a report
///
/// Both ends are whole days: a session matches when its date falls anywhere
/// from the start of `from` to the end of `to`. A missing `to` means the single
/// day `from`; a missing `from` disables filtering entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        DateRange {
            from: Some(from),
            to: Some(to),
        }
    }

    pub fn single_day(day: NaiveDate) -> Self {
        DateRange {
            from: Some(day),
            to: None,
        }
    }

    /// No filtering, every session passes
    pub fn all() -> Self {
        DateRange::default()
    }

    /// The last `days` days up to and including `now`
    pub fn trailing_days(now: DateTime<Utc>, days: i64) -> Self {
        let today = now.date_naive();
        DateRange::new(today - Duration::days(days), today)
    }

    /// Initial report period, the trailing week
    pub fn default_for(now: DateTime<Utc>) -> Self {
        DateRange::trailing_days(now, 7)
    }

    /// Inclusive day bounds, or None when filtering is disabled
    pub fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let from = self.from?;
        Some((from, self.to.unwrap_or(from)))
    }

    pub fn is_inverted(&self) -> bool {
        matches!(self.bounds(), Some((from, to)) if from > to)
    }

    pub fn contains(&self, date: DateTime<Utc>) -> bool {
        match self.bounds() {
            Some((from, to)) => {
                let day = date.date_naive();
                day >= from && day <= to
            }
            None => true,
        }
    }

    /// Sessions whose date falls inside the range, in input order
    pub fn filter<'a>(&self, sessions: &'a [StudySession]) -> Vec<&'a StudySession> {
        sessions.iter().filter(|s| self.contains(s.date)).collect()
    }
}
