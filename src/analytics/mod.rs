pub mod goals;
pub mod methods;
pub mod overview;
pub mod questions;
pub mod shifts;
pub mod subject_detail;
pub mod subject_hours;

use crate::date_range::DateRange;
use crate::session::StudySession;

pub use goals::{GoalKind, GoalProgress, goal_progress};
pub use methods::{MethodShare, method_distribution};
pub use overview::{StudentOverview, overview};
pub use questions::{AnswerOutcome, QuestionBucket, questions_split, total_questions};
pub use shifts::{Shift, ShiftDistribution, ShiftSlice, most_productive_shift, shift_distribution};
pub use subject_detail::{AccuracyBand, SubjectDetail, subject_detail};
pub use subject_hours::{SubjectHours, SubjectShare, subject_hours, subject_shares};

/// Analytics facade over one student's sessions for one period
///
/// The range is applied once on construction; every view is then a pure
/// reduction over the filtered sessions, recomputed on each call.
pub struct Analytics<'a> {
    sessions: Vec<&'a StudySession>,
}

impl<'a> Analytics<'a> {
    pub fn new(sessions: &'a [StudySession], range: &DateRange) -> Self {
        Analytics {
            sessions: range.filter(sessions),
        }
    }

    pub fn sessions(&self) -> &[&'a StudySession] {
        &self.sessions
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn subject_hours(&self) -> Vec<SubjectHours> {
        subject_hours(&self.sessions)
    }

    pub fn questions_split(&self) -> Vec<QuestionBucket> {
        questions_split(&self.sessions)
    }

    pub fn method_distribution(&self) -> Vec<MethodShare> {
        method_distribution(&self.sessions)
    }

    pub fn subject_detail(&self) -> Vec<SubjectDetail> {
        subject_detail(&self.sessions)
    }

    pub fn shift_distribution(&self) -> ShiftDistribution {
        shift_distribution(&self.sessions)
    }

    pub fn overview(&self) -> StudentOverview {
        overview(&self.sessions)
    }
}

pub fn compute_subject_hours(sessions: &[StudySession], range: &DateRange) -> Vec<SubjectHours> {
    Analytics::new(sessions, range).subject_hours()
}

pub fn compute_questions_split(
    sessions: &[StudySession],
    range: &DateRange,
) -> Vec<QuestionBucket> {
    Analytics::new(sessions, range).questions_split()
}

pub fn compute_method_distribution(
    sessions: &[StudySession],
    range: &DateRange,
) -> Vec<MethodShare> {
    Analytics::new(sessions, range).method_distribution()
}

pub fn compute_subject_detail(sessions: &[StudySession], range: &DateRange) -> Vec<SubjectDetail> {
    Analytics::new(sessions, range).subject_detail()
}

pub fn compute_shift_distribution(
    sessions: &[StudySession],
    range: &DateRange,
) -> ShiftDistribution {
    Analytics::new(sessions, range).shift_distribution()
}

/// `round(100 * correct / total)`, 0 when nothing was answered
pub fn accuracy(correct: u64, total: u64) -> u32 {
    if total == 0 {
        0
    } else {
        percentage(correct as f64, total as f64)
    }
}

/// `round(100 * part / whole)` for a positive whole
pub(crate) fn percentage(part: f64, whole: f64) -> u32 {
    ((part / whole) * 100.0).round() as u32
}

/// Accumulator slot for `key`, created on first sight
///
/// Groups stay in first-seen order so that ties in later stable sorts keep
/// the order in which sessions were recorded.
pub(crate) fn group_entry<K: PartialEq, V: Default>(groups: &mut Vec<(K, V)>, key: K) -> &mut V {
    let index = match groups.iter().position(|(k, _)| *k == key) {
        Some(index) => index,
        None => {
            groups.push((key, V::default()));
            groups.len() - 1
        }
    };
    &mut groups[index].1
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::subject::{StudyMethod, Subject};
    use chrono::NaiveDate;

    #[test]
    fn test_accuracy_guards_zero_total() {
        assert_eq!(accuracy(0, 0), 0);
        assert_eq!(accuracy(15, 20), 75);
        assert_eq!(accuracy(2, 3), 67);
        assert_eq!(accuracy(1, 8), 13);
    }

    #[test]
    fn test_group_entry_keeps_first_seen_order() {
        let mut groups: Vec<(&str, u32)> = Vec::new();
        *group_entry(&mut groups, "b") += 1;
        *group_entry(&mut groups, "a") += 1;
        *group_entry(&mut groups, "b") += 1;
        assert_eq!(groups, vec![("b", 2), ("a", 1)]);
    }

    #[test]
    fn test_empty_input_degrades_everywhere() {
        let sessions: Vec<StudySession> = Vec::new();
        let analytics = Analytics::new(&sessions, &DateRange::all());

        assert!(analytics.is_empty());
        assert!(analytics.subject_hours().is_empty());
        assert!(analytics.questions_split().is_empty());
        assert!(analytics.method_distribution().is_empty());
        assert!(analytics.subject_detail().is_empty());
        let shifts = analytics.shift_distribution();
        assert!(shifts.slices.is_empty());
        assert_eq!(shifts.most_productive_label(), "N/A");
    }

    #[test]
    fn test_range_excluding_all_sessions_matches_empty_input() {
        let sessions = vec![with_questions(
            session(Subject::Biology, StudyMethod::Review, 3600),
            10,
            7,
        )];
        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 7).unwrap(),
        );

        assert!(compute_subject_hours(&sessions, &range).is_empty());
        assert!(compute_questions_split(&sessions, &range).is_empty());
        assert!(compute_method_distribution(&sessions, &range).is_empty());
        assert!(compute_subject_detail(&sessions, &range).is_empty());
        assert_eq!(
            compute_shift_distribution(&sessions, &range).most_productive_label(),
            "N/A"
        );
    }

    #[test]
    fn test_reducers_are_idempotent() {
        let sessions = vec![
            with_questions(session(Subject::Mathematics, StudyMethod::Exercises, 5400), 20, 15),
            at_hour(session(Subject::History, StudyMethod::Book, 1800), 20),
            session(Subject::Mathematics, StudyMethod::VideoLesson, 2700),
        ];
        let range = DateRange::all();

        assert_eq!(
            compute_subject_hours(&sessions, &range),
            compute_subject_hours(&sessions, &range)
        );
        assert_eq!(
            compute_questions_split(&sessions, &range),
            compute_questions_split(&sessions, &range)
        );
        assert_eq!(
            compute_method_distribution(&sessions, &range),
            compute_method_distribution(&sessions, &range)
        );
        assert_eq!(
            compute_subject_detail(&sessions, &range),
            compute_subject_detail(&sessions, &range)
        );
        assert_eq!(
            compute_shift_distribution(&sessions, &range),
            compute_shift_distribution(&sessions, &range)
        );
    }
}
