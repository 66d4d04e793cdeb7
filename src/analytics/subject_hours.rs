use super::{group_entry, percentage};
use crate::session::StudySession;
use crate::subject::Subject;
use crate::time_format::round_to_tenth;

#[derive(Debug, Clone, PartialEq)]
pub struct SubjectHours {
    pub subject: Subject,
    /// Rounded to one decimal place
    pub hours: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubjectShare {
    pub subject: Subject,
    pub percent: u32,
}

/// Hours studied per subject, largest first
pub fn subject_hours(sessions: &[&StudySession]) -> Vec<SubjectHours> {
    let mut totals: Vec<(Subject, f64)> = Vec::new();
    for session in sessions {
        *group_entry(&mut totals, session.subject) += session.hours();
    }

    let mut result: Vec<SubjectHours> = totals
        .into_iter()
        .map(|(subject, hours)| SubjectHours {
            subject,
            hours: round_to_tenth(hours),
        })
        .collect();
    result.sort_by(|a, b| b.hours.total_cmp(&a.hours));
    result
}

/// Share of the total hours for the first `limit` subjects
pub fn subject_shares(hours: &[SubjectHours], limit: usize) -> Vec<SubjectShare> {
    let total: f64 = hours.iter().map(|h| h.hours).sum();
    hours
        .iter()
        .take(limit)
        .map(|h| SubjectShare {
            subject: h.subject,
            percent: if total > 0.0 {
                percentage(h.hours, total)
            } else {
                0
            },
        })
        .collect()
}
