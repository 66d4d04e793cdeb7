use super::{accuracy, group_entry};
use crate::session::StudySession;
use crate::subject::{StudyMethod, Subject};
use crate::time_format::round_to_tenth;

/// One row of the per-subject breakdown table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectDetail {
    pub subject: Subject,
    /// Hours with one decimal place, e.g. "2.5"
    pub hours: String,
    pub questions: u64,
    /// 0-100, 0 when no questions were answered
    pub accuracy: u32,
    /// Distinct methods in first-use order, comma separated
    pub methods: String,
}

impl SubjectDetail {
    pub fn band(&self) -> AccuracyBand {
        AccuracyBand::from_accuracy(self.accuracy)
    }
}

/// Traffic-light grade for an accuracy percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccuracyBand {
    High,
    Medium,
    Low,
}

impl AccuracyBand {
    pub fn from_accuracy(accuracy: u32) -> Self {
        if accuracy >= 70 {
            AccuracyBand::High
        } else if accuracy >= 50 {
            AccuracyBand::Medium
        } else {
            AccuracyBand::Low
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            AccuracyBand::High => "#22c55e",
            AccuracyBand::Medium => "#eab308",
            AccuracyBand::Low => "#ef4444",
        }
    }
}

#[derive(Default)]
struct SubjectTotals {
    duration_seconds: u64,
    correct: u64,
    total: u64,
    methods: Vec<StudyMethod>,
}

pub fn subject_detail(sessions: &[&StudySession]) -> Vec<SubjectDetail> {
    let mut stats: Vec<(Subject, SubjectTotals)> = Vec::new();
    for session in sessions {
        let entry = group_entry(&mut stats, session.subject);
        entry.duration_seconds += session.duration_seconds as u64;
        // correct answers only count alongside a recorded, non-zero total
        if let Some(total) = session.questions_total.filter(|t| *t > 0) {
            entry.total += total as u64;
            entry.correct += session.questions_correct.unwrap_or(0) as u64;
        }
        if !entry.methods.contains(&session.method) {
            entry.methods.push(session.method);
        }
    }

    let mut rows: Vec<(f64, SubjectDetail)> = stats
        .into_iter()
        .map(|(subject, data)| {
            let hours = round_to_tenth(data.duration_seconds as f64 / 3600.0);
            let methods: Vec<&str> = data.methods.iter().map(|m| m.as_str()).collect();
            (
                hours,
                SubjectDetail {
                    subject,
                    hours: format!("{:.1}", hours),
                    questions: data.total,
                    accuracy: accuracy(data.correct, data.total),
                    methods: methods.join(", "),
                },
            )
        })
        .collect();
    rows.sort_by(|a, b| b.0.total_cmp(&a.0));
    rows.into_iter().map(|(_, row)| row).collect()
}
