use crate::analytics::accuracy;
use crate::subject::Subject;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MockExamError {
    #[error("{subject}: {correct} correct out of {total}")]
    InvalidTally {
        subject: &'static str,
        correct: u32,
        total: u32,
    },

    #[error("score {score} exceeds maximum {max_score}")]
    ScoreAboveMaximum { score: u32, max_score: u32 },

    #[error("unknown exam kind '{0}'")]
    UnknownKind(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExamKind {
    Enem,
    Fuvest,
    Unicamp,
    Other,
}

impl ExamKind {
    pub fn as_str(&self) -> &str {
        match self {
            ExamKind::Enem => "ENEM",
            ExamKind::Fuvest => "FUVEST",
            ExamKind::Unicamp => "UNICAMP",
            ExamKind::Other => "Outros",
        }
    }

    pub fn from(s: &str) -> Option<Self> {
        match s {
            "ENEM" => Some(ExamKind::Enem),
            "FUVEST" => Some(ExamKind::Fuvest),
            "UNICAMP" => Some(ExamKind::Unicamp),
            "Outros" => Some(ExamKind::Other),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubjectTally {
    pub correct: u32,
    pub total: u32,
}

/// Per-subject correctness of one mock exam
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Breakdown {
    tallies: BTreeMap<Subject, SubjectTally>,
}

impl Breakdown {
    pub fn new() -> Self {
        Breakdown::default()
    }

    /// Records a subject's tally, rejecting more correct answers than questions
    pub fn insert(&mut self, subject: Subject, correct: u32, total: u32) -> Result<(), MockExamError> {
        if correct > total {
            return Err(MockExamError::InvalidTally {
                subject: subject.as_str(),
                correct,
                total,
            });
        }
        self.tallies.insert(subject, SubjectTally { correct, total });
        Ok(())
    }

    pub fn from_tallies(
        tallies: impl IntoIterator<Item = (Subject, u32, u32)>,
    ) -> Result<Self, MockExamError> {
        let mut breakdown = Breakdown::new();
        for (subject, correct, total) in tallies {
            breakdown.insert(subject, correct, total)?;
        }
        Ok(breakdown)
    }

    pub fn get(&self, subject: Subject) -> Option<SubjectTally> {
        self.tallies.get(&subject).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Subject, SubjectTally)> + '_ {
        self.tallies.iter().map(|(subject, tally)| (*subject, *tally))
    }

    pub fn is_empty(&self) -> bool {
        self.tallies.is_empty()
    }

    pub fn accuracy(&self, subject: Subject) -> Option<u32> {
        self.get(subject)
            .map(|t| accuracy(t.correct as u64, t.total as u64))
    }

    pub fn overall_accuracy(&self) -> u32 {
        let correct: u64 = self.tallies.values().map(|t| t.correct as u64).sum();
        let total: u64 = self.tallies.values().map(|t| t.total as u64).sum();
        accuracy(correct, total)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MockExam {
    pub id: i64,
    pub student_id: String,
    pub title: String,
    pub date: DateTime<Utc>,
    pub kind: ExamKind,
    pub score: u32,
    pub max_score: u32,
    pub breakdown: Breakdown,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewMockExam {
    pub student_id: String,
    pub title: String,
    pub date: DateTime<Utc>,
    pub kind: ExamKind,
    pub score: u32,
    pub max_score: u32,
    pub breakdown: Breakdown,
}

impl NewMockExam {
    pub fn validate(&self) -> Result<(), MockExamError> {
        if self.score > self.max_score {
            return Err(MockExamError::ScoreAboveMaximum {
                score: self.score,
                max_score: self.max_score,
            });
        }
        Ok(())
    }

    pub fn into_mock_exam(self, id: i64) -> MockExam {
        MockExam {
            id,
            student_id: self.student_id,
            title: self.title,
            date: self.date,
            kind: self.kind,
            score: self.score,
            max_score: self.max_score,
            breakdown: self.breakdown,
        }
    }
}
