use crate::subject::{StudyMethod, Subject};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("questions_correct ({correct}) exceeds questions_total ({total})")]
    CorrectExceedsTotal { correct: u32, total: u32 },

    #[error("questions_correct recorded without questions_total")]
    CorrectWithoutTotal,

    #[error("unknown subject '{0}'")]
    UnknownSubject(String),

    #[error("unknown study method '{0}'")]
    UnknownMethod(String),
}

/// One completed study interval
#[derive(Debug, Clone, PartialEq)]
pub struct StudySession {
    pub id: i64,
    pub student_id: String,
    pub subject: Subject,
    pub topic: String,
    pub method: StudyMethod,
    pub date: DateTime<Utc>,
    pub duration_seconds: u32,
    pub questions_total: Option<u32>,
    pub questions_correct: Option<u32>,
    pub notes: Option<String>,
}

impl StudySession {
    pub fn hours(&self) -> f64 {
        self.duration_seconds as f64 / 3600.0
    }
}

/// A study interval that has not been recorded yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewStudySession {
    pub student_id: String,
    pub subject: Subject,
    pub topic: String,
    pub method: StudyMethod,
    pub date: DateTime<Utc>,
    pub duration_seconds: u32,
    pub questions_total: Option<u32>,
    pub questions_correct: Option<u32>,
    pub notes: Option<String>,
}

impl NewStudySession {
    pub fn new(
        student_id: &str,
        subject: Subject,
        topic: &str,
        method: StudyMethod,
        date: DateTime<Utc>,
        duration_seconds: u32,
    ) -> Self {
        NewStudySession {
            student_id: student_id.to_string(),
            subject,
            topic: topic.to_string(),
            method,
            date,
            duration_seconds,
            questions_total: None,
            questions_correct: None,
            notes: None,
        }
    }

    pub fn with_questions(mut self, total: u32, correct: u32) -> Self {
        self.questions_total = Some(total);
        self.questions_correct = Some(correct);
        self
    }

    pub fn with_notes(mut self, notes: &str) -> Self {
        self.notes = Some(notes.to_string());
        self
    }

    /// Checks the question counts before the session is recorded
    pub fn validate(&self) -> Result<(), SessionError> {
        match (self.questions_total, self.questions_correct) {
            (None, Some(_)) => Err(SessionError::CorrectWithoutTotal),
            (Some(total), Some(correct)) if correct > total => {
                Err(SessionError::CorrectExceedsTotal { correct, total })
            }
            _ => Ok(()),
        }
    }

    pub fn into_session(self, id: i64) -> StudySession {
        StudySession {
            id,
            student_id: self.student_id,
            subject: self.subject,
            topic: self.topic,
            method: self.method,
            date: self.date,
            duration_seconds: self.duration_seconds,
            questions_total: self.questions_total,
            questions_correct: self.questions_correct,
            notes: self.notes,
        }
    }
}
