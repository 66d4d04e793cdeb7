use crate::essay::EssayError;
use crate::mock_exam::MockExamError;
use crate::session::SessionError;
use thiserror::Error;

/// Failure to record something through the `Database` facade
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid study session: {0}")]
    InvalidSession(#[from] SessionError),

    #[error("invalid mock exam: {0}")]
    InvalidMockExam(#[from] MockExamError),

    #[error("invalid essay: {0}")]
    InvalidEssay(#[from] EssayError),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("user '{viewer}' may not view student '{student_id}'")]
    AccessDenied { viewer: String, student_id: String },

    #[error("student '{0}' not found")]
    StudentNotFound(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}
