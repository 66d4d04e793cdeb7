use crate::essay::{Essay, EssayError, EssayStatus};
use crate::mock_exam::{Breakdown, ExamKind, MockExam, MockExamError};
use crate::session::{SessionError, StudySession};
use crate::subject::{StudyMethod, Subject};
use crate::user::{ProfileType, Student, StudentGoals, UserError};
use rusqlite::Row;
use rusqlite::types::Type;

fn conversion_error<E>(column: usize, err: E) -> rusqlite::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    rusqlite::Error::FromSqlConversionFailure(column, Type::Text, Box::new(err))
}

pub(crate) fn parse_subject(column: usize, value: &str) -> rusqlite::Result<Subject> {
    Subject::from(value)
        .ok_or_else(|| conversion_error(column, SessionError::UnknownSubject(value.to_string())))
}

/// Factory for creating StudySession objects from database rows
pub struct SessionRowFactory;

impl SessionRowFactory {
    /// Creates a StudySession from a database row
    /// Expected columns: id, student_id, subject, topic, method, date,
    ///                   duration_seconds, questions_total, questions_correct, notes
    pub fn from_row(row: &Row) -> rusqlite::Result<StudySession> {
        let subject = parse_subject(2, &row.get::<_, String>(2)?)?;
        let method_label: String = row.get(4)?;
        let method = StudyMethod::from(&method_label)
            .ok_or_else(|| conversion_error(4, SessionError::UnknownMethod(method_label.clone())))?;

        Ok(StudySession {
            id: row.get(0)?,
            student_id: row.get(1)?,
            subject,
            topic: row.get(3)?,
            method,
            date: row.get(5)?,
            duration_seconds: row.get(6)?,
            questions_total: row.get(7)?,
            questions_correct: row.get(8)?,
            notes: row.get(9)?,
        })
    }
}

/// Factory for creating Student objects from database rows
pub struct StudentRowFactory;

impl StudentRowFactory {
    /// Creates a Student from a database row
    /// Expected columns: id, name, email, profile_type, weak_subjects,
    ///                   daily_questions, daily_hours, weekly_hours,
    ///                   weekly_mock_exams, daily_subjects, target_score
    pub fn from_row(row: &Row) -> rusqlite::Result<Student> {
        let profile_label: String = row.get(3)?;
        let profile_type = ProfileType::from(&profile_label).ok_or_else(|| {
            conversion_error(3, UserError::UnknownProfileType(profile_label.clone()))
        })?;
        let weak_subjects = row
            .get::<_, String>(4)?
            .split(';')
            .filter(|label| !label.is_empty())
            .map(|label| parse_subject(4, label))
            .collect::<rusqlite::Result<Vec<Subject>>>()?;

        Ok(Student {
            id: row.get(0)?,
            name: row.get(1)?,
            email: row.get(2)?,
            profile_type,
            weak_subjects,
            goals: StudentGoals {
                daily_questions: row.get(5)?,
                daily_hours: row.get(6)?,
                weekly_hours: row.get(7)?,
                weekly_mock_exams: row.get(8)?,
                daily_subjects: row.get(9)?,
                target_score: row.get(10)?,
            },
        })
    }

    pub fn weak_subjects_column(subjects: &[Subject]) -> String {
        subjects
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(";")
    }
}

/// Factory for creating MockExam objects from database rows
pub struct MockExamRowFactory;

impl MockExamRowFactory {
    /// Creates a MockExam without its breakdown
    /// Expected columns: id, student_id, title, date, kind, score, max_score
    pub fn from_row(row: &Row) -> rusqlite::Result<MockExam> {
        let kind_label: String = row.get(4)?;
        let kind = ExamKind::from(&kind_label)
            .ok_or_else(|| conversion_error(4, MockExamError::UnknownKind(kind_label.clone())))?;

        Ok(MockExam {
            id: row.get(0)?,
            student_id: row.get(1)?,
            title: row.get(2)?,
            date: row.get(3)?,
            kind,
            score: row.get(5)?,
            max_score: row.get(6)?,
            breakdown: Breakdown::new(),
        })
    }

    /// Adds one breakdown row to a breakdown being rebuilt
    /// Expected columns: subject, correct, total
    pub fn add_breakdown_row(breakdown: &mut Breakdown, row: &Row) -> rusqlite::Result<()> {
        let subject = parse_subject(0, &row.get::<_, String>(0)?)?;
        breakdown
            .insert(subject, row.get(1)?, row.get(2)?)
            .map_err(|e| conversion_error(1, e))
    }
}

/// Factory for creating Essay objects from database rows
pub struct EssayRowFactory;

impl EssayRowFactory {
    /// Expected columns: id, student_id, title, theme, date, status, score, feedback
    pub fn from_row(row: &Row) -> rusqlite::Result<Essay> {
        let status_label: String = row.get(5)?;
        let status = EssayStatus::from(&status_label)
            .ok_or_else(|| conversion_error(5, EssayError::UnknownStatus(status_label.clone())))?;

        Ok(Essay {
            id: row.get(0)?,
            student_id: row.get(1)?,
            title: row.get(2)?,
            theme: row.get(3)?,
            date: row.get(4)?,
            status,
            score: row.get(6)?,
            feedback: row.get(7)?,
        })
    }
}
