pub mod connection;
pub mod essays;
pub mod mock_exams;
pub mod sessions;
pub mod students;

use crate::date_provider::{DateProvider, SystemDateProvider};
use crate::error::StoreError;
use crate::essay::{Essay, NewEssay, validate_score};
use crate::mock_exam::{MockExam, NewMockExam};
use crate::session::{NewStudySession, StudySession};
use crate::user::{ProfileType, Student, StudentGoals};
use chrono::{DateTime, Utc};
use rusqlite::{Connection, Result};
use std::sync::Arc;

pub use essays::EssaysRepository;
pub use mock_exams::MockExamsRepository;
pub use sessions::SessionsRepository;
pub use students::StudentsRepository;

/// Main Database struct providing access to all repositories
pub struct Database {
    pub conn: Connection,
    date_provider: Arc<dyn DateProvider>,
}

impl Database {
    pub fn new(db_path: &str) -> Result<Self> {
        Self::init(db_path, Arc::new(SystemDateProvider))
    }

    pub fn with_date_provider(db_path: &str, date_provider: Arc<dyn DateProvider>) -> Result<Self> {
        Self::init(db_path, date_provider)
    }

    fn init(db_path: &str, date_provider: Arc<dyn DateProvider>) -> Result<Self> {
        let conn = connection::init_connection(db_path)?;
        Ok(Database {
            conn,
            date_provider,
        })
    }

    /// "Now" as seen by reports and goals
    pub fn current_time(&self) -> DateTime<Utc> {
        self.date_provider.get_current_time()
    }

    pub fn date_provider(&self) -> Arc<dyn DateProvider> {
        Arc::clone(&self.date_provider)
    }

    // ===== Students =====

    pub fn add_student(&self, student: &Student) -> Result<()> {
        StudentsRepository::new(&self.conn).insert(student)
    }

    pub fn get_student(&self, student_id: &str) -> Result<Option<Student>> {
        StudentsRepository::new(&self.conn).get(student_id)
    }

    pub fn find_student_by_email(&self, email: &str) -> Result<Option<Student>> {
        StudentsRepository::new(&self.conn).get_by_email(email)
    }

    pub fn students(&self) -> Result<Vec<Student>> {
        StudentsRepository::new(&self.conn).list()
    }

    pub fn update_goals(&self, student_id: &str, goals: &StudentGoals) -> Result<bool> {
        StudentsRepository::new(&self.conn).update_goals(student_id, goals)
    }

    pub fn update_profile_type(&self, student_id: &str, profile_type: ProfileType) -> Result<bool> {
        StudentsRepository::new(&self.conn).update_profile_type(student_id, profile_type)
    }

    pub fn count_students(&self) -> Result<i64> {
        StudentsRepository::new(&self.conn).count()
    }

    // ===== Study sessions =====

    /// Validates question counts, then stores the session
    pub fn record_session(&self, session: &NewStudySession) -> std::result::Result<i64, StoreError> {
        session.validate()?;
        Ok(SessionsRepository::new(&self.conn).insert(session)?)
    }

    pub fn get_session(&self, session_id: i64) -> Result<Option<StudySession>> {
        SessionsRepository::new(&self.conn).get(session_id)
    }

    pub fn sessions_for_student(&self, student_id: &str) -> Result<Vec<StudySession>> {
        SessionsRepository::new(&self.conn).for_student(student_id)
    }

    pub fn count_sessions(&self) -> Result<i64> {
        SessionsRepository::new(&self.conn).count()
    }

    // ===== Mock exams =====

    pub fn add_mock_exam(&self, exam: &NewMockExam) -> std::result::Result<i64, StoreError> {
        exam.validate()?;
        Ok(MockExamsRepository::new(&self.conn).insert(exam)?)
    }

    pub fn mock_exams_for_student(&self, student_id: &str) -> Result<Vec<MockExam>> {
        MockExamsRepository::new(&self.conn).for_student(student_id)
    }

    pub fn count_mock_exams(&self) -> Result<i64> {
        MockExamsRepository::new(&self.conn).count()
    }

    // ===== Essays =====

    pub fn add_essay(&self, essay: &NewEssay) -> std::result::Result<i64, StoreError> {
        essay.validate()?;
        Ok(EssaysRepository::new(&self.conn).insert(essay)?)
    }

    /// Grades an essay; false when the essay does not exist
    pub fn correct_essay(
        &self,
        essay_id: i64,
        score: u32,
        feedback: Option<&str>,
    ) -> std::result::Result<bool, StoreError> {
        validate_score(score)?;
        Ok(EssaysRepository::new(&self.conn).record_correction(essay_id, score, feedback)?)
    }

    pub fn essays_for_student(&self, student_id: &str) -> Result<Vec<Essay>> {
        EssaysRepository::new(&self.conn).for_student(student_id)
    }

    pub fn count_essays(&self) -> Result<i64> {
        EssaysRepository::new(&self.conn).count()
    }
}
