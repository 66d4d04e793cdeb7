use crate::row_factories::SessionRowFactory;
use crate::session::{NewStudySession, StudySession};
use log::debug;
use rusqlite::{Connection, Result, params};

const SESSION_COLUMNS: &str = "id, student_id, subject, topic, method, date,
    duration_seconds, questions_total, questions_correct, notes";

pub struct SessionsRepository<'a> {
    conn: &'a Connection,
}

impl<'a> SessionsRepository<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        SessionsRepository { conn }
    }

    /// Stores a session as given; callers validate question counts first
    pub fn insert(&self, session: &NewStudySession) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO study_sessions (student_id, subject, topic, method, date,
                duration_seconds, questions_total, questions_correct, notes)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                session.student_id,
                session.subject.as_str(),
                session.topic,
                session.method.as_str(),
                session.date,
                session.duration_seconds,
                session.questions_total,
                session.questions_correct,
                session.notes,
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        debug!(
            "Stored session {} for student {}: {} / {} ({}s)",
            id,
            session.student_id,
            session.subject.as_str(),
            session.method.as_str(),
            session.duration_seconds
        );
        Ok(id)
    }

    pub fn get(&self, session_id: i64) -> Result<Option<StudySession>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {} FROM study_sessions WHERE id = ?1",
            SESSION_COLUMNS
        ))?;

        let mut rows = stmt.query([session_id])?;

        if let Some(row) = rows.next()? {
            Ok(Some(SessionRowFactory::from_row(row)?))
        } else {
            Ok(None)
        }
    }

    /// All sessions of one student in the order they were recorded
    pub fn for_student(&self, student_id: &str) -> Result<Vec<StudySession>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {} FROM study_sessions WHERE student_id = ?1 ORDER BY id",
            SESSION_COLUMNS
        ))?;

        let rows = stmt.query_map([student_id], SessionRowFactory::from_row)?;

        let mut sessions = Vec::new();
        for session in rows {
            sessions.push(session?);
        }
        debug!(
            "Retrieved {} session(s) for student {}",
            sessions.len(),
            student_id
        );
        Ok(sessions)
    }

    pub fn count(&self) -> Result<i64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM study_sessions", [], |row| row.get(0))?;
        Ok(count)
    }
}
