use crate::essay::{Essay, EssayStatus, NewEssay};
use crate::row_factories::EssayRowFactory;
use log::debug;
use rusqlite::{Connection, Result, params};

pub struct EssaysRepository<'a> {
    conn: &'a Connection,
}

impl<'a> EssaysRepository<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        EssaysRepository { conn }
    }

    pub fn insert(&self, essay: &NewEssay) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO essays (student_id, title, theme, date, status, score, feedback)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                essay.student_id,
                essay.title,
                essay.theme,
                essay.date,
                essay.status.as_str(),
                essay.score,
                essay.feedback
            ],
        )?;
        let id = self.conn.last_insert_rowid();

        debug!(
            "Stored essay {} ({}) for student {}",
            id,
            essay.status.as_str(),
            essay.student_id
        );
        Ok(id)
    }

    /// Marks the essay corrected with its grade; false when no such essay exists
    pub fn record_correction(
        &self,
        essay_id: i64,
        score: u32,
        feedback: Option<&str>,
    ) -> Result<bool> {
        let changed = self.conn.execute(
            "UPDATE essays SET status = ?1, score = ?2, feedback = ?3 WHERE id = ?4",
            params![EssayStatus::Corrected.as_str(), score, feedback, essay_id],
        )?;
        debug!("Recorded correction for essay {}: {}", essay_id, score);
        Ok(changed > 0)
    }

    /// Most recent first
    pub fn for_student(&self, student_id: &str) -> Result<Vec<Essay>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, student_id, title, theme, date, status, score, feedback
             FROM essays
             WHERE student_id = ?1
             ORDER BY date DESC, id DESC",
        )?;

        let essays = stmt
            .query_map([student_id], EssayRowFactory::from_row)?
            .collect::<Result<Vec<Essay>>>()?;
        Ok(essays)
    }

    pub fn count(&self) -> Result<i64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM essays", [], |row| row.get(0))?;
        Ok(count)
    }
}
