use crate::mock_exam::{MockExam, NewMockExam};
use crate::row_factories::MockExamRowFactory;
use log::debug;
use rusqlite::{Connection, Result, params};

pub struct MockExamsRepository<'a> {
    conn: &'a Connection,
}

impl<'a> MockExamsRepository<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        MockExamsRepository { conn }
    }

    /// Stores the exam and its breakdown together
    pub fn insert(&self, exam: &NewMockExam) -> Result<i64> {
        let tx = self.conn.unchecked_transaction()?;
        tx.execute(
            "INSERT INTO mock_exams (student_id, title, date, kind, score, max_score)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                exam.student_id,
                exam.title,
                exam.date,
                exam.kind.as_str(),
                exam.score,
                exam.max_score
            ],
        )?;
        let id = tx.last_insert_rowid();

        for (subject, tally) in exam.breakdown.iter() {
            tx.execute(
                "INSERT INTO mock_exam_breakdowns (mock_exam_id, subject, correct, total)
                 VALUES (?1, ?2, ?3, ?4)",
                params![id, subject.as_str(), tally.correct, tally.total],
            )?;
        }
        tx.commit()?;

        debug!("Stored mock exam {} for student {}", id, exam.student_id);
        Ok(id)
    }

    pub fn for_student(&self, student_id: &str) -> Result<Vec<MockExam>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, student_id, title, date, kind, score, max_score
             FROM mock_exams
             WHERE student_id = ?1
             ORDER BY date DESC, id DESC",
        )?;

        let rows = stmt.query_map([student_id], MockExamRowFactory::from_row)?;

        let mut exams = Vec::new();
        for exam in rows {
            let mut exam = exam?;
            self.load_breakdown(&mut exam)?;
            exams.push(exam);
        }
        Ok(exams)
    }

    fn load_breakdown(&self, exam: &mut MockExam) -> Result<()> {
        let mut stmt = self.conn.prepare(
            "SELECT subject, correct, total FROM mock_exam_breakdowns WHERE mock_exam_id = ?1",
        )?;
        let mut rows = stmt.query([exam.id])?;
        while let Some(row) = rows.next()? {
            MockExamRowFactory::add_breakdown_row(&mut exam.breakdown, row)?;
        }
        Ok(())
    }

    pub fn count(&self) -> Result<i64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM mock_exams", [], |row| row.get(0))?;
        Ok(count)
    }
}
