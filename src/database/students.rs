use crate::row_factories::StudentRowFactory;
use crate::user::{ProfileType, Student, StudentGoals};
use log::debug;
use rusqlite::{Connection, Result, params};

const STUDENT_COLUMNS: &str = "id, name, email, profile_type, weak_subjects,
    daily_questions, daily_hours, weekly_hours, weekly_mock_exams, daily_subjects, target_score";

pub struct StudentsRepository<'a> {
    conn: &'a Connection,
}

impl<'a> StudentsRepository<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        StudentsRepository { conn }
    }

    pub fn insert(&self, student: &Student) -> Result<()> {
        self.conn.execute(
            "INSERT INTO students (id, name, email, profile_type, weak_subjects,
                daily_questions, daily_hours, weekly_hours, weekly_mock_exams,
                daily_subjects, target_score)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            params![
                student.id,
                student.name,
                student.email,
                student.profile_type.as_str(),
                StudentRowFactory::weak_subjects_column(&student.weak_subjects),
                student.goals.daily_questions,
                student.goals.daily_hours,
                student.goals.weekly_hours,
                student.goals.weekly_mock_exams,
                student.goals.daily_subjects,
                student.goals.target_score,
            ],
        )?;
        debug!("Stored student {} ({})", student.id, student.email);
        Ok(())
    }

    pub fn get(&self, student_id: &str) -> Result<Option<Student>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {} FROM students WHERE id = ?1", STUDENT_COLUMNS))?;

        let mut rows = stmt.query([student_id])?;

        if let Some(row) = rows.next()? {
            Ok(Some(StudentRowFactory::from_row(row)?))
        } else {
            Ok(None)
        }
    }

    pub fn get_by_email(&self, email: &str) -> Result<Option<Student>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {} FROM students WHERE email = ?1", STUDENT_COLUMNS))?;

        let mut rows = stmt.query([email])?;

        if let Some(row) = rows.next()? {
            Ok(Some(StudentRowFactory::from_row(row)?))
        } else {
            Ok(None)
        }
    }

    pub fn list(&self) -> Result<Vec<Student>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {} FROM students ORDER BY name", STUDENT_COLUMNS))?;

        let rows = stmt.query_map([], StudentRowFactory::from_row)?;

        let mut students = Vec::new();
        for student in rows {
            students.push(student?);
        }
        Ok(students)
    }

    /// Returns false when no student has the given id
    pub fn update_goals(&self, student_id: &str, goals: &StudentGoals) -> Result<bool> {
        let changed = self.conn.execute(
            "UPDATE students SET
                daily_questions = ?1,
                daily_hours = ?2,
                weekly_hours = ?3,
                weekly_mock_exams = ?4,
                daily_subjects = ?5,
                target_score = ?6
             WHERE id = ?7",
            params![
                goals.daily_questions,
                goals.daily_hours,
                goals.weekly_hours,
                goals.weekly_mock_exams,
                goals.daily_subjects,
                goals.target_score,
                student_id
            ],
        )?;
        Ok(changed > 0)
    }

    pub fn update_profile_type(&self, student_id: &str, profile_type: ProfileType) -> Result<bool> {
        let changed = self.conn.execute(
            "UPDATE students SET profile_type = ?1 WHERE id = ?2",
            params![profile_type.as_str(), student_id],
        )?;
        Ok(changed > 0)
    }

    pub fn count(&self) -> Result<i64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM students", [], |row| row.get(0))?;
        Ok(count)
    }
}
