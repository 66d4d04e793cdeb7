use crate::analytics::{GoalProgress, StudentOverview, goal_progress, overview};
use crate::database::Database;
use crate::date_provider::DateProvider;
use crate::date_range::DateRange;
use crate::error::ReportError;
use crate::essay::Essay;
use crate::report::PerformanceReport;
use crate::user::{Student, User};
use log::{info, warn};

/// Builds reports for a viewer, enforcing who may see which student
pub struct ReportService<'a> {
    db: &'a Database,
}

impl<'a> ReportService<'a> {
    pub fn new(db: &'a Database) -> Self {
        ReportService { db }
    }

    pub fn build_report(
        &self,
        viewer: &User,
        student_id: &str,
        range: &DateRange,
    ) -> Result<PerformanceReport, ReportError> {
        let student = self.visible_student(viewer, student_id)?;
        let sessions = self.db.sessions_for_student(student_id)?;
        let report = PerformanceReport::build(&student.name, &sessions, range);

        info!(
            "Built report for {} ({} of {} sessions in {})",
            student.id,
            report.sessions,
            sessions.len(),
            report.period_label()
        );
        Ok(report)
    }

    /// Goal progress as of the database clock's "today"
    pub fn goals(&self, student_id: &str) -> Result<Vec<GoalProgress>, ReportError> {
        let student = self.student(student_id)?;
        let sessions = self.db.sessions_for_student(student_id)?;
        let exams = self.db.mock_exams_for_student(student_id)?;
        let today = self.db.date_provider().today();

        info!("Computing goals for {} on {}", student_id, today);
        Ok(goal_progress(&student.goals, &sessions, &exams, today))
    }

    /// Submitted essays, most recent first
    pub fn essays_for_student(
        &self,
        viewer: &User,
        student_id: &str,
    ) -> Result<Vec<Essay>, ReportError> {
        let student = self.visible_student(viewer, student_id)?;
        let essays = self.db.essays_for_student(&student.id)?;
        info!("Loaded {} essay(s) for {}", essays.len(), student.id);
        Ok(essays)
    }

    /// Headline numbers for every student the viewer may see
    pub fn overviews(
        &self,
        viewer: &User,
        range: &DateRange,
    ) -> Result<Vec<(Student, StudentOverview)>, ReportError> {
        let mut rows = Vec::new();
        for student in self.db.students()? {
            if !viewer.can_view_student(&student.id) {
                continue;
            }
            let sessions = self.db.sessions_for_student(&student.id)?;
            let summary = overview(&range.filter(&sessions));
            rows.push((student, summary));
        }
        Ok(rows)
    }

    fn visible_student(&self, viewer: &User, student_id: &str) -> Result<Student, ReportError> {
        if !viewer.can_view_student(student_id) {
            warn!(
                "{} ({}) tried to view student {}",
                viewer.id,
                viewer.role.as_str(),
                student_id
            );
            return Err(ReportError::AccessDenied {
                viewer: viewer.id.clone(),
                student_id: student_id.to_string(),
            });
        }
        self.student(student_id)
    }

    fn student(&self, student_id: &str) -> Result<Student, ReportError> {
        self.db
            .get_student(student_id)?
            .ok_or_else(|| ReportError::StudentNotFound(student_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::GoalKind;
    use crate::essay::{EssayStatus, NewEssay};
    use crate::database_factory::{DatabaseConfig, DatabaseFactory};
    use crate::session::NewStudySession;
    use crate::subject::{StudyMethod, Subject};
    use crate::user::{ProfileType, StudentGoals, UserRole};
    use chrono::{NaiveDate, TimeZone, Utc};

    fn create_test_db() -> Database {
        let config = DatabaseConfig::builder()
            .test_mode()
            .date_ymd(2025, 3, 10)
            .build();
        let db = DatabaseFactory::create(config).unwrap();
        for (id, name, email) in [
            ("1", "Carlos Silva", "carlos@aluno.com"),
            ("2", "Maria Oliveira", "maria@aluno.com"),
        ] {
            db.add_student(&Student {
                id: id.to_string(),
                name: name.to_string(),
                email: email.to_string(),
                profile_type: ProfileType::Routine,
                weak_subjects: Vec::new(),
                goals: StudentGoals::default(),
            })
            .unwrap();
        }
        db.record_session(
            &NewStudySession::new(
                "1",
                Subject::Mathematics,
                "Funções",
                StudyMethod::Exercises,
                Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap(),
                3 * 3600,
            )
            .with_questions(40, 30),
        )
        .unwrap();
        db.record_session(&NewStudySession::new(
            "1",
            Subject::History,
            "Brasil Colônia",
            StudyMethod::Book,
            Utc.with_ymd_and_hms(2025, 2, 1, 15, 0, 0).unwrap(),
            3600,
        ))
        .unwrap();
        db
    }

    fn carlos() -> User {
        User {
            id: "1".to_string(),
            name: "Carlos Silva".to_string(),
            role: UserRole::Student,
            managed_students: Vec::new(),
        }
    }

    fn week(db: &Database) -> DateRange {
        DateRange::default_for(db.current_time())
    }

    #[test]
    fn test_student_sees_own_report() {
        let db = create_test_db();
        let report = ReportService::new(&db)
            .build_report(&carlos(), "1", &week(&db))
            .unwrap();

        assert_eq!(report.student_name, "Carlos Silva");
        assert_eq!(report.sessions, 1);
        assert_eq!(report.subject_hours[0].subject, Subject::Mathematics);
    }

    #[test]
    fn test_student_cannot_see_other_student() {
        let db = create_test_db();
        let result = ReportService::new(&db).build_report(&carlos(), "2", &week(&db));

        assert!(matches!(result, Err(ReportError::AccessDenied { .. })));
    }

    #[test]
    fn test_assessor_sees_managed_students_only() {
        let db = create_test_db();
        let assessor = User::assessor("a1", "Professor Rogério", &["1"]);
        let service = ReportService::new(&db);

        assert!(service.build_report(&assessor, "1", &DateRange::all()).is_ok());
        assert!(matches!(
            service.build_report(&assessor, "2", &DateRange::all()),
            Err(ReportError::AccessDenied { .. })
        ));
    }

    #[test]
    fn test_admin_gets_not_found_for_unknown_student() {
        let db = create_test_db();
        let admin = User::admin("d1", "Diretora");

        assert!(matches!(
            ReportService::new(&db).build_report(&admin, "99", &DateRange::all()),
            Err(ReportError::StudentNotFound(id)) if id == "99"
        ));
    }

    #[test]
    fn test_all_range_includes_old_sessions() {
        let db = create_test_db();
        let report = ReportService::new(&db)
            .build_report(&carlos(), "1", &DateRange::all())
            .unwrap();
        assert_eq!(report.sessions, 2);
    }

    #[test]
    fn test_goals_use_database_today() {
        let db = create_test_db();
        let goals = ReportService::new(&db).goals("1").unwrap();

        let daily_hours = goals
            .iter()
            .find(|g| g.kind == GoalKind::DailyHours)
            .unwrap();
        assert_eq!(daily_hours.current, 3.0);
        assert_eq!(daily_hours.percent, 50);

        let daily_questions = goals
            .iter()
            .find(|g| g.kind == GoalKind::DailyQuestions)
            .unwrap();
        assert_eq!(daily_questions.current, 40.0);
        assert_eq!(db.current_time().date_naive(), NaiveDate::from_ymd_opt(2025, 3, 10).unwrap());
    }

    #[test]
    fn test_goals_for_unknown_student() {
        let db = create_test_db();
        assert!(matches!(
            ReportService::new(&db).goals("99"),
            Err(ReportError::StudentNotFound(_))
        ));
    }

    #[test]
    fn test_essays_follow_visibility() {
        let db = create_test_db();
        let id = db
            .add_essay(&NewEssay::submitted(
                "1",
                "Redação 1",
                "Desafios da mobilidade urbana",
                Utc.with_ymd_and_hms(2025, 3, 5, 20, 0, 0).unwrap(),
            ))
            .unwrap();
        db.correct_essay(id, 840, None).unwrap();
        let service = ReportService::new(&db);

        let own = service.essays_for_student(&carlos(), "1").unwrap();
        assert_eq!(own.len(), 1);
        assert_eq!(own[0].status, EssayStatus::Corrected);

        let assessor = User::assessor("a1", "Professor Rogério", &["1"]);
        assert_eq!(service.essays_for_student(&assessor, "1").unwrap().len(), 1);
        assert!(matches!(
            service.essays_for_student(&carlos(), "2"),
            Err(ReportError::AccessDenied { .. })
        ));
        assert!(service.essays_for_student(&assessor, "2").is_err());
        assert!(matches!(
            service.essays_for_student(&User::admin("d1", "Diretora"), "99"),
            Err(ReportError::StudentNotFound(_))
        ));
    }

    #[test]
    fn test_overviews_respect_visibility() {
        let db = create_test_db();
        let assessor = User::assessor("a1", "Professor Rogério", &["1"]);
        let rows = ReportService::new(&db)
            .overviews(&assessor, &DateRange::all())
            .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].0.id, "1");
        assert_eq!(rows[0].1.sessions, 2);
        assert_eq!(rows[0].1.accuracy, 75);
    }
}
