use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use study_tracker::analytics::{
    AnswerOutcome, Shift, compute_method_distribution, compute_questions_split,
    compute_shift_distribution, compute_subject_detail, compute_subject_hours,
};
use study_tracker::database::{Database, SessionsRepository};
use study_tracker::database_factory::{DatabaseConfig, DatabaseFactory};
use study_tracker::date_range::DateRange;
use study_tracker::essay::{EssayStatus, NewEssay};
use study_tracker::mock_exam::{Breakdown, ExamKind, NewMockExam};
use study_tracker::report::ReportRenderer;
use study_tracker::report_service::ReportService;
use study_tracker::user::User;
use study_tracker::sample_data::{sample_students, seed_database, seeded_rng};
use study_tracker::session::{NewStudySession, StudySession};
use study_tracker::subject::{StudyMethod, Subject};

fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, day, hour, 0, 0).unwrap()
}

fn create_test_db() -> Database {
    let db = Database::new(":memory:").unwrap();
    for student in sample_students() {
        db.add_student(&student).unwrap();
    }
    db
}

fn record(db: &Database, session: NewStudySession) -> StudySession {
    let id = db.record_session(&session).unwrap();
    db.get_session(id).unwrap().unwrap()
}

#[test]
fn test_stored_sessions_round_trip_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tracker.db");
    let path = path.to_str().unwrap();

    let recorded = {
        let db = Database::new(path).unwrap();
        for student in sample_students() {
            db.add_student(&student).unwrap();
        }
        record(
            &db,
            NewStudySession::new("1", Subject::Biology, "Genética", StudyMethod::Review, at(4, 20), 2400)
                .with_questions(12, 9)
                .with_notes("refazer heredogramas"),
        )
    };

    let reopened = Database::new(path).unwrap();
    assert_eq!(reopened.sessions_for_student("1").unwrap(), vec![recorded]);
    assert_eq!(reopened.count_students().unwrap(), 2);
}

#[test]
fn test_one_hour_of_mathematics() {
    let db = create_test_db();
    record(
        &db,
        NewStudySession::new("1", Subject::Mathematics, "Funções", StudyMethod::Book, at(3, 10), 3600),
    );
    let sessions = db.sessions_for_student("1").unwrap();

    let hours = compute_subject_hours(&sessions, &DateRange::all());
    assert_eq!(hours.len(), 1);
    assert_eq!(hours[0].subject, Subject::Mathematics);
    assert_eq!(hours[0].hours, 1.0);
}

#[test]
fn test_questions_split_matches_recorded_totals() {
    let db = create_test_db();
    let base = |total, correct| {
        NewStudySession::new("1", Subject::Physics, "Ondas", StudyMethod::Exercises, at(3, 10), 600)
            .with_questions(total, correct)
    };
    record(&db, base(20, 15));
    record(&db, base(10, 5));
    let sessions = db.sessions_for_student("1").unwrap();

    let split = compute_questions_split(&sessions, &DateRange::all());
    assert_eq!(split[0].outcome, AnswerOutcome::Correct);
    assert_eq!(split[0].value, 20);
    assert_eq!(split[1].outcome, AnswerOutcome::Incorrect);
    assert_eq!(split[1].value, 10);
    assert_eq!(split.iter().map(|b| b.value).sum::<u64>(), 30);
}

#[test]
fn test_morning_is_most_productive() {
    let db = create_test_db();
    for hour in [9, 9, 9, 14] {
        record(
            &db,
            NewStudySession::new("1", Subject::History, "Brasil Império", StudyMethod::Summary, at(5, hour), 900),
        );
    }
    let sessions = db.sessions_for_student("1").unwrap();

    let shifts = compute_shift_distribution(&sessions, &DateRange::all());
    let counts: Vec<(Shift, u32)> = shifts.slices.iter().map(|s| (s.shift, s.value)).collect();
    assert_eq!(counts, vec![(Shift::Morning, 3), (Shift::Afternoon, 1)]);
    assert_eq!(shifts.most_productive_label(), "Manhã");
}

#[test]
fn test_range_excluding_everything_behaves_like_no_sessions() {
    let db = create_test_db();
    record(
        &db,
        NewStudySession::new("1", Subject::Chemistry, "Soluções", StudyMethod::VideoLesson, at(3, 10), 3600)
            .with_questions(10, 8),
    );
    let sessions = db.sessions_for_student("1").unwrap();
    let elsewhere = DateRange::single_day(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());

    let no_sessions: Vec<StudySession> = Vec::new();

    for (source, range) in [(&sessions, elsewhere), (&no_sessions, DateRange::all())] {
        assert!(compute_subject_hours(source, &range).is_empty());
        assert!(compute_questions_split(source, &range).is_empty());
        assert!(compute_method_distribution(source, &range).is_empty());
        assert!(compute_subject_detail(source, &range).is_empty());
        let shifts = compute_shift_distribution(source, &range);
        assert!(shifts.slices.is_empty());
        assert_eq!(shifts.most_productive_label(), "N/A");
    }
}

#[test]
fn test_seeded_history_feeds_every_view() {
    let config = DatabaseConfig::builder()
        .test_mode()
        .date_ymd(2025, 3, 10)
        .build();
    let db = DatabaseFactory::create(config).unwrap();
    let seeded = seed_database(&db, &mut seeded_rng(42)).unwrap();
    let sessions = db.sessions_for_student("1").unwrap();
    assert_eq!(sessions.len(), seeded);

    let all = DateRange::all();
    let split = compute_questions_split(&sessions, &all);
    let recorded: u64 = sessions.iter().map(|s| s.questions_total.unwrap_or(0) as u64).sum();
    assert_eq!(split.iter().map(|b| b.value).sum::<u64>(), recorded);

    let methods = compute_method_distribution(&sessions, &all);
    let percent_sum: u32 = methods.iter().map(|m| m.percentage).sum();
    assert!(percent_sum.abs_diff(100) <= methods.len() as u32);

    let details = compute_subject_detail(&sessions, &all);
    assert!(details.iter().all(|row| row.accuracy >= 75 && row.accuracy <= 95));
}

#[test]
fn test_goals_count_this_weeks_mock_exams() {
    let config = DatabaseConfig::builder()
        .test_mode()
        .date_ymd(2025, 3, 10)
        .build();
    let db = DatabaseFactory::create(config).unwrap();
    for student in sample_students() {
        db.add_student(&student).unwrap();
    }
    for (day, title) in [(2, "Simulado antigo"), (8, "Simulado ENEM 3")] {
        db.add_mock_exam(&NewMockExam {
            student_id: "1".to_string(),
            title: title.to_string(),
            date: at(day, 13),
            kind: ExamKind::Enem,
            score: 700,
            max_score: 1000,
            breakdown: Breakdown::from_tallies([(Subject::Mathematics, 30, 45)]).unwrap(),
        })
        .unwrap();
    }

    let goals = ReportService::new(&db).goals("1").unwrap();
    let exams = goals
        .iter()
        .find(|g| g.kind == study_tracker::analytics::GoalKind::WeeklyMockExams)
        .unwrap();
    assert_eq!(exams.current, 1.0);
    assert_eq!(exams.target, 2.0);
    assert_eq!(exams.percent, 50);
    assert!(!exams.done);
}

#[test]
fn test_repository_and_facade_agree() {
    let db = create_test_db();
    record(
        &db,
        NewStudySession::new("2", Subject::Essay, "Dissertação", StudyMethod::InPersonClass, at(6, 18), 5400),
    );

    let repo = SessionsRepository::new(&db.conn);
    assert_eq!(repo.for_student("2").unwrap(), db.sessions_for_student("2").unwrap());
    assert_eq!(repo.count().unwrap(), 1);
}

#[test]
fn test_essay_lifecycle_seen_by_assessor() {
    let db = create_test_db();
    let first = db
        .add_essay(&NewEssay::submitted("1", "Redação 1", "Mobilidade urbana", at(3, 20)))
        .unwrap();
    db.add_essay(&NewEssay::submitted("1", "Redação 2", "Inteligência artificial", at(7, 21)))
        .unwrap();
    db.correct_essay(first, 920, Some("Ótima proposta de intervenção"))
        .unwrap();

    let assessor = User::assessor("a1", "Professor Rogério", &["1", "2"]);
    let service = ReportService::new(&db);
    let essays = service.essays_for_student(&assessor, "1").unwrap();

    assert_eq!(essays.len(), 2);
    assert_eq!(essays[0].title, "Redação 2");
    assert_eq!(essays[0].status, EssayStatus::Pending);
    assert_eq!(essays[1].status, EssayStatus::Corrected);
    assert_eq!(essays[1].score, Some(920));

    let text = ReportRenderer::plain().render_essays(&essays);
    assert!(text.contains("    03/03/2025 - Mobilidade urbana  Nota: 920"));
    assert!(text.contains("    07/03/2025 - Inteligência artificial\n"));

    let maria = service.essays_for_student(&assessor, "2").unwrap();
    assert!(ReportRenderer::plain()
        .render_essays(&maria)
        .contains("Nenhuma redação registrada."));
}
