use crate::database::Database;
use crate::error::StoreError;
use crate::session::NewStudySession;
use crate::subject::{StudyMethod, Subject};
use crate::user::{ProfileType, Student, StudentGoals, User};
use chrono::{DateTime, Duration, NaiveTime, Utc};
use log::{debug, info};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Days of history generated, counting back from today
pub const SAMPLE_DAYS: i64 = 30;
const MAX_SESSIONS_PER_DAY: u32 = 3;
const QUESTIONS_PER_SESSION: u32 = 20;

pub const SAMPLE_SUBJECTS: [Subject; 6] = [
    Subject::Mathematics,
    Subject::Portuguese,
    Subject::Physics,
    Subject::Chemistry,
    Subject::Biology,
    Subject::History,
];

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn sample_students() -> Vec<Student> {
    vec![
        Student {
            id: "1".to_string(),
            name: "Carlos Silva".to_string(),
            email: "carlos@aluno.com".to_string(),
            profile_type: ProfileType::Routine,
            weak_subjects: vec![Subject::Chemistry, Subject::Physics],
            goals: StudentGoals::default(),
        },
        Student {
            id: "2".to_string(),
            name: "Maria Oliveira".to_string(),
            email: "maria@aluno.com".to_string(),
            profile_type: ProfileType::Cycle,
            weak_subjects: vec![Subject::Mathematics],
            goals: StudentGoals {
                daily_questions: 90,
                daily_hours: 7.0,
                weekly_hours: 40.0,
                weekly_mock_exams: 2,
                daily_subjects: 4,
                target_score: 850,
            },
        },
    ]
}

pub fn sample_assessor() -> User {
    User::assessor("a1", "Professor Rogério", &["1", "2"])
}

/// Random study history for one student over the last `SAMPLE_DAYS` days
///
/// Each day gets 0 to 3 sessions of 30 minutes to 2 hours, 20 questions each
/// with 15 to 19 correct.
pub fn generate_sessions<R: Rng>(
    rng: &mut R,
    student_id: &str,
    now: DateTime<Utc>,
) -> Vec<NewStudySession> {
    let mut sessions = Vec::new();
    for days_ago in 0..SAMPLE_DAYS {
        let day_start = (now - Duration::days(days_ago))
            .date_naive()
            .and_time(NaiveTime::MIN)
            .and_utc();

        let count = rng.gen_range(0..=MAX_SESSIONS_PER_DAY);
        for _ in 0..count {
            let subject = SAMPLE_SUBJECTS[rng.gen_range(0..SAMPLE_SUBJECTS.len())];
            let method = if rng.gen_bool(0.5) {
                StudyMethod::VideoLesson
            } else {
                StudyMethod::Exercises
            };
            let date = day_start
                + Duration::hours(rng.gen_range(0..24))
                + Duration::minutes(rng.gen_range(0..60));
            let duration_seconds = 1800 + rng.gen_range(0..5400);
            let correct = 15 + rng.gen_range(0..5);

            sessions.push(
                NewStudySession::new(
                    student_id,
                    subject,
                    &format!("Tópico aleatório de {}", subject.as_str()),
                    method,
                    date,
                    duration_seconds,
                )
                .with_questions(QUESTIONS_PER_SESSION, correct),
            );
        }
    }
    sessions
}

/// Adds the sample students if missing and a month of sessions for the first one
///
/// Returns the number of sessions recorded.
pub fn seed_database<R: Rng>(db: &Database, rng: &mut R) -> Result<usize, StoreError> {
    for student in sample_students() {
        if db.get_student(&student.id)?.is_none() {
            db.add_student(&student)?;
            debug!("Added sample student {}", student.name);
        }
    }

    let sessions = generate_sessions(rng, "1", db.current_time());
    for session in &sessions {
        db.record_session(session)?;
    }
    info!("Seeded {} sample session(s)", sessions.len());
    Ok(sessions.len())
}
