use crate::date_range::DateRange;
use crate::mock_exam::MockExam;
use crate::session::StudySession;
use crate::subject::Subject;
use crate::user::StudentGoals;
use chrono::{Duration, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalKind {
    DailyHours,
    DailyQuestions,
    WeeklyMockExams,
    DailySubjects,
    WeeklyHours,
}

impl GoalKind {
    pub fn label(&self) -> &'static str {
        match self {
            GoalKind::DailyHours => "Horas de estudo diárias",
            GoalKind::DailyQuestions => "Questões diárias",
            GoalKind::WeeklyMockExams => "Simulados na semana",
            GoalKind::DailySubjects => "Disciplinas por dia",
            GoalKind::WeeklyHours => "Horas semanais",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            GoalKind::DailyHours | GoalKind::WeeklyHours => "h",
            _ => "",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GoalProgress {
    pub kind: GoalKind,
    pub current: f64,
    pub target: f64,
    /// Capped at 100
    pub percent: u32,
    pub done: bool,
}

impl GoalProgress {
    fn new(kind: GoalKind, current: f64, target: f64) -> Self {
        let percent = if target <= 0.0 {
            100
        } else {
            ((current / target) * 100.0).round().min(100.0) as u32
        };
        GoalProgress {
            kind,
            current,
            target,
            percent,
            done: percent >= 100,
        }
    }
}

/// Progress against each goal as of `today`
///
/// Daily goals look at `today` only; weekly goals at the seven days ending
/// on `today`.
pub fn goal_progress(
    goals: &StudentGoals,
    sessions: &[StudySession],
    mock_exams: &[MockExam],
    today: NaiveDate,
) -> Vec<GoalProgress> {
    let day = DateRange::single_day(today);
    let week = DateRange::new(today - Duration::days(6), today);

    let todays = day.filter(sessions);
    let this_week = week.filter(sessions);

    let hours_today: f64 = todays.iter().map(|s| s.hours()).sum();
    let questions_today: u64 = todays
        .iter()
        .map(|s| s.questions_total.unwrap_or(0) as u64)
        .sum();
    let mut subjects_today: Vec<Subject> = todays.iter().map(|s| s.subject).collect();
    subjects_today.sort();
    subjects_today.dedup();
    let hours_this_week: f64 = this_week.iter().map(|s| s.hours()).sum();
    let exams_this_week = mock_exams.iter().filter(|e| week.contains(e.date)).count();

    vec![
        GoalProgress::new(GoalKind::DailyHours, hours_today, goals.daily_hours),
        GoalProgress::new(
            GoalKind::DailyQuestions,
            questions_today as f64,
            goals.daily_questions as f64,
        ),
        GoalProgress::new(
            GoalKind::WeeklyMockExams,
            exams_this_week as f64,
            goals.weekly_mock_exams as f64,
        ),
        GoalProgress::new(
            GoalKind::DailySubjects,
            subjects_today.len() as f64,
            goals.daily_subjects as f64,
        ),
        GoalProgress::new(GoalKind::WeeklyHours, hours_this_week, goals.weekly_hours),
    ]
}
