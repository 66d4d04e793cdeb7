use super::accuracy;
use crate::session::StudySession;
use crate::time_format::round_to_tenth;

/// Headline numbers shown for a student on the assessor dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct StudentOverview {
    pub sessions: usize,
    pub total_seconds: u64,
    pub hours: f64,
    pub questions: u64,
    pub correct: u64,
    pub accuracy: u32,
}

pub fn overview(sessions: &[&StudySession]) -> StudentOverview {
    let total_seconds: u64 = sessions.iter().map(|s| s.duration_seconds as u64).sum();
    let questions: u64 = sessions
        .iter()
        .map(|s| s.questions_total.unwrap_or(0) as u64)
        .sum();
    let correct: u64 = sessions
        .iter()
        .map(|s| s.questions_correct.unwrap_or(0) as u64)
        .sum();

    StudentOverview {
        sessions: sessions.len(),
        total_seconds,
        hours: round_to_tenth(total_seconds as f64 / 3600.0),
        questions,
        correct,
        accuracy: accuracy(correct, questions),
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{session, with_questions};
    use super::*;
    use crate::subject::{StudyMethod, Subject};

    #[test]
    fn test_overview_totals() {
        let sessions = vec![
            with_questions(session(Subject::Mathematics, StudyMethod::Exercises, 5400), 20, 18),
            with_questions(session(Subject::Physics, StudyMethod::Exercises, 3600), 30, 21),
            session(Subject::History, StudyMethod::Book, 1800),
        ];
        let refs: Vec<&StudySession> = sessions.iter().collect();

        let result = overview(&refs);
        assert_eq!(result.sessions, 3);
        assert_eq!(result.total_seconds, 10800);
        assert_eq!(result.hours, 3.0);
        assert_eq!(result.questions, 50);
        assert_eq!(result.correct, 39);
        assert_eq!(result.accuracy, 78);
    }

    #[test]
    fn test_overview_empty() {
        let result = overview(&[]);
        assert_eq!(result.sessions, 0);
        assert_eq!(result.hours, 0.0);
        assert_eq!(result.accuracy, 0);
    }
}
