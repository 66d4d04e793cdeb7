use crate::session::StudySession;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Incorrect,
}

impl AnswerOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            AnswerOutcome::Correct => "Acertos",
            AnswerOutcome::Incorrect => "Erros",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            AnswerOutcome::Correct => "#10b981",
            AnswerOutcome::Incorrect => "#ef4444",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBucket {
    pub outcome: AnswerOutcome,
    pub value: u64,
}

/// Correct and incorrect question totals
///
/// Returns no buckets at all when no question was recorded, so callers never
/// chart an all-zero split.
pub fn questions_split(sessions: &[&StudySession]) -> Vec<QuestionBucket> {
    let correct: u64 = sessions
        .iter()
        .map(|s| s.questions_correct.unwrap_or(0) as u64)
        .sum();
    let total: u64 = sessions
        .iter()
        .map(|s| s.questions_total.unwrap_or(0) as u64)
        .sum();

    if total == 0 {
        return Vec::new();
    }

    vec![
        QuestionBucket {
            outcome: AnswerOutcome::Correct,
            value: correct,
        },
        QuestionBucket {
            outcome: AnswerOutcome::Incorrect,
            value: total.saturating_sub(correct),
        },
    ]
}

pub fn total_questions(buckets: &[QuestionBucket]) -> u64 {
    buckets.iter().map(|b| b.value).sum()
}
