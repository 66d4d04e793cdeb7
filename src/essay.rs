use chrono::{DateTime, Utc};

/// Highest grade an essay can receive
pub const MAX_ESSAY_SCORE: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EssayError {
    #[error("essay score {0} is outside 0..=1000")]
    ScoreOutOfRange(u32),

    #[error("unknown essay status '{0}'")]
    UnknownStatus(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EssayStatus {
    Pending,
    Corrected,
}

impl EssayStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EssayStatus::Pending => "Pendente",
            EssayStatus::Corrected => "Corrigida",
        }
    }

    pub fn from(s: &str) -> Option<Self> {
        match s {
            "Pendente" => Some(EssayStatus::Pending),
            "Corrigida" => Some(EssayStatus::Corrected),
            _ => None,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            EssayStatus::Pending => "#f59e0b",
            EssayStatus::Corrected => "#10b981",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Essay {
    pub id: i64,
    pub student_id: String,
    pub title: String,
    pub theme: String,
    pub date: DateTime<Utc>,
    pub status: EssayStatus,
    pub score: Option<u32>,
    pub feedback: Option<String>,
}

/// An essay as submitted, before it is stored
#[derive(Debug, Clone, PartialEq)]
pub struct NewEssay {
    pub student_id: String,
    pub title: String,
    pub theme: String,
    pub date: DateTime<Utc>,
    pub status: EssayStatus,
    pub score: Option<u32>,
    pub feedback: Option<String>,
}

impl NewEssay {
    /// A freshly submitted essay waiting for correction
    pub fn submitted(student_id: &str, title: &str, theme: &str, date: DateTime<Utc>) -> Self {
        NewEssay {
            student_id: student_id.to_string(),
            title: title.to_string(),
            theme: theme.to_string(),
            date,
            status: EssayStatus::Pending,
            score: None,
            feedback: None,
        }
    }

    pub fn corrected(mut self, score: u32, feedback: Option<&str>) -> Self {
        self.status = EssayStatus::Corrected;
        self.score = Some(score);
        self.feedback = feedback.map(str::to_string);
        self
    }

    pub fn validate(&self) -> Result<(), EssayError> {
        match self.score {
            Some(score) => validate_score(score),
            None => Ok(()),
        }
    }

    pub fn into_essay(self, id: i64) -> Essay {
        Essay {
            id,
            student_id: self.student_id,
            title: self.title,
            theme: self.theme,
            date: self.date,
            status: self.status,
            score: self.score,
            feedback: self.feedback,
        }
    }
}

pub fn validate_score(score: u32) -> Result<(), EssayError> {
    if score > MAX_ESSAY_SCORE {
        return Err(EssayError::ScoreOutOfRange(score));
    }
    Ok(())
}
