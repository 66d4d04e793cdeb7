pub mod export;
pub mod render;

use crate::analytics::{
    Analytics, MethodShare, QuestionBucket, ShiftDistribution, SubjectDetail, SubjectHours,
    SubjectShare, subject_shares, total_questions,
};
use crate::date_range::DateRange;
use crate::session::StudySession;

pub use export::{ExportError, ReportSurface, export_file_name, export_report, paginate};
pub use render::ReportRenderer;

/// Subjects listed in the general distribution panel
pub const DISTRIBUTION_LIMIT: usize = 5;

/// Every view of the performance page for one student and period
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceReport {
    pub student_name: String,
    pub range: DateRange,
    pub sessions: usize,
    pub total_seconds: u64,
    pub subject_hours: Vec<SubjectHours>,
    pub questions: Vec<QuestionBucket>,
    pub methods: Vec<MethodShare>,
    pub details: Vec<SubjectDetail>,
    pub distribution: Vec<SubjectShare>,
    pub shifts: ShiftDistribution,
}

impl PerformanceReport {
    pub fn build(student_name: &str, sessions: &[StudySession], range: &DateRange) -> Self {
        let analytics = Analytics::new(sessions, range);
        let totals = analytics.overview();
        let subject_hours = analytics.subject_hours();
        let distribution = subject_shares(&subject_hours, DISTRIBUTION_LIMIT);

        PerformanceReport {
            student_name: student_name.to_string(),
            range: *range,
            sessions: totals.sessions,
            total_seconds: totals.total_seconds,
            subject_hours,
            questions: analytics.questions_split(),
            methods: analytics.method_distribution(),
            details: analytics.subject_detail(),
            distribution,
            shifts: analytics.shift_distribution(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sessions == 0
    }

    pub fn total_questions(&self) -> u64 {
        total_questions(&self.questions)
    }

    pub fn period_label(&self) -> String {
        match self.range.bounds() {
            Some((from, to)) => format!(
                "{} até {}",
                from.format("%d/%m/%Y"),
                to.format("%d/%m/%Y")
            ),
            None => "todos os registros".to_string(),
        }
    }
}
