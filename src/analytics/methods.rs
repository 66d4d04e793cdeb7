use super::{group_entry, percentage};
use crate::session::StudySession;
use crate::subject::StudyMethod;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodShare {
    pub method: StudyMethod,
    pub count: u32,
    /// Rounded independently, so shares may not add up to exactly 100
    pub percentage: u32,
}

/// How often each study method was used, most frequent first
pub fn method_distribution(sessions: &[&StudySession]) -> Vec<MethodShare> {
    let total = sessions.len();
    let mut counts: Vec<(StudyMethod, u32)> = Vec::new();
    for session in sessions {
        *group_entry(&mut counts, session.method) += 1;
    }

    let mut result: Vec<MethodShare> = counts
        .into_iter()
        .map(|(method, count)| MethodShare {
            method,
            count,
            percentage: percentage(count as f64, total as f64),
        })
        .collect();
    result.sort_by(|a, b| b.count.cmp(&a.count));
    result
}
