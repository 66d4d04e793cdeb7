use crate::subject::Subject;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserError {
    #[error("unknown profile type '{0}'")]
    UnknownProfileType(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    Student,
    /// Advisors follow a fixed set of students
    Assessor,
    /// Directors and managers see every student
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &str {
        match self {
            UserRole::Student => "STUDENT",
            UserRole::Assessor => "ASSESSOR",
            UserRole::Admin => "ADMIN",
        }
    }

    pub fn from(s: &str) -> Option<Self> {
        match s {
            "STUDENT" => Some(UserRole::Student),
            "ASSESSOR" => Some(UserRole::Assessor),
            "ADMIN" => Some(UserRole::Admin),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileType {
    Routine,
    Cycle,
}

impl ProfileType {
    pub fn as_str(&self) -> &str {
        match self {
            ProfileType::Routine => "ROUTINE",
            ProfileType::Cycle => "CYCLE",
        }
    }

    pub fn from(s: &str) -> Option<Self> {
        match s {
            "ROUTINE" => Some(ProfileType::Routine),
            "CYCLE" => Some(ProfileType::Cycle),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StudentGoals {
    pub daily_questions: u32,
    pub daily_hours: f64,
    pub weekly_hours: f64,
    pub weekly_mock_exams: u32,
    pub daily_subjects: u32,
    pub target_score: u32,
}

impl Default for StudentGoals {
    fn default() -> Self {
        StudentGoals {
            daily_questions: 80,
            daily_hours: 6.0,
            weekly_hours: 35.0,
            weekly_mock_exams: 2,
            daily_subjects: 5,
            target_score: 800,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub email: String,
    pub profile_type: ProfileType,
    pub weak_subjects: Vec<Subject>,
    pub goals: StudentGoals,
}

/// Whoever is looking at the data
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub role: UserRole,
    /// Students followed by an assessor, empty for other roles
    pub managed_students: Vec<String>,
}

impl User {
    pub fn student(student: &Student) -> Self {
        User {
            id: student.id.clone(),
            name: student.name.clone(),
            role: UserRole::Student,
            managed_students: Vec::new(),
        }
    }

    pub fn assessor(id: &str, name: &str, students: &[&str]) -> Self {
        User {
            id: id.to_string(),
            name: name.to_string(),
            role: UserRole::Assessor,
            managed_students: students.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn admin(id: &str, name: &str) -> Self {
        User {
            id: id.to_string(),
            name: name.to_string(),
            role: UserRole::Admin,
            managed_students: Vec::new(),
        }
    }

    pub fn can_view_student(&self, student_id: &str) -> bool {
        match self.role {
            UserRole::Student => self.id == student_id,
            UserRole::Assessor => self.managed_students.iter().any(|id| id == student_id),
            UserRole::Admin => true,
        }
    }
}
