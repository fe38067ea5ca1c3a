use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::foundation::{Percentage, Role};

/// A dashboard variant, selected by the session's role.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "role")]
pub enum DashboardView {
    Admin(AdminDashboard),
    Professor(ProfessorDashboard),
    Student(StudentDashboard),
}

impl DashboardView {
    /// Returns the role this view belongs to.
    pub fn role(&self) -> Role {
        match self {
            DashboardView::Admin(_) => Role::Admin,
            DashboardView::Professor(_) => Role::Professor,
            DashboardView::Student(_) => Role::Student,
        }
    }
}

/// One course as listed on the professor dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSummary {
    pub name: String,
    pub code: String,
    pub students: u32,
    pub assignments: u32,
}

/// One assignment as listed on the student dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentSummary {
    pub title: String,
    pub course: String,
    pub due: NaiveDate,
    pub submitted: bool,
}

/// Teaching analytics shown to professors.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessorDashboard {
    pub total_students: u32,
    pub active_courses: u32,
    pub assignments_total: u32,
    pub assignments_pending_review: u32,
    pub average_performance: Percentage,
    pub courses: Vec<CourseSummary>,
}

/// Academic progress shown to students.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDashboard {
    pub cgpa: f64,
    pub enrolled_courses: u32,
    pub credit_hours: u32,
    pub pending_tasks: u32,
    pub attendance: Percentage,
    pub assignments: Vec<AssignmentSummary>,
}

/// Platform-wide figures shown to administrators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboard {
    pub total_users: u32,
    pub active_courses: u32,
    pub system_health: Percentage,
    pub monthly_logins: u32,
}
