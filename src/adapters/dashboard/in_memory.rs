//! In-memory dashboard reader serving the canned sample catalog.

use chrono::NaiveDate;
use once_cell::sync::Lazy;

use crate::domain::dashboard::{
    AdminDashboard, AssignmentSummary, CourseSummary, DashboardView, ProfessorDashboard,
    StudentDashboard,
};
use crate::domain::foundation::{Percentage, Role};
use crate::ports::DashboardReader;

/// Sample course catalog shown on the professor dashboard.
static SAMPLE_COURSES: Lazy<Vec<CourseSummary>> = Lazy::new(|| {
    vec![
        CourseSummary {
            name: "Data Structures".to_string(),
            code: "CS201".to_string(),
            students: 45,
            assignments: 8,
        },
        CourseSummary {
            name: "Web Development".to_string(),
            code: "CS301".to_string(),
            students: 38,
            assignments: 12,
        },
        CourseSummary {
            name: "Database Systems".to_string(),
            code: "CS401".to_string(),
            students: 52,
            assignments: 6,
        },
    ]
});

/// Sample assignment list shown on the student dashboard.
static SAMPLE_ASSIGNMENTS: Lazy<Vec<AssignmentSummary>> = Lazy::new(|| {
    vec![
        AssignmentSummary {
            title: "Binary Trees Implementation".to_string(),
            course: "Data Structures".to_string(),
            due: date(2024, 9, 15),
            submitted: false,
        },
        AssignmentSummary {
            title: "React Portfolio Project".to_string(),
            course: "Web Development".to_string(),
            due: date(2024, 9, 18),
            submitted: true,
        },
        AssignmentSummary {
            title: "SQL Query Optimization".to_string(),
            course: "Database Systems".to_string(),
            due: date(2024, 9, 20),
            submitted: false,
        },
    ]
});

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid sample date")
}

/// DashboardReader serving the hard-coded sample data of the mock.
///
/// Every call returns the same canned values; there is no per-user data.
#[derive(Debug, Clone, Copy, Default)]
pub struct InMemoryDashboardReader;

impl InMemoryDashboardReader {
    pub fn new() -> Self {
        Self
    }
}

impl DashboardReader for InMemoryDashboardReader {
    fn dashboard_for(&self, role: Role) -> DashboardView {
        match role {
            Role::Admin => DashboardView::Admin(AdminDashboard {
                total_users: 1247,
                active_courses: 24,
                system_health: Percentage::new(98),
                monthly_logins: 15200,
            }),
            Role::Professor => DashboardView::Professor(ProfessorDashboard {
                total_students: 135,
                active_courses: SAMPLE_COURSES.len() as u32,
                assignments_total: 26,
                assignments_pending_review: 5,
                average_performance: Percentage::new(84),
                courses: SAMPLE_COURSES.clone(),
            }),
            Role::Student => DashboardView::Student(StudentDashboard {
                cgpa: 3.75,
                enrolled_courses: 6,
                credit_hours: 18,
                pending_tasks: 8,
                attendance: Percentage::new(92),
                assignments: SAMPLE_ASSIGNMENTS.clone(),
            }),
        }
    }
}
