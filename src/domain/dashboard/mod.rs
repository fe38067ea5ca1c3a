//! Dashboard module - role-conditioned view data.
//!
//! Holds the data each dashboard variant displays. Rendering is someone
//! else's problem; these types are what a front end would consume.

mod overview;

pub use overview::{
    AdminDashboard, AssignmentSummary, CourseSummary, DashboardView, ProfessorDashboard,
    StudentDashboard,
};
