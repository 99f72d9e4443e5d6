//! Section page components.
//!
//! Each page renders static content tables into markup. No page holds state.

mod analytics;
mod dashboard;
mod profile;
mod subjects;

pub use analytics::AnalyticsPage;
pub use dashboard::DashboardPage;
pub use profile::ProfilePage;
pub use subjects::SubjectsPage;
