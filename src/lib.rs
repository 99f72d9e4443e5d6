//! vedam-study-buddy: contest analytics dashboard for Vedam students.
//!
//! A sidebar plus four sections (dashboard, subjects, analytics, profile)
//! rendered with Dioxus from static content tables. The only state is the
//! active section and whether the sidebar is open.

pub mod app;
pub mod config;
pub mod content;
pub mod state;
pub mod ui;
pub mod viewport;

pub use app::App;
pub use config::{ConfigError, LayoutConfig};
pub use content::{ParseSectionError, SectionId};
pub use state::{Breakpoint, UiEvent, UiState, Viewport};
