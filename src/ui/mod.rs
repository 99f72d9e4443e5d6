//! Shared UI components - layout shell, sidebar, top bar, cards
//!
//! The shell is the same for every section:
//! - Sidebar (brand, nav links, quick-break footer) plus a backdrop for narrow screens
//! - Top bar (hamburger, section copy, user pill)
//! - Section content passed in as children
//!
//! Components are pure over their props. State changes leave through
//! `EventHandler` callbacks as [`UiEvent`](crate::state::UiEvent)s.

pub mod components;

pub use components::{Layout, PanelHeader, Sidebar, StatGrid, TopBar};
