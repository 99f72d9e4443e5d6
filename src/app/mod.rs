//! Root components.
//!
//! `App` resolves config and the starting viewport once, then hands off to
//! `Shell`, which owns the only signal in the tree.

pub mod pages;

use dioxus::prelude::*;

use crate::config::LayoutConfig;
use crate::content::SectionId;
use crate::state::{Breakpoint, UiEvent, UiState};
use crate::ui::Layout;
use crate::viewport;
use pages::{AnalyticsPage, DashboardPage, ProfilePage, SubjectsPage};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let config = use_hook(LayoutConfig::load);
    let initial = use_hook(move || {
        // Corrected by the first media-query report once the document is up.
        let viewport = config.fallback_viewport();
        let state = UiState::for_viewport(config.initial_section, config.breakpoint(), viewport);
        tracing::info!(?config, ?viewport, ?state, "study buddy starting");
        state
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Shell { initial: initial, breakpoint: config.breakpoint() }
    }
}

/// Holds UI state and renders the layout around the active section.
#[component]
pub fn Shell(initial: UiState, breakpoint: Breakpoint) -> Element {
    let mut state = use_signal(move || initial);
    viewport::use_viewport_sync(state, breakpoint);

    let current = state();

    rsx! {
        Layout {
            state: current,
            on_event: move |event: UiEvent| {
                state.write().apply(event);
            },
            ActiveSection { id: current.active }
        }
    }
}

#[component]
pub fn ActiveSection(id: SectionId) -> Element {
    match id {
        SectionId::Dashboard => rsx! { DashboardPage {} },
        SectionId::Subjects => rsx! { SubjectsPage {} },
        SectionId::Analytics => rsx! { AnalyticsPage {} },
        SectionId::Profile => rsx! { ProfilePage {} },
    }
}
