//! UI state: the active section and sidebar visibility.
//!
//! Every interaction is expressed as a [`UiEvent`] applied to [`UiState`];
//! components only dispatch events and never mutate fields directly.

use crate::content::SectionId;

/// Minimum viewport width (logical px) treated as desktop.
pub const DEFAULT_DESKTOP_BREAKPOINT_PX: u32 = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width_px: u32,
}

impl Viewport {
    pub fn new(width_px: u32) -> Self {
        Self { width_px }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoint {
    pub min_width_px: u32,
}

impl Default for Breakpoint {
    fn default() -> Self {
        Self {
            min_width_px: DEFAULT_DESKTOP_BREAKPOINT_PX,
        }
    }
}

impl Breakpoint {
    pub fn is_desktop(&self, viewport: Viewport) -> bool {
        viewport.width_px >= self.min_width_px
    }

    /// CSS media query matching desktop viewports.
    pub fn media_query(&self) -> String {
        format!("(min-width: {}px)", self.min_width_px)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// Nav item clicked.
    Select(SectionId),
    /// Hamburger clicked.
    ToggleSidebar,
    /// Backdrop or "Hide" clicked.
    CloseSidebar,
    /// Desktop media query flipped.
    ViewportChanged { desktop: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiState {
    pub active: SectionId,
    pub sidebar_open: bool,
    pub desktop: bool,
}

impl UiState {
    /// Sidebar starts open on desktop and closed otherwise.
    pub fn new(active: SectionId, desktop: bool) -> Self {
        Self {
            active,
            sidebar_open: desktop,
            desktop,
        }
    }

    pub fn for_viewport(active: SectionId, breakpoint: Breakpoint, viewport: Viewport) -> Self {
        Self::new(active, breakpoint.is_desktop(viewport))
    }

    /// Applies an event and reports whether the state changed.
    pub fn apply(&mut self, event: UiEvent) -> bool {
        let before = *self;
        match event {
            UiEvent::Select(id) => {
                self.active = id;
                if !self.desktop {
                    self.sidebar_open = false;
                }
            }
            UiEvent::ToggleSidebar => self.sidebar_open = !self.sidebar_open,
            UiEvent::CloseSidebar => self.sidebar_open = false,
            UiEvent::ViewportChanged { desktop } => {
                self.desktop = desktop;
                self.sidebar_open = desktop;
            }
        }
        let changed = before != *self;
        tracing::debug!(?event, state = ?self, changed, "ui event applied");
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desktop() -> UiState {
        UiState::new(SectionId::Dashboard, true)
    }

    fn mobile() -> UiState {
        UiState::new(SectionId::Dashboard, false)
    }

    #[test]
    fn breakpoint_boundary() {
        let bp = Breakpoint::default();
        assert!(bp.is_desktop(Viewport::new(1024)));
        assert!(bp.is_desktop(Viewport::new(1920)));
        assert!(!bp.is_desktop(Viewport::new(1023)));
        assert!(!bp.is_desktop(Viewport::new(0)));
        assert_eq!(bp.media_query(), "(min-width: 1024px)");
    }

    #[test]
    fn sidebar_initializes_from_viewport() {
        let bp = Breakpoint::default();
        let wide = UiState::for_viewport(SectionId::Dashboard, bp, Viewport::new(1280));
        assert!(wide.sidebar_open);
        assert!(wide.desktop);
        let narrow = UiState::for_viewport(SectionId::Dashboard, bp, Viewport::new(768));
        assert!(!narrow.sidebar_open);
        assert!(!narrow.desktop);
    }

    #[test]
    fn select_sets_active_section() {
        for id in SectionId::ALL {
            let mut state = desktop();
            state.apply(UiEvent::Select(id));
            assert_eq!(state.active, id);
            assert_eq!(state.active.copy(), id.copy());
        }
    }

    #[test]
    fn reselecting_active_section_is_idempotent() {
        let mut state = desktop();
        assert!(state.apply(UiEvent::Select(SectionId::Analytics)));
        let snapshot = state;
        assert!(!state.apply(UiEvent::Select(SectionId::Analytics)));
        assert_eq!(state, snapshot);
    }

    #[test]
    fn select_keeps_sidebar_open_on_desktop() {
        let mut state = desktop();
        state.apply(UiEvent::Select(SectionId::Profile));
        assert!(state.sidebar_open);
    }

    #[test]
    fn select_closes_sidebar_on_narrow_viewport() {
        let mut state = mobile();
        state.apply(UiEvent::ToggleSidebar);
        assert!(state.sidebar_open);
        state.apply(UiEvent::Select(SectionId::Subjects));
        assert_eq!(state.active, SectionId::Subjects);
        assert!(!state.sidebar_open);
    }

    #[test]
    fn toggle_flips_visibility() {
        let mut state = mobile();
        state.apply(UiEvent::ToggleSidebar);
        assert!(state.sidebar_open);
        state.apply(UiEvent::ToggleSidebar);
        assert!(!state.sidebar_open);

        let mut state = desktop();
        state.apply(UiEvent::ToggleSidebar);
        assert!(!state.sidebar_open);
    }

    #[test]
    fn backdrop_closes_open_sidebar() {
        let mut state = mobile();
        state.apply(UiEvent::ToggleSidebar);
        assert!(state.apply(UiEvent::CloseSidebar));
        assert!(!state.sidebar_open);
        assert!(!state.apply(UiEvent::CloseSidebar));
    }

    #[test]
    fn viewport_change_forces_sidebar_to_match() {
        let mut state = desktop();
        state.apply(UiEvent::ViewportChanged { desktop: false });
        assert!(!state.desktop);
        assert!(!state.sidebar_open);

        state.apply(UiEvent::ViewportChanged { desktop: true });
        assert!(state.desktop);
        assert!(state.sidebar_open);
        assert_eq!(state.active, SectionId::Dashboard);
    }
}
