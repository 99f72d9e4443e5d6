//! Desktop media-query bridge.
//!
//! A script evaluated in the renderer's document (browser tab or desktop
//! webview) watches `matchMedia(<breakpoint query>)`. It sends the current
//! `matches` once on mount and again on every `change`. Each message becomes a
//! [`UiEvent::ViewportChanged`]. The listener is removed when the owning
//! component unmounts.

use dioxus::prelude::*;

use crate::state::{Breakpoint, UiEvent, UiState};

const DETACH_SCRIPT: &str = "window.__studyBuddyDetachMedia?.();";

/// Script that reports `matches` for `breakpoint` through `dioxus.send`.
pub fn media_listener_script(breakpoint: Breakpoint) -> String {
    format!(
        r#"{DETACH_SCRIPT}
const media = window.matchMedia("{query}");
const sync = () => dioxus.send(media.matches);
media.addEventListener("change", sync);
window.__studyBuddyDetachMedia = () => {{
    media.removeEventListener("change", sync);
    delete window.__studyBuddyDetachMedia;
}};
sync();
await dioxus.recv();
"#,
        query = breakpoint.media_query(),
    )
}

/// Keeps `state` in sync with the desktop media query.
pub fn use_viewport_sync(mut state: Signal<UiState>, breakpoint: Breakpoint) {
    use_future(move || async move {
        let mut media = document::eval(&media_listener_script(breakpoint));
        loop {
            match media.recv::<bool>().await {
                Ok(desktop) => {
                    tracing::debug!(desktop, "viewport class reported");
                    state.write().apply(UiEvent::ViewportChanged { desktop });
                }
                Err(err) => {
                    tracing::warn!(?err, query = %breakpoint.media_query(), "media query listener stopped");
                    break;
                }
            }
        }
    });

    use_drop(|| {
        let _ = document::eval(DETACH_SCRIPT);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_watches_configured_breakpoint() {
        let script = media_listener_script(Breakpoint::default());
        assert!(script.contains(r#"window.matchMedia("(min-width: 1024px)")"#));
        assert!(script.contains(r#"media.addEventListener("change", sync)"#));
        assert!(script.contains(r#"media.removeEventListener("change", sync)"#));
    }

    #[test]
    fn script_reports_initial_match_before_waiting() {
        let script = media_listener_script(Breakpoint { min_width_px: 900 });
        assert!(script.contains("(min-width: 900px)"));
        let initial = script.find("sync();").unwrap();
        let wait = script.find("await dioxus.recv()").unwrap();
        assert!(initial < wait);
        assert!(script.starts_with(DETACH_SCRIPT));
    }
}
