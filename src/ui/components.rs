use dioxus::prelude::*;

use crate::content::{
    NavItem, SectionCopy, SectionId, StatCard, BRAND, BREAK_PROMPT_TEXT, BREAK_PROMPT_TITLE,
    NAV_ITEMS, STUDENT,
};
use crate::state::{UiEvent, UiState};

/// App shell: sidebar, top bar and the active section as children.
#[component]
pub fn Layout(state: UiState, on_event: EventHandler<UiEvent>, children: Element) -> Element {
    rsx! {
        div { class: "app-layout",
            Sidebar {
                items: &NAV_ITEMS[..],
                active: state.active,
                open: state.sidebar_open,
                on_select: move |id: SectionId| on_event.call(UiEvent::Select(id)),
                on_close: move |_| on_event.call(UiEvent::CloseSidebar),
            }
            main { class: "content-region",
                TopBar {
                    copy: *state.active.copy(),
                    sidebar_open: state.sidebar_open,
                    on_toggle: move |_| on_event.call(UiEvent::ToggleSidebar),
                }
                div { class: "section-wrapper", {children} }
            }
        }
    }
}

/// Navigation sidebar. One button per item; the item matching `active` gets `nav-link active`.
#[component]
pub fn Sidebar(
    items: &'static [NavItem],
    active: SectionId,
    open: bool,
    on_select: EventHandler<SectionId>,
    on_close: EventHandler<()>,
) -> Element {
    let sidebar_class = if open { "sidebar open" } else { "sidebar" };
    let backdrop_class = if open {
        "sidebar__backdrop visible"
    } else {
        "sidebar__backdrop"
    };

    rsx! {
        aside { class: sidebar_class, id: "sidebar",
            div { class: "sidebar__brand",
                div { class: "sidebar__logo", "{BRAND.logo}" }
                div { class: "sidebar__meta",
                    p { "{BRAND.name}" }
                    small { "{BRAND.tagline}" }
                }
                button {
                    class: "sidebar__collapse",
                    r#type: "button",
                    onclick: move |_| on_close.call(()),
                    "Hide"
                }
            }

            nav { class: "sidebar__nav",
                for item in items {
                    button {
                        key: "{item.id}",
                        r#type: "button",
                        class: if item.id == active { "nav-link active" } else { "nav-link" },
                        onclick: move |_| on_select.call(item.id),
                        span { class: "nav-link__icon", "{item.icon}" }
                        span { class: "nav-link__text",
                            "{item.label}"
                            small { "{item.tagline}" }
                        }
                    }
                }
            }

            div { class: "sidebar__footer",
                p { class: "sidebar__footer-title", "{BREAK_PROMPT_TITLE}" }
                p { class: "sidebar__footer-text", "{BREAK_PROMPT_TEXT}" }
                button { class: "sidebar__footer-btn", r#type: "button", "Start Quick Break" }
            }
        }

        button {
            r#type: "button",
            class: backdrop_class,
            aria_label: "Close navigation",
            onclick: move |_| on_close.call(()),
            span { class: "sr-only", "Close navigation" }
        }
    }
}

#[component]
pub fn TopBar(copy: SectionCopy, sidebar_open: bool, on_toggle: EventHandler<()>) -> Element {
    rsx! {
        header { class: "top-bar",
            button {
                r#type: "button",
                class: "hamburger",
                aria_label: "Toggle navigation",
                aria_expanded: "{sidebar_open}",
                onclick: move |_| on_toggle.call(()),
                span {}
                span {}
                span {}
            }
            div { class: "top-bar__titles",
                p { class: "eyebrow", "{copy.eyebrow}" }
                h1 { "{copy.heading}" }
                p { class: "panel__description", "{copy.description}" }
            }
            div { class: "user-pill",
                div { class: "avatar avatar--mini", "{STUDENT.initials}" }
                div {
                    p { "{STUDENT.first_name}" }
                    small { "{STUDENT.focus_mode}" }
                }
            }
        }
    }
}

/// Eyebrow + heading on the left, a ghost action button on the right.
#[component]
pub fn PanelHeader(eyebrow: String, heading: String, action: String) -> Element {
    rsx! {
        div { class: "panel__header",
            div {
                p { class: "eyebrow", "{eyebrow}" }
                h2 { "{heading}" }
            }
            button { class: "ghost-btn", r#type: "button", "{action}" }
        }
    }
}

/// Grid of metric cards, one `stat-card` article per entry.
#[component]
pub fn StatGrid(cards: &'static [StatCard]) -> Element {
    rsx! {
        div { class: "card-grid",
            for card in cards {
                article { key: "{card.title}", class: "stat-card",
                    p { class: "stat-card__label", "{card.title}" }
                    p { class: "stat-card__value", "{card.value}" }
                    p { class: "stat-card__helper", "{card.helper}" }
                }
            }
        }
    }
}
