//! Subjects page.
//!
//! One card per subject with:
//! - Performance progress bar
//! - Next focus topic
//! - Weak point chips (omitted when the subject has none)
//! - Count of helpful questions ready

use dioxus::prelude::*;

use crate::content::{Subject, SUBJECTS};
use crate::ui::PanelHeader;

#[component]
pub fn SubjectsPage() -> Element {
    rsx! {
        section { class: "panel",
            PanelHeader {
                eyebrow: "Contest Subjects".to_string(),
                heading: "Maths, Java & Web".to_string(),
                action: "Upload Contest Code".to_string(),
            }
            div { class: "subject-grid",
                for subject in SUBJECTS.iter() {
                    SubjectCard { key: "{subject.name}", subject: *subject }
                }
            }
        }
    }
}

#[component]
fn SubjectCard(subject: Subject) -> Element {
    rsx! {
        article { class: "subject-card",
            header {
                h3 { "{subject.name}" }
                p { "{subject.mentor}" }
            }
            div { class: "progress-track",
                div { style: "width: {subject.progress}%" }
            }
            div { class: "subject-card__footer",
                span { "{subject.progress}% performance" }
                button { r#type: "button", "View Analysis" }
            }
            p { class: "subject-card__next",
                "Next focus: "
                strong { "{subject.next_focus}" }
            }
            if !subject.weak_points.is_empty() {
                div { class: "subject-card__weak",
                    p { class: "subject-card__weak-label", "Weak Points:" }
                    div { class: "chip-row",
                        for point in subject.weak_points {
                            span { class: "chip chip--small", "{point}" }
                        }
                    }
                }
            }
            if subject.helpful_questions > 0 {
                div { class: "subject-card__questions",
                    strong { "{subject.helpful_questions}" }
                    " helpful questions ready"
                }
            }
        }
    }
}
