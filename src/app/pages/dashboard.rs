//! Dashboard page: key metrics, weak points timeline, helpful questions widget.

use dioxus::prelude::*;

use crate::content::{
    DASHBOARD_CARDS, QUESTIONS_AVAILABLE, QUESTION_BARS, QUESTION_BAR_SCALE_PX, QUESTION_SUMMARY,
    WEAK_POINTS,
};
use crate::ui::{PanelHeader, StatGrid};

#[component]
pub fn DashboardPage() -> Element {
    rsx! {
        section { class: "panel",
            PanelHeader {
                eyebrow: "Contest Performance".to_string(),
                heading: "Key Metrics".to_string(),
                action: "Export Report".to_string(),
            }
            StatGrid { cards: &DASHBOARD_CARDS[..] }
        }

        section { class: "panel two-column",
            div {
                h3 { "Weak Points Identified" }
                p { class: "panel__description",
                    "AI analysis of your contest codes and solutions has highlighted these areas for improvement."
                }
                ul { class: "timeline",
                    for point in WEAK_POINTS.iter() {
                        li { key: "{point.topic}",
                            span { "{point.subject}" }
                            div {
                                "{point.topic}"
                                p { "{point.detail}" }
                            }
                        }
                    }
                }
            }
            div {
                h3 { "Helpful Questions" }
                p { class: "panel__description",
                    "AI-generated practice questions tailored to your weak points."
                }
                div { class: "energy-widget",
                    div { class: "energy-widget__score",
                        span { "Available" }
                        strong { "{QUESTIONS_AVAILABLE}" }
                    }
                    div { class: "energy-widget__bars",
                        for height in QUESTION_BARS.iter().map(|score| score * QUESTION_BAR_SCALE_PX) {
                            span { style: "height: {height}px" }
                        }
                    }
                    div { class: "energy-widget__summary",
                        for line in QUESTION_SUMMARY.iter() {
                            p { "{line}" }
                        }
                    }
                }
            }
        }
    }
}
