//! Analytics page: headline stats, contest trend heat chart, generated reports.

use dioxus::prelude::*;

use crate::content::{ANALYTICS_STATS, CONTEST_TRENDS, REPORTS};
use crate::ui::{PanelHeader, StatGrid};

#[component]
pub fn AnalyticsPage() -> Element {
    rsx! {
        section { class: "panel",
            PanelHeader {
                eyebrow: "Performance Metrics".to_string(),
                heading: "Contest Analytics".to_string(),
                action: "Generate PDF".to_string(),
            }
            StatGrid { cards: &ANALYTICS_STATS[..] }
        }

        section { class: "panel two-column",
            div {
                h3 { "Contest Performance Trend" }
                p { class: "panel__description",
                    "Track your monthly contest scores across Maths, Java, and Web subjects."
                }
                div { class: "heat-chart",
                    for row in CONTEST_TRENDS.iter() {
                        div { key: "{row.name}", class: "heat-chart__row",
                            span { "{row.name}" }
                            for (opacity, height) in row.cells() {
                                i { style: "opacity: {opacity}; height: {height}px" }
                            }
                        }
                    }
                }
            }
            div {
                h3 { "AI Analysis Reports" }
                p { class: "panel__description", "Generated reports from your contest code analysis." }
                ul { class: "report-list",
                    for report in REPORTS.iter() {
                        li { key: "{report.title}",
                            div {
                                p { "{report.title}" }
                                small { "{report.status}" }
                            }
                            button { r#type: "button", "{report.action}" }
                        }
                    }
                }
            }
        }
    }
}
