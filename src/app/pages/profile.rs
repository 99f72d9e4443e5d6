use dioxus::prelude::*;

use crate::content::{PROFILE_PREFERENCES, STUDENT};
use crate::ui::PanelHeader;

#[component]
pub fn ProfilePage() -> Element {
    rsx! {
        section { class: "panel",
            PanelHeader {
                eyebrow: "Student Profile".to_string(),
                heading: "Vedam Student Settings".to_string(),
                action: "Edit profile".to_string(),
            }
            div { class: "profile-card",
                div { class: "profile-card__hero",
                    div { class: "avatar", "{STUDENT.initials}" }
                    div {
                        h3 { "{STUDENT.full_name}" }
                        p { "{STUDENT.role}" }
                    }
                    span { class: "chip chip--pulse", "Streak: {STUDENT.streak_days} days" }
                }
                div { class: "profile-card__grid",
                    for pref in PROFILE_PREFERENCES.iter() {
                        article { key: "{pref.label}", class: "preference",
                            p { class: "stat-card__label", "{pref.label}" }
                            p { class: "stat-card__value", "{pref.value}" }
                        }
                    }
                }
                div { class: "profile-card__footer",
                    div {
                        p { class: "stat-card__label", "Contest Notifications" }
                        p { class: "stat-card__helper",
                            "Monthly Java & Maths contests · AI analysis alerts"
                        }
                    }
                    button { r#type: "button", "Manage" }
                }
            }
        }
    }
}
