//! Section ids and the header copy shown for each one.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// One of the four top-level views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum SectionId {
    #[default]
    Dashboard,
    Subjects,
    Analytics,
    Profile,
}

/// Eyebrow, heading and description rendered in the top bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionCopy {
    pub eyebrow: &'static str,
    pub heading: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown section id: {0:?}")]
pub struct ParseSectionError(pub String);

impl SectionId {
    /// Every section, in navigation order.
    pub const ALL: [SectionId; 4] = [
        SectionId::Dashboard,
        SectionId::Subjects,
        SectionId::Analytics,
        SectionId::Profile,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Dashboard => "dashboard",
            SectionId::Subjects => "subjects",
            SectionId::Analytics => "analytics",
            SectionId::Profile => "profile",
        }
    }

    pub fn copy(self) -> &'static SectionCopy {
        match self {
            SectionId::Dashboard => &DASHBOARD_COPY,
            SectionId::Subjects => &SUBJECTS_COPY,
            SectionId::Analytics => &ANALYTICS_COPY,
            SectionId::Profile => &PROFILE_COPY,
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = ParseSectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| ParseSectionError(s.to_string()))
    }
}

impl TryFrom<String> for SectionId {
    type Error = ParseSectionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

const DASHBOARD_COPY: SectionCopy = SectionCopy {
    eyebrow: "Vedam Dashboard",
    heading: "Contest Performance Overview",
    description: "Track your progress in monthly Java and Maths contests, identify weak points, and get AI-powered study recommendations.",
};

const SUBJECTS_COPY: SectionCopy = SectionCopy {
    eyebrow: "Contest Subjects",
    heading: "Maths, Java & Web",
    description: "Analyze your performance, review codes and solutions, and discover areas that need more practice.",
};

const ANALYTICS_COPY: SectionCopy = SectionCopy {
    eyebrow: "Performance Insights",
    heading: "Analytics & Report",
    description: "Deep dive into contest results, weak point analysis, and personalized improvement recommendations.",
};

const PROFILE_COPY: SectionCopy = SectionCopy {
    eyebrow: "Student Profile",
    heading: "Profile & Settings",
    description: "Manage your Vedam student profile and customize your study preferences.",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_known_id() {
        for id in SectionId::ALL {
            assert_eq!(id.as_str().parse::<SectionId>(), Ok(id));
            assert_eq!(id.to_string(), id.as_str());
        }
    }

    #[test]
    fn rejects_unknown_id() {
        let err = "settings".parse::<SectionId>().unwrap_err();
        assert_eq!(err, ParseSectionError("settings".to_string()));
        assert_eq!(err.to_string(), "unknown section id: \"settings\"");
        assert!("Dashboard".parse::<SectionId>().is_err());
    }

    #[test]
    fn copy_headings_are_distinct() {
        let headings: std::collections::HashSet<_> =
            SectionId::ALL.iter().map(|id| id.copy().heading).collect();
        assert_eq!(headings.len(), 4);
    }
}
