//! Static content tables rendered by the dashboard.
//!
//! Everything here is a `&'static` literal: nothing is fetched, stored or
//! computed at runtime. Pages map these slices straight into markup, so the
//! order of each table is the order on screen.

mod section;

pub use section::{ParseSectionError, SectionCopy, SectionId};

/// Sidebar navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub id: SectionId,
    pub label: &'static str,
    pub tagline: &'static str,
    pub icon: &'static str,
}

/// Headline metric card (dashboard key metrics, analytics stats).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
    pub helper: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeakPoint {
    pub subject: &'static str,
    pub topic: &'static str,
    pub detail: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subject {
    pub name: &'static str,
    pub mentor: &'static str,
    /// Performance percentage, 0..=100.
    pub progress: u8,
    pub next_focus: &'static str,
    pub weak_points: &'static [&'static str],
    pub helpful_questions: u32,
}

/// One subject's monthly contest scores for the heat chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendRow {
    pub name: &'static str,
    pub scores: [u8; 5],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub title: &'static str,
    pub status: &'static str,
    pub action: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preference {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Student {
    pub initials: &'static str,
    pub full_name: &'static str,
    pub first_name: &'static str,
    pub role: &'static str,
    pub streak_days: u32,
    pub focus_mode: &'static str,
}

pub static NAV_ITEMS: [NavItem; 4] = [
    NavItem {
        id: SectionId::Dashboard,
        label: "Dashboard",
        tagline: "Today at a glance",
        icon: "DB",
    },
    NavItem {
        id: SectionId::Subjects,
        label: "Subjects",
        tagline: "Deep dives & plans",
        icon: "SB",
    },
    NavItem {
        id: SectionId::Analytics,
        label: "Analytics & Report",
        tagline: "Progress pulse",
        icon: "AR",
    },
    NavItem {
        id: SectionId::Profile,
        label: "Profile",
        tagline: "Personal preferences",
        icon: "PR",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brand {
    pub logo: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
}

pub const BRAND: Brand = Brand {
    logo: "VB",
    name: "Vedam Study Buddy",
    tagline: "Contest Analytics",
};

pub const BREAK_PROMPT_TITLE: &str = "Need a reset?";
pub const BREAK_PROMPT_TEXT: &str =
    "Schedule a 5 minute stretch or reflection break to keep clarity high.";

pub const STUDENT: Student = Student {
    initials: "SJ",
    full_name: "Sidhant Joshi",
    first_name: "Sidhant",
    role: "Vedam Student · Contest Participant",
    streak_days: 12,
    focus_mode: "Focus mode · On",
};

// Dashboard

pub static DASHBOARD_CARDS: [StatCard; 4] = [
    StatCard {
        title: "Contest Score",
        value: "78%",
        helper: "Last month: Java Contest",
    },
    StatCard {
        title: "Weak Areas",
        value: "3 topics",
        helper: "Needs attention",
    },
    StatCard {
        title: "Practice Streak",
        value: "12 days",
        helper: "Keep it up!",
    },
    StatCard {
        title: "Helpful Questions",
        value: "8 ready",
        helper: "AI-generated for you",
    },
];

pub static WEAK_POINTS: [WeakPoint; 3] = [
    WeakPoint {
        subject: "Java",
        topic: "Recursion Patterns",
        detail: "Struggled with recursive solutions in last contest",
    },
    WeakPoint {
        subject: "Maths",
        topic: "Matrix Operations",
        detail: "Multiple errors in matrix multiplication problems",
    },
    WeakPoint {
        subject: "Web",
        topic: "State Management",
        detail: "Need better understanding of React state flow",
    },
];

/// Bar heights for the helpful-questions widget, scaled by [`QUESTION_BAR_SCALE_PX`].
pub static QUESTION_BARS: [u32; 5] = [5, 8, 6, 7, 4];
pub const QUESTION_BAR_SCALE_PX: u32 = 8;
pub const QUESTIONS_AVAILABLE: &str = "16 questions";

pub static QUESTION_SUMMARY: [&str; 3] = [
    "5 questions on Recursion (Java)",
    "8 questions on Matrix Ops (Maths)",
    "3 questions on State (Web)",
];

// Subjects

pub static SUBJECTS: [Subject; 3] = [
    Subject {
        name: "Maths",
        mentor: "Contest Analysis",
        progress: 75,
        next_focus: "Linear Algebra",
        weak_points: &["Matrix Operations", "Differential Equations"],
        helpful_questions: 5,
    },
    Subject {
        name: "Java",
        mentor: "Code Review",
        progress: 68,
        next_focus: "Data Structures",
        weak_points: &["Recursion", "Dynamic Programming"],
        helpful_questions: 8,
    },
    Subject {
        name: "Web",
        mentor: "Project Feedback",
        progress: 82,
        next_focus: "React Hooks",
        weak_points: &["State Management"],
        helpful_questions: 3,
    },
];

// Analytics

pub static ANALYTICS_STATS: [StatCard; 3] = [
    StatCard {
        title: "Contests Completed",
        value: "4",
        helper: "This month",
    },
    StatCard {
        title: "Code Submissions",
        value: "23",
        helper: "Reviewed by AI",
    },
    StatCard {
        title: "Improvement Rate",
        value: "15%",
        helper: "Up from last month",
    },
];

pub static CONTEST_TRENDS: [TrendRow; 3] = [
    TrendRow {
        name: "Maths",
        scores: [72, 75, 78, 73, 76],
    },
    TrendRow {
        name: "Java",
        scores: [65, 68, 70, 67, 69],
    },
    TrendRow {
        name: "Web",
        scores: [80, 82, 85, 81, 83],
    },
];

pub static REPORTS: [Report; 3] = [
    Report {
        title: "Java Contest Analysis",
        status: "Generated 2 days ago",
        action: "View",
    },
    Report {
        title: "Maths Weak Points Report",
        status: "Ready for review",
        action: "Share",
    },
    Report {
        title: "Web Project Feedback",
        status: "AI review completed",
        action: "Download",
    },
];

// Profile

pub static PROFILE_PREFERENCES: [Preference; 4] = [
    Preference {
        label: "Vedam ID",
        value: "VED-2024-001",
    },
    Preference {
        label: "Contest Participation",
        value: "Monthly",
    },
    Preference {
        label: "Primary Focus",
        value: "Java & Maths",
    },
    Preference {
        label: "AI Analysis",
        value: "Enabled",
    },
];

impl TrendRow {
    /// Cell opacity in `0.0..=1.0`.
    pub fn opacity(score: u8) -> f32 {
        f32::from(score) / 100.0
    }

    /// Cell height in pixels.
    pub fn height_px(score: u8) -> f32 {
        f32::from(score) / 5.0
    }

    /// `(opacity, height_px)` per score, in month order.
    pub fn cells(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.scores
            .iter()
            .map(|&score| (Self::opacity(score), Self::height_px(score)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_items_follow_section_order() {
        let ids: Vec<_> = NAV_ITEMS.iter().map(|item| item.id).collect();
        assert_eq!(ids, SectionId::ALL.to_vec());
    }

    #[test]
    fn subject_progress_is_a_percentage() {
        assert!(SUBJECTS.iter().all(|s| s.progress <= 100));
        assert!(CONTEST_TRENDS
            .iter()
            .flat_map(|row| row.scores)
            .all(|score| score <= 100));
    }

    #[test]
    fn heat_chart_scaling() {
        assert_eq!(TrendRow::opacity(72), 0.72);
        assert_eq!(TrendRow::height_px(85), 17.0);
        assert_eq!(CONTEST_TRENDS[2].cells().count(), 5);
        assert_eq!(CONTEST_TRENDS[2].cells().next(), Some((0.8, 16.0)));
    }
}
