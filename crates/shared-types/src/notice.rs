use serde::{Deserialize, Serialize};

use crate::models::UserRole;

/// Audience a notice is addressed to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub enum NoticeAudience {
    #[default]
    All,
    Staff,
    Students,
    Parents,
}

impl NoticeAudience {
    pub fn display_name(&self) -> &'static str {
        match self {
            NoticeAudience::All => "Everyone",
            NoticeAudience::Staff => "Staff",
            NoticeAudience::Students => "Students",
            NoticeAudience::Parents => "Parents",
        }
    }

    /// Whether a notice for this audience is shown to the given role.
    pub fn includes(&self, role: &UserRole) -> bool {
        match self {
            NoticeAudience::All => true,
            NoticeAudience::Staff => role.is_staff(),
            NoticeAudience::Students => matches!(role, UserRole::Student),
            NoticeAudience::Parents => matches!(role, UserRole::Parent),
        }
    }
}

/// A notice-board entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notice {
    pub id: String,
    pub title: String,
    pub body: String,
    pub audience: NoticeAudience,
    /// ISO-8601 publish timestamp.
    pub published_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_audience_includes_every_role() {
        for role in [
            UserRole::SuperAdmin,
            UserRole::Faculty,
            UserRole::Student,
            UserRole::Parent,
            UserRole::Unknown,
        ] {
            assert!(NoticeAudience::All.includes(&role));
        }
    }

    #[test]
    fn staff_audience_excludes_students_and_parents() {
        assert!(NoticeAudience::Staff.includes(&UserRole::Principal));
        assert!(NoticeAudience::Staff.includes(&UserRole::Faculty));
        assert!(!NoticeAudience::Staff.includes(&UserRole::Student));
        assert!(!NoticeAudience::Staff.includes(&UserRole::Parent));
    }

    #[test]
    fn student_and_parent_audiences_are_exact() {
        assert!(NoticeAudience::Students.includes(&UserRole::Student));
        assert!(!NoticeAudience::Students.includes(&UserRole::Parent));
        assert!(NoticeAudience::Parents.includes(&UserRole::Parent));
        assert!(!NoticeAudience::Parents.includes(&UserRole::Faculty));
    }
}
