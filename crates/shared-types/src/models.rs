use serde::{Deserialize, Serialize};

/// School user role controlling which dashboard renders and which sidebar
/// sections are visible.
///
/// - `SuperAdmin`: platform owner. Full visibility.
/// - `Admin`: school office staff handling admissions, fees, records.
/// - `Principal`: academic head with staff and attendance oversight.
/// - `Faculty`: teaching staff with their own classes and assessments.
/// - `Student`: sees their own attendance, fees and results.
/// - `Parent`: sees the ward's attendance, fees and results.
/// - `Unknown`: unrecognized role string. Dispatches to a visible fallback
///   view, never a silent no-render.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub enum UserRole {
    #[default]
    Unknown,
    SuperAdmin,
    Admin,
    Principal,
    Faculty,
    Student,
    Parent,
}

/// All recognized roles in display order (excludes `Unknown`).
pub const ALL_ROLES: &[UserRole] = &[
    UserRole::SuperAdmin,
    UserRole::Admin,
    UserRole::Principal,
    UserRole::Faculty,
    UserRole::Student,
    UserRole::Parent,
];

impl UserRole {
    /// Parse a stored role string. Unknown values fall back to `Unknown`.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "super_admin" => UserRole::SuperAdmin,
            "admin" => UserRole::Admin,
            "principal" => UserRole::Principal,
            "faculty" => UserRole::Faculty,
            "student" => UserRole::Student,
            "parent" => UserRole::Parent,
            _ => UserRole::Unknown,
        }
    }

    /// Lowercase string for cookie / config storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Unknown => "unknown",
            UserRole::SuperAdmin => "super_admin",
            UserRole::Admin => "admin",
            UserRole::Principal => "principal",
            UserRole::Faculty => "faculty",
            UserRole::Student => "student",
            UserRole::Parent => "parent",
        }
    }

    /// Human-readable name for display in UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Unknown => "Unknown",
            UserRole::SuperAdmin => "Super Admin",
            UserRole::Admin => "Admin",
            UserRole::Principal => "Principal",
            UserRole::Faculty => "Faculty",
            UserRole::Student => "Student",
            UserRole::Parent => "Parent",
        }
    }

    /// Staff roles see school-wide records; students and parents see only
    /// their own slice.
    pub fn is_staff(&self) -> bool {
        matches!(
            self,
            UserRole::SuperAdmin | UserRole::Admin | UserRole::Principal | UserRole::Faculty
        )
    }
}

/// Authenticated user info held in session state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthUser {
    pub id: i64,
    pub email: String,
    pub display_name: String,
    /// Stored as a string; parse with [`UserRole::from_str_or_default`].
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// For parent accounts: the enrolled child this account follows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ward_name: Option<String>,
}

impl AuthUser {
    /// The parsed role for dashboard dispatch and sidebar visibility.
    pub fn user_role(&self) -> UserRole {
        UserRole::from_str_or_default(&self.role)
    }
}

/// Login form payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct LoginRequest {
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Valid email is required"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 8, message = "Password must be at least 8 characters"))
    )]
    pub password: String,
}

/// School-wide aggregates for the admin-facing dashboards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SchoolStats {
    pub total_students: i64,
    pub total_faculty: i64,
    pub attendance_rate_pct: f64,
    pub fees_collected_cents: i64,
    pub fees_outstanding_cents: i64,
}

/// Workload aggregates for the faculty dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FacultyStats {
    pub classes_taught: i64,
    pub students_taught: i64,
    pub absentees_today: i64,
    pub pending_grading: i64,
}

/// Per-student aggregates for the student and parent dashboards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudentStats {
    pub attendance_pct: f64,
    pub pending_fee_cents: i64,
    pub upcoming_exams: i64,
    pub latest_grade: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_from_str_known_values() {
        assert_eq!(
            UserRole::from_str_or_default("super_admin"),
            UserRole::SuperAdmin
        );
        assert_eq!(UserRole::from_str_or_default("Admin"), UserRole::Admin);
        assert_eq!(
            UserRole::from_str_or_default("PRINCIPAL"),
            UserRole::Principal
        );
        assert_eq!(UserRole::from_str_or_default("faculty"), UserRole::Faculty);
        assert_eq!(UserRole::from_str_or_default("student"), UserRole::Student);
        assert_eq!(UserRole::from_str_or_default("parent"), UserRole::Parent);
    }

    #[test]
    fn role_from_str_unknown_falls_back() {
        assert_eq!(UserRole::from_str_or_default(""), UserRole::Unknown);
        assert_eq!(UserRole::from_str_or_default("janitor"), UserRole::Unknown);
        assert_eq!(UserRole::from_str_or_default("root"), UserRole::Unknown);
    }

    #[test]
    fn role_default_is_unknown() {
        assert_eq!(UserRole::default(), UserRole::Unknown);
    }

    #[test]
    fn role_as_str_roundtrip() {
        for role in ALL_ROLES {
            assert_eq!(UserRole::from_str_or_default(role.as_str()), *role);
        }
    }

    #[test]
    fn staff_roles() {
        assert!(UserRole::SuperAdmin.is_staff());
        assert!(UserRole::Admin.is_staff());
        assert!(UserRole::Principal.is_staff());
        assert!(UserRole::Faculty.is_staff());
        assert!(!UserRole::Student.is_staff());
        assert!(!UserRole::Parent.is_staff());
        assert!(!UserRole::Unknown.is_staff());
    }

    #[test]
    fn auth_user_serialization_roundtrip() {
        let user = AuthUser {
            id: 7,
            email: "faculty@campanile.edu".into(),
            display_name: "Miriam Okafor".into(),
            role: "faculty".into(),
            avatar_url: None,
            ward_name: None,
        };

        let json = serde_json::to_string(&user).unwrap();
        let deserialized: AuthUser = serde_json::from_str(&json).unwrap();

        assert_eq!(user, deserialized);
        assert_eq!(deserialized.user_role(), UserRole::Faculty);
    }

    #[test]
    fn auth_user_deserializes_without_optional_fields() {
        let json = r#"{"id": 3, "email": "p@campanile.edu", "display_name": "Pat", "role": "parent"}"#;
        let user: AuthUser = serde_json::from_str(json).unwrap();

        assert_eq!(user.avatar_url, None);
        assert_eq!(user.ward_name, None);
        assert_eq!(user.user_role(), UserRole::Parent);
    }

    #[cfg(feature = "validation")]
    #[test]
    fn login_request_validation() {
        use validator::Validate;

        let bad = LoginRequest {
            email: "not-an-email".into(),
            password: "short".into(),
        };
        let errors = bad.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
        assert!(errors.field_errors().contains_key("password"));

        let good = LoginRequest {
            email: "admin@campanile.edu".into(),
            password: "demo1234".into(),
        };
        assert!(good.validate().is_ok());
    }
}
