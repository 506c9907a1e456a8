use serde::{Deserialize, Serialize};

/// Enrollment status of a student record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub enum StudentStatus {
    #[default]
    Active,
    Suspended,
    Graduated,
    Withdrawn,
}

impl StudentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StudentStatus::Active => "active",
            StudentStatus::Suspended => "suspended",
            StudentStatus::Graduated => "graduated",
            StudentStatus::Withdrawn => "withdrawn",
        }
    }

    /// Parse a status string, defaulting to `Active` for unknown values.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "suspended" => StudentStatus::Suspended,
            "graduated" => StudentStatus::Graduated,
            "withdrawn" => StudentStatus::Withdrawn,
            _ => StudentStatus::Active,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StudentStatus::Active => "Active",
            StudentStatus::Suspended => "Suspended",
            StudentStatus::Graduated => "Graduated",
            StudentStatus::Withdrawn => "Withdrawn",
        }
    }
}

/// A student roster record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Student {
    /// Display identifier, e.g. "STU-1001".
    pub id: String,
    pub admission_no: String,
    pub first_name: String,
    pub last_name: String,
    /// Class label, e.g. "Grade 7".
    pub class_name: String,
    /// Section within the class, e.g. "A".
    pub section: String,
    pub guardian_name: String,
    pub guardian_phone: String,
    pub status: StudentStatus,
    /// ISO-8601 admission date.
    pub admitted_at: String,
}

impl Student {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Class and section combined for list display, e.g. "Grade 7 A".
    pub fn class_section(&self) -> String {
        format!("{} {}", self.class_name, self.section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Student {
        Student {
            id: "STU-1001".into(),
            admission_no: "2023-014".into(),
            first_name: "Asha".into(),
            last_name: "Verma".into(),
            class_name: "Grade 7".into(),
            section: "A".into(),
            guardian_name: "Rohit Verma".into(),
            guardian_phone: "555-0114".into(),
            status: StudentStatus::Active,
            admitted_at: "2023-06-12".into(),
        }
    }

    #[test]
    fn full_name_joins_first_and_last() {
        assert_eq!(sample().full_name(), "Asha Verma");
    }

    #[test]
    fn class_section_display() {
        assert_eq!(sample().class_section(), "Grade 7 A");
    }

    #[test]
    fn status_from_str_unknown_defaults_to_active() {
        assert_eq!(
            StudentStatus::from_str_or_default("expelled"),
            StudentStatus::Active
        );
        assert_eq!(StudentStatus::from_str_or_default(""), StudentStatus::Active);
    }

    #[test]
    fn status_as_str_roundtrip() {
        for status in [
            StudentStatus::Active,
            StudentStatus::Suspended,
            StudentStatus::Graduated,
            StudentStatus::Withdrawn,
        ] {
            assert_eq!(StudentStatus::from_str_or_default(status.as_str()), status);
        }
    }

    #[test]
    fn student_serialization_roundtrip() {
        let student = sample();
        let json = serde_json::to_string(&student).unwrap();
        let deserialized: Student = serde_json::from_str(&json).unwrap();
        assert_eq!(student, deserialized);
    }
}
