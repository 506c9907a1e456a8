use serde::{Deserialize, Serialize};

/// One subject score for a student in a named examination.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExamResult {
    pub id: String,
    pub student_name: String,
    pub class_name: String,
    pub subject: String,
    /// Examination label, e.g. "Midterm 2026".
    pub exam_name: String,
    pub marks_obtained: i64,
    pub max_marks: i64,
}

impl ExamResult {
    /// Percentage score. 0 when `max_marks` is not positive.
    pub fn percentage(&self) -> f64 {
        if self.max_marks <= 0 {
            return 0.0;
        }
        self.marks_obtained as f64 * 100.0 / self.max_marks as f64
    }

    /// Letter grade for this result.
    pub fn grade(&self) -> &'static str {
        letter_grade(self.percentage())
    }
}

/// Letter grade for a percentage score.
pub fn letter_grade(pct: f64) -> &'static str {
    if pct >= 90.0 {
        "A+"
    } else if pct >= 80.0 {
        "A"
    } else if pct >= 70.0 {
        "B"
    } else if pct >= 60.0 {
        "C"
    } else if pct >= 50.0 {
        "D"
    } else {
        "F"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(marks_obtained: i64, max_marks: i64) -> ExamResult {
        ExamResult {
            id: "RES-1".into(),
            student_name: "Asha Verma".into(),
            class_name: "Grade 7".into(),
            subject: "Mathematics".into(),
            exam_name: "Midterm 2026".into(),
            marks_obtained,
            max_marks,
        }
    }

    #[test]
    fn percentage_of_full_marks() {
        assert_eq!(result(100, 100).percentage(), 100.0);
        assert_eq!(result(45, 60).percentage(), 75.0);
    }

    #[test]
    fn percentage_with_zero_max_marks_is_zero() {
        assert_eq!(result(50, 0).percentage(), 0.0);
        assert_eq!(result(50, -10).percentage(), 0.0);
    }

    #[test]
    fn letter_grade_boundaries() {
        assert_eq!(letter_grade(90.0), "A+");
        assert_eq!(letter_grade(89.9), "A");
        assert_eq!(letter_grade(80.0), "A");
        assert_eq!(letter_grade(70.0), "B");
        assert_eq!(letter_grade(60.0), "C");
        assert_eq!(letter_grade(50.0), "D");
        assert_eq!(letter_grade(49.9), "F");
        assert_eq!(letter_grade(0.0), "F");
    }

    #[test]
    fn grade_follows_percentage() {
        assert_eq!(result(92, 100).grade(), "A+");
        assert_eq!(result(61, 100).grade(), "C");
        assert_eq!(result(30, 100).grade(), "F");
    }

    #[test]
    fn exam_result_serialization_roundtrip() {
        let r = result(88, 100);
        let json = serde_json::to_string(&r).unwrap();
        let deserialized: ExamResult = serde_json::from_str(&json).unwrap();
        assert_eq!(r, deserialized);
    }
}
