//! Static demo dataset backing every view.
//!
//! Stands in for a server: queries slice and filter in memory and return the
//! same envelopes a remote API would.

use shared_types::{
    attendance_rate, normalize_pagination, outstanding_cents, total_cents_with_status, AppError,
    AttendanceRecord, AttendanceStatus, AuthUser, ExamResult, FacultyStats, FeeInvoice, FeeStatus,
    Notice, NoticeAudience, PaginatedResponse, SchoolStats, Student, StudentStats, StudentStatus,
    UserRole,
};

struct DemoAccount {
    id: i64,
    email: &'static str,
    password: &'static str,
    display_name: &'static str,
    role: &'static str,
    ward_name: Option<&'static str>,
}

/// One sign-in account per role. All use the password "demo1234".
const DEMO_ACCOUNTS: &[DemoAccount] = &[
    DemoAccount {
        id: 1,
        email: "superadmin@campanile.edu",
        password: "demo1234",
        display_name: "Sasha Iyer",
        role: "super_admin",
        ward_name: None,
    },
    DemoAccount {
        id: 2,
        email: "admin@campanile.edu",
        password: "demo1234",
        display_name: "Priya Nair",
        role: "admin",
        ward_name: None,
    },
    DemoAccount {
        id: 3,
        email: "principal@campanile.edu",
        password: "demo1234",
        display_name: "Eleanor Brooks",
        role: "principal",
        ward_name: None,
    },
    DemoAccount {
        id: 4,
        email: "faculty@campanile.edu",
        password: "demo1234",
        display_name: "Miriam Okafor",
        role: "faculty",
        ward_name: None,
    },
    DemoAccount {
        id: 5,
        email: "student@campanile.edu",
        password: "demo1234",
        display_name: "Diego Ramos",
        role: "student",
        ward_name: None,
    },
    DemoAccount {
        id: 6,
        email: "parent@campanile.edu",
        password: "demo1234",
        display_name: "Rohit Verma",
        role: "parent",
        ward_name: Some("Asha Verma"),
    },
];

fn to_auth_user(account: &DemoAccount) -> AuthUser {
    AuthUser {
        id: account.id,
        email: account.email.to_string(),
        display_name: account.display_name.to_string(),
        role: account.role.to_string(),
        avatar_url: None,
        ward_name: account.ward_name.map(str::to_string),
    }
}

/// Check demo credentials.
///
/// An unknown email and a wrong password are indistinguishable to the
/// caller, matching how a credential backend would respond.
pub fn authenticate(email: &str, password: &str) -> Result<AuthUser, AppError> {
    DEMO_ACCOUNTS
        .iter()
        .find(|a| a.email.eq_ignore_ascii_case(email.trim()) && a.password == password)
        .map(to_auth_user)
        .ok_or_else(|| AppError::unauthorized("Invalid email or password"))
}

/// Look up an account by email for session restore.
pub fn find_account(email: &str) -> Option<AuthUser> {
    DEMO_ACCOUNTS
        .iter()
        .find(|a| a.email.eq_ignore_ascii_case(email))
        .map(to_auth_user)
}

/// Accounts surfaced as hints on the login screen: (email, role label).
pub fn account_directory() -> Vec<(&'static str, &'static str)> {
    DEMO_ACCOUNTS
        .iter()
        .map(|a| (a.email, UserRole::from_str_or_default(a.role).display_name()))
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn student(
    id: &str,
    admission_no: &str,
    first_name: &str,
    last_name: &str,
    class_name: &str,
    section: &str,
    guardian_name: &str,
    guardian_phone: &str,
    status: StudentStatus,
    admitted_at: &str,
) -> Student {
    Student {
        id: id.into(),
        admission_no: admission_no.into(),
        first_name: first_name.into(),
        last_name: last_name.into(),
        class_name: class_name.into(),
        section: section.into(),
        guardian_name: guardian_name.into(),
        guardian_phone: guardian_phone.into(),
        status,
        admitted_at: admitted_at.into(),
    }
}

/// The full student roster, newest admissions last.
pub fn students() -> Vec<Student> {
    use StudentStatus::{Active, Graduated, Suspended, Withdrawn};
    vec![
        student("STU-1001", "2022-003", "Asha", "Verma", "Grade 7", "A", "Rohit Verma", "555-0114", Active, "2022-06-10"),
        student("STU-1002", "2022-007", "Diego", "Ramos", "Grade 8", "B", "Lucia Ramos", "555-0182", Active, "2022-06-10"),
        student("STU-1003", "2022-011", "Mei", "Chen", "Grade 7", "A", "Wei Chen", "555-0133", Active, "2022-06-11"),
        student("STU-1004", "2022-015", "Tomas", "Novak", "Grade 9", "A", "Petra Novak", "555-0147", Active, "2022-06-12"),
        student("STU-1005", "2022-019", "Fatima", "Hassan", "Grade 6", "B", "Omar Hassan", "555-0156", Active, "2022-06-12"),
        student("STU-1006", "2022-024", "Noah", "Kimani", "Grade 8", "A", "Grace Kimani", "555-0118", Active, "2022-06-14"),
        student("STU-1007", "2022-031", "Ines", "Silva", "Grade 9", "B", "Paulo Silva", "555-0171", Graduated, "2022-06-15"),
        student("STU-1008", "2023-002", "Yuki", "Tanaka", "Grade 7", "B", "Hana Tanaka", "555-0126", Active, "2023-06-08"),
        student("STU-1009", "2023-006", "Leo", "Fischer", "Grade 6", "A", "Anna Fischer", "555-0139", Active, "2023-06-08"),
        student("STU-1010", "2023-009", "Amara", "Obi", "Grade 8", "B", "Chidi Obi", "555-0165", Active, "2023-06-09"),
        student("STU-1011", "2023-013", "Elif", "Yilmaz", "Grade 7", "A", "Murat Yilmaz", "555-0122", Suspended, "2023-06-09"),
        student("STU-1012", "2023-017", "Sam", "Whitfield", "Grade 9", "A", "Dana Whitfield", "555-0150", Active, "2023-06-10"),
        student("STU-1013", "2023-021", "Nadia", "Petrova", "Grade 6", "B", "Ivan Petrov", "555-0160", Active, "2023-06-11"),
        student("STU-1014", "2023-026", "Kwame", "Mensah", "Grade 8", "A", "Abena Mensah", "555-0174", Active, "2023-06-12"),
        student("STU-1015", "2023-030", "Lucia", "Moretti", "Grade 7", "B", "Marco Moretti", "555-0188", Active, "2023-06-13"),
        student("STU-1016", "2023-034", "Arjun", "Pillai", "Grade 9", "B", "Deepa Pillai", "555-0191", Withdrawn, "2023-06-14"),
        student("STU-1017", "2024-004", "Sofia", "Alvarez", "Grade 6", "A", "Carmen Alvarez", "555-0107", Active, "2024-06-06"),
        student("STU-1018", "2024-008", "Jonas", "Berg", "Grade 7", "A", "Erik Berg", "555-0142", Active, "2024-06-06"),
        student("STU-1019", "2024-012", "Aaliyah", "Khan", "Grade 8", "B", "Sara Khan", "555-0128", Active, "2024-06-07"),
        student("STU-1020", "2024-016", "Mateo", "Costa", "Grade 6", "B", "Beatriz Costa", "555-0136", Active, "2024-06-08"),
        student("STU-1021", "2024-020", "Hana", "Aziz", "Grade 9", "A", "Karim Aziz", "555-0152", Active, "2024-06-09"),
        student("STU-1022", "2024-025", "Oliver", "Hughes", "Grade 7", "B", "Megan Hughes", "555-0169", Active, "2024-06-10"),
        student("STU-1023", "2025-003", "Zara", "Okonkwo", "Grade 6", "A", "Emeka Okonkwo", "555-0111", Active, "2025-06-05"),
        student("STU-1024", "2025-007", "Felix", "Larsen", "Grade 8", "A", "Mette Larsen", "555-0177", Active, "2025-06-05"),
        student("STU-1025", "2025-011", "Priya", "Desai", "Grade 7", "A", "Nikhil Desai", "555-0195", Active, "2025-06-06"),
        student("STU-1026", "2025-015", "Ethan", "Walker", "Grade 9", "B", "Claire Walker", "555-0103", Active, "2025-06-07"),
    ]
}

/// Search the roster by name, admission number, or class, one page at a time.
pub fn search_students(
    query: &str,
    page: Option<i64>,
    page_size: Option<i64>,
) -> PaginatedResponse<Student> {
    let (page, page_size) = normalize_pagination(page, page_size);
    let needle = query.trim().to_lowercase();

    let matched: Vec<Student> = students()
        .into_iter()
        .filter(|s| {
            needle.is_empty()
                || s.full_name().to_lowercase().contains(&needle)
                || s.admission_no.to_lowercase().contains(&needle)
                || s.class_section().to_lowercase().contains(&needle)
        })
        .collect();

    let total = matched.len() as i64;
    let data = matched
        .into_iter()
        .skip(((page - 1) * page_size) as usize)
        .take(page_size as usize)
        .collect();

    PaginatedResponse::new(data, page, page_size, total)
}

pub fn find_student(id: &str) -> Option<Student> {
    students().into_iter().find(|s| s.id == id)
}

/// The five most recent admissions, for the admin dashboards.
pub fn recent_admissions() -> Vec<Student> {
    let mut roster = students();
    roster.sort_by(|a, b| b.admitted_at.cmp(&a.admitted_at));
    roster.truncate(5);
    roster
}

fn attendance(
    id: &str,
    student_name: &str,
    class_name: &str,
    section: &str,
    status: AttendanceStatus,
    remarks: &str,
) -> AttendanceRecord {
    AttendanceRecord {
        id: id.into(),
        student_name: student_name.into(),
        class_name: class_name.into(),
        section: section.into(),
        date: TODAY.into(),
        status,
        remarks: remarks.into(),
    }
}

/// The register date all demo attendance is pinned to.
pub const TODAY: &str = "2026-03-02";

/// Today's attendance register.
pub fn attendance_today() -> Vec<AttendanceRecord> {
    use AttendanceStatus::{Absent, Excused, Late, Present};
    vec![
        attendance("ATT-3001", "Asha Verma", "Grade 7", "A", Present, ""),
        attendance("ATT-3002", "Mei Chen", "Grade 7", "A", Present, ""),
        attendance("ATT-3003", "Elif Yilmaz", "Grade 7", "A", Absent, "No notice from guardian"),
        attendance("ATT-3004", "Jonas Berg", "Grade 7", "A", Late, "Arrived 09:20"),
        attendance("ATT-3005", "Priya Desai", "Grade 7", "A", Present, ""),
        attendance("ATT-3006", "Yuki Tanaka", "Grade 7", "B", Present, ""),
        attendance("ATT-3007", "Lucia Moretti", "Grade 7", "B", Excused, "Medical appointment"),
        attendance("ATT-3008", "Oliver Hughes", "Grade 7", "B", Present, ""),
        attendance("ATT-3009", "Diego Ramos", "Grade 8", "B", Present, ""),
        attendance("ATT-3010", "Amara Obi", "Grade 8", "B", Absent, "Second day absent"),
        attendance("ATT-3011", "Aaliyah Khan", "Grade 8", "B", Present, ""),
        attendance("ATT-3012", "Noah Kimani", "Grade 8", "A", Present, ""),
    ]
}

fn invoice(
    id: &str,
    student_name: &str,
    class_name: &str,
    term: &str,
    amount_cents: i64,
    due_date: &str,
    status: FeeStatus,
) -> FeeInvoice {
    FeeInvoice {
        id: id.into(),
        student_name: student_name.into(),
        class_name: class_name.into(),
        term: term.into(),
        amount_cents,
        due_date: due_date.into(),
        status,
    }
}

/// The term-fee ledger.
pub fn fee_invoices() -> Vec<FeeInvoice> {
    use FeeStatus::{Overdue, Paid, Pending, Waived};
    vec![
        invoice("INV-2026-031", "Asha Verma", "Grade 7", "Term 1 2026", 125_000, "2026-02-15", Paid),
        invoice("INV-2026-032", "Diego Ramos", "Grade 8", "Term 1 2026", 131_000, "2026-02-15", Paid),
        invoice("INV-2026-033", "Mei Chen", "Grade 7", "Term 1 2026", 125_000, "2026-02-15", Paid),
        invoice("INV-2026-034", "Fatima Hassan", "Grade 6", "Term 1 2026", 118_500, "2026-02-15", Overdue),
        invoice("INV-2026-035", "Noah Kimani", "Grade 8", "Term 1 2026", 131_000, "2026-02-15", Paid),
        invoice("INV-2026-036", "Nadia Petrova", "Grade 6", "Term 1 2026", 118_500, "2026-02-15", Waived),
        invoice("INV-2026-041", "Asha Verma", "Grade 7", "Term 2 2026", 125_000, "2026-04-15", Pending),
        invoice("INV-2026-042", "Diego Ramos", "Grade 8", "Term 2 2026", 131_000, "2026-04-15", Pending),
        invoice("INV-2026-043", "Sofia Alvarez", "Grade 6", "Term 2 2026", 118_500, "2026-04-15", Pending),
        invoice("INV-2026-044", "Tomas Novak", "Grade 9", "Term 2 2026", 138_000, "2026-04-15", Pending),
        invoice("INV-2026-045", "Kwame Mensah", "Grade 8", "Term 2 2026", 131_000, "2026-04-15", Overdue),
        invoice("INV-2026-046", "Hana Aziz", "Grade 9", "Term 2 2026", 138_000, "2026-04-15", Pending),
    ]
}

fn result(
    id: &str,
    student_name: &str,
    class_name: &str,
    subject: &str,
    marks_obtained: i64,
    max_marks: i64,
) -> ExamResult {
    ExamResult {
        id: id.into(),
        student_name: student_name.into(),
        class_name: class_name.into(),
        subject: subject.into(),
        exam_name: "Midterm 2026".into(),
        marks_obtained,
        max_marks,
    }
}

/// Published midterm results.
pub fn exam_results() -> Vec<ExamResult> {
    vec![
        result("RES-5001", "Asha Verma", "Grade 7", "Mathematics", 88, 100),
        result("RES-5002", "Asha Verma", "Grade 7", "English", 92, 100),
        result("RES-5003", "Diego Ramos", "Grade 8", "Mathematics", 74, 100),
        result("RES-5004", "Diego Ramos", "Grade 8", "Science", 81, 100),
        result("RES-5005", "Mei Chen", "Grade 7", "Mathematics", 95, 100),
        result("RES-5006", "Yuki Tanaka", "Grade 7", "Science", 68, 100),
        result("RES-5007", "Noah Kimani", "Grade 8", "English", 77, 100),
        result("RES-5008", "Amara Obi", "Grade 8", "Mathematics", 59, 100),
        result("RES-5009", "Tomas Novak", "Grade 9", "Physics", 85, 100),
        result("RES-5010", "Hana Aziz", "Grade 9", "Physics", 91, 100),
        result("RES-5011", "Sofia Alvarez", "Grade 6", "English", 83, 100),
        result("RES-5012", "Jonas Berg", "Grade 7", "Mathematics", 47, 100),
    ]
}

fn notice(
    id: &str,
    title: &str,
    body: &str,
    audience: NoticeAudience,
    published_at: &str,
) -> Notice {
    Notice {
        id: id.into(),
        title: title.into(),
        body: body.into(),
        audience,
        published_at: published_at.into(),
    }
}

/// Notice-board entries, newest first.
pub fn notices() -> Vec<Notice> {
    vec![
        notice(
            "NOT-7004",
            "Term 2 fee reminder",
            "Term 2 invoices are due on 15 April. Pay at the office or through the portal.",
            NoticeAudience::Parents,
            "2026-03-01T09:00:00Z",
        ),
        notice(
            "NOT-7003",
            "Science fair registrations open",
            "Grades 6-9 may register project teams of up to three until 20 March.",
            NoticeAudience::Students,
            "2026-02-26T13:30:00Z",
        ),
        notice(
            "NOT-7002",
            "Staff meeting moved to Friday",
            "The monthly staff meeting moves to Friday 14:00 in the main hall.",
            NoticeAudience::Staff,
            "2026-02-24T08:15:00Z",
        ),
        notice(
            "NOT-7001",
            "Campus closed for Founders' Day",
            "School is closed on 13 March for Founders' Day. Classes resume Monday.",
            NoticeAudience::All,
            "2026-02-20T10:00:00Z",
        ),
    ]
}

/// Notices visible to the given role.
pub fn notices_for(role: UserRole) -> Vec<Notice> {
    notices()
        .into_iter()
        .filter(|n| n.audience.includes(&role))
        .collect()
}

/// School-wide aggregates, derived from the datasets above.
pub fn school_stats() -> SchoolStats {
    let roster = students();
    let ledger = fee_invoices();
    SchoolStats {
        total_students: roster.len() as i64,
        total_faculty: 18,
        attendance_rate_pct: attendance_rate(&attendance_today()),
        fees_collected_cents: total_cents_with_status(&ledger, FeeStatus::Paid),
        fees_outstanding_cents: outstanding_cents(&ledger),
    }
}

/// Workload aggregates for the signed-in teacher.
pub fn faculty_stats() -> FacultyStats {
    let absentees = attendance_today()
        .iter()
        .filter(|r| r.status == AttendanceStatus::Absent)
        .count() as i64;
    FacultyStats {
        classes_taught: 4,
        students_taught: 112,
        absentees_today: absentees,
        pending_grading: 23,
    }
}

/// Aggregates for one student, by full name.
pub fn student_stats(student_name: &str) -> StudentStats {
    let register: Vec<_> = attendance_today()
        .into_iter()
        .filter(|r| r.student_name == student_name)
        .collect();
    let pending = fee_invoices()
        .into_iter()
        .filter(|i| i.student_name == student_name && i.status.is_outstanding())
        .map(|i| i.amount_cents)
        .sum();
    let latest_grade = exam_results()
        .into_iter()
        .find(|r| r.student_name == student_name)
        .map(|r| r.grade().to_string())
        .unwrap_or_else(|| "\u{2014}".to_string());

    StudentStats {
        attendance_pct: attendance_rate(&register),
        pending_fee_cents: pending,
        upcoming_exams: 2,
        latest_grade,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authenticate_accepts_valid_credentials() {
        let user = authenticate("faculty@campanile.edu", "demo1234").unwrap();
        assert_eq!(user.display_name, "Miriam Okafor");
        assert_eq!(user.user_role(), UserRole::Faculty);
    }

    #[test]
    fn authenticate_is_case_insensitive_on_email() {
        assert!(authenticate("Admin@Campanile.edu", "demo1234").is_ok());
    }

    #[test]
    fn authenticate_rejects_wrong_password_and_unknown_email_alike() {
        let wrong_password = authenticate("admin@campanile.edu", "nope1234").unwrap_err();
        let unknown_email = authenticate("ghost@campanile.edu", "demo1234").unwrap_err();
        assert_eq!(wrong_password, unknown_email);
    }

    #[test]
    fn find_account_ignores_password() {
        let user = find_account("parent@campanile.edu").unwrap();
        assert_eq!(user.ward_name.as_deref(), Some("Asha Verma"));
        assert!(find_account("ghost@campanile.edu").is_none());
    }

    #[test]
    fn account_directory_covers_every_role() {
        let roles: Vec<&str> = account_directory().iter().map(|(_, r)| *r).collect();
        for expected in [
            "Super Admin",
            "Admin",
            "Principal",
            "Faculty",
            "Student",
            "Parent",
        ] {
            assert!(roles.contains(&expected), "missing {expected}");
        }
    }

    #[test]
    fn roster_is_large_enough_to_paginate() {
        assert!(students().len() > 10);
    }

    #[test]
    fn search_students_slices_pages() {
        let total = students().len() as i64;
        let first = search_students("", Some(1), Some(10));
        let last_page = (total + 9) / 10;
        let last = search_students("", Some(last_page), Some(10));

        assert_eq!(first.data.len(), 10);
        assert_eq!(first.meta.total, total);
        assert!(first.meta.has_next);
        assert!(!last.meta.has_next);
        assert_eq!(last.data.len() as i64, total - (last_page - 1) * 10);
    }

    #[test]
    fn search_students_filters_by_name_and_class() {
        let by_name = search_students("verma", None, None);
        assert_eq!(by_name.meta.total, 1);
        assert_eq!(by_name.data[0].full_name(), "Asha Verma");

        let by_class = search_students("Grade 7 A", None, None);
        assert!(by_class.meta.total >= 4);
        assert!(by_class.data.iter().all(|s| s.class_section() == "Grade 7 A"));
    }

    #[test]
    fn find_student_by_id() {
        assert_eq!(
            find_student("STU-1002").unwrap().full_name(),
            "Diego Ramos"
        );
        assert!(find_student("STU-9999").is_none());
    }

    #[test]
    fn recent_admissions_returns_five_newest() {
        let recent = recent_admissions();
        assert_eq!(recent.len(), 5);
        assert!(recent
            .windows(2)
            .all(|w| w[0].admitted_at >= w[1].admitted_at));
    }

    #[test]
    fn notices_for_filters_audience() {
        assert!(notices_for(UserRole::Parent)
            .iter()
            .all(|n| n.audience.includes(&UserRole::Parent)));
        // Students never see the staff meeting notice
        assert!(!notices_for(UserRole::Student)
            .iter()
            .any(|n| n.id == "NOT-7002"));
        // Everyone sees the campus closure
        assert!(notices_for(UserRole::Unknown)
            .iter()
            .any(|n| n.id == "NOT-7001"));
    }

    #[test]
    fn school_stats_agree_with_datasets() {
        let stats = school_stats();
        assert_eq!(stats.total_students, students().len() as i64);
        assert_eq!(
            stats.fees_outstanding_cents,
            outstanding_cents(&fee_invoices())
        );
        assert!(stats.attendance_rate_pct > 0.0 && stats.attendance_rate_pct <= 100.0);
    }

    #[test]
    fn student_stats_for_known_student() {
        let stats = student_stats("Diego Ramos");
        // One pending Term 2 invoice
        assert_eq!(stats.pending_fee_cents, 131_000);
        // Present today
        assert_eq!(stats.attendance_pct, 100.0);
        // First midterm row for Diego is 74/100
        assert_eq!(stats.latest_grade, "B");
    }

    #[test]
    fn student_stats_for_unknown_student_are_empty() {
        let stats = student_stats("Nobody Here");
        assert_eq!(stats.pending_fee_cents, 0);
        assert_eq!(stats.attendance_pct, 0.0);
        assert_eq!(stats.latest_grade, "\u{2014}");
    }
}
