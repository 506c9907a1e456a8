use dioxus::prelude::*;
use shared_ui::{Card, CardContent, PageHeader, PageTitle, Skeleton, StatCard};

use crate::demo;
use crate::routes::Route;

#[component]
pub fn FacultyDashboard() -> Element {
    let stats = use_resource(|| async { demo::faculty_stats() });

    rsx! {
        PageHeader {
            PageTitle { "My Classes" }
        }

        match &*stats.read() {
            Some(stats) => rsx! {
                div { class: "dashboard-stats-grid",
                    StatCard {
                        label: "Classes Taught",
                        value: "{stats.classes_taught}",
                    }
                    StatCard {
                        label: "Students Taught",
                        value: "{stats.students_taught}",
                    }
                    StatCard {
                        label: "Absent Today",
                        value: "{stats.absentees_today}",
                        caption: "across your classes",
                    }
                    StatCard {
                        label: "Pending Grading",
                        value: "{stats.pending_grading}",
                        caption: "submissions",
                    }
                }

                div { class: "dashboard-section",
                    h3 { "Quick Actions" }
                    div { class: "quick-action-grid",
                        Link { to: Route::AttendanceList {},
                            button { class: "quick-action-btn", "Take Attendance" }
                        }
                        Link { to: Route::ExamResultList {},
                            button { class: "quick-action-btn", "Enter Marks" }
                        }
                        Link { to: Route::StudentList {},
                            button { class: "quick-action-btn", "View Roster" }
                        }
                        Link { to: Route::NoticeBoard {},
                            button { class: "quick-action-btn", "Post Notice" }
                        }
                    }
                }
            },
            None => rsx! {
                div { class: "dashboard-stats-grid",
                    for _ in 0..4 {
                        Card {
                            CardContent { Skeleton { style: "height: 60px;" } }
                        }
                    }
                }
            },
        }
    }
}
