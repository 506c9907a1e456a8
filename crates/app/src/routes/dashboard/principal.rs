use dioxus::prelude::*;
use shared_types::{AttendanceRecord, AttendanceStatus};
use shared_ui::{
    Badge, BadgeVariant, Card, CardContent, CardHeader, CardTitle, PageHeader, PageTitle, Skeleton,
    StatCard,
};

use crate::demo;
use crate::format_helpers::format_pct;

#[component]
pub fn PrincipalDashboard() -> Element {
    let data = use_resource(|| async {
        let stats = demo::school_stats();
        let absent: Vec<AttendanceRecord> = demo::attendance_today()
            .into_iter()
            .filter(|r| r.status == AttendanceStatus::Absent)
            .collect();
        (stats, absent)
    });

    rsx! {
        PageHeader {
            PageTitle { "Principal's Desk" }
        }

        match &*data.read() {
            Some((stats, absent)) => {
                let absent_count = absent.len();
                rsx! {
                    div { class: "dashboard-stats-grid",
                        StatCard {
                            label: "Attendance Today",
                            value: format_pct(stats.attendance_rate_pct),
                        }
                        StatCard {
                            label: "Absent Today",
                            value: "{absent_count}",
                        }
                        StatCard {
                            label: "Faculty on Roll",
                            value: "{stats.total_faculty}",
                        }
                        StatCard {
                            label: "Students on Roll",
                            value: "{stats.total_students}",
                        }
                    }

                    div { class: "dashboard-section",
                        Card {
                            CardHeader {
                                CardTitle { "Absentees to Follow Up" }
                            }
                            CardContent {
                                if absent.is_empty() {
                                    p { "Full attendance today." }
                                } else {
                                    ul { class: "dashboard-plain-list",
                                        for record in absent {
                                            li { key: "{record.id}",
                                                span { "{record.student_name} ({record.class_name} {record.section})" }
                                                if !record.remarks.is_empty() {
                                                    Badge { variant: BadgeVariant::Outline, "{record.remarks}" }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
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
