use dioxus::prelude::*;
use shared_types::Student;
use shared_ui::{Badge, BadgeVariant, Card, CardContent, Column, DataTable, PageHeader, PageTitle, Skeleton, StatCard};

use crate::demo;
use crate::format_helpers::{format_cents, format_pct};
use crate::routes::Route;

#[component]
pub fn SuperAdminDashboard() -> Element {
    let data = use_resource(|| async { (demo::school_stats(), demo::recent_admissions()) });

    rsx! {
        PageHeader {
            PageTitle { "School Overview" }
        }

        match &*data.read() {
            Some((stats, recent)) => rsx! {
                div { class: "dashboard-stats-grid",
                    StatCard {
                        label: "Students",
                        value: "{stats.total_students}",
                    }
                    StatCard {
                        label: "Faculty",
                        value: "{stats.total_faculty}",
                    }
                    StatCard {
                        label: "Attendance Today",
                        value: format_pct(stats.attendance_rate_pct),
                    }
                    StatCard {
                        label: "Fees Outstanding",
                        value: format_cents(stats.fees_outstanding_cents),
                        caption: format!("collected {}", format_cents(stats.fees_collected_cents)),
                    }
                }

                div { class: "dashboard-section",
                    h3 { "Recent Admissions" }
                    DataTable::<Student> {
                        data: recent.clone(),
                        columns: admission_columns(),
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

fn admission_columns() -> Vec<Column<Student>> {
    vec![
        Column::new("admission_no", "Admission No", |s: &Student| rsx! {
            Link { to: Route::StudentDetail { id: s.id.clone() }, class: "table-link",
                "{s.admission_no}"
            }
        }),
        Column::new("name", "Name", |s: &Student| {
            let name = s.full_name();
            rsx! { "{name}" }
        }),
        Column::new("class", "Class", |s: &Student| {
            let class = s.class_section();
            rsx! { "{class}" }
        }),
        Column::new("status", "Status", |s: &Student| {
            let label = s.status.display_name();
            rsx! {
                Badge { variant: BadgeVariant::Secondary, "{label}" }
            }
        }),
    ]
}
