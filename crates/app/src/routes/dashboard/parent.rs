use dioxus::prelude::*;
use shared_types::ExamResult;
use shared_ui::{
    Badge, BadgeVariant, Card, CardContent, Column, DataTable, PageHeader, PageTitle, Skeleton,
    StatCard,
};

use crate::demo;
use crate::format_helpers::{format_cents, format_pct};
use crate::session::use_session;

#[component]
pub fn ParentDashboard() -> Element {
    let session = use_session();
    let ward_name = session
        .current_user
        .read()
        .as_ref()
        .and_then(|u| u.ward_name.clone())
        .unwrap_or_default();

    let data = use_resource(move || {
        let name = ward_name.clone();
        async move {
            let stats = demo::student_stats(&name);
            let results: Vec<ExamResult> = demo::exam_results()
                .into_iter()
                .filter(|r| r.student_name == name)
                .collect();
            (name, stats, results)
        }
    });

    rsx! {
        match &*data.read() {
            Some((name, stats, results)) => rsx! {
                PageHeader {
                    PageTitle { "Following {name}" }
                }

                div { class: "dashboard-stats-grid",
                    StatCard {
                        label: "Attendance",
                        value: format_pct(stats.attendance_pct),
                        caption: "this term",
                    }
                    StatCard {
                        label: "Fees Due",
                        value: format_cents(stats.pending_fee_cents),
                    }
                    StatCard {
                        label: "Latest Grade",
                        value: "{stats.latest_grade}",
                        caption: "Midterm 2026",
                    }
                }

                div { class: "dashboard-section",
                    h3 { "Midterm Results" }
                    DataTable::<ExamResult> {
                        data: results.clone(),
                        columns: result_columns(),
                        empty_message: "No results published yet",
                    }
                }
            },
            None => rsx! {
                PageHeader {
                    PageTitle { "My Ward" }
                }
                div { class: "dashboard-stats-grid",
                    for _ in 0..3 {
                        Card {
                            CardContent { Skeleton { style: "height: 60px;" } }
                        }
                    }
                }
            },
        }
    }
}

fn result_columns() -> Vec<Column<ExamResult>> {
    vec![
        Column::new("subject", "Subject", |r: &ExamResult| rsx! { "{r.subject}" }),
        Column::new("marks", "Marks", |r: &ExamResult| rsx! {
            "{r.marks_obtained} / {r.max_marks}"
        }),
        Column::new("grade", "Grade", |r: &ExamResult| {
            let grade = r.grade();
            let variant = if grade == "F" {
                BadgeVariant::Destructive
            } else {
                BadgeVariant::Success
            };
            rsx! {
                Badge { variant: variant, "{grade}" }
            }
        }),
    ]
}
