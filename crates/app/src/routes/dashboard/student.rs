use dioxus::prelude::*;
use shared_types::UserRole;
use shared_ui::{Card, CardContent, CardHeader, CardTitle, PageHeader, PageTitle, Skeleton, StatCard};

use crate::demo;
use crate::format_helpers::{format_cents, format_date_human, format_pct};
use crate::session::use_session;

#[component]
pub fn StudentDashboard() -> Element {
    let session = use_session();
    let student_name = session
        .current_user
        .read()
        .as_ref()
        .map(|u| u.display_name.clone())
        .unwrap_or_default();

    let data = use_resource(move || {
        let name = student_name.clone();
        async move {
            (
                demo::student_stats(&name),
                demo::notices_for(UserRole::Student),
            )
        }
    });

    rsx! {
        PageHeader {
            PageTitle { "My Dashboard" }
        }

        match &*data.read() {
            Some((stats, notices)) => rsx! {
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
                        label: "Upcoming Exams",
                        value: "{stats.upcoming_exams}",
                    }
                    StatCard {
                        label: "Latest Grade",
                        value: "{stats.latest_grade}",
                        caption: "Midterm 2026",
                    }
                }

                div { class: "dashboard-section",
                    Card {
                        CardHeader {
                            CardTitle { "Notices" }
                        }
                        CardContent {
                            if notices.is_empty() {
                                p { "No notices for you right now." }
                            } else {
                                ul { class: "dashboard-plain-list",
                                    for notice in notices {
                                        li { key: "{notice.id}",
                                            NoticeLine {
                                                title: notice.title.clone(),
                                                published_at: notice.published_at.clone(),
                                            }
                                        }
                                    }
                                }
                            }
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

#[component]
fn NoticeLine(title: String, published_at: String) -> Element {
    let date = format_date_human(&published_at);
    rsx! {
        span { "{title}" }
        span { class: "dashboard-list-meta", "{date}" }
    }
}
