use dioxus::prelude::*;
use shared_types::{AttendanceRecord, AttendanceStatus};
use shared_ui::{
    Badge, BadgeVariant, Breadcrumb, BreadcrumbItem, Column, DataTable, FormSelect, PageHeader,
    PageTitle, SearchBar,
};

use crate::demo;
use crate::format_helpers::format_date_human;
use crate::routes::Route;

#[component]
pub fn AttendanceListPage() -> Element {
    let mut filter_status = use_signal(String::new);

    let records = use_resource(move || {
        let status = filter_status.read().clone();
        async move {
            let register = demo::attendance_today();
            if status.is_empty() {
                register
            } else {
                let wanted = AttendanceStatus::from_str_or_default(&status);
                register
                    .into_iter()
                    .filter(|r| r.status == wanted)
                    .collect()
            }
        }
    });

    let register_date = format_date_human(demo::TODAY);

    rsx! {
        div { class: "container",
            Breadcrumb {
                BreadcrumbItem {
                    Link { to: Route::Dashboard {}, "Dashboard" }
                }
                BreadcrumbItem { current: true, "Attendance" }
            }

            PageHeader {
                PageTitle { "Attendance for {register_date}" }
            }

            SearchBar {
                FormSelect {
                    value: "{filter_status}",
                    label: "Status",
                    onchange: move |evt: Event<FormData>| {
                        filter_status.set(evt.value().to_string());
                    },
                    option { value: "", "All Statuses" }
                    option { value: "present", "Present" }
                    option { value: "absent", "Absent" }
                    option { value: "late", "Late" }
                    option { value: "excused", "Excused" }
                }
            }

            match &*records.read() {
                Some(register) => rsx! {
                    DataTable::<AttendanceRecord> {
                        data: register.clone(),
                        columns: attendance_columns(),
                        empty_message: "No register entries match this filter",
                    }
                },
                None => rsx! {
                    DataTable::<AttendanceRecord> {
                        data: Vec::<AttendanceRecord>::new(),
                        columns: attendance_columns(),
                        is_loading: true,
                    }
                },
            }
        }
    }
}

fn attendance_columns() -> Vec<Column<AttendanceRecord>> {
    vec![
        Column::new("student", "Student", |r: &AttendanceRecord| rsx! {
            "{r.student_name}"
        }),
        Column::new("class", "Class", |r: &AttendanceRecord| rsx! {
            "{r.class_name} {r.section}"
        }),
        Column::new("status", "Status", |r: &AttendanceRecord| {
            let label = r.status.display_name();
            rsx! {
                Badge { variant: attendance_badge_variant(r.status), "{label}" }
            }
        }),
        Column::new("remarks", "Remarks", |r: &AttendanceRecord| {
            if r.remarks.is_empty() {
                rsx! { span { class: "table-muted", "\u{2014}" } }
            } else {
                rsx! { "{r.remarks}" }
            }
        }),
    ]
}

fn attendance_badge_variant(status: AttendanceStatus) -> BadgeVariant {
    match status {
        AttendanceStatus::Present => BadgeVariant::Success,
        AttendanceStatus::Absent => BadgeVariant::Destructive,
        AttendanceStatus::Late => BadgeVariant::Primary,
        AttendanceStatus::Excused => BadgeVariant::Secondary,
    }
}
