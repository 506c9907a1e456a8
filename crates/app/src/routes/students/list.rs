use dioxus::prelude::*;
use shared_types::{Student, StudentStatus};
use shared_ui::{
    Badge, BadgeVariant, Breadcrumb, BreadcrumbItem, Column, DataTable, Input, PageHeader,
    PageTitle, SearchBar, TablePagination,
};

use crate::demo;
use crate::format_helpers::format_date_human;
use crate::routes::Route;

const PAGE_SIZE: i64 = 10;

#[component]
pub fn StudentListPage() -> Element {
    let mut page = use_signal(|| 1i64);
    let mut search_query = use_signal(String::new);

    let results = use_resource(move || {
        let query = search_query.read().clone();
        let current = *page.read();
        async move { demo::search_students(&query, Some(current), Some(PAGE_SIZE)) }
    });

    rsx! {
        div { class: "container",
            Breadcrumb {
                BreadcrumbItem {
                    Link { to: Route::Dashboard {}, "Dashboard" }
                }
                BreadcrumbItem { current: true, "Students" }
            }

            PageHeader {
                PageTitle { "Students" }
            }

            SearchBar {
                Input {
                    value: search_query.read().clone(),
                    placeholder: "Search by name, admission no, or class...",
                    label: "",
                    on_input: move |evt: FormEvent| {
                        search_query.set(evt.value().to_string());
                        page.set(1);
                    },
                }
            }

            match &*results.read() {
                Some(resp) => rsx! {
                    DataTable::<Student> {
                        data: resp.data.clone(),
                        columns: student_columns(),
                        empty_message: "No students match your search",
                        pagination: Some(TablePagination {
                            page: resp.meta.page,
                            page_size: resp.meta.page_size,
                            total: resp.meta.total,
                            on_page_change: EventHandler::new(move |requested: i64| page.set(requested)),
                        }),
                    }
                },
                None => rsx! {
                    DataTable::<Student> {
                        data: Vec::<Student>::new(),
                        columns: student_columns(),
                        is_loading: true,
                    }
                },
            }
        }
    }
}

fn student_columns() -> Vec<Column<Student>> {
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
        Column::new("guardian", "Guardian", |s: &Student| rsx! { "{s.guardian_name}" }),
        Column::new("status", "Status", |s: &Student| {
            let label = s.status.display_name();
            rsx! {
                Badge { variant: status_badge_variant(s.status), "{label}" }
            }
        }),
        Column::new("admitted", "Admitted", |s: &Student| {
            let admitted = format_date_human(&s.admitted_at);
            rsx! { "{admitted}" }
        }),
    ]
}

fn status_badge_variant(status: StudentStatus) -> BadgeVariant {
    match status {
        StudentStatus::Active => BadgeVariant::Success,
        StudentStatus::Suspended => BadgeVariant::Destructive,
        StudentStatus::Graduated => BadgeVariant::Primary,
        StudentStatus::Withdrawn => BadgeVariant::Secondary,
    }
}
