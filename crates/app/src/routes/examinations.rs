use dioxus::prelude::*;
use shared_types::{ExamResult, ModuleFlags};
use shared_ui::{
    Badge, BadgeVariant, Breadcrumb, BreadcrumbItem, Column, DataTable, PageHeader, PageTitle,
};

use crate::demo;
use crate::routes::Route;

#[component]
pub fn ExamResultListPage() -> Element {
    let flags: ModuleFlags = use_context();

    let results = use_resource(|| async { demo::exam_results() });

    if !flags.examinations {
        return rsx! {
            div { class: "container",
                PageHeader {
                    PageTitle { "Examinations" }
                }
                p { "The examinations module is not enabled for this school." }
            }
        };
    }

    rsx! {
        div { class: "container",
            Breadcrumb {
                BreadcrumbItem {
                    Link { to: Route::Dashboard {}, "Dashboard" }
                }
                BreadcrumbItem { current: true, "Examinations" }
            }

            PageHeader {
                PageTitle { "Midterm 2026 Results" }
            }

            match &*results.read() {
                Some(published) => rsx! {
                    DataTable::<ExamResult> {
                        data: published.clone(),
                        columns: result_columns(),
                        empty_message: "No results published yet",
                    }
                },
                None => rsx! {
                    DataTable::<ExamResult> {
                        data: Vec::<ExamResult>::new(),
                        columns: result_columns(),
                        is_loading: true,
                    }
                },
            }
        }
    }
}

fn result_columns() -> Vec<Column<ExamResult>> {
    vec![
        Column::new("student", "Student", |r: &ExamResult| rsx! { "{r.student_name}" }),
        Column::new("class", "Class", |r: &ExamResult| rsx! { "{r.class_name}" }),
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
