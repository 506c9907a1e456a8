use dioxus::prelude::*;
use shared_types::StudentStatus;
use shared_ui::{
    Badge, BadgeVariant, Breadcrumb, BreadcrumbItem, Card, CardContent, CardHeader, CardTitle,
    DetailGrid, DetailItem, DetailList, PageHeader, PageTitle,
};

use crate::demo;
use crate::format_helpers::format_date_human;
use crate::routes::Route;

#[component]
pub fn StudentDetailPage(id: String) -> Element {
    let student = use_resource(move || {
        let id = id.clone();
        async move { demo::find_student(&id) }
    });

    let rendered = match &*student.read() {
        Some(Some(student)) => {
            let name = student.full_name();
            let admitted = format_date_human(&student.admitted_at);
            let status_variant = match student.status {
                StudentStatus::Active => BadgeVariant::Success,
                StudentStatus::Suspended => BadgeVariant::Destructive,
                _ => BadgeVariant::Secondary,
            };
            let status_label = student.status.display_name();

            rsx! {
                div { class: "container",
                    Breadcrumb {
                        BreadcrumbItem {
                            Link { to: Route::Dashboard {}, "Dashboard" }
                        }
                        BreadcrumbItem {
                            Link { to: Route::StudentList {}, "Students" }
                        }
                        BreadcrumbItem { current: true, "{name}" }
                    }

                    PageHeader {
                        PageTitle { "{name}" }
                    }

                    DetailGrid {
                        Card {
                            CardHeader {
                                CardTitle { "Enrollment" }
                            }
                            CardContent {
                                DetailList {
                                    DetailItem { label: "Admission No", value: student.admission_no.clone() }
                                    DetailItem { label: "Class", value: student.class_section() }
                                    DetailItem { label: "Status",
                                        Badge { variant: status_variant, "{status_label}" }
                                    }
                                    DetailItem { label: "Admitted", value: admitted }
                                }
                            }
                        }
                        Card {
                            CardHeader {
                                CardTitle { "Guardian" }
                            }
                            CardContent {
                                DetailList {
                                    DetailItem { label: "Name", value: student.guardian_name.clone() }
                                    DetailItem { label: "Phone", value: student.guardian_phone.clone() }
                                }
                            }
                        }
                    }
                }
            }
        }
        Some(None) => rsx! {
            div { class: "container",
                Card {
                    CardHeader {
                        CardTitle { "Student not found" }
                    }
                    CardContent {
                        p { "No student record matches this link. It may have been removed." }
                        Link { to: Route::StudentList {}, "Back to Students" }
                    }
                }
            }
        },
        None => rsx! {
            div { class: "container",
                p { class: "loading", "Loading..." }
            }
        },
    };
    rendered
}
