use dioxus::prelude::*;
use shared_types::{FeeInvoice, FeeStatus};
use shared_ui::{
    Badge, BadgeVariant, Card, CardContent, Column, DataTable, PageHeader, PageTitle, Skeleton,
    StatCard,
};

use crate::demo;
use crate::format_helpers::{format_cents, format_date_human};

#[component]
pub fn AdminDashboard() -> Element {
    let data = use_resource(|| async {
        let stats = demo::school_stats();
        let unpaid: Vec<FeeInvoice> = demo::fee_invoices()
            .into_iter()
            .filter(|i| i.status.is_outstanding())
            .collect();
        (stats, unpaid)
    });

    rsx! {
        PageHeader {
            PageTitle { "Administration" }
        }

        match &*data.read() {
            Some((stats, unpaid)) => rsx! {
                div { class: "dashboard-stats-grid",
                    StatCard {
                        label: "Students Enrolled",
                        value: "{stats.total_students}",
                    }
                    StatCard {
                        label: "Fees Collected",
                        value: format_cents(stats.fees_collected_cents),
                        caption: "this term",
                    }
                    StatCard {
                        label: "Fees Outstanding",
                        value: format_cents(stats.fees_outstanding_cents),
                        caption: format!("{} open invoices", unpaid.len()),
                    }
                }

                div { class: "dashboard-section",
                    h3 { "Invoices Awaiting Payment" }
                    DataTable::<FeeInvoice> {
                        data: unpaid.clone(),
                        columns: unpaid_columns(),
                        empty_message: "All invoices are settled",
                    }
                }
            },
            None => rsx! {
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

fn unpaid_columns() -> Vec<Column<FeeInvoice>> {
    vec![
        Column::new("id", "Invoice", |i: &FeeInvoice| rsx! { "{i.id}" }),
        Column::new("student", "Student", |i: &FeeInvoice| rsx! { "{i.student_name}" }),
        Column::new("term", "Term", |i: &FeeInvoice| rsx! { "{i.term}" }),
        Column::new("amount", "Amount", |i: &FeeInvoice| {
            let amount = format_cents(i.amount_cents);
            rsx! { "{amount}" }
        }),
        Column::new("due", "Due", |i: &FeeInvoice| {
            let due = format_date_human(&i.due_date);
            rsx! { "{due}" }
        }),
        Column::new("status", "Status", |i: &FeeInvoice| {
            let label = i.status.display_name();
            let variant = if i.status == FeeStatus::Overdue {
                BadgeVariant::Destructive
            } else {
                BadgeVariant::Secondary
            };
            rsx! {
                Badge { variant: variant, "{label}" }
            }
        }),
    ]
}
