use dioxus::prelude::*;
use shared_types::{FeeInvoice, FeeStatus, ModuleFlags};
use shared_ui::{
    Badge, BadgeVariant, Breadcrumb, BreadcrumbItem, Column, DataTable, FormSelect, PageHeader,
    PageTitle, SearchBar, StatCard,
};

use crate::demo;
use crate::format_helpers::{format_cents, format_date_human};
use crate::routes::Route;

#[component]
pub fn FeeListPage() -> Element {
    let flags: ModuleFlags = use_context();
    let mut filter_status = use_signal(String::new);

    let data = use_resource(move || {
        let status = filter_status.read().clone();
        async move {
            let ledger = demo::fee_invoices();
            let outstanding = shared_types::outstanding_cents(&ledger);
            let collected =
                shared_types::total_cents_with_status(&ledger, FeeStatus::Paid);
            let filtered: Vec<FeeInvoice> = if status.is_empty() {
                ledger
            } else {
                let wanted = FeeStatus::from_str_or_default(&status);
                ledger.into_iter().filter(|i| i.status == wanted).collect()
            };
            (filtered, outstanding, collected)
        }
    });

    if !flags.fees {
        return ModuleDisabled();
    }

    rsx! {
        div { class: "container",
            Breadcrumb {
                BreadcrumbItem {
                    Link { to: Route::Dashboard {}, "Dashboard" }
                }
                BreadcrumbItem { current: true, "Fees" }
            }

            PageHeader {
                PageTitle { "Fee Invoices" }
            }

            match &*data.read() {
                Some((invoices, outstanding, collected)) => rsx! {
                    div { class: "fee-summary-grid",
                        StatCard {
                            label: "Outstanding",
                            value: format_cents(*outstanding),
                        }
                        StatCard {
                            label: "Collected",
                            value: format_cents(*collected),
                        }
                    }

                    SearchBar {
                        FormSelect {
                            value: "{filter_status}",
                            label: "Status",
                            onchange: move |evt: Event<FormData>| {
                                filter_status.set(evt.value().to_string());
                            },
                            option { value: "", "All Statuses" }
                            option { value: "pending", "Pending" }
                            option { value: "paid", "Paid" }
                            option { value: "overdue", "Overdue" }
                            option { value: "waived", "Waived" }
                        }
                    }

                    DataTable::<FeeInvoice> {
                        data: invoices.clone(),
                        columns: invoice_columns(),
                        empty_message: "No invoices match this filter",
                    }
                },
                None => rsx! {
                    DataTable::<FeeInvoice> {
                        data: Vec::<FeeInvoice>::new(),
                        columns: invoice_columns(),
                        is_loading: true,
                    }
                },
            }
        }
    }
}

/// Shown when this deployment has the fees module switched off.
#[component]
fn ModuleDisabled() -> Element {
    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "Fees" }
            }
            p { "The fees module is not enabled for this school." }
        }
    }
}

fn invoice_columns() -> Vec<Column<FeeInvoice>> {
    vec![
        Column::new("id", "Invoice", |i: &FeeInvoice| rsx! { "{i.id}" }),
        Column::new("student", "Student", |i: &FeeInvoice| rsx! { "{i.student_name}" }),
        Column::new("class", "Class", |i: &FeeInvoice| rsx! { "{i.class_name}" }),
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
            rsx! {
                Badge { variant: fee_badge_variant(i.status), "{label}" }
            }
        }),
    ]
}

fn fee_badge_variant(status: FeeStatus) -> BadgeVariant {
    match status {
        FeeStatus::Paid => BadgeVariant::Success,
        FeeStatus::Pending => BadgeVariant::Secondary,
        FeeStatus::Overdue => BadgeVariant::Destructive,
        FeeStatus::Waived => BadgeVariant::Outline,
    }
}
