use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdInbox;
use dioxus_free_icons::Icon;

use crate::components::button::{Button, ButtonVariant};
use crate::components::skeleton::Skeleton;

/// Number of placeholder rows rendered while a table is loading.
const SKELETON_ROWS: usize = 5;

/// Describes one table column: its label and how cell content is derived
/// from a record.
///
/// `key` must be unique within a column set; it addresses the column in
/// markup and tests. `cell` must be a pure function of the record.
pub struct Column<T> {
    pub key: &'static str,
    pub header: &'static str,
    pub cell: fn(&T) -> Element,
    /// Reserved for a future click-to-sort; rendering ignores it.
    pub sortable: bool,
}

impl<T> Column<T> {
    pub fn new(key: &'static str, header: &'static str, cell: fn(&T) -> Element) -> Self {
        Self {
            key,
            header,
            cell,
            sortable: false,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Column<T> {}

impl<T> PartialEq for Column<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
            && self.header == other.header
            && self.sortable == other.sortable
            && std::ptr::fn_addr_eq(self.cell, other.cell)
    }
}

impl<T> std::fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("sortable", &self.sortable)
            .finish()
    }
}

/// Caller-owned pagination descriptor.
///
/// The table renders the footer and reports page requests through
/// `on_page_change`; the caller owns the page state and re-supplies a fresh
/// `data` slice together with the updated `page`.
#[derive(Clone, PartialEq)]
pub struct TablePagination {
    /// Current 1-indexed page.
    pub page: i64,
    /// Records per page. Values below 1 are clamped to 1.
    pub page_size: i64,
    /// Total record count across all pages.
    pub total: i64,
    /// Invoked with the requested page number.
    pub on_page_change: EventHandler<i64>,
}

/// Total page count for a record count and page size.
pub fn total_pages(total: i64, page_size: i64) -> i64 {
    let page_size = page_size.max(1);
    (total.max(0) + page_size - 1) / page_size
}

/// 1-indexed inclusive range of the records shown on `page`.
pub fn summary_range(page: i64, page_size: i64, total: i64) -> (i64, i64) {
    let page_size = page_size.max(1);
    let first = (page - 1) * page_size + 1;
    let last = (page * page_size).min(total);
    (first, last)
}

/// Generic record table with three mutually exclusive display states.
///
/// While `is_loading`, a fixed number of skeleton rows keeps the layout
/// stable. With no records, a single empty-state block replaces the table
/// markup. Otherwise one row renders per record in input order, one cell per
/// column in column order, each produced by `column.cell(record)`. The
/// pagination footer appears only in the populated state and only when more
/// than one page exists.
#[component]
pub fn DataTable<T: Clone + PartialEq + 'static>(
    data: Vec<T>,
    columns: Vec<Column<T>>,
    #[props(default = false)] is_loading: bool,
    #[props(default = String::from("No data available"))] empty_message: String,
    #[props(default)] pagination: Option<TablePagination>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        if is_loading {
            div { class: "data-table",
                table {
                    thead {
                        tr {
                            for col in &columns {
                                th { key: "{col.key}", "{col.header}" }
                            }
                        }
                    }
                    tbody {
                        for row in 0..SKELETON_ROWS {
                            tr { key: "{row}", class: "data-table-row",
                                for col in &columns {
                                    td { key: "{col.key}", Skeleton {} }
                                }
                            }
                        }
                    }
                }
            }
        } else if data.is_empty() {
            div { class: "data-table-empty",
                Icon::<LdInbox> { icon: LdInbox, width: 32, height: 32 }
                p { "{empty_message}" }
            }
        } else {
            div { class: "data-table",
                table {
                    thead {
                        tr {
                            for col in &columns {
                                th { key: "{col.key}", "{col.header}" }
                            }
                        }
                    }
                    tbody {
                        for record in &data {
                            tr { class: "data-table-row",
                                for col in &columns {
                                    td { key: "{col.key}", {(col.cell)(record)} }
                                }
                            }
                        }
                    }
                }
                if let Some(p) = &pagination {
                    if total_pages(p.total, p.page_size) > 1 {
                        TableFooter { pagination: p.clone() }
                    }
                }
            }
        }
    }
}

/// Summary range, Previous/Next controls, and page label.
#[component]
fn TableFooter(pagination: TablePagination) -> Element {
    let pages = total_pages(pagination.total, pagination.page_size);
    let (first, last) = summary_range(pagination.page, pagination.page_size, pagination.total);
    let page = pagination.page;
    let on_change = pagination.on_page_change;

    rsx! {
        div { class: "data-table-footer",
            span { class: "data-table-summary",
                "Showing {first} to {last} of {pagination.total}"
            }
            div { class: "data-table-pager",
                Button {
                    variant: ButtonVariant::Outline,
                    disabled: page == 1,
                    onclick: move |_| on_change.call(page - 1),
                    "Previous"
                }
                span { class: "data-table-page-label", "Page {page} of {pages}" }
                Button {
                    variant: ButtonVariant::Outline,
                    disabled: page >= pages,
                    onclick: move |_| on_change.call(page + 1),
                    "Next"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Clone, PartialEq)]
    struct Pupil {
        name: &'static str,
        form: &'static str,
    }

    fn pupils() -> Vec<Pupil> {
        vec![
            Pupil {
                name: "Asha",
                form: "7A",
            },
            Pupil {
                name: "Ben",
                form: "7B",
            },
            Pupil {
                name: "Zane",
                form: "8A",
            },
        ]
    }

    fn columns() -> Vec<Column<Pupil>> {
        vec![
            Column::new("name", "Name", |p: &Pupil| rsx! { "{p.name}" }),
            Column::new("form", "Form", |p: &Pupil| rsx! { "{p.form}" }),
        ]
    }

    #[component]
    fn PaginatedFixture(page: i64, total: i64) -> Element {
        let pagination = TablePagination {
            page,
            page_size: 10,
            total,
            on_page_change: EventHandler::new(|_| {}),
        };
        rsx! {
            DataTable::<Pupil> {
                data: pupils(),
                columns: columns(),
                pagination: Some(pagination),
            }
        }
    }

    #[test]
    fn total_pages_math() {
        assert_eq!(total_pages(25, 10), 3);
        assert_eq!(total_pages(20, 10), 2);
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
    }

    #[test]
    fn total_pages_clamps_bad_page_size() {
        assert_eq!(total_pages(5, 0), 5);
        assert_eq!(total_pages(5, -3), 5);
    }

    #[test]
    fn summary_range_math() {
        assert_eq!(summary_range(1, 10, 25), (1, 10));
        assert_eq!(summary_range(2, 10, 25), (11, 20));
        assert_eq!(summary_range(3, 10, 25), (21, 25));
    }

    #[test]
    fn loading_state_renders_five_skeleton_rows() {
        let html = dioxus_ssr::render_element(rsx! {
            DataTable::<Pupil> {
                data: pupils(),
                columns: columns(),
                is_loading: true,
            }
        });

        // Header row + 5 placeholder rows, no record content.
        assert_eq!(html.matches("<tr").count(), 1 + SKELETON_ROWS);
        assert_eq!(html.matches("class=\"skeleton\"").count(), SKELETON_ROWS * 2);
        assert!(!html.contains("Asha"));
    }

    #[test]
    fn empty_state_renders_default_message_without_table() {
        let html = dioxus_ssr::render_element(rsx! {
            DataTable::<Pupil> { data: Vec::<Pupil>::new(), columns: columns() }
        });

        assert!(html.contains("No data available"));
        assert!(!html.contains("<table"));
    }

    #[test]
    fn empty_state_renders_custom_message() {
        let html = dioxus_ssr::render_element(rsx! {
            DataTable::<Pupil> {
                data: Vec::<Pupil>::new(),
                columns: columns(),
                empty_message: "No pupils enrolled",
            }
        });

        assert!(html.contains("No pupils enrolled"));
        assert!(!html.contains("No data available"));
    }

    #[test]
    fn populated_state_renders_rows_in_input_order() {
        let html = dioxus_ssr::render_element(rsx! {
            DataTable::<Pupil> { data: pupils(), columns: columns() }
        });

        // Header row + one row per record.
        assert_eq!(html.matches("<tr").count(), 1 + pupils().len());
        assert_eq!(html.matches("<td").count(), pupils().len() * columns().len());

        let asha = html.find("Asha").unwrap();
        let ben = html.find("Ben").unwrap();
        let zane = html.find("Zane").unwrap();
        assert!(asha < ben && ben < zane);

        // Cells follow column order within a row.
        assert!(html.find("Asha").unwrap() < html.find("7A").unwrap());
    }

    #[test]
    fn footer_hidden_when_single_page() {
        let html = dioxus_ssr::render_element(rsx! {
            PaginatedFixture { page: 1, total: 5 }
        });

        assert!(!html.contains("Showing"));
        assert!(!html.contains("Previous"));
    }

    #[test]
    fn footer_shows_summary_range_and_page_label() {
        let html = dioxus_ssr::render_element(rsx! {
            PaginatedFixture { page: 2, total: 25 }
        });

        assert!(html.contains("Showing 11 to 20 of 25"));
        assert!(html.contains("Page 2 of 3"));
    }

    #[test]
    fn previous_disabled_on_first_page_only() {
        let first = dioxus_ssr::render_element(rsx! {
            PaginatedFixture { page: 1, total: 25 }
        });
        let middle = dioxus_ssr::render_element(rsx! {
            PaginatedFixture { page: 2, total: 25 }
        });

        assert_eq!(first.matches("disabled").count(), 1);
        assert_eq!(middle.matches("disabled").count(), 0);
    }

    #[test]
    fn next_disabled_on_last_page() {
        let last = dioxus_ssr::render_element(rsx! {
            PaginatedFixture { page: 3, total: 25 }
        });

        assert_eq!(last.matches("disabled").count(), 1);
    }

    #[test]
    fn column_builder_defaults_and_copies() {
        let a = Column::new("name", "Name", |p: &Pupil| rsx! { "{p.name}" });
        let b = a;
        assert_eq!(a, b);
        assert!(!a.sortable);
        assert!(a.sortable().sortable);
    }
}
