use dioxus::prelude::*;

/// Ordered navigation trail.
///
/// Children are `BreadcrumbItem`s in ancestor-to-leaf order; the item
/// marked `current` names the page being viewed and renders as plain text.
#[component]
pub fn Breadcrumb(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        nav { class: "breadcrumb", aria_label: "Breadcrumb",
            ol { {children} }
        }
    }
}

/// One entry in a Breadcrumb trail.
///
/// Non-current items should wrap a `Link`; the current item gets
/// `aria-current="page"` and muted styling.
#[component]
pub fn BreadcrumbItem(#[props(default = false)] current: bool, children: Element) -> Element {
    rsx! {
        li {
            class: "breadcrumb-item",
            aria_current: if current { "page" },
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trail_preserves_item_order_and_marks_current() {
        let html = dioxus_ssr::render_element(rsx! {
            Breadcrumb {
                BreadcrumbItem { "Dashboard" }
                BreadcrumbItem { "Students" }
                BreadcrumbItem { current: true, "Asha Verma" }
            }
        });

        let dashboard = html.find("Dashboard").unwrap();
        let students = html.find("Students").unwrap();
        let leaf = html.find("Asha Verma").unwrap();
        assert!(dashboard < students && students < leaf);
        assert_eq!(html.matches("aria-current").count(), 1);
    }
}
