use dioxus::prelude::*;

/// Vertical navigation column.
#[component]
pub fn Sidebar(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        aside { class: "sidebar", {children} }
    }
}

/// Brand area at the top of the sidebar.
#[component]
pub fn SidebarHeader(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-header", {children} }
    }
}

/// Labeled group of navigation items.
#[component]
pub fn SidebarGroup(label: String, children: Element) -> Element {
    rsx! {
        div { class: "sidebar-group",
            span { class: "sidebar-group-label", "{label}" }
            nav { class: "sidebar-group-items", {children} }
        }
    }
}

/// One navigation row. Wrap in a router `Link` to make it navigate.
#[component]
pub fn SidebarItem(#[props(default = false)] active: bool, children: Element) -> Element {
    rsx! {
        div {
            class: "sidebar-item",
            "data-active": if active { "true" } else { "false" },
            {children}
        }
    }
}

/// Pinned area at the bottom of the sidebar.
#[component]
pub fn SidebarFooter(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-footer", {children} }
    }
}
