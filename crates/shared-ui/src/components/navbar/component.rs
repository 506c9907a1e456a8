use dioxus::prelude::*;

/// Top application bar.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        header { class: "navbar", {children} }
    }
}

/// Right-aligned group inside the Navbar, typically the user area.
#[component]
pub fn NavbarActions(children: Element) -> Element {
    rsx! {
        div { class: "navbar-actions", {children} }
    }
}
