use dioxus::prelude::*;

/// Thin horizontal or vertical rule between layout sections.
#[component]
pub fn Separator(#[props(default = true)] horizontal: bool) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "separator",
            "data-orientation": if horizontal { "horizontal" } else { "vertical" },
        }
    }
}
