use dioxus::prelude::*;

/// Single-figure dashboard tile: a large value over a label, with an
/// optional caption and icon slot.
#[component]
pub fn StatCard(
    label: String,
    value: String,
    #[props(default)] caption: String,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "stat-card",
            div { class: "stat-card-icon", {children} }
            div { class: "stat-card-body",
                span { class: "stat-card-value", "{value}" }
                span { class: "stat-card-label", "{label}" }
                if !caption.is_empty() {
                    span { class: "stat-card-caption", "{caption}" }
                }
            }
        }
    }
}
