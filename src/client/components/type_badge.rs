use dioxus::prelude::*;

#[component]
pub fn TypeBadge(name: String) -> Element {
    rsx!(
        span {
            class: "badge type-badge type-{name}",
            "{name}"
        }
    )
}
