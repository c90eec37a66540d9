use dioxus::prelude::*;

/// Highest base stat a generation one pokemon can have.
const MAX_STAT: i32 = 255;

#[component]
pub fn StatBar(label: &'static str, value: i32) -> Element {
    let percent = value.clamp(0, MAX_STAT) as f64 / MAX_STAT as f64 * 100.0;
    let width = format!("width: {:.0}%", percent);

    rsx!(
        div { class: "flex items-center gap-2",
            span { class: "w-24 text-sm", "{label}" }
            span { class: "w-10 text-right font-mono", "{value}" }
            div { class: "flex-1 h-3 bg-base-300 rounded",
                div {
                    class: "h-3 rounded bg-primary",
                    style: "{width}",
                }
            }
        }
    )
}
