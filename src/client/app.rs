use dioxus::prelude::*;

use crate::client::router::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link {
            rel: "stylesheet",
            href: "https://cdn.jsdelivr.net/npm/daisyui@4.12.14/dist/full.min.css"
        }
        document::Script { src: "https://cdn.tailwindcss.com" }
        document::Stylesheet { href: MAIN_CSS }
        Router::<Route> {}
    }
}
