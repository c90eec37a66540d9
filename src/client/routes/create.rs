use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::components::{Page, PokemonForm};

#[component]
pub fn PokemonCreate() -> Element {
    rsx!(
        Title { "Création | RetroDex" }
        Page { class: "flex justify-center",
            PokemonForm { existing: None }
        }
    )
}
