use dioxus::document::Title;
use dioxus::prelude::*;

#[cfg(feature = "web")]
use crate::client::util::api::get_pokemon;
use crate::{
    client::components::{Page, PokemonForm},
    model::pokemon::PokemonDto,
};

#[component]
pub fn PokemonEdit(id: i32) -> Element {
    let mut pokemon = use_signal(|| None::<Result<PokemonDto, String>>);

    #[cfg(feature = "web")]
    {
        let _ = use_resource(move || async move {
            pokemon.set(Some(get_pokemon(id).await));
        });
    }

    rsx!(
        Title { "Modification | RetroDex" }
        Page { class: "flex justify-center",
            match pokemon() {
                Some(Ok(existing)) => rsx!(PokemonForm { existing: Some(existing) }),
                Some(Err(err)) => rsx!(div { class: "alert alert-error max-w-2xl", "{err}" }),
                None => rsx!(div { class: "skeleton h-96 w-full max-w-2xl" }),
            }
        }
    )
}
