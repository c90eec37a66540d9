use dioxus::document::Title;
use dioxus::prelude::*;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::client::util::api::{delete_pokemon, fetch_all_pokemon};
use crate::{
    client::components::{Page, PokemonCard},
    model::pokemon::{split_by_origin, PokemonDto},
};

#[component]
pub fn PokemonList() -> Element {
    let mut pokemon = use_signal(|| None::<Result<Vec<PokemonDto>, String>>);

    // Load the whole catalog on component load
    #[cfg(feature = "web")]
    {
        let _ = use_resource(move || async move {
            pokemon.set(Some(fetch_all_pokemon(None).await));
        });
    }

    let on_delete = move |id: i32| {
        #[cfg(feature = "web")]
        spawn(async move {
            match delete_pokemon(id).await {
                Ok(()) => {
                    if let Some(Ok(records)) = pokemon.write().as_mut() {
                        records.retain(|p| p.id != id);
                    }
                }
                Err(err) => tracing::error!("Failed to delete pokemon {}: {}", id, err),
            }
        });

        #[cfg(not(feature = "web"))]
        let _ = id;
    };

    rsx!(
        Title { "Liste | RetroDex" }
        Page { class: "flex flex-col items-center gap-6",
            match pokemon() {
                Some(Ok(records)) => {
                    let (imported, custom) = split_by_origin(records);
                    rsx!(
                        PokemonSection {
                            title: "Pokémons importés",
                            records: imported,
                            on_delete,
                        }
                        PokemonSection {
                            title: "Pokémons créés ou modifiés",
                            records: custom,
                            on_delete,
                        }
                    )
                }
                Some(Err(err)) => rsx!(div { class: "alert alert-error", "{err}" }),
                None => rsx!(span { class: "loading loading-spinner loading-lg" }),
            }
        }
    )
}

#[component]
fn PokemonSection(
    title: &'static str,
    records: Vec<PokemonDto>,
    on_delete: EventHandler<i32>,
) -> Element {
    rsx!(
        section { class: "w-full max-w-[1440px]",
            h2 { class: "text-2xl font-bold mb-4", "{title} ({records.len()})" }
            if records.is_empty() {
                p { class: "opacity-60", "Aucun Pokémon." }
            }
            div { class: "flex flex-wrap gap-4",
                for record in records {
                    PokemonCard { key: "{record.id}", pokemon: record.clone(), on_delete }
                }
            }
        }
    )
}
