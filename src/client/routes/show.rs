use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCircleCheck, FaPen, FaTrash, FaUserPen};
use dioxus_free_icons::Icon;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::client::util::api::{delete_pokemon, get_pokemon};
use crate::{
    client::{
        components::{ConfirmDelete, Page, StatBar, TypeBadge},
        router::Route,
    },
    model::pokemon::PokemonDto,
};

#[component]
pub fn PokemonShow(id: i32) -> Element {
    let mut pokemon = use_signal(|| None::<Result<PokemonDto, String>>);

    #[cfg(feature = "web")]
    {
        let _ = use_resource(move || async move {
            pokemon.set(Some(get_pokemon(id).await));
        });
    }

    rsx!(
        Title { "Fiche | RetroDex" }
        Page { class: "flex justify-center",
            match pokemon() {
                Some(Ok(record)) => rsx!(PokemonDetails { pokemon: record }),
                Some(Err(err)) => rsx!(div { class: "alert alert-error max-w-2xl", "{err}" }),
                None => rsx!(div { class: "skeleton h-96 w-full max-w-2xl" }),
            }
        }
    )
}

#[component]
fn PokemonDetails(pokemon: PokemonDto) -> Element {
    let mut confirming = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let navigator = use_navigator();
    let id = pokemon.id;

    let on_confirm = move |_| {
        confirming.set(false);

        #[cfg(feature = "web")]
        spawn(async move {
            match delete_pokemon(id).await {
                Ok(()) => {
                    navigator.push(Route::PokemonList {});
                }
                Err(err) => {
                    tracing::error!("Failed to delete pokemon {}: {}", id, err);
                    error.set(Some(err));
                }
            }
        });
    };

    rsx!(
        div {
            class: "card bg-base-100 shadow-sm w-full max-w-2xl type-border-{pokemon.primary_type}",
            div { class: "card-body gap-4",
                if let Some(err) = error() {
                    div { class: "alert alert-error", "{err}" }
                }
                div { class: "flex items-center gap-6",
                    img {
                        class: "pixelated w-40 h-40",
                        src: "{pokemon.image}",
                        alt: "{pokemon.name}",
                    }
                    div { class: "flex flex-col gap-2",
                        p { class: "opacity-60", "#{pokemon.catalog_index}" }
                        h1 { class: "text-3xl font-bold", "{pokemon.name}" }
                        div { class: "flex gap-1",
                            TypeBadge { name: pokemon.primary_type.clone() }
                            if let Some(secondary) = pokemon.secondary_type.clone() {
                                TypeBadge { name: secondary }
                            }
                        }
                        p { "Poids : {pokemon.weight_kg} kg" }
                        p { "Taille : {pokemon.height_m} m" }
                        if pokemon.imported {
                            p { class: "flex items-center gap-1 text-success",
                                Icon { width: 16, height: 16, icon: FaCircleCheck }
                                "Importé"
                            }
                        } else {
                            p { class: "flex items-center gap-1 text-info",
                                Icon { width: 16, height: 16, icon: FaUserPen }
                                "Créé ou modifié"
                            }
                        }
                    }
                }
                if let Some(description) = pokemon.description.clone() {
                    p { class: "italic", "{description}" }
                }
                div { class: "flex flex-col gap-1",
                    StatBar { label: "Points de vie", value: pokemon.hp }
                    StatBar { label: "Attaque", value: pokemon.attack }
                    StatBar { label: "Défense", value: pokemon.defense }
                    StatBar { label: "Vitesse", value: pokemon.speed }
                    StatBar { label: "Spécial", value: pokemon.special }
                }
                div { class: "card-actions justify-end",
                    Link { to: Route::PokemonEdit { id },
                        class: "btn btn-outline flex gap-2",
                        Icon { width: 16, height: 16, icon: FaPen }
                        "Modifier"
                    }
                    button {
                        class: "btn btn-outline btn-error flex gap-2",
                        onclick: move |_| confirming.set(true),
                        Icon { width: 16, height: 16, icon: FaTrash }
                        "Supprimer"
                    }
                }
            }
        }
        if confirming() {
            ConfirmDelete {
                name: pokemon.name.clone(),
                on_confirm,
                on_cancel: move |_| confirming.set(false),
            }
        }
    )
}
