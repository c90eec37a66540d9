use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaEye, FaPen, FaTrash};
use dioxus_free_icons::Icon;

use crate::{
    client::{
        components::{ConfirmDelete, TypeBadge},
        router::Route,
    },
    model::pokemon::PokemonDto,
};

#[component]
pub fn PokemonCard(pokemon: PokemonDto, on_delete: EventHandler<i32>) -> Element {
    let mut confirming = use_signal(|| false);
    let id = pokemon.id;

    rsx!(
        div {
            class: "card bg-base-100 shadow-sm w-56 type-border-{pokemon.primary_type}",
            figure { class: "pt-4",
                img {
                    class: "pixelated w-24 h-24",
                    src: "{pokemon.image}",
                    alt: "{pokemon.name}",
                }
            }
            div { class: "card-body items-center text-center p-4",
                p { class: "text-xs opacity-60", "#{pokemon.catalog_index}" }
                h2 { class: "card-title", "{pokemon.name}" }
                div { class: "flex gap-1",
                    TypeBadge { name: pokemon.primary_type.clone() }
                    if let Some(secondary) = pokemon.secondary_type.clone() {
                        TypeBadge { name: secondary }
                    }
                }
                div { class: "card-actions mt-2",
                    Link { to: Route::PokemonShow { id },
                        class: "btn btn-sm btn-outline",
                        Icon { width: 14, height: 14, icon: FaEye }
                    }
                    Link { to: Route::PokemonEdit { id },
                        class: "btn btn-sm btn-outline",
                        Icon { width: 14, height: 14, icon: FaPen }
                    }
                    button {
                        class: "btn btn-sm btn-outline btn-error",
                        onclick: move |_| confirming.set(true),
                        Icon { width: 14, height: 14, icon: FaTrash }
                    }
                }
            }
        }
        if confirming() {
            ConfirmDelete {
                name: pokemon.name.clone(),
                on_confirm: move |_| {
                    confirming.set(false);
                    on_delete.call(id);
                },
                on_cancel: move |_| confirming.set(false),
            }
        }
    )
}
