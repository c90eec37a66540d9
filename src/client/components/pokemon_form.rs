use dioxus::prelude::*;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::{
    client::util::api::{create_pokemon, fetch_all_pokemon, replace_pokemon},
    model::form::{custom_catalog_index, FormValues},
};
use crate::{
    client::router::Route,
    model::{
        api::ViolationDto,
        form::{resolve_image, PokemonForm as FormState, AVAILABLE_IMAGES, POKEMON_TYPES},
        pokemon::PokemonDto,
    },
};

/// Create form when `existing` is `None`, edit form otherwise.
#[component]
pub fn PokemonForm(existing: Option<PokemonDto>) -> Element {
    let initial = existing
        .as_ref()
        .map(FormState::from_dto)
        .unwrap_or_default();
    let current_image = existing.as_ref().map(|p| p.image.clone());
    let existing_id = existing.as_ref().map(|p| p.id);

    let mut form = use_signal(|| initial);
    let mut selected_image = use_signal(|| None::<String>);
    let mut violations = use_signal(Vec::<ViolationDto>::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);
    let navigator = use_navigator();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let values = match form.read().validate() {
            Ok(values) => values,
            Err(found) => {
                violations.set(found);
                return;
            }
        };
        violations.set(Vec::new());
        error.set(None);

        let image = resolve_image(selected_image.read().as_deref(), current_image.as_deref());

        #[cfg(feature = "web")]
        spawn(async move {
            submitting.set(true);
            let result = save(existing_id, values, image).await;
            submitting.set(false);

            match result {
                Ok(()) => {
                    navigator.push(Route::PokemonList {});
                }
                Err(err) => {
                    tracing::error!("Failed to save pokemon: {}", err);
                    error.set(Some(err));
                }
            }
        });

        #[cfg(not(feature = "web"))]
        let _ = (values, image, existing_id, navigator);
    };

    let message_for = move |field: &str| -> Option<String> {
        violations
            .read()
            .iter()
            .find(|v| v.property_path == field)
            .map(|v| v.message.clone())
    };

    let title = if existing.is_some() {
        "Modifier le Pokémon"
    } else {
        "Créer un Pokémon"
    };

    rsx!(
        form {
            class: "card bg-base-100 shadow-sm w-full max-w-2xl",
            onsubmit: on_submit,
            div { class: "card-body gap-3",
                h2 { class: "card-title", "{title}" }

                if let Some(err) = error() {
                    div { class: "alert alert-error", "{err}" }
                }

                TextField {
                    label: "Nom",
                    value: form.read().name.clone(),
                    error: message_for("name"),
                    oninput: move |value| form.write().name = value,
                }

                div { class: "grid grid-cols-2 gap-3",
                    TypeSelect {
                        label: "Type 1",
                        value: form.read().type1.clone(),
                        allow_empty: false,
                        error: message_for("type1"),
                        onchange: move |value| form.write().type1 = value,
                    }
                    TypeSelect {
                        label: "Type 2",
                        value: form.read().type2.clone(),
                        allow_empty: true,
                        error: message_for("type2"),
                        onchange: move |value| form.write().type2 = value,
                    }
                }

                div { class: "grid grid-cols-3 gap-3",
                    TextField {
                        label: "Points de vie",
                        value: form.read().hp.clone(),
                        error: message_for("hp"),
                        oninput: move |value| form.write().hp = value,
                    }
                    TextField {
                        label: "Attaque",
                        value: form.read().attack.clone(),
                        error: message_for("attack"),
                        oninput: move |value| form.write().attack = value,
                    }
                    TextField {
                        label: "Défense",
                        value: form.read().defense.clone(),
                        error: message_for("defense"),
                        oninput: move |value| form.write().defense = value,
                    }
                    TextField {
                        label: "Vitesse",
                        value: form.read().vitesse.clone(),
                        error: message_for("vitesse"),
                        oninput: move |value| form.write().vitesse = value,
                    }
                    TextField {
                        label: "Spécial",
                        value: form.read().special.clone(),
                        error: message_for("special"),
                        oninput: move |value| form.write().special = value,
                    }
                    TextField {
                        label: "Poids (kg)",
                        value: form.read().poids.clone(),
                        error: message_for("poids"),
                        oninput: move |value| form.write().poids = value,
                    }
                    TextField {
                        label: "Taille (m)",
                        value: form.read().taille.clone(),
                        error: message_for("taille"),
                        oninput: move |value| form.write().taille = value,
                    }
                }

                label { class: "form-control",
                    span { class: "label-text", "Description" }
                    textarea {
                        class: "textarea textarea-bordered",
                        value: "{form.read().description}",
                        oninput: move |e| form.write().description = e.value(),
                    }
                    if let Some(message) = message_for("description") {
                        span { class: "text-error text-sm", "{message}" }
                    }
                }

                div {
                    span { class: "label-text", "Image" }
                    div { class: "flex gap-2 mt-1",
                        for image in AVAILABLE_IMAGES {
                            button {
                                r#type: "button",
                                class: if selected_image.read().as_deref() == Some(image) {
                                    "btn btn-square btn-lg btn-primary"
                                } else {
                                    "btn btn-square btn-lg btn-outline"
                                },
                                onclick: move |_| selected_image.set(Some(image.to_string())),
                                img { class: "pixelated w-10 h-10", src: "{image}", alt: "{image}" }
                            }
                        }
                    }
                }

                div { class: "card-actions justify-end",
                    Link { to: Route::PokemonList {}, class: "btn btn-ghost", "Annuler" }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: submitting(),
                        if submitting() { "Enregistrement..." } else { "Enregistrer" }
                    }
                }
            }
        }
    )
}

#[component]
fn TextField(
    label: &'static str,
    value: String,
    error: Option<String>,
    oninput: EventHandler<String>,
) -> Element {
    rsx!(
        label { class: "form-control",
            span { class: "label-text", "{label}" }
            input {
                class: "input input-bordered",
                r#type: "text",
                value: "{value}",
                oninput: move |e| oninput.call(e.value()),
            }
            if let Some(message) = error {
                span { class: "text-error text-sm", "{message}" }
            }
        }
    )
}

#[component]
fn TypeSelect(
    label: &'static str,
    value: String,
    allow_empty: bool,
    error: Option<String>,
    onchange: EventHandler<String>,
) -> Element {
    rsx!(
        label { class: "form-control",
            span { class: "label-text", "{label}" }
            select {
                class: "select select-bordered",
                value: "{value}",
                onchange: move |e| onchange.call(e.value()),
                option { value: "", disabled: !allow_empty, selected: value.is_empty(),
                    if allow_empty { "Aucun" } else { "Choisir un type" }
                }
                for kind in POKEMON_TYPES {
                    option { value: kind, selected: value == kind, "{kind}" }
                }
            }
            if let Some(message) = error {
                span { class: "text-error text-sm", "{message}" }
            }
        }
    )
}

/// Create or replace the record; the catalog index is recomputed from the user authored count.
#[cfg(feature = "web")]
async fn save(existing_id: Option<i32>, values: FormValues, image: String) -> Result<(), String> {
    let custom = fetch_all_pokemon(Some(false)).await?;
    let input = values.into_input(image, custom_catalog_index(custom.len()));

    match existing_id {
        Some(id) => replace_pokemon(id, &input).await.map(|_| ()),
        None => create_pokemon(&input).await.map(|_| ()),
    }
}
