use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBook, FaDownload, FaList, FaPlus};
use dioxus_free_icons::Icon;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::client::util::api::run_import;
use crate::{
    client::{components::Page, router::Route},
    model::import::{ImportReport, IMPORT_RANGE_END},
};

const PAGE_DESCRIPTION: &str = concat!(
    "Le Pokédex de la première génération : ",
    "liste, création, modification et import des 151 Pokémons."
);

const INTRO: &str = concat!(
    "Retrouvez les 151 Pokémons de la première génération avec leurs types et statistiques ",
    "d'origine. Importez-les depuis PokéAPI, puis complétez la liste avec vos propres créations."
);

#[component]
pub fn Home() -> Element {
    let mut importing = use_signal(|| false);
    let mut report = use_signal(|| None::<ImportReport>);
    let mut error = use_signal(|| None::<String>);

    let start_import = move |_| {
        if importing() {
            return;
        }
        importing.set(true);
        error.set(None);

        #[cfg(feature = "web")]
        spawn(async move {
            match run_import().await {
                Ok(result) => report.set(Some(result)),
                Err(err) => {
                    tracing::error!("Import failed: {}", err);
                    error.set(Some(err));
                }
            }
            importing.set(false);
        });
    };

    let imported_count = report.read().as_ref().map(|r| r.imported_count).unwrap_or(0);
    let services_class = if importing() {
        "flex flex-wrap justify-center gap-4 pointer-events-none opacity-50"
    } else {
        "flex flex-wrap justify-center gap-4"
    };

    rsx!(
        Title { "RetroDex" }
        Meta {
            name: "description",
            content: PAGE_DESCRIPTION
        }
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-6 max-w-3xl",
                h1 { class: "text-4xl font-bold", "RetroDex" }
                p { class: "text-center", "{INTRO}" }
                button {
                    class: "btn btn-primary flex gap-2",
                    disabled: importing(),
                    onclick: start_import,
                    Icon { width: 18, height: 18, icon: FaDownload }
                    if importing() {
                        span { class: "loading loading-spinner loading-sm" }
                        "Importation en cours..."
                    } else {
                        "Importer les {IMPORT_RANGE_END} Pokémons"
                    }
                }
                if let Some(err) = error() {
                    div { class: "alert alert-error", "{err}" }
                }
                if let Some(result) = report() {
                    div { class: "w-full flex flex-col gap-1",
                        p { class: "font-semibold",
                            "{imported_count} Pokémons importés sur {IMPORT_RANGE_END}."
                        }
                        ul { class: "text-sm max-h-64 overflow-y-auto bg-base-200 rounded p-2",
                            for line in result.status {
                                li { "{line}" }
                            }
                        }
                    }
                }
                ul { class: services_class,
                    li {
                        ServiceCard {
                            title: "Liste",
                            description: "Parcourir les Pokémons importés et créés.",
                            to: Route::PokemonList {},
                            Icon { width: 24, height: 24, icon: FaList }
                        }
                    }
                    li {
                        ServiceCard {
                            title: "Création",
                            description: "Ajouter un Pokémon de votre invention.",
                            to: Route::PokemonCreate {},
                            Icon { width: 24, height: 24, icon: FaPlus }
                        }
                    }
                    li {
                        a { href: "/docs",
                            div { class: "card bg-base-200 w-56 h-full",
                                div { class: "card-body items-center text-center",
                                    Icon { width: 24, height: 24, icon: FaBook }
                                    h2 { class: "card-title", "API" }
                                    p { "Documentation interactive de l'API." }
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn ServiceCard(
    title: &'static str,
    description: &'static str,
    to: Route,
    children: Element,
) -> Element {
    rsx!(
        Link { to,
            div { class: "card bg-base-200 w-56 h-full",
                div { class: "card-body items-center text-center",
                    {children}
                    h2 { class: "card-title", "{title}" }
                    p { "{description}" }
                }
            }
        }
    )
}
