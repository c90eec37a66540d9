use dioxus::prelude::*;

use crate::client::{
    components::Navbar,
    routes::{Home, NotFound, PokemonCreate, PokemonEdit, PokemonList, PokemonShow},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[route("/retrodex")]
    PokemonList {},

    #[route("/retrodex/:id")]
    PokemonShow { id: i32 },

    #[route("/retrodex/:id/edit")]
    PokemonEdit { id: i32 },

    #[route("/create")]
    PokemonCreate {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
