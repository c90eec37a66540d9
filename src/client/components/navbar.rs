use dioxus::prelude::*;

pub use crate::client::router::Route;

#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            class: "navbar bg-base-200 fixed z-10",
            div {
                class: "navbar-start",
                Link { to: Route::Home {},
                    class: "btn btn-ghost text-xl font-bold",
                    "RetroDex"
                }
            }
            div {
                class: "navbar-end",
                ul { class: "menu menu-horizontal gap-2",
                    li {
                        Link { to: Route::PokemonList {}, "Liste" }
                    }
                    li {
                        Link { to: Route::PokemonCreate {}, "Création" }
                    }
                    li {
                        a { href: "/docs", "API" }
                    }
                }
            }
        }

        Outlet::<Route> {}
    }
}
