pub mod create;
pub mod edit;
pub mod home;
pub mod list;
pub mod not_found;
pub mod show;

pub use create::PokemonCreate;
pub use edit::PokemonEdit;
pub use home::Home;
pub use list::PokemonList;
pub use not_found::NotFound;
pub use show::PokemonShow;
