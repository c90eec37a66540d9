pub mod confirm_delete;
pub mod navbar;
pub mod page;
pub mod pokemon_card;
pub mod pokemon_form;
pub mod stat_bar;
pub mod type_badge;

pub use confirm_delete::ConfirmDelete;
pub use navbar::Navbar;
pub use page::Page;
pub use pokemon_card::PokemonCard;
pub use pokemon_form::PokemonForm;
pub use stat_bar::StatBar;
pub use type_badge::TypeBadge;
