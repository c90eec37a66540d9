use crate::TestContext;

pub mod data;
pub mod factory;
pub mod mockito;

impl TestContext {
    pub fn pokemon<'a>(&'a mut self) -> PokemonFixtures<'a> {
        PokemonFixtures { context: self }
    }
}

pub struct PokemonFixtures<'a> {
    pub context: &'a mut TestContext,
}
