pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        fixtures::pokemon::factory, test_context_with_tables, TestBuilder, TestContext,
        TestError,
    };
}

/// Create a [`TestContext`] with the given entity tables and no mock endpoints.
///
/// ```ignore
/// let test = test_context_with_tables!(entity::prelude::Pokemon)?;
/// ```
#[macro_export]
macro_rules! test_context_with_tables {
    ($($entity:expr),* $(,)?) => {{
        async {
            let builder = $crate::TestBuilder::new();
            $(let builder = builder.with_table($entity);)*
            builder.build().await
        }.await
    }};
}
