pub use crate::error::*;

mod auth;
mod clock;
mod database;
mod entity;
mod error;
mod modify;
mod query;

#[cfg(feature = "prelude")]
pub mod prelude {
    pub mod entity {
        pub use crate::entity::*;
    }
}

#[cfg(feature = "interface")]
pub mod interface {
    pub mod auth {
        pub use crate::auth::*;
    }
    pub mod clock {
        pub use crate::clock::*;
    }
    pub mod database {
        pub use crate::database::*;
    }
    pub mod query {
        pub use crate::query::*;
    }
    pub mod update {
        pub use crate::modify::*;
    }
}
