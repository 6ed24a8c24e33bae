pub use self::{auth::*, movie::*, rent::*, user::*};

mod auth;
mod movie;
mod rent;
mod user;
