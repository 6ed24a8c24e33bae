mod auth;
mod movie;
mod rent;
mod user;

pub use self::{auth::*, movie::*, rent::*, user::*};
