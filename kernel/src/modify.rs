mod movie;
mod rent;
mod user;

pub use self::{movie::*, rent::*, user::*};
