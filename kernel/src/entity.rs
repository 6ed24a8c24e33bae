mod common;
mod movie;
mod rent;
mod user;

pub use self::{common::*, movie::*, rent::*, user::*};
