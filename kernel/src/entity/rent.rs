mod candidate;
mod id;
mod window;

pub use self::{candidate::*, id::*, window::*};
use destructure::Destructure;
use vodca::References;

use crate::entity::{MovieId, UserId};

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Rent {
    id: RentId,
    user_id: UserId,
    movie_id: MovieId,
    window: RentWindow,
}

impl Rent {
    pub fn new(id: RentId, user_id: UserId, movie_id: MovieId, window: RentWindow) -> Self {
        Self {
            id,
            user_id,
            movie_id,
            window,
        }
    }
}
