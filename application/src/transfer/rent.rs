use time::OffsetDateTime;
use uuid::Uuid;

use kernel::prelude::entity::{DestructRent, Rent};

#[derive(Debug, Clone)]
pub struct RentDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub movie_id: Uuid,
    pub from: OffsetDateTime,
    pub to: OffsetDateTime,
}

impl From<Rent> for RentDto {
    fn from(value: Rent) -> Self {
        let DestructRent {
            id,
            user_id,
            movie_id,
            window,
        } = value.into_destruct();
        Self {
            id: id.into(),
            user_id: user_id.into(),
            movie_id: movie_id.into(),
            from: *window.start(),
            to: *window.end(),
        }
    }
}

#[derive(Debug)]
pub struct RentMovieDto {
    pub user_id: Uuid,
    pub movie_id: Uuid,
}

pub struct GetRentFromUserIdDto {
    pub user_id: Uuid,
}
