use time::OffsetDateTime;
use vodca::References;

use crate::entity::{MovieId, RentWindow, UserId};

/// A rent attempt that has not been admitted or persisted yet.
#[derive(Debug, Clone, Eq, PartialEq, References)]
pub struct RentCandidate {
    user_id: UserId,
    movie_id: MovieId,
    window: RentWindow,
}

impl RentCandidate {
    pub fn new(user_id: UserId, movie_id: MovieId, requested_at: OffsetDateTime) -> Self {
        Self {
            user_id,
            movie_id,
            window: RentWindow::starting_at(requested_at),
        }
    }
}
