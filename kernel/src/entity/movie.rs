mod filter;
mod genre;
mod id;
mod length;
mod rating;
mod title;
mod year;

pub use self::{filter::*, genre::*, id::*, length::*, rating::*, title::*, year::*};
use destructure::Destructure;
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Movie {
    id: MovieId,
    title: MovieTitle,
    genres: MovieGenres,
    length: MovieLength,
    year: MovieYear,
    rating: MovieRating,
}

impl Movie {
    pub fn new(
        id: MovieId,
        title: MovieTitle,
        genres: MovieGenres,
        length: MovieLength,
        year: MovieYear,
        rating: MovieRating,
    ) -> Self {
        Self {
            id,
            title,
            genres,
            length,
            year,
            rating,
        }
    }
}
