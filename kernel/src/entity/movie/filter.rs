use vodca::References;

use crate::entity::{MovieGenre, MovieRating, SelectLimit, SelectPage};

/// Supported catalog filters. Absent fields do not restrict the result.
#[derive(Debug, Clone, Default, PartialEq, Eq, References)]
pub struct MovieFilter {
    rating: Option<MovieRating>,
    genre: Option<MovieGenre>,
    page: SelectPage,
    limit: SelectLimit,
}

impl MovieFilter {
    pub fn new(
        rating: Option<MovieRating>,
        genre: Option<MovieGenre>,
        page: SelectPage,
        limit: SelectLimit,
    ) -> Self {
        Self {
            rating,
            genre,
            page,
            limit,
        }
    }
}
