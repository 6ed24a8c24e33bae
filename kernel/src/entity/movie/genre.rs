use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct MovieGenres(Vec<String>);

impl MovieGenres {
    pub const MIN_COUNT: usize = 1;

    pub fn new(genres: impl Into<Vec<String>>) -> Self {
        Self(genres.into())
    }

    pub fn contains(&self, genre: &MovieGenre) -> bool {
        self.0.iter().any(|g| g == genre.as_ref())
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize, Fromln, AsRefln)]
pub struct MovieGenre(String);

impl MovieGenre {
    pub fn new(genre: impl Into<String>) -> Self {
        Self(genre.into())
    }
}
