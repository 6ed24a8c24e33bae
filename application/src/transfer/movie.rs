use uuid::Uuid;

use kernel::prelude::entity::{DestructMovie, Movie};

#[derive(Debug, Clone)]
pub struct MovieDto {
    pub id: Uuid,
    pub title: String,
    pub genres: Vec<String>,
    pub length: i32,
    pub year: i32,
    pub rating: i32,
}

impl From<Movie> for MovieDto {
    fn from(value: Movie) -> Self {
        let DestructMovie {
            id,
            title,
            genres,
            length,
            year,
            rating,
        } = value.into_destruct();
        Self {
            id: id.into(),
            title: title.into(),
            genres: genres.into(),
            length: length.into(),
            year: year.into(),
            rating: rating.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MoviePageDto {
    pub movies: Vec<MovieDto>,
    pub page: i32,
}

#[derive(Debug)]
pub struct GetMovieDto {
    pub id: Uuid,
}

#[derive(Debug, Default)]
pub struct GetMoviesDto {
    pub rating: Option<i32>,
    pub genre: Option<String>,
    pub page: Option<i32>,
    pub limit: Option<i32>,
}

pub struct CreateMovieDto {
    pub title: String,
    pub genres: Vec<String>,
    pub length: i32,
    pub year: i32,
    pub rating: Option<i32>,
}

#[derive(Default)]
pub struct UpdateMovieDto {
    pub id: Uuid,
    pub title: Option<String>,
    pub genres: Option<Vec<String>>,
    pub length: Option<i32>,
    pub year: Option<i32>,
    pub rating: Option<i32>,
}

pub struct RateMovieDto {
    pub id: Uuid,
    pub rating: i32,
}

pub struct DeleteMovieDto {
    pub id: Uuid,
}
