use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use uuid::Uuid;

use application::transfer::{MovieDto, MoviePageDto};

use crate::controller::Exhaust;

#[derive(Debug, Serialize)]
pub struct MovieResponse {
    id: Uuid,
    title: String,
    genre: Vec<String>,
    length: i32,
    year: i32,
    rating: i32,
}

impl From<MovieDto> for MovieResponse {
    fn from(value: MovieDto) -> Self {
        Self {
            id: value.id,
            title: value.title,
            genre: value.genres,
            length: value.length,
            year: value.year,
            rating: value.rating,
        }
    }
}

impl IntoResponse for MovieResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

/// One page of the catalog.
#[derive(Debug, Serialize)]
pub struct MoviesResponse {
    results: usize,
    data: Vec<MovieResponse>,
    page: i32,
}

impl IntoResponse for MoviesResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

pub struct MoviePresenter;

impl Exhaust<MovieDto> for MoviePresenter {
    type To = MovieResponse;
    fn emit(&self, input: MovieDto) -> Self::To {
        MovieResponse::from(input)
    }
}

impl Exhaust<MoviePageDto> for MoviePresenter {
    type To = MoviesResponse;
    fn emit(&self, input: MoviePageDto) -> Self::To {
        let data = input
            .movies
            .into_iter()
            .map(MovieResponse::from)
            .collect::<Vec<_>>();
        MoviesResponse {
            results: data.len(),
            data,
            page: input.page,
        }
    }
}

impl Exhaust<()> for MoviePresenter {
    type To = StatusCode;
    fn emit(&self, _: ()) -> Self::To {
        StatusCode::NO_CONTENT
    }
}
