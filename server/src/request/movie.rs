use error_stack::Report;
use serde::Deserialize;

use application::transfer::{
    CreateMovieDto, DeleteMovieDto, GetMovieDto, GetMoviesDto, RateMovieDto, UpdateMovieDto,
};
use kernel::KernelError;

use crate::controller::{Intake, TryIntake};
use crate::request::parse_id;

#[derive(Debug, Deserialize)]
pub struct CreateMovieRequest {
    title: String,
    genre: Vec<String>,
    length: i32,
    year: i32,
    rating: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateMovieRequest {
    title: Option<String>,
    genre: Option<Vec<String>>,
    length: Option<i32>,
    year: Option<i32>,
    rating: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct RateMovieRequest {
    rating: i32,
}

#[derive(Debug, Default, Deserialize)]
pub struct GetMoviesRequest {
    rating: Option<i32>,
    genre: Option<String>,
    page: Option<i32>,
    limit: Option<i32>,
}

#[derive(Debug)]
pub struct GetMovieRequest {
    id: String,
}

impl GetMovieRequest {
    pub fn new(id: String) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct DeleteMovieRequest {
    id: String,
}

impl DeleteMovieRequest {
    pub fn new(id: String) -> Self {
        Self { id }
    }
}

pub struct MovieTransformer;

impl Intake<CreateMovieRequest> for MovieTransformer {
    type To = CreateMovieDto;
    fn emit(&self, input: CreateMovieRequest) -> Self::To {
        CreateMovieDto {
            title: input.title,
            genres: input.genre,
            length: input.length,
            year: input.year,
            rating: input.rating,
        }
    }
}

impl Intake<GetMoviesRequest> for MovieTransformer {
    type To = GetMoviesDto;
    fn emit(&self, input: GetMoviesRequest) -> Self::To {
        GetMoviesDto {
            rating: input.rating,
            genre: input.genre,
            page: input.page,
            limit: input.limit,
        }
    }
}

impl TryIntake<GetMovieRequest> for MovieTransformer {
    type To = GetMovieDto;
    type Error = Report<KernelError>;
    fn emit(&self, input: GetMovieRequest) -> Result<Self::To, Self::Error> {
        Ok(GetMovieDto {
            id: parse_id(&input.id)?,
        })
    }
}

impl TryIntake<DeleteMovieRequest> for MovieTransformer {
    type To = DeleteMovieDto;
    type Error = Report<KernelError>;
    fn emit(&self, input: DeleteMovieRequest) -> Result<Self::To, Self::Error> {
        Ok(DeleteMovieDto {
            id: parse_id(&input.id)?,
        })
    }
}

impl TryIntake<(String, UpdateMovieRequest)> for MovieTransformer {
    type To = UpdateMovieDto;
    type Error = Report<KernelError>;
    fn emit(&self, (id, req): (String, UpdateMovieRequest)) -> Result<Self::To, Self::Error> {
        Ok(UpdateMovieDto {
            id: parse_id(&id)?,
            title: req.title,
            genres: req.genre,
            length: req.length,
            year: req.year,
            rating: req.rating,
        })
    }
}

impl TryIntake<(String, RateMovieRequest)> for MovieTransformer {
    type To = RateMovieDto;
    type Error = Report<KernelError>;
    fn emit(&self, (id, req): (String, RateMovieRequest)) -> Result<Self::To, Self::Error> {
        Ok(RateMovieDto {
            id: parse_id(&id)?,
            rating: req.rating,
        })
    }
}
