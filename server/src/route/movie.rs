use axum::extract::{Path, Query, State};
use axum::routing::{get, put};
use axum::{Json, Router};

use application::service::{
    CreateMovieService, DeleteMovieService, GetMovieService, UpdateMovieService,
};

use crate::auth::{AdminUser, AuthUser};
use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{
    CreateMovieRequest, DeleteMovieRequest, GetMovieRequest, GetMoviesRequest, MovieTransformer,
    RateMovieRequest, UpdateMovieRequest,
};
use crate::response::MoviePresenter;

pub trait MovieRouter {
    fn route_movie(self) -> Self;
}

impl MovieRouter for Router<AppModule> {
    fn route_movie(self) -> Self {
        self.route(
            "/api/v1/movies",
            get(
                |State(handler): State<AppModule>,
                 _: AuthUser,
                 Query(req): Query<GetMoviesRequest>| async move {
                    Controller::new(MovieTransformer, MoviePresenter)
                        .intake(req)
                        .handle(|dto| handler.get_movies(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .post(
                |State(handler): State<AppModule>,
                 _: AdminUser,
                 Json(req): Json<CreateMovieRequest>| async move {
                    Controller::new(MovieTransformer, MoviePresenter)
                        .intake(req)
                        .handle(|dto| handler.create_movie(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/api/v1/movies/:id",
            get(
                |State(handler): State<AppModule>, _: AuthUser, Path(id): Path<String>| async move {
                    Controller::new(MovieTransformer, MoviePresenter)
                        .try_intake(GetMovieRequest::new(id))?
                        .handle(|dto| handler.get_movie(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .put(
                |State(handler): State<AppModule>,
                 _: AdminUser,
                 Path(id): Path<String>,
                 Json(req): Json<UpdateMovieRequest>| async move {
                    Controller::new(MovieTransformer, MoviePresenter)
                        .try_intake((id, req))?
                        .handle(|dto| handler.update_movie(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .delete(
                |State(handler): State<AppModule>,
                 _: AdminUser,
                 Path(id): Path<String>| async move {
                    Controller::new(MovieTransformer, MoviePresenter)
                        .try_intake(DeleteMovieRequest::new(id))?
                        .handle(|dto| handler.delete_movie(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/api/v1/movies/:id/rate",
            put(
                |State(handler): State<AppModule>,
                 _: AuthUser,
                 Path(id): Path<String>,
                 Json(req): Json<RateMovieRequest>| async move {
                    Controller::new(MovieTransformer, MoviePresenter)
                        .try_intake((id, req))?
                        .handle(|dto| handler.rate_movie(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
