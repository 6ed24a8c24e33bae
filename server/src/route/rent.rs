use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::Router;

use application::service::{GetRentService, RentMovieService};

use crate::auth::{AdminUser, AuthUser};
use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{OwnRentsRequest, RentMovieRequest, RentTransformer};
use crate::response::RentPresenter;

pub trait RentRouter {
    fn route_rent(self) -> Self;
}

impl RentRouter for Router<AppModule> {
    fn route_rent(self) -> Self {
        self.route(
            "/api/v1/rents",
            get(|State(handler): State<AppModule>, _: AdminUser| async move {
                Controller::new((), RentPresenter)
                    .bypass(|| handler.get_all_rents())
                    .await
                    .map_err(ErrorStatus::from)
            }),
        )
        .route(
            "/api/v1/rents/me",
            get(
                |State(handler): State<AppModule>, AuthUser(user): AuthUser| async move {
                    Controller::new(RentTransformer, RentPresenter)
                        .intake(OwnRentsRequest::new(user.id))
                        .handle(|dto| handler.get_rents_from_user(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/api/v1/rents/:id/movie",
            post(
                |State(handler): State<AppModule>,
                 AuthUser(user): AuthUser,
                 Path(id): Path<String>| async move {
                    Controller::new(RentTransformer, RentPresenter)
                        .try_intake(RentMovieRequest::new(user.id, id))?
                        .handle(|dto| handler.rent_movie(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}

#[cfg(test)]
mod test {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use tower::ServiceExt;
    use uuid::Uuid;

    use crate::handler::AppModule;
    use crate::route::RentRouter;

    async fn post(uri: String) -> StatusCode {
        let app = AppModule::new().await.unwrap();
        Router::new()
            .route_rent()
            .with_state(app)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
            .status()
    }

    #[test_with::env(POSTGRES_TEST, JWT_SECRET)]
    #[tokio::test]
    async fn rent_movie_is_served_under_rents() {
        let status = post(format!("/api/v1/rents/{}/movie", Uuid::new_v4())).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let status = post(format!("/api/v1/movies/{}/rent", Uuid::new_v4())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
