use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};

use application::service::AuthenticateService;

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{AuthRequest, AuthTransformer};
use crate::response::AuthPresenter;

pub trait AuthRouter {
    fn route_auth(self) -> Self;
}

impl AuthRouter for Router<AppModule> {
    fn route_auth(self) -> Self {
        self.route(
            "/api/auth",
            post(
                |State(handler): State<AppModule>, Json(req): Json<AuthRequest>| async move {
                    Controller::new(AuthTransformer, AuthPresenter)
                        .intake(req)
                        .handle(|dto| handler.authenticate(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
