use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};

use application::service::{
    CreateUserService, DeleteUserService, GetRentService, GetUserService,
};

use crate::auth::AdminUser;
use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{
    CreateUserRequest, DeleteUserRequest, GetUserRequest, RentTransformer, UserRentsRequest,
    UserTransformer,
};
use crate::response::{RentPresenter, UserPresenter};

pub trait UserRouter {
    fn route_user(self) -> Self;
}

impl UserRouter for Router<AppModule> {
    fn route_user(self) -> Self {
        self.route(
            "/api/v1/users",
            get(|State(handler): State<AppModule>, _: AdminUser| async move {
                Controller::new((), UserPresenter)
                    .bypass(|| handler.get_users())
                    .await
                    .map_err(ErrorStatus::from)
            })
            .post(
                |State(handler): State<AppModule>,
                 _: AdminUser,
                 Json(req): Json<CreateUserRequest>| async move {
                    Controller::new(UserTransformer, UserPresenter)
                        .intake(req)
                        .handle(|dto| handler.create_user(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/api/v1/users/:id",
            get(
                |State(handler): State<AppModule>,
                 _: AdminUser,
                 Path(id): Path<String>| async move {
                    Controller::new(UserTransformer, UserPresenter)
                        .try_intake(GetUserRequest::new(id))?
                        .handle(|dto| handler.get_user(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .delete(
                |State(handler): State<AppModule>,
                 _: AdminUser,
                 Path(id): Path<String>| async move {
                    Controller::new(UserTransformer, UserPresenter)
                        .try_intake(DeleteUserRequest::new(id))?
                        .handle(|dto| handler.delete_user(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/api/v1/users/:id/rents",
            get(
                |State(handler): State<AppModule>,
                 _: AdminUser,
                 Path(id): Path<String>| async move {
                    Controller::new(RentTransformer, RentPresenter)
                        .try_intake(UserRentsRequest::new(id))?
                        .handle(|dto| handler.get_rents_from_user(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
