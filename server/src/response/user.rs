use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use uuid::Uuid;

use application::transfer::UserDto;

use crate::controller::Exhaust;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    id: Uuid,
    username: String,
    first_name: String,
    last_name: String,
    email: String,
    is_admin: bool,
}

impl From<UserDto> for UserResponse {
    fn from(value: UserDto) -> Self {
        Self {
            id: value.id,
            username: value.username,
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email,
            is_admin: value.is_admin,
        }
    }
}

impl IntoResponse for UserResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

pub struct UserPresenter;

impl Exhaust<UserDto> for UserPresenter {
    type To = UserResponse;
    fn emit(&self, input: UserDto) -> Self::To {
        UserResponse::from(input)
    }
}

impl Exhaust<Vec<UserDto>> for UserPresenter {
    type To = axum::Json<Vec<UserResponse>>;
    fn emit(&self, input: Vec<UserDto>) -> Self::To {
        let result = input
            .into_iter()
            .map(UserResponse::from)
            .collect::<Vec<_>>();
        axum::Json::from(result)
    }
}

impl Exhaust<()> for UserPresenter {
    type To = StatusCode;
    fn emit(&self, _: ()) -> Self::To {
        StatusCode::NO_CONTENT
    }
}
