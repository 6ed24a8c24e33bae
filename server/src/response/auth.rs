use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use application::transfer::AuthDto;

use crate::controller::Exhaust;
use crate::response::UserResponse;

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    user: UserResponse,
    token: String,
}

impl IntoResponse for AuthResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

pub struct AuthPresenter;

impl Exhaust<AuthDto> for AuthPresenter {
    type To = AuthResponse;
    fn emit(&self, input: AuthDto) -> Self::To {
        AuthResponse {
            user: UserResponse::from(input.user),
            token: input.token,
        }
    }
}

#[cfg(test)]
mod test {
    use uuid::Uuid;

    use application::transfer::{AuthDto, UserDto};

    use crate::controller::Exhaust;
    use crate::response::AuthPresenter;

    #[test]
    fn password_never_reaches_the_wire() {
        let response = AuthPresenter.emit(AuthDto {
            user: UserDto {
                id: Uuid::new_v4(),
                username: "jdoe".to_string(),
                first_name: "John".to_string(),
                last_name: "Doe".to_string(),
                email: "john@example.com".to_string(),
                is_admin: false,
            },
            token: "token".to_string(),
        });
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["token"], "token");
        assert_eq!(value["user"]["firstName"], "John");
        assert!(value["user"].get("password").is_none());
        assert!(value["user"].get("encryptedPassword").is_none());
    }
}
