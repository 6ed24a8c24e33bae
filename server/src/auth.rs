use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use error_stack::Report;

use application::service::AuthenticateService;
use application::transfer::{AuthorizeDto, UserDto};
use kernel::KernelError;

use crate::error::ErrorStatus;
use crate::handler::AppModule;

pub const API_TOKEN: &str = "Api-Token";

/// The user named by the `Api-Token` header.
pub struct AuthUser(pub UserDto);

#[axum::async_trait]
impl FromRequestParts<AppModule> for AuthUser {
    type Rejection = ErrorStatus;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppModule,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(API_TOKEN)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| {
                Report::new(KernelError::Unauthorized)
                    .attach_printable(format!("Missing {API_TOKEN} header"))
            })?;
        let user = state
            .authorize(AuthorizeDto {
                token: token.to_string(),
            })
            .await?;
        Ok(Self(user))
    }
}

/// An [`AuthUser`] holding the admin role.
pub struct AdminUser(pub UserDto);

#[axum::async_trait]
impl FromRequestParts<AppModule> for AdminUser {
    type Rejection = ErrorStatus;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppModule,
    ) -> Result<Self, Self::Rejection> {
        let AuthUser(user) = AuthUser::from_request_parts(parts, state).await?;
        if !user.is_admin {
            tracing::debug!(user_id = %user.id, "Admin route denied");
            return Err(Report::new(KernelError::Forbidden).into());
        }
        Ok(Self(user))
    }
}
