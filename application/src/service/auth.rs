use error_stack::Report;

use kernel::interface::auth::{
    DependOnPasswordHasher, DependOnTokenCodec, PasswordHasher, TokenCodec,
};
use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection};
use kernel::interface::query::{DependOnUserQuery, UserQuery};
use kernel::prelude::entity::{AccessToken, RawPassword, UserEmail};
use kernel::KernelError;

use crate::transfer::{AuthDto, AuthenticateDto, AuthorizeDto, UserDto};

#[async_trait::async_trait]
pub trait AuthenticateService:
    'static + Sync + Send + DependOnUserQuery + DependOnPasswordHasher + DependOnTokenCodec
{
    /// Exchanges an email and password for an access token.
    /// Unknown emails and wrong passwords both fail with [`KernelError::InvalidCredentials`].
    async fn authenticate(
        &self,
        dto: AuthenticateDto,
    ) -> error_stack::Result<AuthDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let email = UserEmail::new(dto.email);
        let Some(user) = self
            .user_query()
            .find_by_email(&mut connection, &email)
            .await?
        else {
            tracing::debug!("Authentication failed: unknown email");
            return Err(Report::new(KernelError::InvalidCredentials));
        };

        let password = RawPassword::new(dto.password);
        if !self.password_hasher().verify(&password, user.password())? {
            tracing::debug!(user_id = %user.id(), "Authentication failed: wrong password");
            return Err(Report::new(KernelError::InvalidCredentials));
        }

        let token = self.token_codec().issue(user.id())?;
        Ok(AuthDto {
            user: UserDto::from(user),
            token: token.into(),
        })
    }

    /// Resolves the user a token was issued to. Tokens of deleted users are rejected.
    async fn authorize(&self, dto: AuthorizeDto) -> error_stack::Result<UserDto, KernelError> {
        let user_id = self
            .token_codec()
            .verify(&AccessToken::new(dto.token))?;

        let mut connection = self.database_connection().transact().await?;
        let user = self
            .user_query()
            .find_by_id(&mut connection, &user_id)
            .await?
            .ok_or_else(|| {
                tracing::warn!(user_id = %user_id, "Token names a user that no longer exists");
                Report::new(KernelError::Unauthorized)
            })?;

        Ok(UserDto::from(user))
    }
}

impl<T> AuthenticateService for T where
    T: DependOnUserQuery + DependOnPasswordHasher + DependOnTokenCodec
{
}

#[cfg(test)]
mod test {
    use kernel::KernelError;

    use crate::service::test::TestModule;
    use crate::service::{AuthenticateService, CreateUserService, DeleteUserService};
    use crate::transfer::{AuthenticateDto, AuthorizeDto, CreateUserDto, DeleteUserDto};

    fn user() -> CreateUserDto {
        CreateUserDto {
            username: "admin".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "analytical".to_string(),
            is_admin: true,
        }
    }

    fn login(email: &str, password: &str) -> AuthenticateDto {
        AuthenticateDto {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn token_resolves_to_authenticated_user() -> error_stack::Result<(), KernelError> {
        let module = TestModule::new();
        let created = module.create_user(user()).await?;

        let auth = module
            .authenticate(login("ada@example.com", "analytical"))
            .await?;
        assert_eq!(auth.user.id, created.id);

        let resolved = module.authorize(AuthorizeDto { token: auth.token }).await?;
        assert_eq!(resolved.id, created.id);
        assert!(resolved.is_admin);
        Ok(())
    }

    #[tokio::test]
    async fn bad_credentials_are_rejected() -> error_stack::Result<(), KernelError> {
        let module = TestModule::new();
        module.create_user(user()).await?;

        let wrong_password = module
            .authenticate(login("ada@example.com", "babbage"))
            .await
            .unwrap_err();
        assert!(matches!(
            wrong_password.current_context(),
            KernelError::InvalidCredentials
        ));

        let unknown = module
            .authenticate(login("charles@example.com", "analytical"))
            .await
            .unwrap_err();
        assert!(matches!(
            unknown.current_context(),
            KernelError::InvalidCredentials
        ));
        Ok(())
    }

    #[tokio::test]
    async fn token_of_deleted_user_is_unauthorized() -> error_stack::Result<(), KernelError> {
        let module = TestModule::new();
        let created = module.create_user(user()).await?;
        let auth = module
            .authenticate(login("ada@example.com", "analytical"))
            .await?;
        module.delete_user(DeleteUserDto { id: created.id }).await?;

        let report = module
            .authorize(AuthorizeDto { token: auth.token })
            .await
            .unwrap_err();
        assert!(matches!(report.current_context(), KernelError::Unauthorized));
        Ok(())
    }

    #[tokio::test]
    async fn garbage_token_is_unauthorized() {
        let module = TestModule::new();
        let report = module
            .authorize(AuthorizeDto {
                token: "not.a.token".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(report.current_context(), KernelError::Unauthorized));
    }
}
