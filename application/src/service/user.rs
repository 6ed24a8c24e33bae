use std::sync::LazyLock;

use error_stack::Report;
use regex::Regex;
use uuid::Uuid;

use kernel::interface::auth::{DependOnPasswordHasher, PasswordHasher};
use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{DependOnUserQuery, UserQuery};
use kernel::interface::update::{DependOnUserModifier, UserModifier};
use kernel::prelude::entity::{
    FirstName, IsAdmin, LastName, RawPassword, User, UserEmail, UserId, UserName,
};
use kernel::{KernelError, ValidationErrors};

use crate::transfer::{CreateUserDto, DeleteUserDto, GetUserDto, UserDto};

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(UserEmail::PATTERN).expect("email pattern is valid"));

fn validate(dto: &CreateUserDto) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    if dto.username.chars().count() < UserName::MIN_LEN {
        errors.add(
            "username",
            format!("username length should be at least {} characters", UserName::MIN_LEN),
        );
    }
    if dto.first_name.chars().count() < FirstName::MIN_LEN {
        errors.add(
            "firstName",
            format!("first name length should be at least {} characters", FirstName::MIN_LEN),
        );
    }
    if dto.last_name.chars().count() < LastName::MIN_LEN {
        errors.add(
            "lastName",
            format!("last name length should be at least {} characters", LastName::MIN_LEN),
        );
    }
    if dto.password.chars().count() < RawPassword::MIN_LEN {
        errors.add(
            "password",
            format!("password length should be at least {} characters", RawPassword::MIN_LEN),
        );
    }
    if !EMAIL.is_match(&dto.email) {
        errors.add("email", "email is invalid");
    }
    errors
}

fn not_found(id: &UserId) -> Report<KernelError> {
    Report::new(KernelError::NotFound).attach_printable(format!("No user with id {id}"))
}

#[async_trait::async_trait]
pub trait GetUserService: 'static + Sync + Send + DependOnUserQuery {
    async fn get_user(&self, dto: GetUserDto) -> error_stack::Result<UserDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = UserId::new(dto.id);
        let user = self
            .user_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| not_found(&id))?;

        Ok(UserDto::from(user))
    }

    async fn get_users(&self) -> error_stack::Result<Vec<UserDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let users = self.user_query().find_all(&mut connection).await?;
        Ok(users.into_iter().map(UserDto::from).collect())
    }
}

impl<T> GetUserService for T where T: DependOnUserQuery {}

#[async_trait::async_trait]
pub trait CreateUserService:
    'static + Sync + Send + DependOnUserQuery + DependOnUserModifier + DependOnPasswordHasher
{
    async fn create_user(&self, dto: CreateUserDto) -> error_stack::Result<UserDto, KernelError> {
        let mut errors = validate(&dto);

        let mut connection = self.database_connection().transact().await?;

        let email = UserEmail::new(dto.email);
        if !errors.contains("email")
            && self
                .user_query()
                .find_by_email(&mut connection, &email)
                .await?
                .is_some()
        {
            errors.add("email", "email is already taken");
        }
        errors.into_result()?;

        let password = self
            .password_hasher()
            .hash(&RawPassword::new(dto.password))?;
        let user = User::new(
            UserId::new(Uuid::new_v4()),
            UserName::new(dto.username),
            FirstName::new(dto.first_name),
            LastName::new(dto.last_name),
            email,
            password,
            IsAdmin::new(dto.is_admin),
        );
        self.user_modifier().create(&mut connection, &user).await?;
        connection.commit().await?;

        tracing::info!(user_id = %user.id(), "User created");
        Ok(UserDto::from(user))
    }

    /// Creates the user unless one with the same email already exists.
    /// Returns `None` when nothing was created.
    async fn ensure_user(
        &self,
        dto: CreateUserDto,
    ) -> error_stack::Result<Option<UserDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let email = UserEmail::new(dto.email.clone());
        if self
            .user_query()
            .find_by_email(&mut connection, &email)
            .await?
            .is_some()
        {
            return Ok(None);
        }
        drop(connection);
        self.create_user(dto).await.map(Some)
    }
}

impl<T> CreateUserService for T where
    T: DependOnUserQuery + DependOnUserModifier + DependOnPasswordHasher
{
}

#[async_trait::async_trait]
pub trait DeleteUserService: 'static + Sync + Send + DependOnUserModifier {
    async fn delete_user(&self, dto: DeleteUserDto) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = UserId::new(dto.id);
        if !self.user_modifier().delete(&mut connection, &id).await? {
            return Err(not_found(&id));
        }
        connection.commit().await?;

        tracing::info!(user_id = %id, "User deleted");
        Ok(())
    }
}

impl<T> DeleteUserService for T where T: DependOnUserModifier {}
