use sqlx::types::Uuid;
use sqlx::PgConnection;

use kernel::interface::query::UserQuery;
use kernel::interface::update::UserModifier;
use kernel::prelude::entity::{
    EncryptedPassword, FirstName, IsAdmin, LastName, User, UserEmail, UserId, UserName,
};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresUserRepository;

#[async_trait::async_trait]
impl UserQuery for PostgresUserRepository {
    type Transaction = PostgresTransaction;

    async fn find_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &UserId,
    ) -> error_stack::Result<Option<User>, KernelError> {
        PgUserInternal::find_by_id(con, id).await
    }

    async fn find_by_email(
        &self,
        con: &mut PostgresTransaction,
        email: &UserEmail,
    ) -> error_stack::Result<Option<User>, KernelError> {
        PgUserInternal::find_by_email(con, email).await
    }

    async fn find_all(
        &self,
        con: &mut PostgresTransaction,
    ) -> error_stack::Result<Vec<User>, KernelError> {
        PgUserInternal::find_all(con).await
    }
}

#[async_trait::async_trait]
impl UserModifier for PostgresUserRepository {
    type Transaction = PostgresTransaction;

    async fn create(
        &self,
        con: &mut PostgresTransaction,
        user: &User,
    ) -> error_stack::Result<(), KernelError> {
        PgUserInternal::create(con, user).await
    }

    async fn delete(
        &self,
        con: &mut PostgresTransaction,
        user_id: &UserId,
    ) -> error_stack::Result<bool, KernelError> {
        PgUserInternal::delete(con, user_id).await
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    username: String,
    first_name: String,
    last_name: String,
    email: String,
    encrypted_password: String,
    is_admin: bool,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::new(
            UserId::new(row.id),
            UserName::new(row.username),
            FirstName::new(row.first_name),
            LastName::new(row.last_name),
            UserEmail::new(row.email),
            EncryptedPassword::new(row.encrypted_password),
            IsAdmin::new(row.is_admin),
        )
    }
}

pub(in crate::database) struct PgUserInternal;

impl PgUserInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &UserId,
    ) -> error_stack::Result<Option<User>, KernelError> {
        let row = sqlx::query_as::<_, UserRow>(
            // language=postgresql
            r#"
            SELECT id, username, first_name, last_name, email, encrypted_password, is_admin
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(User::from))
    }

    async fn find_by_email(
        con: &mut PgConnection,
        email: &UserEmail,
    ) -> error_stack::Result<Option<User>, KernelError> {
        let row = sqlx::query_as::<_, UserRow>(
            // language=postgresql
            r#"
            SELECT id, username, first_name, last_name, email, encrypted_password, is_admin
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(User::from))
    }

    async fn find_all(con: &mut PgConnection) -> error_stack::Result<Vec<User>, KernelError> {
        let rows = sqlx::query_as::<_, UserRow>(
            // language=postgresql
            r#"
            SELECT id, username, first_name, last_name, email, encrypted_password, is_admin
            FROM users
            ORDER BY username
            "#,
        )
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn create(con: &mut PgConnection, user: &User) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO users (id, username, first_name, last_name, email, encrypted_password, is_admin)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(user.id().as_ref())
        .bind(user.username().as_ref())
        .bind(user.first_name().as_ref())
        .bind(user.last_name().as_ref())
        .bind(user.email().as_ref())
        .bind(user.password().as_ref())
        .bind(user.is_admin().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn delete(
        con: &mut PgConnection,
        user_id: &UserId,
    ) -> error_stack::Result<bool, KernelError> {
        // language=postgresql
        let result = sqlx::query(
            r#"
            DELETE FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id.as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(result.rows_affected() > 0)
    }
}
