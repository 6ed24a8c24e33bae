use sqlx::PgConnection;
use time::OffsetDateTime;
use uuid::Uuid;

use kernel::interface::query::RentQuery;
use kernel::interface::update::RentModifier;
use kernel::prelude::entity::{MovieId, Rent, RentCandidate, RentId, RentWindow, UserId};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresRentRepository;

#[async_trait::async_trait]
impl RentQuery for PostgresRentRepository {
    type Transaction = PostgresTransaction;

    async fn find_by_user_id(
        &self,
        con: &mut PostgresTransaction,
        user_id: &UserId,
    ) -> error_stack::Result<Vec<Rent>, KernelError> {
        PgRentInternal::find_by_user_id(con, user_id).await
    }

    async fn find_all(
        &self,
        con: &mut PostgresTransaction,
    ) -> error_stack::Result<Vec<Rent>, KernelError> {
        PgRentInternal::find_all(con).await
    }

    async fn exists_overlapping(
        &self,
        con: &mut PostgresTransaction,
        user_id: &UserId,
        movie_id: &MovieId,
        window: &RentWindow,
    ) -> error_stack::Result<bool, KernelError> {
        PgRentInternal::exists_overlapping(con, user_id, movie_id, window).await
    }
}

#[async_trait::async_trait]
impl RentModifier for PostgresRentRepository {
    type Transaction = PostgresTransaction;

    async fn create(
        &self,
        con: &mut PostgresTransaction,
        candidate: &RentCandidate,
    ) -> error_stack::Result<Rent, KernelError> {
        PgRentInternal::create(con, candidate).await
    }
}

#[derive(sqlx::FromRow)]
struct RentRow {
    id: Uuid,
    user_id: Uuid,
    movie_id: Uuid,
    rented_from: OffsetDateTime,
    rented_to: OffsetDateTime,
}

impl From<RentRow> for Rent {
    fn from(value: RentRow) -> Self {
        Rent::new(
            RentId::new(value.id),
            UserId::new(value.user_id),
            MovieId::new(value.movie_id),
            RentWindow::new(value.rented_from, value.rented_to),
        )
    }
}

pub(in crate::database) struct PgRentInternal;

impl PgRentInternal {
    async fn find_by_user_id(
        con: &mut PgConnection,
        user_id: &UserId,
    ) -> error_stack::Result<Vec<Rent>, KernelError> {
        let rows = sqlx::query_as::<_, RentRow>(
            // language=postgresql
            r#"
            SELECT id, user_id, movie_id, rented_from, rented_to
            FROM rents
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_ref())
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Rent::from).collect())
    }

    async fn find_all(con: &mut PgConnection) -> error_stack::Result<Vec<Rent>, KernelError> {
        let rows = sqlx::query_as::<_, RentRow>(
            // language=postgresql
            r#"
            SELECT id, user_id, movie_id, rented_from, rented_to
            FROM rents
            "#,
        )
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Rent::from).collect())
    }

    async fn exists_overlapping(
        con: &mut PgConnection,
        user_id: &UserId,
        movie_id: &MovieId,
        window: &RentWindow,
    ) -> error_stack::Result<bool, KernelError> {
        // Mirrors RentWindow::is_blocked_by, clause by clause.
        let exists = sqlx::query_scalar::<_, bool>(
            // language=postgresql
            r#"
            SELECT EXISTS(
                SELECT 1
                FROM rents
                WHERE user_id = $1
                  AND movie_id = $2
                  AND (
                      (rented_to > $3 AND rented_to < $4)
                      OR (rented_to > $5 AND rented_to < $4)
                  )
            )
            "#,
        )
        .bind(user_id.as_ref())
        .bind(movie_id.as_ref())
        .bind(window.start())
        .bind(window.end())
        .bind(window.lookback_start())
        .fetch_one(con)
        .await
        .convert_error()?;
        Ok(exists)
    }

    async fn create(
        con: &mut PgConnection,
        candidate: &RentCandidate,
    ) -> error_stack::Result<Rent, KernelError> {
        let row = sqlx::query_as::<_, RentRow>(
            // language=postgresql
            r#"
            INSERT INTO rents (user_id, movie_id, rented_from, rented_to)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, movie_id, rented_from, rented_to
            "#,
        )
        .bind(candidate.user_id().as_ref())
        .bind(candidate.movie_id().as_ref())
        .bind(candidate.window().start())
        .bind(candidate.window().end())
        .fetch_one(con)
        .await
        .convert_error()?;
        Ok(Rent::from(row))
    }
}

#[cfg(test)]
mod test {
    use time::{Duration, OffsetDateTime};
    use uuid::Uuid;

    use kernel::interface::database::{DatabaseConnection, Transaction};
    use kernel::interface::query::RentQuery;
    use kernel::interface::update::RentModifier;
    use kernel::prelude::entity::{MovieId, RentCandidate, RentWindow, UserId};
    use kernel::KernelError;

    use crate::database::postgres::{PostgresDatabase, PostgresRentRepository};

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn create_and_detect_overlap() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        let mut con = db.transact().await?;
        let user_id = UserId::new(Uuid::new_v4());
        let movie_id = MovieId::new(Uuid::new_v4());
        let now = OffsetDateTime::now_utc();

        let candidate = RentCandidate::new(user_id.clone(), movie_id.clone(), now);
        let rent = PostgresRentRepository.create(&mut con, &candidate).await?;
        assert_eq!(rent.user_id(), &user_id);
        assert_eq!(rent.window().duration(), Duration::hours(24));

        let overlapping = RentWindow::starting_at(now + Duration::hours(30));
        let blocked = PostgresRentRepository
            .exists_overlapping(&mut con, &user_id, &movie_id, &overlapping)
            .await?;
        assert!(blocked);

        let other_movie = MovieId::new(Uuid::new_v4());
        let blocked = PostgresRentRepository
            .exists_overlapping(&mut con, &user_id, &other_movie, &overlapping)
            .await?;
        assert!(!blocked);

        let rents = PostgresRentRepository
            .find_by_user_id(&mut con, &user_id)
            .await?;
        assert_eq!(rents, vec![rent]);

        con.roll_back().await?;
        Ok(())
    }
}
