use error_stack::Report;

use kernel::interface::clock::{Clock, DependOnClock};
use kernel::interface::database::{
    DatabaseConnection, DependOnDatabaseConnection, Transaction, TransactionOf,
};
use kernel::interface::query::{DependOnMovieQuery, DependOnRentQuery, MovieQuery, RentQuery};
use kernel::interface::update::{DependOnRentModifier, RentModifier};
use kernel::prelude::entity::{MovieId, RentCandidate, UserId};
use kernel::KernelError;

use crate::lock::DependOnRentLocks;
use crate::transfer::{GetRentFromUserIdDto, RentDto, RentMovieDto};

#[async_trait::async_trait]
pub trait GetRentService: 'static + Sync + Send + DependOnRentQuery {
    async fn get_rents_from_user(
        &self,
        dto: GetRentFromUserIdDto,
    ) -> error_stack::Result<Vec<RentDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let user_id = UserId::new(dto.user_id);
        let rents = self
            .rent_query()
            .find_by_user_id(&mut connection, &user_id)
            .await?;

        Ok(rents.into_iter().map(RentDto::from).collect())
    }

    async fn get_all_rents(&self) -> error_stack::Result<Vec<RentDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let rents = self.rent_query().find_all(&mut connection).await?;
        Ok(rents.into_iter().map(RentDto::from).collect())
    }
}

impl<T> GetRentService for T where T: DependOnRentQuery {}

#[async_trait::async_trait]
pub trait AdmitRentService: 'static + Sync + Send + DependOnRentQuery {
    /// Rejects the candidate with [`KernelError::RentalConflict`] when an existing rent of the
    /// same user and movie blocks its window. Never mutates the store.
    async fn admit(
        &self,
        connection: &mut TransactionOf<Self>,
        candidate: &RentCandidate,
    ) -> error_stack::Result<(), KernelError> {
        let blocked = self
            .rent_query()
            .exists_overlapping(
                connection,
                candidate.user_id(),
                candidate.movie_id(),
                candidate.window(),
            )
            .await?;
        if blocked {
            tracing::debug!(
                user_id = %candidate.user_id(),
                movie_id = %candidate.movie_id(),
                "Rent rejected by an existing rent"
            );
            return Err(Report::new(KernelError::RentalConflict(
                candidate.movie_id().clone(),
            )));
        }
        Ok(())
    }
}

impl<T> AdmitRentService for T where T: DependOnRentQuery {}

#[async_trait::async_trait]
pub trait RentMovieService:
    'static
    + Sync
    + Send
    + AdmitRentService
    + DependOnRentModifier
    + DependOnMovieQuery
    + DependOnRentLocks
    + DependOnClock
{
    /// Rents a movie for 24 hours starting now.
    ///
    /// The window is stamped, admitted and inserted under the pair's lock and inside one
    /// transaction, so concurrent requests of the same pair yield a single rent.
    async fn rent_movie(&self, dto: RentMovieDto) -> error_stack::Result<RentDto, KernelError> {
        let user_id = UserId::new(dto.user_id);
        let movie_id = MovieId::new(dto.movie_id);

        let _guard = self.rent_locks().acquire(&user_id, &movie_id).await;
        let mut connection = self.database_connection().transact().await?;

        if self
            .movie_query()
            .find_by_id(&mut connection, &movie_id)
            .await?
            .is_none()
        {
            return Err(Report::new(KernelError::NotFound)
                .attach_printable(format!("No movie with id {movie_id}")));
        }

        let candidate = RentCandidate::new(user_id, movie_id, self.clock().now());
        self.admit(&mut connection, &candidate).await?;

        let rent = self
            .rent_modifier()
            .create(&mut connection, &candidate)
            .await?;
        connection.commit().await?;

        tracing::info!(
            rent_id = %rent.id().as_ref(),
            user_id = %rent.user_id(),
            movie_id = %rent.movie_id(),
            "Rent accepted"
        );
        Ok(RentDto::from(rent))
    }
}

impl<T> RentMovieService for T where
    T: AdmitRentService
        + DependOnRentModifier
        + DependOnMovieQuery
        + DependOnRentLocks
        + DependOnClock
{
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use time::{Duration, OffsetDateTime};
    use uuid::Uuid;

    use kernel::interface::clock::DependOnClock;
    use kernel::KernelError;

    use crate::service::test::TestModule;
    use crate::service::{CreateMovieService, GetRentService, RentMovieService};
    use crate::transfer::{CreateMovieDto, GetRentFromUserIdDto, RentDto, RentMovieDto};

    fn t0() -> OffsetDateTime {
        OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap()
    }

    async fn movie(module: &TestModule) -> Uuid {
        module
            .create_movie(CreateMovieDto {
                title: "Casablanca".to_string(),
                genres: vec!["drama".to_string()],
                length: 102,
                year: 1942,
                rating: None,
            })
            .await
            .unwrap()
            .id
    }

    async fn rent_at(
        module: &TestModule,
        user_id: Uuid,
        movie_id: Uuid,
        at: OffsetDateTime,
    ) -> error_stack::Result<RentDto, KernelError> {
        module.clock().set(at);
        module
            .rent_movie(RentMovieDto { user_id, movie_id })
            .await
    }

    fn assert_conflict(report: &error_stack::Report<KernelError>, movie_id: Uuid) {
        match report.current_context() {
            KernelError::RentalConflict(id) => assert_eq!(id.as_ref(), &movie_id),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn empty_store_accepts_one_day() -> error_stack::Result<(), KernelError> {
        let module = TestModule::new();
        let movie_id = movie(&module).await;
        let user_id = Uuid::new_v4();

        let rent = rent_at(&module, user_id, movie_id, t0()).await?;
        assert_eq!(rent.from, t0());
        assert_eq!(rent.to, t0() + Duration::hours(24));
        assert_eq!(rent.user_id, user_id);
        assert_eq!(rent.movie_id, movie_id);
        Ok(())
    }

    #[tokio::test]
    async fn overlapping_rent_is_rejected() -> error_stack::Result<(), KernelError> {
        let module = TestModule::new();
        let movie_id = movie(&module).await;
        let user_id = Uuid::new_v4();
        rent_at(&module, user_id, movie_id, t0()).await?;

        let report = rent_at(&module, user_id, movie_id, t0() + Duration::hours(1))
            .await
            .unwrap_err();
        assert_conflict(&report, movie_id);

        let rents = module
            .get_rents_from_user(GetRentFromUserIdDto { user_id })
            .await?;
        assert_eq!(rents.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn lookback_rejects_shortly_after_expiry() -> error_stack::Result<(), KernelError> {
        let module = TestModule::new();
        let movie_id = movie(&module).await;
        let user_id = Uuid::new_v4();
        rent_at(&module, user_id, movie_id, t0()).await?;

        let report = rent_at(&module, user_id, movie_id, t0() + Duration::hours(30))
            .await
            .unwrap_err();
        assert_conflict(&report, movie_id);
        Ok(())
    }

    #[tokio::test]
    async fn rent_ending_at_candidate_start_is_rejected() -> error_stack::Result<(), KernelError> {
        let module = TestModule::new();
        let movie_id = movie(&module).await;
        let user_id = Uuid::new_v4();
        rent_at(&module, user_id, movie_id, t0()).await?;

        let report = rent_at(&module, user_id, movie_id, t0() + Duration::hours(24))
            .await
            .unwrap_err();
        assert_conflict(&report, movie_id);
        Ok(())
    }

    #[tokio::test]
    async fn rent_is_accepted_after_lookback() -> error_stack::Result<(), KernelError> {
        let module = TestModule::new();
        let movie_id = movie(&module).await;
        let user_id = Uuid::new_v4();
        rent_at(&module, user_id, movie_id, t0()).await?;

        let rent = rent_at(&module, user_id, movie_id, t0() + Duration::hours(48)).await?;
        assert_eq!(rent.to - rent.from, Duration::hours(24));
        Ok(())
    }

    #[tokio::test]
    async fn other_movie_or_user_is_accepted() -> error_stack::Result<(), KernelError> {
        let module = TestModule::new();
        let movie_id = movie(&module).await;
        let other_movie = movie(&module).await;
        let user_id = Uuid::new_v4();
        rent_at(&module, user_id, movie_id, t0()).await?;

        rent_at(&module, user_id, other_movie, t0()).await?;
        rent_at(&module, Uuid::new_v4(), movie_id, t0()).await?;

        assert_eq!(module.get_all_rents().await?.len(), 3);
        Ok(())
    }

    #[tokio::test]
    async fn rejection_is_repeatable() -> error_stack::Result<(), KernelError> {
        let module = TestModule::new();
        let movie_id = movie(&module).await;
        let user_id = Uuid::new_v4();
        rent_at(&module, user_id, movie_id, t0()).await?;

        for _ in 0..3 {
            let report = rent_at(&module, user_id, movie_id, t0() + Duration::hours(2))
                .await
                .unwrap_err();
            assert_conflict(&report, movie_id);
        }
        assert_eq!(module.get_all_rents().await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn unknown_movie_is_not_found() {
        let module = TestModule::new();
        let report = rent_at(&module, Uuid::new_v4(), Uuid::new_v4(), t0())
            .await
            .unwrap_err();
        assert!(matches!(report.current_context(), KernelError::NotFound));
        assert!(module.get_all_rents().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn failing_overlap_query_is_not_a_conflict() -> error_stack::Result<(), KernelError> {
        let module = TestModule::new();
        let movie_id = movie(&module).await;
        module.rents().fail_overlap();

        let report = rent_at(&module, Uuid::new_v4(), movie_id, t0())
            .await
            .unwrap_err();
        assert!(matches!(report.current_context(), KernelError::Internal));
        assert!(module.get_all_rents().await?.is_empty());
        assert!(module.locks().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn failing_insert_persists_nothing() -> error_stack::Result<(), KernelError> {
        let module = TestModule::new();
        let movie_id = movie(&module).await;
        let user_id = Uuid::new_v4();
        module.rents().fail_insert();

        let report = rent_at(&module, user_id, movie_id, t0()).await.unwrap_err();
        assert!(matches!(report.current_context(), KernelError::Internal));
        assert!(module.get_all_rents().await?.is_empty());
        assert!(module
            .get_rents_from_user(GetRentFromUserIdDto { user_id })
            .await?
            .is_empty());
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_requests_admit_once() -> error_stack::Result<(), KernelError> {
        let module = Arc::new(TestModule::new());
        let movie_id = movie(&module).await;
        let user_id = Uuid::new_v4();
        module.clock().set(t0());
        module.clock().tick_by(Duration::milliseconds(1));

        let handles = (0..16)
            .map(|_| {
                let module = Arc::clone(&module);
                tokio::spawn(async move {
                    module
                        .rent_movie(RentMovieDto { user_id, movie_id })
                        .await
                })
            })
            .collect::<Vec<_>>();

        let mut accepted = 0;
        for handle in handles {
            match handle.await.expect("task panicked") {
                Ok(_) => accepted += 1,
                Err(report) => assert_conflict(&report, movie_id),
            }
        }
        assert_eq!(accepted, 1);
        assert_eq!(module.get_all_rents().await?.len(), 1);
        assert!(module.locks().is_empty());
        Ok(())
    }
}
