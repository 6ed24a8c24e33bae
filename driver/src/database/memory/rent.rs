use uuid::Uuid;

use kernel::interface::query::RentQuery;
use kernel::interface::update::RentModifier;
use kernel::prelude::entity::{MovieId, Rent, RentCandidate, RentId, RentWindow, UserId};
use kernel::KernelError;

use crate::database::memory::InMemoryTransaction;

pub struct InMemoryRentRepository;

#[async_trait::async_trait]
impl RentQuery for InMemoryRentRepository {
    type Transaction = InMemoryTransaction;

    async fn find_by_user_id(
        &self,
        con: &mut InMemoryTransaction,
        user_id: &UserId,
    ) -> error_stack::Result<Vec<Rent>, KernelError> {
        let store = con.store().read().await;
        Ok(store
            .rents
            .iter()
            .filter(|rent| rent.user_id() == user_id)
            .cloned()
            .collect())
    }

    async fn find_all(
        &self,
        con: &mut InMemoryTransaction,
    ) -> error_stack::Result<Vec<Rent>, KernelError> {
        Ok(con.store().read().await.rents.clone())
    }

    async fn exists_overlapping(
        &self,
        con: &mut InMemoryTransaction,
        user_id: &UserId,
        movie_id: &MovieId,
        window: &RentWindow,
    ) -> error_stack::Result<bool, KernelError> {
        let store = con.store().read().await;
        Ok(store.rents.iter().any(|rent| {
            rent.user_id() == user_id
                && rent.movie_id() == movie_id
                && window.is_blocked_by(rent.window().end())
        }))
    }
}

#[async_trait::async_trait]
impl RentModifier for InMemoryRentRepository {
    type Transaction = InMemoryTransaction;

    async fn create(
        &self,
        con: &mut InMemoryTransaction,
        candidate: &RentCandidate,
    ) -> error_stack::Result<Rent, KernelError> {
        let rent = Rent::new(
            RentId::new(Uuid::new_v4()),
            candidate.user_id().clone(),
            candidate.movie_id().clone(),
            *candidate.window(),
        );
        con.store().write().await.rents.push(rent.clone());
        Ok(rent)
    }
}
