use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{MovieId, Rent, RentWindow, UserId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait RentQuery: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn find_by_user_id(
        &self,
        con: &mut Self::Transaction,
        user_id: &UserId,
    ) -> error_stack::Result<Vec<Rent>, KernelError>;
    async fn find_all(
        &self,
        con: &mut Self::Transaction,
    ) -> error_stack::Result<Vec<Rent>, KernelError>;
    /// Whether any rent of `user_id` for `movie_id` blocks `window`,
    /// as decided by [`RentWindow::is_blocked_by`] on the rent's end.
    async fn exists_overlapping(
        &self,
        con: &mut Self::Transaction,
        user_id: &UserId,
        movie_id: &MovieId,
        window: &RentWindow,
    ) -> error_stack::Result<bool, KernelError>;
}

pub trait DependOnRentQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type RentQuery: RentQuery<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn rent_query(&self) -> &Self::RentQuery;
}
