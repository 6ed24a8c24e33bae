use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{Movie, MovieId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait MovieModifier: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn create(
        &self,
        con: &mut Self::Transaction,
        movie: &Movie,
    ) -> error_stack::Result<(), KernelError>;
    async fn update(
        &self,
        con: &mut Self::Transaction,
        movie: &Movie,
    ) -> error_stack::Result<(), KernelError>;
    /// Returns `false` when no movie had this id.
    async fn delete(
        &self,
        con: &mut Self::Transaction,
        movie_id: &MovieId,
    ) -> error_stack::Result<bool, KernelError>;
}

pub trait DependOnMovieModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type MovieModifier: MovieModifier<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn movie_modifier(&self) -> &Self::MovieModifier;
}
