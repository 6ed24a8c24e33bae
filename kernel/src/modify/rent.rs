use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{Rent, RentCandidate};
use crate::KernelError;

#[async_trait::async_trait]
pub trait RentModifier: 'static + Sync + Send {
    type Transaction: Transaction;
    /// Persists an admitted candidate. The store assigns the rent id.
    async fn create(
        &self,
        con: &mut Self::Transaction,
        candidate: &RentCandidate,
    ) -> error_stack::Result<Rent, KernelError>;
}

pub trait DependOnRentModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type RentModifier: RentModifier<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn rent_modifier(&self) -> &Self::RentModifier;
}
