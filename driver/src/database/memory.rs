use std::collections::HashMap;
use std::sync::Arc;

use error_stack::Report;
use tokio::sync::RwLock;

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::prelude::entity::{Movie, MovieId, Rent, User, UserId};
use kernel::KernelError;

pub use self::{movie::*, rent::*, user::*};

mod movie;
mod rent;
mod user;

/// Process local store. Writes are applied immediately, so a transaction can only be committed.
#[derive(Clone, Default)]
pub struct InMemoryDatabase {
    store: Arc<RwLock<MemoryStore>>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Default)]
pub(in crate::database) struct MemoryStore {
    movies: HashMap<MovieId, Movie>,
    users: HashMap<UserId, User>,
    rents: Vec<Rent>,
}

#[async_trait::async_trait]
impl DatabaseConnection for InMemoryDatabase {
    type Transaction = InMemoryTransaction;
    async fn transact(&self) -> error_stack::Result<Self::Transaction, KernelError> {
        Ok(InMemoryTransaction(Arc::clone(&self.store)))
    }
}

pub struct InMemoryTransaction(Arc<RwLock<MemoryStore>>);

impl InMemoryTransaction {
    pub(in crate::database) fn store(&self) -> &RwLock<MemoryStore> {
        &self.0
    }
}

#[async_trait::async_trait]
impl Transaction for InMemoryTransaction {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        Ok(())
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        Err(Report::new(KernelError::Internal)
            .attach_printable("roll_back is not supported by the in-memory store"))
    }
}
