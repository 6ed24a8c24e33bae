use kernel::interface::query::UserQuery;
use kernel::interface::update::UserModifier;
use kernel::prelude::entity::{User, UserEmail, UserId};
use kernel::KernelError;

use crate::database::memory::InMemoryTransaction;

pub struct InMemoryUserRepository;

#[async_trait::async_trait]
impl UserQuery for InMemoryUserRepository {
    type Transaction = InMemoryTransaction;

    async fn find_by_id(
        &self,
        con: &mut InMemoryTransaction,
        id: &UserId,
    ) -> error_stack::Result<Option<User>, KernelError> {
        Ok(con.store().read().await.users.get(id).cloned())
    }

    async fn find_by_email(
        &self,
        con: &mut InMemoryTransaction,
        email: &UserEmail,
    ) -> error_stack::Result<Option<User>, KernelError> {
        let store = con.store().read().await;
        Ok(store
            .users
            .values()
            .find(|user| user.email() == email)
            .cloned())
    }

    async fn find_all(
        &self,
        con: &mut InMemoryTransaction,
    ) -> error_stack::Result<Vec<User>, KernelError> {
        let store = con.store().read().await;
        let mut users = store.users.values().cloned().collect::<Vec<_>>();
        users.sort_by(|a, b| a.username().as_ref().cmp(b.username().as_ref()));
        Ok(users)
    }
}

#[async_trait::async_trait]
impl UserModifier for InMemoryUserRepository {
    type Transaction = InMemoryTransaction;

    async fn create(
        &self,
        con: &mut InMemoryTransaction,
        user: &User,
    ) -> error_stack::Result<(), KernelError> {
        let mut store = con.store().write().await;
        store.users.insert(user.id().clone(), user.clone());
        Ok(())
    }

    async fn delete(
        &self,
        con: &mut InMemoryTransaction,
        user_id: &UserId,
    ) -> error_stack::Result<bool, KernelError> {
        let mut store = con.store().write().await;
        Ok(store.users.remove(user_id).is_some())
    }
}
