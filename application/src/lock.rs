use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

use kernel::prelude::entity::{MovieId, UserId};

type LockKey = (UserId, MovieId);

/// Serializes rent admission per (user, movie) pair.
///
/// Holding the guard across the overlap query, the insert and the commit makes the
/// check-then-insert sequence atomic within one process. Entries are dropped as soon
/// as nobody holds or waits on them.
#[derive(Clone, Default)]
pub struct RentLocks {
    locks: Arc<DashMap<LockKey, Arc<Mutex<()>>>>,
}

impl RentLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn acquire(&self, user_id: &UserId, movie_id: &MovieId) -> RentLockGuard {
        let key = (user_id.clone(), movie_id.clone());
        let lock = Arc::clone(&self.locks.entry(key.clone()).or_default());
        let guard = lock.lock_owned().await;
        RentLockGuard {
            key,
            locks: Arc::clone(&self.locks),
            guard: Some(guard),
        }
    }

    /// Number of pairs currently locked or awaited.
    pub fn len(&self) -> usize {
        self.locks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}

pub struct RentLockGuard {
    key: LockKey,
    locks: Arc<DashMap<LockKey, Arc<Mutex<()>>>>,
    guard: Option<OwnedMutexGuard<()>>,
}

impl Drop for RentLockGuard {
    fn drop(&mut self) {
        drop(self.guard.take());
        self.locks
            .remove_if(&self.key, |_, lock| Arc::strong_count(lock) == 1);
    }
}

pub trait DependOnRentLocks: 'static + Sync + Send {
    fn rent_locks(&self) -> &RentLocks;
}

#[cfg(test)]
mod test {
    use std::time::Duration;

    use uuid::Uuid;

    use kernel::prelude::entity::{MovieId, UserId};

    use crate::lock::RentLocks;

    #[tokio::test]
    async fn released_pairs_are_forgotten() {
        let locks = RentLocks::new();
        let user_id = UserId::new(Uuid::new_v4());
        let movie_id = MovieId::new(Uuid::new_v4());
        {
            let _guard = locks.acquire(&user_id, &movie_id).await;
            assert_eq!(locks.len(), 1);
        }
        assert!(locks.is_empty());
    }

    #[tokio::test]
    async fn same_pair_waits_other_pair_does_not() {
        let locks = RentLocks::new();
        let user_id = UserId::new(Uuid::new_v4());
        let movie_id = MovieId::new(Uuid::new_v4());
        let guard = locks.acquire(&user_id, &movie_id).await;

        let other_movie = MovieId::new(Uuid::new_v4());
        let other = tokio::time::timeout(
            Duration::from_millis(100),
            locks.acquire(&user_id, &other_movie),
        )
        .await;
        assert!(other.is_ok());

        let same = tokio::time::timeout(
            Duration::from_millis(100),
            locks.acquire(&user_id, &movie_id),
        )
        .await;
        assert!(same.is_err());

        drop(guard);
        let same = tokio::time::timeout(
            Duration::from_millis(100),
            locks.acquire(&user_id, &movie_id),
        )
        .await;
        assert!(same.is_ok());
    }
}
