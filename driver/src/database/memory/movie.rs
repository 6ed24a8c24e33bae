use kernel::interface::query::MovieQuery;
use kernel::interface::update::MovieModifier;
use kernel::prelude::entity::{Movie, MovieFilter, MovieId};
use kernel::KernelError;

use crate::database::memory::InMemoryTransaction;

pub struct InMemoryMovieRepository;

#[async_trait::async_trait]
impl MovieQuery for InMemoryMovieRepository {
    type Transaction = InMemoryTransaction;

    async fn find_by_id(
        &self,
        con: &mut InMemoryTransaction,
        id: &MovieId,
    ) -> error_stack::Result<Option<Movie>, KernelError> {
        Ok(con.store().read().await.movies.get(id).cloned())
    }

    async fn find_all(
        &self,
        con: &mut InMemoryTransaction,
        filter: &MovieFilter,
    ) -> error_stack::Result<Vec<Movie>, KernelError> {
        let store = con.store().read().await;
        let mut movies = store
            .movies
            .values()
            .filter(|movie| filter.rating().as_ref().map_or(true, |r| movie.rating() == r))
            .filter(|movie| {
                filter
                    .genre()
                    .as_ref()
                    .map_or(true, |g| movie.genres().contains(g))
            })
            .cloned()
            .collect::<Vec<_>>();
        movies.sort_by(|a, b| {
            a.title()
                .as_ref()
                .cmp(b.title().as_ref())
                .then_with(|| a.id().as_ref().cmp(b.id().as_ref()))
        });
        let offset = usize::try_from(filter.page().offset(filter.limit())).unwrap_or(0);
        let limit = usize::try_from(filter.limit().rows()).unwrap_or(0);
        Ok(movies.into_iter().skip(offset).take(limit).collect())
    }
}

#[async_trait::async_trait]
impl MovieModifier for InMemoryMovieRepository {
    type Transaction = InMemoryTransaction;

    async fn create(
        &self,
        con: &mut InMemoryTransaction,
        movie: &Movie,
    ) -> error_stack::Result<(), KernelError> {
        let mut store = con.store().write().await;
        store.movies.insert(movie.id().clone(), movie.clone());
        Ok(())
    }

    async fn update(
        &self,
        con: &mut InMemoryTransaction,
        movie: &Movie,
    ) -> error_stack::Result<(), KernelError> {
        let mut store = con.store().write().await;
        if let Some(stored) = store.movies.get_mut(movie.id()) {
            *stored = movie.clone();
        }
        Ok(())
    }

    async fn delete(
        &self,
        con: &mut InMemoryTransaction,
        movie_id: &MovieId,
    ) -> error_stack::Result<bool, KernelError> {
        let mut store = con.store().write().await;
        Ok(store.movies.remove(movie_id).is_some())
    }
}
