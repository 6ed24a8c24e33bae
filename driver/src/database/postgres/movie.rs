use sqlx::PgConnection;
use uuid::Uuid;

use kernel::interface::query::MovieQuery;
use kernel::interface::update::MovieModifier;
use kernel::prelude::entity::{
    Movie, MovieFilter, MovieGenres, MovieId, MovieLength, MovieRating, MovieTitle, MovieYear,
};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresMovieRepository;

#[async_trait::async_trait]
impl MovieQuery for PostgresMovieRepository {
    type Transaction = PostgresTransaction;

    async fn find_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &MovieId,
    ) -> error_stack::Result<Option<Movie>, KernelError> {
        PgMovieInternal::find_by_id(con, id).await
    }

    async fn find_all(
        &self,
        con: &mut PostgresTransaction,
        filter: &MovieFilter,
    ) -> error_stack::Result<Vec<Movie>, KernelError> {
        PgMovieInternal::find_all(con, filter).await
    }
}

#[async_trait::async_trait]
impl MovieModifier for PostgresMovieRepository {
    type Transaction = PostgresTransaction;

    async fn create(
        &self,
        con: &mut PostgresTransaction,
        movie: &Movie,
    ) -> error_stack::Result<(), KernelError> {
        PgMovieInternal::create(con, movie).await
    }

    async fn update(
        &self,
        con: &mut PostgresTransaction,
        movie: &Movie,
    ) -> error_stack::Result<(), KernelError> {
        PgMovieInternal::update(con, movie).await
    }

    async fn delete(
        &self,
        con: &mut PostgresTransaction,
        movie_id: &MovieId,
    ) -> error_stack::Result<bool, KernelError> {
        PgMovieInternal::delete(con, movie_id).await
    }
}

#[derive(sqlx::FromRow)]
struct MovieRow {
    id: Uuid,
    title: String,
    genres: Vec<String>,
    length: i32,
    year: i32,
    rating: i32,
}

impl From<MovieRow> for Movie {
    fn from(value: MovieRow) -> Self {
        Movie::new(
            MovieId::new(value.id),
            MovieTitle::new(value.title),
            MovieGenres::new(value.genres),
            MovieLength::new(value.length),
            MovieYear::new(value.year),
            MovieRating::new(value.rating),
        )
    }
}

pub(in crate::database) struct PgMovieInternal;

impl PgMovieInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &MovieId,
    ) -> error_stack::Result<Option<Movie>, KernelError> {
        let row = sqlx::query_as::<_, MovieRow>(
            // language=postgresql
            r#"
            SELECT id, title, genres, length, year, rating
            FROM movies
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Movie::from))
    }

    async fn find_all(
        con: &mut PgConnection,
        filter: &MovieFilter,
    ) -> error_stack::Result<Vec<Movie>, KernelError> {
        let rating: Option<i32> = filter.rating().as_ref().map(|rating| *rating.as_ref());
        let genre: Option<String> = filter.genre().as_ref().map(|genre| genre.as_ref().clone());
        let limit = filter.limit().rows();
        let offset = filter.page().offset(filter.limit());
        let rows = sqlx::query_as::<_, MovieRow>(
            // language=postgresql
            r#"
            SELECT id, title, genres, length, year, rating
            FROM movies
            WHERE ($1::INTEGER IS NULL OR rating = $1)
              AND ($2::TEXT IS NULL OR $2 = ANY(genres))
            ORDER BY title, id
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(rating)
        .bind(genre)
        .bind(limit)
        .bind(offset)
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Movie::from).collect())
    }

    async fn create(con: &mut PgConnection, movie: &Movie) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO movies (id, title, genres, length, year, rating)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(movie.id().as_ref())
        .bind(movie.title().as_ref())
        .bind(movie.genres().as_ref())
        .bind(movie.length().as_ref())
        .bind(movie.year().as_ref())
        .bind(movie.rating().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn update(con: &mut PgConnection, movie: &Movie) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            UPDATE movies
            SET title = $2, genres = $3, length = $4, year = $5, rating = $6
            WHERE id = $1
            "#,
        )
        .bind(movie.id().as_ref())
        .bind(movie.title().as_ref())
        .bind(movie.genres().as_ref())
        .bind(movie.length().as_ref())
        .bind(movie.year().as_ref())
        .bind(movie.rating().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn delete(
        con: &mut PgConnection,
        movie_id: &MovieId,
    ) -> error_stack::Result<bool, KernelError> {
        let result = sqlx::query(
            // language=postgresql
            r#"
            DELETE FROM movies
            WHERE id = $1
            "#,
        )
        .bind(movie_id.as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod test {
    use uuid::Uuid;

    use kernel::interface::database::{DatabaseConnection, Transaction};
    use kernel::interface::query::MovieQuery;
    use kernel::interface::update::MovieModifier;
    use kernel::prelude::entity::{
        Movie, MovieFilter, MovieGenre, MovieGenres, MovieId, MovieLength, MovieRating,
        MovieTitle, MovieYear, SelectLimit, SelectPage,
    };
    use kernel::KernelError;

    use crate::database::postgres::{PostgresDatabase, PostgresMovieRepository};

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn test() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        let mut con = db.transact().await?;
        let id = MovieId::new(Uuid::new_v4());
        let genre = format!("genre-{}", Uuid::new_v4());
        let movie = Movie::new(
            id.clone(),
            MovieTitle::new("The Matrix"),
            MovieGenres::new(vec![genre.clone()]),
            MovieLength::new(120),
            MovieYear::new(1999),
            MovieRating::default(),
        );
        PostgresMovieRepository.create(&mut con, &movie).await?;

        let found = PostgresMovieRepository.find_by_id(&mut con, &id).await?;
        assert_eq!(found, Some(movie.clone()));

        let movie = movie.reconstruct(|m| m.rating = MovieRating::new(7));
        PostgresMovieRepository.update(&mut con, &movie).await?;

        let filter = MovieFilter::new(
            Some(MovieRating::new(7)),
            Some(MovieGenre::new(genre)),
            SelectPage::default(),
            SelectLimit::default(),
        );
        let found = PostgresMovieRepository.find_all(&mut con, &filter).await?;
        assert_eq!(found, vec![movie]);

        assert!(PostgresMovieRepository.delete(&mut con, &id).await?);
        assert!(!PostgresMovieRepository.delete(&mut con, &id).await?);

        con.roll_back().await?;
        Ok(())
    }
}
