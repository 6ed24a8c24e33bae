use error_stack::Report;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{DependOnMovieQuery, MovieQuery};
use kernel::interface::update::{DependOnMovieModifier, MovieModifier};
use kernel::prelude::entity::{
    DestructMovie, Movie, MovieFilter, MovieGenre, MovieGenres, MovieId, MovieLength, MovieRating,
    MovieTitle, MovieYear, SelectLimit, SelectPage,
};
use kernel::{KernelError, ValidationErrors};

use crate::transfer::{
    CreateMovieDto, DeleteMovieDto, GetMovieDto, GetMoviesDto, MovieDto, MoviePageDto,
    RateMovieDto, UpdateMovieDto,
};

fn validate_title(errors: &mut ValidationErrors, title: &str) {
    let len = title.chars().count();
    if !(MovieTitle::MIN_LEN..=MovieTitle::MAX_LEN).contains(&len) {
        errors.add(
            "title",
            format!(
                "title length should be between {} and {} characters",
                MovieTitle::MIN_LEN,
                MovieTitle::MAX_LEN
            ),
        );
    }
}

fn validate_genres(errors: &mut ValidationErrors, genres: &[String]) {
    if genres.len() < MovieGenres::MIN_COUNT {
        errors.add("genre", "at least one genre is required");
    } else if genres.iter().any(|genre| genre.trim().is_empty()) {
        errors.add("genre", "genres should not be blank");
    }
}

fn validate_length(errors: &mut ValidationErrors, length: i32) {
    if length < MovieLength::MIN {
        errors.add(
            "length",
            format!("length should be at least {} minute", MovieLength::MIN),
        );
    }
}

fn validate_year(errors: &mut ValidationErrors, year: i32) {
    let max = MovieYear::max();
    if !(MovieYear::MIN..=max).contains(&year) {
        errors.add(
            "year",
            format!("year should be between {} and {max}", MovieYear::MIN),
        );
    }
}

fn validate_rating(errors: &mut ValidationErrors, rating: i32) {
    if !MovieRating::is_in_range(rating) {
        errors.add(
            "rating",
            format!(
                "rating should be between {} and {}",
                MovieRating::MIN,
                MovieRating::MAX
            ),
        );
    }
}

fn not_found(id: &MovieId) -> Report<KernelError> {
    Report::new(KernelError::NotFound).attach_printable(format!("No movie with id {id}"))
}

#[async_trait::async_trait]
pub trait GetMovieService: 'static + Sync + Send + DependOnMovieQuery {
    async fn get_movie(&self, dto: GetMovieDto) -> error_stack::Result<MovieDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = MovieId::new(dto.id);
        let movie = self
            .movie_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| not_found(&id))?;

        Ok(MovieDto::from(movie))
    }

    async fn get_movies(
        &self,
        dto: GetMoviesDto,
    ) -> error_stack::Result<MoviePageDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let page = dto.page.map(SelectPage::new).unwrap_or_default();
        let limit = dto.limit.map(SelectLimit::new).unwrap_or_default();
        let filter = MovieFilter::new(
            dto.rating.map(MovieRating::new),
            dto.genre.map(MovieGenre::new),
            page.clone(),
            limit,
        );
        let movies = self.movie_query().find_all(&mut connection, &filter).await?;

        Ok(MoviePageDto {
            movies: movies.into_iter().map(MovieDto::from).collect(),
            page: page.into(),
        })
    }
}

impl<T> GetMovieService for T where T: DependOnMovieQuery {}

#[async_trait::async_trait]
pub trait CreateMovieService: 'static + Sync + Send + DependOnMovieModifier {
    async fn create_movie(
        &self,
        dto: CreateMovieDto,
    ) -> error_stack::Result<MovieDto, KernelError> {
        let mut errors = ValidationErrors::new();
        validate_title(&mut errors, &dto.title);
        validate_genres(&mut errors, &dto.genres);
        validate_length(&mut errors, dto.length);
        validate_year(&mut errors, dto.year);
        if let Some(rating) = dto.rating {
            validate_rating(&mut errors, rating);
        }
        errors.into_result()?;

        let mut connection = self.database_connection().transact().await?;

        let movie = Movie::new(
            MovieId::new(Uuid::new_v4()),
            MovieTitle::new(dto.title),
            MovieGenres::new(dto.genres),
            MovieLength::new(dto.length),
            MovieYear::new(dto.year),
            dto.rating.map(MovieRating::new).unwrap_or_default(),
        );
        self.movie_modifier()
            .create(&mut connection, &movie)
            .await?;
        connection.commit().await?;

        tracing::info!(movie_id = %movie.id(), "Movie created");
        Ok(MovieDto::from(movie))
    }
}

impl<T> CreateMovieService for T where T: DependOnMovieModifier {}

#[async_trait::async_trait]
pub trait UpdateMovieService:
    'static + Sync + Send + DependOnMovieQuery + DependOnMovieModifier
{
    /// Applies the provided fields. A single invalid field rejects the whole update.
    async fn update_movie(
        &self,
        dto: UpdateMovieDto,
    ) -> error_stack::Result<MovieDto, KernelError> {
        let mut errors = ValidationErrors::new();
        if let Some(title) = &dto.title {
            validate_title(&mut errors, title);
        }
        if let Some(genres) = &dto.genres {
            validate_genres(&mut errors, genres);
        }
        if let Some(length) = dto.length {
            validate_length(&mut errors, length);
        }
        if let Some(year) = dto.year {
            validate_year(&mut errors, year);
        }
        if let Some(rating) = dto.rating {
            validate_rating(&mut errors, rating);
        }
        errors.into_result()?;

        let mut connection = self.database_connection().transact().await?;

        let id = MovieId::new(dto.id);
        let DestructMovie {
            id,
            title,
            genres,
            length,
            year,
            rating,
        } = self
            .movie_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| not_found(&id))?
            .into_destruct();

        let movie = Movie::new(
            id,
            dto.title.map(MovieTitle::new).unwrap_or(title),
            dto.genres.map(MovieGenres::new).unwrap_or(genres),
            dto.length.map(MovieLength::new).unwrap_or(length),
            dto.year.map(MovieYear::new).unwrap_or(year),
            dto.rating.map(MovieRating::new).unwrap_or(rating),
        );
        self.movie_modifier()
            .update(&mut connection, &movie)
            .await?;
        connection.commit().await?;

        Ok(MovieDto::from(movie))
    }

    async fn rate_movie(&self, dto: RateMovieDto) -> error_stack::Result<MovieDto, KernelError> {
        let mut errors = ValidationErrors::new();
        validate_rating(&mut errors, dto.rating);
        errors.into_result()?;

        self.update_movie(UpdateMovieDto {
            id: dto.id,
            rating: Some(dto.rating),
            ..Default::default()
        })
        .await
    }
}

impl<T> UpdateMovieService for T where T: DependOnMovieQuery + DependOnMovieModifier {}

#[async_trait::async_trait]
pub trait DeleteMovieService: 'static + Sync + Send + DependOnMovieModifier {
    async fn delete_movie(&self, dto: DeleteMovieDto) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = MovieId::new(dto.id);
        if !self.movie_modifier().delete(&mut connection, &id).await? {
            return Err(not_found(&id));
        }
        connection.commit().await?;

        tracing::info!(movie_id = %id, "Movie deleted");
        Ok(())
    }
}

impl<T> DeleteMovieService for T where T: DependOnMovieModifier {}

#[cfg(test)]
mod test {
    use uuid::Uuid;

    use kernel::KernelError;

    use crate::service::test::TestModule;
    use crate::service::{
        CreateMovieService, DeleteMovieService, GetMovieService, UpdateMovieService,
    };
    use crate::transfer::{
        CreateMovieDto, DeleteMovieDto, GetMovieDto, GetMoviesDto, RateMovieDto, UpdateMovieDto,
    };

    fn movie(title: &str, genres: &[&str], rating: i32) -> CreateMovieDto {
        CreateMovieDto {
            title: title.to_string(),
            genres: genres.iter().map(|g| g.to_string()).collect(),
            length: 120,
            year: 1999,
            rating: Some(rating),
        }
    }

    fn validation_fields(report: &error_stack::Report<KernelError>) -> Vec<&'static str> {
        match report.current_context() {
            KernelError::Validation(errors) => errors.fields().keys().copied().collect(),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn create_then_get() -> error_stack::Result<(), KernelError> {
        let module = TestModule::new();
        let created = module
            .create_movie(movie("The Matrix", &["action", "sci-fi"], 9))
            .await?;
        let found = module.get_movie(GetMovieDto { id: created.id }).await?;
        assert_eq!(found.title, "The Matrix");
        assert_eq!(found.genres, vec!["action", "sci-fi"]);
        assert_eq!(found.rating, 9);
        Ok(())
    }

    #[tokio::test]
    async fn rating_defaults_to_zero() -> error_stack::Result<(), KernelError> {
        let module = TestModule::new();
        let mut dto = movie("Alien", &["horror"], 0);
        dto.rating = None;
        let created = module.create_movie(dto).await?;
        assert_eq!(created.rating, 0);
        Ok(())
    }

    #[tokio::test]
    async fn invalid_movie_reports_every_field() {
        let module = TestModule::new();
        let report = module
            .create_movie(CreateMovieDto {
                title: "A".to_string(),
                genres: vec![],
                length: 0,
                year: 1800,
                rating: Some(11),
            })
            .await
            .unwrap_err();
        assert_eq!(
            validation_fields(&report),
            vec!["genre", "length", "rating", "title", "year"]
        );
    }

    #[tokio::test]
    async fn missing_movie_is_not_found() {
        let module = TestModule::new();
        let report = module
            .get_movie(GetMovieDto { id: Uuid::new_v4() })
            .await
            .unwrap_err();
        assert!(matches!(report.current_context(), KernelError::NotFound));
    }

    #[tokio::test]
    async fn list_filters_and_paginates() -> error_stack::Result<(), KernelError> {
        let module = TestModule::new();
        module.create_movie(movie("Heat", &["crime"], 8)).await?;
        module.create_movie(movie("Up", &["animation"], 8)).await?;
        module.create_movie(movie("Cars", &["animation"], 6)).await?;

        let animated = module
            .get_movies(GetMoviesDto {
                genre: Some("animation".to_string()),
                ..Default::default()
            })
            .await?;
        assert_eq!(animated.movies.len(), 2);
        assert_eq!(animated.page, 1);

        let rated = module
            .get_movies(GetMoviesDto {
                rating: Some(8),
                ..Default::default()
            })
            .await?;
        let titles = rated.movies.iter().map(|m| m.title.as_str()).collect::<Vec<_>>();
        assert_eq!(titles, vec!["Heat", "Up"]);

        let second = module
            .get_movies(GetMoviesDto {
                page: Some(2),
                limit: Some(2),
                ..Default::default()
            })
            .await?;
        assert_eq!(second.page, 2);
        assert_eq!(second.movies.len(), 1);
        assert_eq!(second.movies[0].title, "Up");
        Ok(())
    }

    #[tokio::test]
    async fn negative_limit_lists_nothing() -> error_stack::Result<(), KernelError> {
        let module = TestModule::new();
        module.create_movie(movie("Heat", &["crime"], 8)).await?;

        let page = module
            .get_movies(GetMoviesDto {
                limit: Some(-1),
                ..Default::default()
            })
            .await?;
        assert!(page.movies.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn update_applies_only_provided_fields() -> error_stack::Result<(), KernelError> {
        let module = TestModule::new();
        let created = module.create_movie(movie("Jaws", &["thriller"], 7)).await?;
        let updated = module
            .update_movie(UpdateMovieDto {
                id: created.id,
                title: Some("Jaws 2".to_string()),
                ..Default::default()
            })
            .await?;
        assert_eq!(updated.title, "Jaws 2");
        assert_eq!(updated.genres, created.genres);
        assert_eq!(updated.rating, 7);
        Ok(())
    }

    #[tokio::test]
    async fn invalid_field_rejects_whole_update() -> error_stack::Result<(), KernelError> {
        let module = TestModule::new();
        let created = module.create_movie(movie("Jaws", &["thriller"], 7)).await?;
        let report = module
            .update_movie(UpdateMovieDto {
                id: created.id,
                title: Some("Jaws 2".to_string()),
                year: Some(1000),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert_eq!(validation_fields(&report), vec!["year"]);

        let stored = module.get_movie(GetMovieDto { id: created.id }).await?;
        assert_eq!(stored.title, "Jaws");
        Ok(())
    }

    #[tokio::test]
    async fn rate_checks_range() -> error_stack::Result<(), KernelError> {
        let module = TestModule::new();
        let created = module.create_movie(movie("Rocky", &["drama"], 5)).await?;
        let rated = module
            .rate_movie(RateMovieDto {
                id: created.id,
                rating: 10,
            })
            .await?;
        assert_eq!(rated.rating, 10);

        let report = module
            .rate_movie(RateMovieDto {
                id: created.id,
                rating: -1,
            })
            .await
            .unwrap_err();
        assert_eq!(validation_fields(&report), vec!["rating"]);
        Ok(())
    }

    #[tokio::test]
    async fn delete_twice_is_not_found() -> error_stack::Result<(), KernelError> {
        let module = TestModule::new();
        let created = module.create_movie(movie("Rocky", &["drama"], 5)).await?;
        module.delete_movie(DeleteMovieDto { id: created.id }).await?;
        let report = module
            .delete_movie(DeleteMovieDto { id: created.id })
            .await
            .unwrap_err();
        assert!(matches!(report.current_context(), KernelError::NotFound));
        Ok(())
    }
}
