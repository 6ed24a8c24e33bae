use std::ops::Deref;
use std::sync::Arc;

use application::lock::{DependOnRentLocks, RentLocks};
use driver::clock::SystemClock;
use driver::crypto::Argon2PasswordHasher;
use driver::database::{
    PostgresDatabase, PostgresMovieRepository, PostgresRentRepository, PostgresUserRepository,
};
use driver::token::JwtTokenCodec;
use kernel::interface::auth::{DependOnPasswordHasher, DependOnTokenCodec};
use kernel::interface::clock::DependOnClock;
use kernel::interface::database::DependOnDatabaseConnection;
use kernel::interface::query::{DependOnMovieQuery, DependOnRentQuery, DependOnUserQuery};
use kernel::interface::update::{DependOnMovieModifier, DependOnRentModifier, DependOnUserModifier};
use kernel::KernelError;

#[derive(Clone)]
pub struct AppModule(Arc<Handler>);

impl AppModule {
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        Ok(Self(Arc::new(Handler::init().await?)))
    }
}

impl Deref for AppModule {
    type Target = Handler;
    fn deref(&self) -> &Self::Target {
        Deref::deref(&self.0)
    }
}

pub struct Handler {
    pgpool: PostgresDatabase,
    rent_locks: RentLocks,
    password_hasher: Argon2PasswordHasher,
    token_codec: JwtTokenCodec,
    clock: SystemClock,
}

impl Handler {
    pub async fn init() -> error_stack::Result<Self, KernelError> {
        let pgpool = PostgresDatabase::new().await?;
        let token_codec = JwtTokenCodec::from_env()?;

        Ok(Self {
            pgpool,
            rent_locks: RentLocks::new(),
            password_hasher: Argon2PasswordHasher::default(),
            token_codec,
            clock: SystemClock,
        })
    }
}

impl DependOnDatabaseConnection for Handler {
    type DatabaseConnection = PostgresDatabase;
    fn database_connection(&self) -> &Self::DatabaseConnection {
        &self.pgpool
    }
}

impl DependOnMovieQuery for Handler {
    type MovieQuery = PostgresMovieRepository;
    fn movie_query(&self) -> &Self::MovieQuery {
        &PostgresMovieRepository
    }
}

impl DependOnMovieModifier for Handler {
    type MovieModifier = PostgresMovieRepository;
    fn movie_modifier(&self) -> &Self::MovieModifier {
        &PostgresMovieRepository
    }
}

impl DependOnRentQuery for Handler {
    type RentQuery = PostgresRentRepository;
    fn rent_query(&self) -> &Self::RentQuery {
        &PostgresRentRepository
    }
}

impl DependOnRentModifier for Handler {
    type RentModifier = PostgresRentRepository;
    fn rent_modifier(&self) -> &Self::RentModifier {
        &PostgresRentRepository
    }
}

impl DependOnUserQuery for Handler {
    type UserQuery = PostgresUserRepository;
    fn user_query(&self) -> &Self::UserQuery {
        &PostgresUserRepository
    }
}

impl DependOnUserModifier for Handler {
    type UserModifier = PostgresUserRepository;
    fn user_modifier(&self) -> &Self::UserModifier {
        &PostgresUserRepository
    }
}

impl DependOnRentLocks for Handler {
    fn rent_locks(&self) -> &RentLocks {
        &self.rent_locks
    }
}

impl DependOnPasswordHasher for Handler {
    type PasswordHasher = Argon2PasswordHasher;
    fn password_hasher(&self) -> &Self::PasswordHasher {
        &self.password_hasher
    }
}

impl DependOnTokenCodec for Handler {
    type TokenCodec = JwtTokenCodec;
    fn token_codec(&self) -> &Self::TokenCodec {
        &self.token_codec
    }
}

impl DependOnClock for Handler {
    type Clock = SystemClock;
    fn clock(&self) -> &Self::Clock {
        &self.clock
    }
}
