use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{
    Error as HashError, PasswordHash, PasswordHasher as _, PasswordVerifier as _, SaltString,
};
use argon2::Argon2;
use error_stack::Report;

use kernel::interface::auth::PasswordHasher;
use kernel::prelude::entity::{EncryptedPassword, RawPassword};
use kernel::KernelError;

#[derive(Default)]
pub struct Argon2PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, password: &RawPassword) -> error_stack::Result<EncryptedPassword, KernelError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2
            .hash_password(password.as_ref().as_bytes(), &salt)
            .map_err(|e| {
                Report::new(KernelError::Internal)
                    .attach_printable(format!("Failed to hash password: {e}"))
            })?;
        Ok(EncryptedPassword::new(hash.to_string()))
    }

    fn verify(
        &self,
        password: &RawPassword,
        hashed: &EncryptedPassword,
    ) -> error_stack::Result<bool, KernelError> {
        let parsed = PasswordHash::new(hashed.as_ref()).map_err(|e| {
            Report::new(KernelError::Internal)
                .attach_printable(format!("Stored password hash is malformed: {e}"))
        })?;
        match self
            .argon2
            .verify_password(password.as_ref().as_bytes(), &parsed)
        {
            Ok(()) => Ok(true),
            Err(HashError::Password) => Ok(false),
            Err(e) => Err(Report::new(KernelError::Internal)
                .attach_printable(format!("Failed to verify password: {e}"))),
        }
    }
}
