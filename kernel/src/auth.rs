use crate::entity::{AccessToken, EncryptedPassword, RawPassword, UserId};
use crate::KernelError;

pub trait PasswordHasher: 'static + Sync + Send {
    fn hash(&self, password: &RawPassword) -> error_stack::Result<EncryptedPassword, KernelError>;
    fn verify(
        &self,
        password: &RawPassword,
        hashed: &EncryptedPassword,
    ) -> error_stack::Result<bool, KernelError>;
}

pub trait DependOnPasswordHasher: 'static + Sync + Send {
    type PasswordHasher: PasswordHasher;
    fn password_hasher(&self) -> &Self::PasswordHasher;
}

/// Issues and checks bearer tokens identifying a user.
pub trait TokenCodec: 'static + Sync + Send {
    fn issue(&self, user_id: &UserId) -> error_stack::Result<AccessToken, KernelError>;
    /// Fails with [`KernelError::Unauthorized`] for malformed, forged or expired tokens.
    fn verify(&self, token: &AccessToken) -> error_stack::Result<UserId, KernelError>;
}

pub trait DependOnTokenCodec: 'static + Sync + Send {
    type TokenCodec: TokenCodec;
    fn token_codec(&self) -> &Self::TokenCodec;
}
