mod email;
mod id;
mod name;
mod password;
mod role;
mod token;

pub use self::{email::*, id::*, name::*, password::*, role::*, token::*};
use destructure::Destructure;
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, Destructure, References)]
pub struct User {
    id: UserId,
    username: UserName,
    first_name: FirstName,
    last_name: LastName,
    email: UserEmail,
    password: EncryptedPassword,
    is_admin: IsAdmin,
}

impl User {
    pub fn new(
        id: UserId,
        username: UserName,
        first_name: FirstName,
        last_name: LastName,
        email: UserEmail,
        password: EncryptedPassword,
        is_admin: IsAdmin,
    ) -> Self {
        Self {
            id,
            username,
            first_name,
            last_name,
            email,
            password,
            is_admin,
        }
    }
}
