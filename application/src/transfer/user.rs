use uuid::Uuid;

use kernel::prelude::entity::{DestructUser, User};

/// Public view of a user. The password hash never leaves the service layer.
#[derive(Debug, Clone)]
pub struct UserDto {
    pub id: Uuid,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_admin: bool,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        let DestructUser {
            id,
            username,
            first_name,
            last_name,
            email,
            password: _,
            is_admin,
        } = value.into_destruct();
        Self {
            id: id.into(),
            username: username.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            is_admin: is_admin.into(),
        }
    }
}

pub struct GetUserDto {
    pub id: Uuid,
}

#[derive(Clone)]
pub struct CreateUserDto {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub is_admin: bool,
}

pub struct DeleteUserDto {
    pub id: Uuid,
}
