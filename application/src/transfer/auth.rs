use crate::transfer::UserDto;

pub struct AuthenticateDto {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct AuthDto {
    pub user: UserDto,
    pub token: String,
}

pub struct AuthorizeDto {
    pub token: String,
}
