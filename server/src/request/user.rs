use error_stack::Report;
use serde::Deserialize;

use application::transfer::{CreateUserDto, DeleteUserDto, GetUserDto};
use kernel::KernelError;

use crate::controller::{Intake, TryIntake};
use crate::request::parse_id;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    username: String,
    first_name: String,
    last_name: String,
    email: String,
    password: String,
    #[serde(default)]
    is_admin: bool,
}

#[derive(Debug)]
pub struct GetUserRequest {
    id: String,
}

impl GetUserRequest {
    pub fn new(id: String) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct DeleteUserRequest {
    id: String,
}

impl DeleteUserRequest {
    pub fn new(id: String) -> Self {
        Self { id }
    }
}

pub struct UserTransformer;

impl Intake<CreateUserRequest> for UserTransformer {
    type To = CreateUserDto;
    fn emit(&self, input: CreateUserRequest) -> Self::To {
        CreateUserDto {
            username: input.username,
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            password: input.password,
            is_admin: input.is_admin,
        }
    }
}

impl TryIntake<GetUserRequest> for UserTransformer {
    type To = GetUserDto;
    type Error = Report<KernelError>;
    fn emit(&self, input: GetUserRequest) -> Result<Self::To, Self::Error> {
        Ok(GetUserDto {
            id: parse_id(&input.id)?,
        })
    }
}

impl TryIntake<DeleteUserRequest> for UserTransformer {
    type To = DeleteUserDto;
    type Error = Report<KernelError>;
    fn emit(&self, input: DeleteUserRequest) -> Result<Self::To, Self::Error> {
        Ok(DeleteUserDto {
            id: parse_id(&input.id)?,
        })
    }
}

#[cfg(test)]
mod test {
    use crate::controller::Intake;
    use crate::request::{CreateUserRequest, UserTransformer};

    #[test]
    fn create_request_reads_camel_case() {
        let req: CreateUserRequest = serde_json::from_str(
            r#"{
                "username": "jdoe",
                "firstName": "John",
                "lastName": "Doe",
                "email": "john@example.com",
                "password": "password123"
            }"#,
        )
        .unwrap();
        let dto = Intake::emit(&UserTransformer, req);
        assert_eq!(dto.first_name, "John");
        assert_eq!(dto.last_name, "Doe");
        assert!(!dto.is_admin);
    }
}
