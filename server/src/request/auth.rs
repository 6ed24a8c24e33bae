use serde::Deserialize;

use application::transfer::AuthenticateDto;

use crate::controller::Intake;

#[derive(Debug, Deserialize)]
pub struct AuthRequest {
    email: String,
    password: String,
}

pub struct AuthTransformer;

impl Intake<AuthRequest> for AuthTransformer {
    type To = AuthenticateDto;
    fn emit(&self, input: AuthRequest) -> Self::To {
        AuthenticateDto {
            email: input.email,
            password: input.password,
        }
    }
}
