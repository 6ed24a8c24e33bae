use error_stack::Report;
use uuid::Uuid;

use application::transfer::{GetRentFromUserIdDto, RentMovieDto};
use kernel::KernelError;

use crate::controller::{Intake, TryIntake};
use crate::request::parse_id;

#[derive(Debug)]
pub struct RentMovieRequest {
    user_id: Uuid,
    movie_id: String,
}

impl RentMovieRequest {
    pub fn new(user_id: Uuid, movie_id: String) -> Self {
        Self { user_id, movie_id }
    }
}

/// Rents of the authenticated caller.
#[derive(Debug)]
pub struct OwnRentsRequest {
    user_id: Uuid,
}

impl OwnRentsRequest {
    pub fn new(user_id: Uuid) -> Self {
        Self { user_id }
    }
}

#[derive(Debug)]
pub struct UserRentsRequest {
    user_id: String,
}

impl UserRentsRequest {
    pub fn new(user_id: String) -> Self {
        Self { user_id }
    }
}

pub struct RentTransformer;

impl TryIntake<RentMovieRequest> for RentTransformer {
    type To = RentMovieDto;
    type Error = Report<KernelError>;
    fn emit(&self, input: RentMovieRequest) -> Result<Self::To, Self::Error> {
        Ok(RentMovieDto {
            user_id: input.user_id,
            movie_id: parse_id(&input.movie_id)?,
        })
    }
}

impl TryIntake<UserRentsRequest> for RentTransformer {
    type To = GetRentFromUserIdDto;
    type Error = Report<KernelError>;
    fn emit(&self, input: UserRentsRequest) -> Result<Self::To, Self::Error> {
        Ok(GetRentFromUserIdDto {
            user_id: parse_id(&input.user_id)?,
        })
    }
}

impl Intake<OwnRentsRequest> for RentTransformer {
    type To = GetRentFromUserIdDto;
    fn emit(&self, input: OwnRentsRequest) -> Self::To {
        GetRentFromUserIdDto {
            user_id: input.user_id,
        }
    }
}

#[cfg(test)]
mod test {
    use uuid::Uuid;

    use kernel::KernelError;

    use crate::controller::TryIntake;
    use crate::request::{RentMovieRequest, RentTransformer};

    #[test]
    fn rent_request_carries_caller_and_movie() {
        let user_id = Uuid::new_v4();
        let movie_id = Uuid::new_v4();
        let dto = TryIntake::emit(
            &RentTransformer,
            RentMovieRequest::new(user_id, movie_id.to_string()),
        )
        .unwrap();
        assert_eq!(dto.user_id, user_id);
        assert_eq!(dto.movie_id, movie_id);
    }

    #[test]
    fn malformed_movie_id_is_rejected() {
        let report = TryIntake::emit(
            &RentTransformer,
            RentMovieRequest::new(Uuid::new_v4(), "123".to_string()),
        )
        .unwrap_err();
        assert!(matches!(
            report.current_context(),
            KernelError::InvalidIdentifier
        ));
    }
}
