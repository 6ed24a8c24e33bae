use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

use application::transfer::RentDto;

use crate::controller::Exhaust;

#[derive(Debug, Serialize)]
pub struct RentResponse {
    id: Uuid,
    #[serde(rename = "userID")]
    user_id: Uuid,
    #[serde(rename = "movieID")]
    movie_id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    from: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    to: OffsetDateTime,
}

impl From<RentDto> for RentResponse {
    fn from(value: RentDto) -> Self {
        Self {
            id: value.id,
            user_id: value.user_id,
            movie_id: value.movie_id,
            from: value.from,
            to: value.to,
        }
    }
}

impl IntoResponse for RentResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

pub struct RentPresenter;

impl Exhaust<RentDto> for RentPresenter {
    type To = RentResponse;
    fn emit(&self, input: RentDto) -> Self::To {
        RentResponse::from(input)
    }
}

impl Exhaust<Vec<RentDto>> for RentPresenter {
    type To = axum::Json<Vec<RentResponse>>;
    fn emit(&self, input: Vec<RentDto>) -> Self::To {
        let result = input
            .into_iter()
            .map(RentResponse::from)
            .collect::<Vec<_>>();
        axum::Json::from(result)
    }
}

#[cfg(test)]
mod test {
    use time::{Duration, OffsetDateTime};
    use uuid::Uuid;

    use application::transfer::RentDto;

    use crate::controller::Exhaust;
    use crate::response::RentPresenter;

    #[test]
    fn rent_serializes_window_as_rfc3339() {
        let from = OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap();
        let response = RentPresenter.emit(RentDto {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            movie_id: Uuid::new_v4(),
            from,
            to: from + Duration::hours(24),
        });
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["from"], "2023-11-14T22:13:20Z");
        assert_eq!(value["to"], "2023-11-15T22:13:20Z");
        assert!(value.get("userID").is_some());
        assert!(value.get("movieID").is_some());
    }
}
