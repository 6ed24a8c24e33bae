use error_stack::{Report, ResultExt};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

use kernel::interface::auth::TokenCodec;
use kernel::prelude::entity::{AccessToken, UserId};
use kernel::KernelError;

use crate::env;

const DEFAULT_TTL_HOURS: i64 = 4;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    id: Uuid,
    exp: i64,
    iat: i64,
}

/// HS256 signed tokens carrying the user id.
pub struct JwtTokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl JwtTokenCodec {
    pub fn new(secret: impl AsRef<[u8]>, ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_ref()),
            decoding: DecodingKey::from_secret(secret.as_ref()),
            ttl,
        }
    }

    /// Reads `JWT_SECRET` and the optional `TOKEN_TTL_HOURS`.
    pub fn from_env() -> error_stack::Result<Self, KernelError> {
        let secret = env("JWT_SECRET")?;
        let hours = match dotenvy::var("TOKEN_TTL_HOURS") {
            Ok(value) => value
                .parse::<i64>()
                .change_context_lazy(|| KernelError::Internal)
                .attach_printable_lazy(|| format!("TOKEN_TTL_HOURS is not a number: {value}"))?,
            Err(_) => DEFAULT_TTL_HOURS,
        };
        Ok(Self::new(secret, Duration::hours(hours)))
    }
}

impl TokenCodec for JwtTokenCodec {
    fn issue(&self, user_id: &UserId) -> error_stack::Result<AccessToken, KernelError> {
        let now = OffsetDateTime::now_utc();
        let claims = Claims {
            id: *user_id.as_ref(),
            exp: (now + self.ttl).unix_timestamp(),
            iat: now.unix_timestamp(),
        };
        let token = jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .change_context_lazy(|| KernelError::Internal)
            .attach_printable("Failed to sign access token")?;
        Ok(AccessToken::new(token))
    }

    fn verify(&self, token: &AccessToken) -> error_stack::Result<UserId, KernelError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        let data = jsonwebtoken::decode::<Claims>(token.as_ref(), &self.decoding, &validation)
            .map_err(|e| {
                Report::new(KernelError::Unauthorized)
                    .attach_printable(format!("Rejected access token: {e}"))
            })?;
        Ok(UserId::new(data.claims.id))
    }
}
