use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct UserEmail(String);

impl UserEmail {
    pub const PATTERN: &'static str = r"^[a-z0-9._%+\-]+@[a-z0-9.\-]+\.[a-z]{2,4}$";

    pub fn new(email: impl Into<String>) -> Self {
        Self(email.into())
    }
}
