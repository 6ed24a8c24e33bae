use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct MovieYear(i32);

impl MovieYear {
    pub const MIN: i32 = 1888;

    pub fn new(year: impl Into<i32>) -> Self {
        Self(year.into())
    }

    /// Latest accepted release year: next calendar year.
    pub fn max() -> i32 {
        OffsetDateTime::now_utc().year() + 1
    }
}
