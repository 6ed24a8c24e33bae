use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Hash, Default, Serialize, Deserialize, Fromln, AsRefln)]
pub struct MovieRating(i32);

impl MovieRating {
    pub const MIN: i32 = 0;
    pub const MAX: i32 = 10;

    pub fn new(rating: impl Into<i32>) -> Self {
        Self(rating.into())
    }

    pub fn is_in_range(value: i32) -> bool {
        (Self::MIN..=Self::MAX).contains(&value)
    }
}
