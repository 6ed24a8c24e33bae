use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Running time in minutes.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct MovieLength(i32);

impl MovieLength {
    pub const MIN: i32 = 1;

    pub fn new(length: impl Into<i32>) -> Self {
        Self(length.into())
    }
}
