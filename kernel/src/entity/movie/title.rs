use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct MovieTitle(String);

impl MovieTitle {
    pub const MIN_LEN: usize = 2;
    pub const MAX_LEN: usize = 200;

    pub fn new(title: impl Into<String>) -> Self {
        Self(title.into())
    }
}
