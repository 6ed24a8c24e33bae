use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Fromln, AsRefln, Serialize, Deserialize,
)]
pub struct IsAdmin(bool);

impl IsAdmin {
    pub fn new(value: impl Into<bool>) -> Self {
        Self(value.into())
    }
}
