use std::fmt::Debug;

use vodca::{AsRefln, Fromln};

/// Password as typed by the user. Never persisted.
#[derive(Clone, PartialEq, Eq, Fromln, AsRefln)]
pub struct RawPassword(String);

impl RawPassword {
    pub const MIN_LEN: usize = 7;

    pub fn new(password: impl Into<String>) -> Self {
        Self(password.into())
    }
}

impl Debug for RawPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("RawPassword(***)")
    }
}

/// PHC formatted password hash.
#[derive(Debug, Clone, PartialEq, Eq, Fromln, AsRefln)]
pub struct EncryptedPassword(String);

impl EncryptedPassword {
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }
}
