use kernel::KernelError;

use crate::error::ConvertError;

pub mod clock;
pub mod crypto;
pub mod database;
pub mod error;
pub mod token;

pub(crate) fn env(key: &str) -> error_stack::Result<String, KernelError> {
    dotenvy::var(key)
        .convert_error()
        .map_err(|report| report.attach_printable(format!("Failed to read env {key}")))
}
