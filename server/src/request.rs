use error_stack::Report;
use uuid::Uuid;

use kernel::KernelError;

pub use self::{auth::*, movie::*, rent::*, user::*};

mod auth;
mod movie;
mod rent;
mod user;

/// Parses an id taken from the request path.
fn parse_id(raw: &str) -> error_stack::Result<Uuid, KernelError> {
    Uuid::parse_str(raw).map_err(|e| {
        Report::new(KernelError::InvalidIdentifier)
            .attach_printable(format!("Malformed id {raw:?}: {e}"))
    })
}

#[cfg(test)]
mod test {
    use kernel::KernelError;

    use super::parse_id;

    #[test]
    fn malformed_id_is_invalid_identifier() {
        let report = parse_id("65f1c0ffee").unwrap_err();
        assert!(matches!(
            report.current_context(),
            KernelError::InvalidIdentifier
        ));
        assert!(parse_id("67e55044-10b1-426f-9247-bb680e5fe0c8").is_ok());
    }
}
