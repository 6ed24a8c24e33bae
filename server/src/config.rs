use std::net::SocketAddr;

use error_stack::{Report, ResultExt};

use application::transfer::CreateUserDto;
use kernel::KernelError;

const LISTEN_ADDR: &str = "LISTEN_ADDR";
const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
const ADMIN_EMAIL: &str = "ADMIN_EMAIL";
const ADMIN_PASSWORD: &str = "ADMIN_PASSWORD";

pub struct ServerConfig {
    listen_addr: SocketAddr,
    admin: Option<CreateUserDto>,
}

impl ServerConfig {
    pub fn from_env() -> error_stack::Result<Self, KernelError> {
        let raw = dotenvy::var(LISTEN_ADDR).unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = raw
            .parse::<SocketAddr>()
            .change_context_lazy(|| KernelError::Internal)
            .attach_printable_lazy(|| format!("{LISTEN_ADDR} is not a socket address: {raw}"))?;

        let admin = match (dotenvy::var(ADMIN_EMAIL), dotenvy::var(ADMIN_PASSWORD)) {
            (Ok(email), Ok(password)) => Some(CreateUserDto {
                username: "admin".to_string(),
                first_name: "Admin".to_string(),
                last_name: "Admin".to_string(),
                email,
                password,
                is_admin: true,
            }),
            (Err(_), Err(_)) => None,
            _ => {
                return Err(Report::new(KernelError::Internal).attach_printable(format!(
                    "{ADMIN_EMAIL} and {ADMIN_PASSWORD} must be set together"
                )))
            }
        };

        Ok(Self { listen_addr, admin })
    }

    pub fn listen_addr(&self) -> SocketAddr {
        self.listen_addr
    }

    /// Administrator to create at startup when the database has none with this email.
    pub fn take_admin(&mut self) -> Option<CreateUserDto> {
        self.admin.take()
    }
}
