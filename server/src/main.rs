use error_stack::ResultExt;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use application::service::CreateUserService;
use kernel::KernelError;

use crate::config::ServerConfig;
use crate::error::StackTrace;
use crate::handler::AppModule;
use crate::route::{AuthRouter, MovieRouter, RentRouter, UserRouter};

mod auth;
mod config;
mod controller;
mod error;
mod handler;
mod request;
mod response;
mod route;

#[tokio::main]
async fn main() -> Result<(), StackTrace> {
    let appender = tracing_appender::rolling::daily(std::path::Path::new("./logs/"), "debug.log");
    let (non_blocking_appender, _guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_filter(tracing_subscriber::EnvFilter::new(
                    dotenvy::var("RUST_LOG").unwrap_or_else(|_| {
                        "driver=debug,application=debug,server=debug,tower_http=debug,sqlx=info"
                            .into()
                    }),
                ))
                .with_filter(tracing_subscriber::filter::LevelFilter::DEBUG),
        )
        .with(
            tracing_subscriber::fmt::Layer::default()
                .with_writer(non_blocking_appender)
                .with_ansi(false)
                .with_filter(tracing_subscriber::filter::LevelFilter::DEBUG),
        )
        .init();

    let mut config = ServerConfig::from_env()?;
    let app = AppModule::new().await?;

    if let Some(admin) = config.take_admin() {
        if let Some(created) = app.ensure_user(admin).await? {
            tracing::info!(user_id = %created.id, "Created initial administrator");
        }
    }

    let router = axum::Router::new()
        .route_auth()
        .route_movie()
        .route_rent()
        .route_user()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::new())
        .with_state(app);

    let tcp = TcpListener::bind(config.listen_addr())
        .await
        .change_context_lazy(|| KernelError::Internal)
        .attach_printable_lazy(|| "Failed to listen tcp")?;
    tracing::info!("Listening on {}", config.listen_addr());

    axum::serve(tcp, router.into_make_service())
        .await
        .change_context_lazy(|| KernelError::Internal)?;

    Ok(())
}
