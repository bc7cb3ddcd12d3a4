use std::{env, net::SocketAddr, sync::Arc, time::Duration};

use axum::error_handling::HandleErrorLayer;
use tokio::sync::RwLock;
use tower::{buffer::BufferLayer, limit::RateLimitLayer, ServiceBuilder};
use tracing_subscriber::EnvFilter;

use crate::{
    actions::{
        clipboard::{ClipboardWriter, CommandClipboard},
        file_saver::{DirectoryFileSaver, FileSaver},
    },
    app::{envy::Envy, errors::handle_middleware_error, models::session::Session},
};

mod actions;
mod app;
mod info;
mod prompts;

#[derive(Clone)]
pub struct AppState {
    pub session: Arc<RwLock<Session>>,
    pub clipboard: Arc<dyn ClipboardWriter>,
    pub file_saver: Arc<dyn FileSaver>,
}

impl AppState {
    pub fn new(clipboard: Arc<dyn ClipboardWriter>, file_saver: Arc<dyn FileSaver>) -> Self {
        Self {
            session: Arc::new(RwLock::new(Session::default())),
            clipboard,
            file_saver,
        }
    }
}

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("prompt_forge=debug,tower_http=info")),
        )
        .init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    // side effects
    let clipboard = match envy.clipboard_command.as_deref() {
        Some(command) => {
            CommandClipboard::new(command).unwrap_or_else(CommandClipboard::system_default)
        }
        None => CommandClipboard::system_default(),
    }
    .with_timeout(envy.clipboard_timeout());
    let file_saver = DirectoryFileSaver::new(envy.export_dir());

    tracing::info!(
        "app_env={} clipboard={} export_dir={}",
        envy.app_env,
        clipboard.program(),
        envy.export_dir()
    );

    let state = AppState::new(Arc::new(clipboard), Arc::new(file_saver));

    // properties
    let cors = match app::router::cors_layer(&envy.origin()) {
        Ok(cors) => cors,
        Err(e) => panic!("invalid HOST for CORS origin: {:#?}", e),
    };

    // app
    let app = app::router::router(state).layer(cors).layer(
        ServiceBuilder::new()
            .layer(HandleErrorLayer::new(handle_middleware_error))
            .layer(BufferLayer::new(1024))
            .layer(RateLimitLayer::new(100, Duration::from_secs(1))),
    );

    let addr: SocketAddr = match format!("{}:{}", envy.host(), envy.port()).parse() {
        Ok(addr) => addr,
        Err(e) => panic!("invalid HOST/PORT: {:#?}", e),
    };
    tracing::info!("listening on http://{}", addr);

    if let Err(e) = axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
    {
        tracing::error!(%e);
    }
}
