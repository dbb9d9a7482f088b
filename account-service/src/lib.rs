use std::path::Path;
use std::{error::Error, future::Future, pin::Pin};

use app_state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use axum_server::bind;
use routes::{forgot_password, login, preferences, signup};
use services::spawn_reset_session_sweeper;
use tower_http::services::ServeDir;

pub mod app_state;
pub mod domain;
pub mod errors;
pub mod routes;
pub mod services;
pub mod utils;
pub mod validation;

type ServerFuture = Pin<Box<dyn Future<Output = Result<(), std::io::Error>> + Send>>;

pub fn app_router(app_state: AppState, assets_dir: &Path) -> Router {
    Router::new()
        .route("/signup", post(signup::signup))
        .route("/login", post(login::login))
        .route("/forgot-password", post(forgot_password::start_reset))
        .route(
            "/forgot-password/:id",
            get(forgot_password::get_reset).delete(forgot_password::end_reset),
        )
        .route("/forgot-password/:id/email", post(forgot_password::submit_email))
        .route("/forgot-password/:id/password", post(forgot_password::submit_password))
        .route("/forgot-password/:id/back", post(forgot_password::go_back))
        .route(
            "/preferences/language",
            get(preferences::get_language).put(preferences::set_language),
        )
        .fallback_service(ServeDir::new(assets_dir))
        .with_state(app_state)
}

// This struct encapsulates our application-related logic.
pub struct Application {
    http_future: ServerFuture,
    // address is exposed as a public field,
    // so we have access to it in tests.
    pub address: String,
}

impl Application {
    pub async fn build(app_state: AppState, address: &str) -> Result<Self, Box<dyn Error>> {
        let (assets_dir, session_ttl) = {
            let config = app_state.config.read().await;
            (config.assets_dir().to_path_buf(), config.reset_session_ttl())
        };
        spawn_reset_session_sweeper(app_state.reset_sessions.clone(), session_ttl);
        let router = app_router(app_state, &assets_dir);

        let http_future = bind(address.parse()?).serve(router.into_make_service());

        Ok(Self {
            http_future: Box::pin(http_future),
            address: format!("http://{}", address),
        })
    }

    pub async fn run(self) -> Result<(), std::io::Error> {
        log::info!("listening on {}", &self.address);
        self.http_future.await
    }
}
