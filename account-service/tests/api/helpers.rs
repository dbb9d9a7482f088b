use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use account_service::app_router;
use account_service::app_state::{AppState, KeyValueStoreType, UserStoreType};
use account_service::domain::{
    CredentialsRequestBody, LanguagePreferenceBody, ResetSessionView, SubmitEmailRequestBody,
    SubmitPasswordRequestBody, UserRecord,
};
use account_service::services::{
    HashmapKeyValueStore, HashmapResetSessionStore, LocalCredentialStore, PreferenceService,
};
use account_service::utils::Config;
use reqwest::{Client, Response};
use test_context::AsyncTestContext;
use tokio::net::TcpListener;
use tokio::spawn;
use tokio::sync::RwLock;
use uuid::Uuid;

pub const REDIRECT_DELAY: Duration = Duration::from_millis(200);

pub struct TestApp {
    pub address: String,
    pub http_client: Client,
    pub storage: KeyValueStoreType,
    pub user_store: UserStoreType,
}

impl TestApp {
    pub async fn new() -> Self {
        let storage: KeyValueStoreType = Arc::new(RwLock::new(HashmapKeyValueStore::new()));
        let user_store: UserStoreType =
            Arc::new(RwLock::new(LocalCredentialStore::new(storage.clone())));
        let config = Config::new(
            "127.0.0.1:0",
            "unused.json",
            "assets",
            REDIRECT_DELAY,
            Duration::from_secs(60),
        );
        let app_state = AppState::new(
            user_store.clone(),
            Arc::new(RwLock::new(HashmapResetSessionStore::default())),
            Arc::new(PreferenceService::new(storage.clone())),
            Arc::new(RwLock::new(config)),
        );

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed binding to an ephemeral port");

        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let server = axum::serve(listener, app_router(app_state, Path::new("assets")));

        spawn(async move {
            if let Err(e) = server.await {
                eprintln!("Test server error: {}", e);
            }
        });

        TestApp {
            address,
            http_client: Client::new(),
            storage,
            user_store,
        }
    }

    pub async fn seed_user(&self, email: &str, password: &str) {
        self.user_store
            .write()
            .await
            .add_user(UserRecord::new(email, password))
            .await
            .expect("Failed to seed user.");
    }

    pub async fn stored_password(&self, email: &str) -> Option<String> {
        self.user_store
            .read()
            .await
            .find_by_email(email)
            .await
            .map(|user| user.password)
    }

    pub async fn get_root(&self) -> Response {
        self.http_client
            .get(&format!("{}/", &self.address))
            .send()
            .await
            .expect("Failed to execute root request.")
    }

    pub async fn signup(&self, email: String, password: String) -> Response {
        let body = CredentialsRequestBody { email, password };

        self.http_client
            .post(&format!("{}/signup", &self.address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute signup request.")
    }

    pub async fn login(&self, email: String, password: String) -> Response {
        let body = CredentialsRequestBody { email, password };

        self.http_client
            .post(&format!("{}/login", &self.address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute login request.")
    }

    pub async fn start_reset(&self) -> Response {
        self.http_client
            .post(&format!("{}/forgot-password", &self.address))
            .send()
            .await
            .expect("Failed to execute start reset request.")
    }

    /// Starts a reset session and returns its id.
    pub async fn new_reset_session(&self) -> String {
        let response = self.start_reset().await;
        assert_eq!(response.status().as_u16(), 201);
        response
            .json::<ResetSessionView>()
            .await
            .expect("Could not deserialize reset session view")
            .session_id
    }

    pub async fn get_reset(&self, id: &str) -> Response {
        self.http_client
            .get(&format!("{}/forgot-password/{}", &self.address, id))
            .send()
            .await
            .expect("Failed to execute get reset request.")
    }

    pub async fn submit_reset_email(&self, id: &str, email: &str) -> Response {
        let body = SubmitEmailRequestBody {
            email: email.to_string(),
        };

        self.http_client
            .post(&format!("{}/forgot-password/{}/email", &self.address, id))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute submit email request.")
    }

    pub async fn submit_reset_password(&self, id: &str, new_password: &str, confirm_password: &str) -> Response {
        let body = SubmitPasswordRequestBody {
            new_password: new_password.to_string(),
            confirm_password: confirm_password.to_string(),
        };

        self.http_client
            .post(&format!("{}/forgot-password/{}/password", &self.address, id))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute submit password request.")
    }

    pub async fn reset_back(&self, id: &str) -> Response {
        self.http_client
            .post(&format!("{}/forgot-password/{}/back", &self.address, id))
            .send()
            .await
            .expect("Failed to execute reset back request.")
    }

    pub async fn end_reset(&self, id: &str) -> Response {
        self.http_client
            .delete(&format!("{}/forgot-password/{}", &self.address, id))
            .send()
            .await
            .expect("Failed to execute end reset request.")
    }

    pub async fn get_language(&self) -> Response {
        self.http_client
            .get(&format!("{}/preferences/language", &self.address))
            .send()
            .await
            .expect("Failed to execute get language request.")
    }

    pub async fn set_language(&self, language: &str) -> Response {
        let body = LanguagePreferenceBody {
            language: language.to_string(),
        };

        self.http_client
            .put(&format!("{}/preferences/language", &self.address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute set language request.")
    }
}

pub struct TestContext {
    pub test_app: TestApp,
}

impl AsyncTestContext for TestContext {
    async fn setup() -> TestContext {
        TestContext {
            test_app: TestApp::new().await,
        }
    }

    async fn teardown(self) {}
}

pub fn get_random_email() -> String {
    format!("{}@example.com", Uuid::new_v4())
}
