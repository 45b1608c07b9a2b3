use std::collections::HashMap;
use std::sync::atomic::AtomicI64;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use auth::RevocationRegistry;
use auth::TokenIssuer;
use auth::TokenValidator;
use serde_json::json;
use stock_service::domain::identity::models::NewUser;
use stock_service::domain::identity::models::User;
use stock_service::domain::identity::models::UserId;
use stock_service::domain::identity::service::AuthService;
use stock_service::domain::quote::service::QuoteService;
use stock_service::identity::errors::AuthError;
use stock_service::identity::ports::UserRepository;
use stock_service::inbound::http::router::create_router;
use stock_service::outbound::quotes::FinnhubClient;
use tokio::sync::RwLock;
use wiremock::MockServer;

pub const JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";
const TOKEN_TTL_MINUTES: i64 = 30;

/// Test application that spawns a real server backed by an in-memory user
/// store and a wiremock double of the quote provider
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub finnhub: MockServer,
    pub revocations: Arc<RevocationRegistry>,
}

/// In-memory `UserRepository` with the same duplicate-email contract as
/// the Postgres adapter
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
    next_id: AtomicI64,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, AuthError> {
        let mut users = self.users.write().await;

        if users.contains_key(user.email.as_str()) {
            return Err(AuthError::DuplicateEmail);
        }

        let created = User {
            id: UserId(self.next_id.fetch_add(1, Ordering::SeqCst)),
            email: user.email,
            password_hash: user.password_hash,
            created_at: user.created_at,
        };
        users.insert(created.email.as_str().to_string(), created.clone());

        Ok(created)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError> {
        Ok(self.users.read().await.get(email).cloned())
    }
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let finnhub = MockServer::start().await;

        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let revocations = Arc::new(RevocationRegistry::new());

        let auth_service = Arc::new(AuthService::new(
            Arc::new(InMemoryUserRepository::new()),
            PasswordHasher::new(),
            TokenIssuer::new(JWT_SECRET, TOKEN_TTL_MINUTES),
            TokenValidator::new(JWT_SECRET),
            Arc::clone(&revocations),
        ));

        let finnhub_client = FinnhubClient::new(finnhub.uri(), "test-api-key")
            .expect("Failed to create Finnhub client for tests");
        let quote_service = Arc::new(QuoteService::new(Arc::new(finnhub_client)));

        let router = create_router(auth_service, quote_service);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            finnhub,
            revocations,
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Register a user
    pub async fn signup(&self, email: &str, password: &str) -> reqwest::Response {
        self.post("/auth/signup")
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute signup request")
    }

    /// Log a user in
    pub async fn login(&self, email: &str, password: &str) -> reqwest::Response {
        self.post("/auth/login")
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute login request")
    }

    /// Register and log in, returning a bearer token
    pub async fn login_token(&self, email: &str, password: &str) -> String {
        self.signup(email, password).await;

        let body: serde_json::Value = self
            .login(email, password)
            .await
            .json()
            .await
            .expect("Failed to parse login response");

        body["data"]["access_token"]
            .as_str()
            .expect("login response missing access_token")
            .to_string()
    }
}
