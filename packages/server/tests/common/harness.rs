//! Test harness with testcontainers for integration testing.
//!
//! Uses one shared Postgres container across all tests in a binary.
//! The container and migrations are initialized on first use, then reused.

use std::sync::Arc;

use anyhow::{Context, Result};
use server_core::common::{AuthUser, ProfileId};
use server_core::domains::accounts::Profile;
use server_core::domains::auth::JwtService;
use server_core::kernel::test_dependencies::MockMailer;
use server_core::kernel::ServerDeps;
use sqlx::PgPool;
use test_context::AsyncTestContext;
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tokio::sync::OnceCell;

use super::GraphQLClient;

pub const TEST_SITE_URL: &str = "https://nano.example";

/// Shared test infrastructure that persists across all tests.
struct SharedTestInfra {
    db_url: String,
    // Keep the container alive for the entire test run
    _postgres: ContainerAsync<Postgres>,
}

static SHARED_INFRA: OnceCell<SharedTestInfra> = OnceCell::const_new();

impl SharedTestInfra {
    async fn init() -> Result<Self> {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let postgres = Postgres::default()
            .with_tag("16")
            .start()
            .await
            .context("Failed to start Postgres container")?;

        let pg_host = postgres.get_host().await?;
        let pg_port = postgres.get_host_port_ipv4(5432).await?;
        let db_url = format!(
            "postgresql://postgres:postgres@{}:{}/postgres",
            pg_host, pg_port
        );

        let pool = PgPool::connect(&db_url)
            .await
            .context("Failed to connect to Postgres for migrations")?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("Failed to run migrations")?;

        Ok(Self {
            db_url,
            _postgres: postgres,
        })
    }

    async fn get() -> &'static Self {
        SHARED_INFRA
            .get_or_init(|| async {
                Self::init()
                    .await
                    .expect("Failed to initialize shared test infrastructure")
            })
            .await
    }
}

/// Test harness: a fresh pool on the shared database plus a recording mailer.
///
/// ```ignore
/// #[test_context(TestHarness)]
/// #[tokio::test]
/// async fn my_test(ctx: &TestHarness) {
///     let client = ctx.graphql_as_admin();
/// }
/// ```
pub struct TestHarness {
    pub db_pool: PgPool,
    pub mailer: MockMailer,
    pub jwt_service: Arc<JwtService>,
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        Self::new().await.expect("Failed to create test harness")
    }
}

impl TestHarness {
    pub async fn new() -> Result<Self> {
        let infra = SharedTestInfra::get().await;

        let db_pool = PgPool::connect(&infra.db_url)
            .await
            .context("Failed to connect to test database")?;

        Ok(Self {
            db_pool,
            mailer: MockMailer::new(),
            jwt_service: Arc::new(JwtService::new("test_secret", "test_issuer".to_string())),
        })
    }

    /// Server deps wired to this harness's recording mailer.
    pub fn deps(&self) -> ServerDeps {
        self.deps_with_mailer(self.mailer.clone())
    }

    pub fn deps_with_mailer(&self, mailer: MockMailer) -> ServerDeps {
        ServerDeps::new(
            self.db_pool.clone(),
            Arc::new(mailer),
            self.jwt_service.clone(),
            TEST_SITE_URL.to_string(),
        )
    }

    pub fn graphql(&self) -> GraphQLClient {
        GraphQLClient::new(self.deps(), None)
    }

    pub fn graphql_as_admin(&self) -> GraphQLClient {
        GraphQLClient::new(self.deps(), Some(test_user(true)))
    }

    pub fn graphql_as_user(&self) -> GraphQLClient {
        GraphQLClient::new(self.deps(), Some(test_user(false)))
    }

    /// Client signed in as an existing account.
    pub fn graphql_as_profile(&self, profile: &Profile) -> GraphQLClient {
        GraphQLClient::new(
            self.deps(),
            Some(AuthUser {
                profile_id: profile.id,
                email: profile.email.clone(),
                is_admin: profile.is_admin,
            }),
        )
    }

    /// Bearer token for the function endpoints.
    pub fn bearer(&self, is_admin: bool) -> String {
        let user = test_user(is_admin);
        let token = self
            .jwt_service
            .create_token(user.profile_id, &user.email, user.is_admin)
            .expect("Failed to create test token");
        format!("Bearer {}", token)
    }
}

pub fn test_user(is_admin: bool) -> AuthUser {
    AuthUser {
        profile_id: ProfileId::new(),
        email: if is_admin {
            "ops@nano.example".to_string()
        } else {
            "creator@nano.example".to_string()
        },
        is_admin,
    }
}
