//! Application state - shared across all handlers.

use std::sync::Arc;

use folio_core::PostService;
use folio_core::ports::{PasswordService, PostRepository, TokenService};
use folio_infra::memory::InMemoryPostRepository;

#[cfg(feature = "postgres")]
use folio_infra::database::{DatabaseConnections, PostgresPostRepository};
#[cfg(feature = "postgres")]
use migration::MigratorTrait;

use crate::config::AppConfig;

/// Services needed to issue and check admin tokens.
pub struct AdminAuth {
    pub tokens: Arc<dyn TokenService>,
    pub passwords: Arc<dyn PasswordService>,
    pub password_hash: String,
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
    /// `None` leaves the write routes open.
    pub admin: Option<Arc<AdminAuth>>,
    /// Postgres store handle for health checks; `None` in memory mode.
    #[cfg(feature = "postgres")]
    pub db: Option<Arc<PostgresPostRepository>>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        #[cfg(feature = "postgres")]
        let db = Self::connect_store(config).await;
        #[cfg(feature = "postgres")]
        let repo: Arc<dyn PostRepository> = match db.as_ref() {
            Some(store) => store.clone() as Arc<dyn PostRepository>,
            None => Arc::new(InMemoryPostRepository::new()),
        };
        #[cfg(not(feature = "postgres"))]
        let repo: Arc<dyn PostRepository> = {
            tracing::info!("Running without postgres feature - using in-memory repository");
            Arc::new(InMemoryPostRepository::new())
        };

        let posts = PostService::new(repo).with_default_author(config.default_author.clone());
        let admin = Self::admin_auth(config).map(Arc::new);

        tracing::info!(
            admin_auth = admin.is_some(),
            "Application state initialized"
        );

        Self {
            posts,
            admin,
            #[cfg(feature = "postgres")]
            db,
        }
    }

    /// State over an empty in-memory store with open write routes.
    pub fn in_memory() -> Self {
        Self {
            posts: PostService::new(Arc::new(InMemoryPostRepository::new())),
            admin: None,
            #[cfg(feature = "postgres")]
            db: None,
        }
    }

    pub fn with_admin(mut self, admin: AdminAuth) -> Self {
        self.admin = Some(Arc::new(admin));
        self
    }

    /// Connect to Postgres and apply pending migrations; `None` means
    /// the in-memory store is used instead.
    #[cfg(feature = "postgres")]
    async fn connect_store(config: &AppConfig) -> Option<Arc<PostgresPostRepository>> {
        let Some(db_config) = config.database.as_ref() else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            return None;
        };

        match DatabaseConnections::init(db_config).await {
            Ok(connections) => {
                if let Err(e) = migration::Migrator::up(&connections.main, None).await {
                    tracing::error!("Failed to apply migrations: {}", e);
                }
                Some(Arc::new(PostgresPostRepository::new(connections.main)))
            }
            Err(e) => {
                tracing::error!(
                    "Failed to connect to database: {}. Using in-memory fallback.",
                    e
                );
                None
            }
        }
    }

    #[cfg(feature = "auth")]
    fn admin_auth(config: &AppConfig) -> Option<AdminAuth> {
        use folio_infra::auth::{Argon2PasswordService, JwtConfig, JwtTokenService};

        let Some(hash) = config.admin_password_hash.clone() else {
            tracing::warn!("ADMIN_PASSWORD_HASH not set. Post write routes are open.");
            return None;
        };
        if !Argon2PasswordService::is_valid_hash(&hash) {
            tracing::error!("ADMIN_PASSWORD_HASH is not a valid Argon2 hash. Post write routes are open.");
            return None;
        }

        Some(AdminAuth {
            tokens: Arc::new(JwtTokenService::new(JwtConfig::from_env())),
            passwords: Arc::new(Argon2PasswordService::new()),
            password_hash: hash,
        })
    }

    #[cfg(not(feature = "auth"))]
    fn admin_auth(config: &AppConfig) -> Option<AdminAuth> {
        if config.admin_password_hash.is_some() {
            tracing::warn!("ADMIN_PASSWORD_HASH ignored: built without auth feature.");
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use folio_core::domain::PostInput;

    use super::*;
    use crate::telemetry::TelemetryConfig;

    fn config(admin_password_hash: Option<String>) -> AppConfig {
        AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            database: None,
            cors_origins: Vec::new(),
            default_author: "Staff Writer".to_string(),
            admin_password_hash,
            telemetry: TelemetryConfig::default(),
        }
    }

    #[actix_web::test]
    async fn test_new_without_database_uses_memory_store() {
        let state = AppState::new(&config(None)).await;

        assert!(state.admin.is_none());
        #[cfg(feature = "postgres")]
        assert!(state.db.is_none());

        let post = state
            .posts
            .create(PostInput {
                title: Some("Memory Mode".to_string()),
                excerpt: Some("x".to_string()),
                category: Some("tips".to_string()),
                read_time: Some("1 min".to_string()),
                image: Some("/img.png".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(post.author, "Staff Writer");
    }

    #[cfg(feature = "auth")]
    #[actix_web::test]
    async fn test_new_with_admin_hash_enables_auth() {
        use folio_infra::auth::Argon2PasswordService;

        let hash = Argon2PasswordService::new().hash("s3cret").unwrap();
        let state = AppState::new(&config(Some(hash))).await;
        assert!(state.admin.is_some());

        let state = AppState::new(&config(Some("not-a-phc-string".to_string()))).await;
        assert!(state.admin.is_none());
    }
}
