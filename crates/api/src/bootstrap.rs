//! First-initialization seeding: default admin account and default
//! categories.
//!
//! The admin is created only when the users table is empty, so restarting
//! the service never clobbers an operator-managed account. Category
//! seeding reuses the catalog's idempotent add, so it is safe on every
//! start.

use stockroom_db::models::catalog::CatalogKind;
use stockroom_db::models::user::CreateUser;
use stockroom_db::repositories::{CatalogRepo, UserRepo};
use stockroom_db::DbPool;

use crate::auth::password::hash_password;
use crate::config::SeedConfig;

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("password hashing error: {0}")]
    Hash(String),
}

/// Apply seed data from configuration.
pub async fn seed(pool: &DbPool, config: &SeedConfig) -> Result<(), SeedError> {
    for name in &config.categories {
        let inserted = CatalogRepo::add(pool, CatalogKind::Category, name).await?;
        if inserted {
            tracing::info!(category = %name, "Seeded default category");
        }
    }

    if let Some(password) = &config.admin_password {
        if UserRepo::count(pool).await? == 0 {
            let hashed =
                hash_password(password).map_err(|e| SeedError::Hash(e.to_string()))?;
            let admin = UserRepo::create(
                pool,
                &CreateUser {
                    username: config.admin_username.clone(),
                    password_hash: hashed,
                    role: "admin".to_string(),
                },
            )
            .await?;
            tracing::info!(user_id = admin.id, username = %admin.username, "Seeded default admin");
        }
    }

    Ok(())
}
