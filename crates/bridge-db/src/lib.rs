//! # bridge-db
//!
//! Identity store backed by PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations of the repository traits
//! defined in `bridge-core`. It handles:
//!
//! - Connection pool management and schema bootstrap
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Repository implementations
//!
//! Every write that touches more than one table runs in a single transaction
//! on a detached task, so a caller giving up mid-request cannot leave the
//! `members.member_linked` flag out of step with the `minecraft` table.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bridge_db::pool::{create_pool, run_migrations, DatabaseConfig};
//! use bridge_db::repositories::PgMemberRepository;
//! use bridge_core::traits::MemberRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig {
//!         url: std::env::var("DATABASE_URL")?,
//!         ..DatabaseConfig::default()
//!     };
//!     let pool = create_pool(&config).await?;
//!     run_migrations(&pool).await?;
//!     let members = PgMemberRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{PgLinkedAccountRepository, PgMemberRepository};
