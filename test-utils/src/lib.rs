//! MIA Bot Test Utils
//!
//! Provides shared testing utilities for the MIA bot. This crate offers a builder for
//! creating test contexts backed by a temporary directory with an optional pre-seeded
//! activity ledger file, plus factories for Serenity objects.
//!
//! # Overview
//!
//! The test utilities consist of these components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment owning the temporary directory and ledger path
//! - **TestError**: Error types that can occur during test setup
//! - **serenity**: Factories for Serenity members, roles, messages, channels and voice states
//!
//! # Usage
//!
//! ```rust,ignore
//! use chrono::{Duration, Utc};
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_ledger_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_ledger_entry(42, Utc::now() - Duration::days(8))
//!         .build()?;
//!
//!     let ledger = ActivityLedger::load(&test.ledger_path).await?;
//!     // Perform ledger operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod serenity;
