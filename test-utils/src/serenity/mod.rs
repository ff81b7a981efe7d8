//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs
//! (Member, Role, Message, GuildChannel, VoiceState) for testing purposes. These
//! factories create valid Serenity objects by deserializing JSON, simulating what
//! Discord's API or gateway would send.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_member, create_test_role};
//!
//! #[test]
//! fn test_member_conversion() {
//!     let role = create_test_role(555, "MIA");
//!     let member = create_test_member(1000, 42, "kestrel", false, &[555]);
//!
//!     // Use in your tests...
//! }
//! ```
//!
//! # Available Factories
//!
//! - `channel::create_test_channel` - Create Serenity GuildChannel objects
//! - `member::create_test_member` - Create Serenity Member objects
//! - `message::create_test_message` - Create Serenity Message objects
//! - `role::create_test_role` - Create Serenity Role objects
//! - `voice_state::create_test_voice_state` - Create Serenity VoiceState objects

pub mod channel;
pub mod member;
pub mod message;
pub mod role;
pub mod voice_state;

pub use channel::create_test_channel;
pub use member::{create_test_member, test_user_json};
pub use message::create_test_message;
pub use role::create_test_role;
pub use voice_state::create_test_voice_state;
