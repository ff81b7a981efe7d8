//! Domain models shared by the bot, services and scheduler.

pub mod activity;
pub mod discord;
pub mod policy;
pub mod sweep;
