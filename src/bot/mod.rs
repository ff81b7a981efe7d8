//! Discord gateway integration.
//!
//! The event handler converts gateway callbacks into typed `ActivityEvent`s and sends
//! them over a channel to the dispatcher, which resolves channel categories and updates
//! the ledger and roles one event at a time. Keeping Discord lookups out of the
//! callbacks means a slow API call never holds up the shard's event stream.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild, channel and role data for the cache
//! - `GUILD_MESSAGES` - Message events in guild channels
//! - `MESSAGE_CONTENT` - Message text for the stats command (privileged intent)
//! - `GUILD_VOICE_STATES` - Voice channel joins
//! - `GUILD_MEMBERS` - Listing guild members during sweeps (privileged intent)
//!
//! Note: privileged intents must be explicitly enabled in the Discord Developer Portal
//! for the bot application.

pub mod dispatcher;
pub mod handler;
pub mod start;
