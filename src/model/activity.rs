//! Activity events produced by the gateway handler.
//!
//! The Serenity event handler converts each inbound message or voice join into an
//! `ActivityEvent` and sends it to the dispatcher over a channel. Whether the event
//! counts as qualifying activity is decided later by the dispatcher, which has access
//! to the guild's channel layout.

use chrono::{DateTime, Utc};
use serenity::all::{ChannelId, GuildId, Message, UserId, VoiceState};

/// What kind of gateway event produced the activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Message,
    VoiceJoin,
}

/// A candidate activity signal for one user.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityEvent {
    pub kind: ActivityKind,
    pub guild_id: GuildId,
    pub channel_id: ChannelId,
    pub user_id: UserId,
    /// Instant the activity happened; recorded as the user's last-seen time.
    pub at: DateTime<Utc>,
}

impl ActivityEvent {
    /// Builds an event from a guild message.
    ///
    /// Returns `None` for direct messages and messages authored by bots.
    pub fn from_message(message: &Message) -> Option<Self> {
        if message.author.bot {
            return None;
        }

        Some(Self {
            kind: ActivityKind::Message,
            guild_id: message.guild_id?,
            channel_id: message.channel_id,
            user_id: message.author.id,
            at: message.timestamp.to_utc(),
        })
    }

    /// Builds an event from a voice state update if it represents a channel join.
    ///
    /// A join is any update whose new state has a channel that differs from the old
    /// state's channel, which covers both connecting and moving between channels.
    /// Leaving, muting and deafening are not joins.
    pub fn from_voice_update(
        old: Option<&VoiceState>,
        new: &VoiceState,
        at: DateTime<Utc>,
    ) -> Option<Self> {
        let channel_id = new.channel_id?;
        if old.and_then(|state| state.channel_id) == Some(channel_id) {
            return None;
        }
        if new.member.as_ref().is_some_and(|member| member.user.bot) {
            return None;
        }

        Some(Self {
            kind: ActivityKind::VoiceJoin,
            guild_id: new.guild_id?,
            channel_id,
            user_id: new.user_id,
            at,
        })
    }
}
