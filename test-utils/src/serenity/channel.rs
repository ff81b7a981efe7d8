//! Test factory for creating Serenity GuildChannel objects.

use serenity::all::{ChannelType, GuildChannel};

/// Creates a test Serenity GuildChannel.
///
/// # Arguments
/// - `guild_id` - Guild that owns the channel
/// - `channel_id` - Discord channel ID (snowflake)
/// - `name` - Channel name
/// - `kind` - Channel type, e.g. `ChannelType::Text`, `ChannelType::Voice` or
///   `ChannelType::Category`
/// - `parent_id` - Parent category ID, if the channel is nested in a category
///
/// # Panics
/// - If the JSON cannot be deserialized into a GuildChannel (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// let games = create_test_channel(1000, 10, "Games", ChannelType::Category, None);
/// let lobby = create_test_channel(1000, 11, "lobby", ChannelType::Voice, Some(10));
/// ```
pub fn create_test_channel(
    guild_id: u64,
    channel_id: u64,
    name: &str,
    kind: ChannelType,
    parent_id: Option<u64>,
) -> GuildChannel {
    serde_json::from_value(serde_json::json!({
        "id": channel_id.to_string(),
        "guild_id": guild_id.to_string(),
        "type": u8::from(kind),
        "name": name,
        "position": 0,
        "permission_overwrites": [],
        "parent_id": parent_id.map(|id| id.to_string()),
        "nsfw": false,
        "topic": null,
        "last_message_id": null,
        "rate_limit_per_user": 0,
        "flags": 0,
    }))
    .expect("Failed to create test channel - invalid JSON structure")
}
