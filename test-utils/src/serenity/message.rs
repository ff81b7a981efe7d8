//! Test factory for creating Serenity Message objects.

use serenity::all::Message;

use super::member::test_user_json;

/// Creates a test Serenity Message as delivered by the message history endpoint.
///
/// The message has no guild ID set, matching what Discord returns from
/// `GET /channels/{id}/messages`; set `message.guild_id` to simulate a gateway
/// message from a guild. The author is a non-bot user named `user{author_id}` and the
/// timestamp is fixed at 2025-10-01T12:00:00Z.
///
/// # Arguments
/// - `message_id` - Discord message ID (snowflake)
/// - `channel_id` - Channel the message was posted in
/// - `author_id` - Discord user ID of the author
/// - `content` - Message text
///
/// # Panics
/// - If the JSON cannot be deserialized into a Message (indicates invalid test data)
pub fn create_test_message(
    message_id: u64,
    channel_id: u64,
    author_id: u64,
    content: &str,
) -> Message {
    serde_json::from_value(serde_json::json!({
        "id": message_id.to_string(),
        "channel_id": channel_id.to_string(),
        "author": test_user_json(author_id, &format!("user{}", author_id), false),
        "content": content,
        "timestamp": "2025-10-01T12:00:00.000000+00:00",
        "edited_timestamp": null,
        "tts": false,
        "mention_everyone": false,
        "mentions": [],
        "mention_roles": [],
        "mention_channels": [],
        "attachments": [],
        "embeds": [],
        "reactions": [],
        "pinned": false,
        "webhook_id": null,
        "type": 0,
        "flags": 0,
        "components": [],
        "sticker_items": [],
    }))
    .expect("Failed to create test message - invalid JSON structure")
}
