//! Test factory for creating Serenity Member objects.

use serenity::all::Member;

/// Builds the JSON for a Discord user.
///
/// The discriminator is `"0"`, which Discord uses for migrated usernames, so the user's
/// tag is just the username.
pub fn test_user_json(user_id: u64, username: &str, bot: bool) -> serde_json::Value {
    serde_json::json!({
        "id": user_id.to_string(),
        "username": username,
        "discriminator": "0",
        "global_name": null,
        "avatar": null,
        "bot": bot,
        "public_flags": 0,
    })
}

/// Creates a test Serenity guild Member.
///
/// # Arguments
/// - `guild_id` - Discord guild ID the member belongs to
/// - `user_id` - Discord user ID (snowflake)
/// - `username` - Username, also the member's tag
/// - `bot` - Whether the account is a bot
/// - `role_ids` - Roles assigned to the member
///
/// # Panics
/// - If the JSON cannot be deserialized into a Member (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// let member = create_test_member(1000, 42, "kestrel", false, &[555]);
/// assert_eq!(member.user.tag(), "kestrel");
/// ```
pub fn create_test_member(
    guild_id: u64,
    user_id: u64,
    username: &str,
    bot: bool,
    role_ids: &[u64],
) -> Member {
    let roles: Vec<String> = role_ids.iter().map(|id| id.to_string()).collect();

    serde_json::from_value(serde_json::json!({
        "user": test_user_json(user_id, username, bot),
        "nick": null,
        "avatar": null,
        "roles": roles,
        "joined_at": "2020-01-01T00:00:00.000000+00:00",
        "premium_since": null,
        "deaf": false,
        "mute": false,
        "flags": 0,
        "pending": false,
        "permissions": null,
        "communication_disabled_until": null,
        "guild_id": guild_id.to_string(),
    }))
    .expect("Failed to create test member - invalid JSON structure")
}
