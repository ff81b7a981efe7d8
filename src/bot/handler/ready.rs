//! Ready event handler.
//!
//! Sets the bot's presence and resolves the guild the bot operates on. A `GUILD_ID`
//! from configuration takes precedence; otherwise the first guild listed in the ready
//! payload is used. The ready event fires again after every reconnect, so resolution
//! only happens while no guild is active.

use serenity::all::{ActivityData, Context, GuildId, Ready};

use crate::state::AppState;

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `state` - Application state holding the configuration and active guild
/// - `ctx` - Discord context for setting the presence
/// - `ready` - Ready event data containing the bot user and its guilds
pub async fn handle_ready(state: &AppState, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    ctx.set_activity(Some(ActivityData::custom(state.config.presence_text.clone())));

    let guild_ids: Vec<GuildId> = ready.guilds.iter().map(|guild| guild.id).collect();

    if let Some(active) = state.active_guild.get().await {
        if !guild_ids.contains(&active) {
            tracing::warn!(
                "Configured guild {} is not among the {} guild(s) the bot is in",
                active,
                guild_ids.len()
            );
        }
        return;
    }

    match select_guild(&guild_ids) {
        Some(guild_id) => {
            if guild_ids.len() > 1 {
                tracing::warn!(
                    "Bot is in {} guilds; operating on {} only. Set GUILD_ID to choose another",
                    guild_ids.len(),
                    guild_id
                );
            }
            state.active_guild.set(guild_id).await;
            tracing::info!("Operating on guild {}", guild_id);
        }
        None => tracing::warn!("Bot is not in any guild; sweeps will be skipped"),
    }
}

/// Picks the guild to operate on when none is configured.
fn select_guild(guild_ids: &[GuildId]) -> Option<GuildId> {
    guild_ids.first().copied()
}
