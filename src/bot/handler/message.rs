use serenity::all::{Context, Message};
use tokio::sync::mpsc::UnboundedSender;

use crate::{
    model::activity::ActivityEvent,
    service::{MarkerStatsService, SerenityGateway},
    state::AppState,
};

/// Handle message creation in a channel
///
/// Answers the stats command when it is posted in the active guild, then forwards the
/// message to the dispatcher as a candidate activity event.
pub async fn handle_message(
    state: &AppState,
    events: &UnboundedSender<ActivityEvent>,
    ctx: Context,
    message: Message,
) {
    if message.author.bot {
        return;
    }

    // Only the active guild is tracked
    let Some(guild_id) = message.guild_id else {
        return;
    };
    if state.active_guild.get().await != Some(guild_id) {
        return;
    }

    if is_stats_command(&message.content, &state.config.stats_command) {
        let gateway = SerenityGateway::new(ctx.http.clone(), guild_id).with_cache(ctx.cache.clone());
        let stats = MarkerStatsService::new(&gateway, &state.config.policy);

        if let Err(e) = stats.reply(message.channel_id).await {
            tracing::error!(
                "Failed to answer stats command in channel {}: {}",
                message.channel_id,
                e
            );
        }
    }

    let Some(event) = ActivityEvent::from_message(&message) else {
        return;
    };
    if events.send(event).is_err() {
        tracing::error!("Activity dispatcher has stopped; dropping message event");
    }
}

fn is_stats_command(content: &str, command: &str) -> bool {
    content.trim() == command
}
