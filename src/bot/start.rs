use serenity::all::{Client, GatewayIntents};
use tokio::sync::mpsc::UnboundedSender;

use crate::{bot::handler::Handler, error::AppError, model::activity::ActivityEvent, state::AppState};

/// Builds the Discord client without connecting.
///
/// The returned client exposes its HTTP handle, cache and shard manager so the caller
/// can start the dispatcher and scheduler before running the gateway connection.
///
/// # Arguments
/// - `state` - Shared application state handed to the event handler
/// - `events` - Sending half of the activity event channel
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError)` - Client construction failed
pub async fn init_bot(
    state: &AppState,
    events: UnboundedSender<ActivityEvent>,
) -> Result<Client, AppError> {
    // MESSAGE_CONTENT and GUILD_MEMBERS are privileged intents
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_VOICE_STATES
        | GatewayIntents::GUILD_MEMBERS;

    let handler = Handler::new(state.clone(), events);

    let client = Client::builder(&state.config.discord_token, intents)
        .event_handler(handler)
        .await?;

    Ok(client)
}
