use serenity::all::{Context, EventHandler, Message, Ready, VoiceState};
use serenity::async_trait;
use tokio::sync::mpsc::UnboundedSender;

use crate::{model::activity::ActivityEvent, state::AppState};

pub mod message;
pub mod ready;
pub mod voice;

/// Discord bot event handler
pub struct Handler {
    pub state: AppState,
    pub events: UnboundedSender<ActivityEvent>,
}

impl Handler {
    pub fn new(state: AppState, events: UnboundedSender<ActivityEvent>) -> Self {
        Self { state, events }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.state, ctx, ready).await;
    }

    /// Called when a message is created in any channel the bot can see
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(&self.state, &self.events, ctx, message).await;
    }

    /// Called when a member joins, leaves or changes state in a voice channel
    async fn voice_state_update(&self, _ctx: Context, old: Option<VoiceState>, new: VoiceState) {
        voice::handle_voice_state_update(&self.events, old, new);
    }
}
