use chrono::Utc;
use serenity::all::VoiceState;
use tokio::sync::mpsc::UnboundedSender;

use crate::model::activity::ActivityEvent;

/// Handle a voice state update
///
/// Voice state payloads carry no timestamp, so a join is recorded at the instant it is
/// received. Guild filtering happens in the dispatcher.
pub fn handle_voice_state_update(
    events: &UnboundedSender<ActivityEvent>,
    old: Option<VoiceState>,
    new: VoiceState,
) {
    let Some(event) = ActivityEvent::from_voice_update(old.as_ref(), &new, Utc::now()) else {
        return;
    };

    tracing::debug!(
        "User {} joined voice channel {}",
        event.user_id,
        event.channel_id
    );

    if events.send(event).is_err() {
        tracing::error!("Activity dispatcher has stopped; dropping voice join event");
    }
}
