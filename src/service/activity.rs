use crate::data::ActivityLedger;
use crate::error::AppError;
use crate::model::{
    activity::ActivityEvent, policy::InactivityPolicy, sweep::ActivityOutcome,
};
use crate::service::{gateway::GuildGateway, notice};
use serenity::all::UserId;

pub struct ActivityService<'a, G: GuildGateway> {
    gateway: &'a G,
    ledger: &'a ActivityLedger,
    policy: &'a InactivityPolicy,
}

impl<'a, G: GuildGateway> ActivityService<'a, G> {
    pub fn new(gateway: &'a G, ledger: &'a ActivityLedger, policy: &'a InactivityPolicy) -> Self {
        Self {
            gateway,
            ledger,
            policy,
        }
    }

    /// Processes one activity event.
    ///
    /// Events in channels outside the allow-listed categories are ignored. Qualifying
    /// events update the ledger and, if the member holds the marker role, remove it and
    /// send a welcome back message. A failed ledger write is logged and does not stop
    /// the role removal, since the in-memory table already has the new timestamp.
    ///
    /// # Arguments
    /// - `event` - Activity observed on the gateway
    ///
    /// # Returns
    /// - `Ok(ActivityOutcome)` - What happened for this event
    /// - `Err(AppError)` - The channel's category could not be resolved
    pub async fn handle_event(&self, event: &ActivityEvent) -> Result<ActivityOutcome, AppError> {
        let category = self.gateway.parent_category_name(event.channel_id).await?;
        if !self.policy.is_in_game_category(category.as_deref()) {
            tracing::debug!(
                "Ignoring {:?} from user {} in channel {} (category: {:?})",
                event.kind,
                event.user_id,
                event.channel_id,
                category
            );
            return Ok(ActivityOutcome::Ignored);
        }

        match self.ledger.record_activity(event.user_id, event.at).await {
            Ok(last_seen) => tracing::debug!(
                "Recorded {:?} activity for user {} at {}",
                event.kind,
                event.user_id,
                last_seen
            ),
            Err(e) => tracing::error!(
                "Failed to persist activity for user {}: {}",
                event.user_id,
                e
            ),
        }

        if self.restore_member(event.user_id).await {
            Ok(ActivityOutcome::Restored)
        } else {
            Ok(ActivityOutcome::Recorded)
        }
    }

    /// Removes the marker role from a member who holds it.
    ///
    /// Never fails: every error is logged and reported as "not restored".
    async fn restore_member(&self, user_id: UserId) -> bool {
        let role_name = &self.policy.marker_role_name;

        let role = match self.gateway.role_by_name(role_name).await {
            Ok(Some(role)) => role,
            Ok(None) => {
                tracing::warn!("Role {} not found, cannot check user {}", role_name, user_id);
                return false;
            }
            Err(e) => {
                tracing::error!("Failed to look up role {}: {}", role_name, e);
                return false;
            }
        };

        let member = match self.gateway.member(user_id).await {
            Ok(member) => member,
            Err(e) => {
                tracing::error!("Failed to fetch member {}: {}", user_id, e);
                return false;
            }
        };

        if !member.has_role(role.role_id) {
            return false;
        }

        if let Err(e) = self.gateway.remove_role(user_id, role.role_id).await {
            tracing::error!(
                "Failed to remove {} role from user {} ({}): {}",
                role_name,
                user_id,
                member.tag,
                e
            );
            return false;
        }

        tracing::info!(
            "Removed {} role from user {} ({}) after activity",
            role_name,
            user_id,
            member.tag
        );

        if let Err(e) = self
            .gateway
            .direct_message(user_id, &notice::welcome_back(self.policy))
            .await
        {
            tracing::warn!("Failed to send welcome back to user {}: {}", user_id, e);
        }

        true
    }
}
