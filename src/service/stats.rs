use serenity::all::ChannelId;

use crate::error::AppError;
use crate::model::{discord::GuildMember, policy::InactivityPolicy};
use crate::service::{gateway::GuildGateway, notice};

/// Read-only reporting on marked members.
pub struct MarkerStatsService<'a, G: GuildGateway> {
    gateway: &'a G,
    policy: &'a InactivityPolicy,
}

impl<'a, G: GuildGateway> MarkerStatsService<'a, G> {
    pub fn new(gateway: &'a G, policy: &'a InactivityPolicy) -> Self {
        Self { gateway, policy }
    }

    /// Lists members currently holding the marker role.
    ///
    /// # Returns
    /// - `Ok(Vec<GuildMember>)` - Marked members, possibly empty
    /// - `Err(AppError::RoleNotFound)` - The marker role does not exist
    /// - `Err(AppError)` - The member list could not be fetched
    pub async fn marked_members(&self) -> Result<Vec<GuildMember>, AppError> {
        let role = self
            .gateway
            .role_by_name(&self.policy.marker_role_name)
            .await?
            .ok_or_else(|| AppError::RoleNotFound(self.policy.marker_role_name.clone()))?;

        Ok(self
            .gateway
            .members()
            .await?
            .into_iter()
            .filter(|member| member.has_role(role.role_id))
            .collect())
    }

    /// Answers the stats command in `channel_id`.
    ///
    /// A missing marker role is answered in the channel rather than returned as an error.
    pub async fn reply(&self, channel_id: ChannelId) -> Result<(), AppError> {
        let content = match self.marked_members().await {
            Ok(members) => notice::stats(&self.policy.marker_role_name, &members),
            Err(AppError::RoleNotFound(name)) => notice::role_not_found(&name),
            Err(e) => return Err(e),
        };

        self.gateway.channel_message(channel_id, &content).await
    }
}
