//! Periodic inactivity sweep.
//!
//! A sweep walks every member of the guild once and gives the marker role to members
//! whose last recorded activity is older than the inactive period. Members already
//! holding the role, bots, and members who posted the exemption token in the exemption
//! channel are skipped.
//!
//! Failure handling is layered:
//! - A missing marker role aborts the sweep with `AppError::RoleNotFound`
//! - A failed member listing aborts the sweep with the underlying error
//! - A missing exemption channel or failed history fetch means nobody is exempt
//! - A failed role add or notification affects only that member

use chrono::{DateTime, Utc};
use serenity::all::{RoleId, UserId};
use std::collections::HashSet;

use crate::data::ActivityLedger;
use crate::error::AppError;
use crate::model::{
    discord::GuildMember,
    policy::{InactivityPolicy, EXEMPTION_WINDOW},
    sweep::SweepReport,
};
use crate::service::{gateway::GuildGateway, notice};

pub struct InactivitySweepService<'a, G: GuildGateway> {
    gateway: &'a G,
    ledger: &'a ActivityLedger,
    policy: &'a InactivityPolicy,
}

impl<'a, G: GuildGateway> InactivitySweepService<'a, G> {
    pub fn new(gateway: &'a G, ledger: &'a ActivityLedger, policy: &'a InactivityPolicy) -> Self {
        Self {
            gateway,
            ledger,
            policy,
        }
    }

    /// Runs one sweep as of `now`.
    ///
    /// Each member's last-seen time is read from the ledger right before deciding, so
    /// activity recorded while the sweep is running keeps that member unmarked.
    ///
    /// # Arguments
    /// - `now` - Instant the inactivity threshold is measured against
    ///
    /// # Returns
    /// - `Ok(SweepReport)` - Sweep completed; per-member failures are listed in the report
    /// - `Err(AppError::RoleNotFound)` - The marker role does not exist
    /// - `Err(AppError)` - The member list could not be fetched
    pub async fn sweep(&self, now: DateTime<Utc>) -> Result<SweepReport, AppError> {
        let role = self
            .gateway
            .role_by_name(&self.policy.marker_role_name)
            .await?
            .ok_or_else(|| AppError::RoleNotFound(self.policy.marker_role_name.clone()))?;

        let exempt = self.exempt_users().await;
        let members = self.gateway.members().await?;

        let mut report = SweepReport::default();

        for member in members {
            if member.bot {
                continue;
            }
            report.scanned += 1;

            if member.has_role(role.role_id) {
                report.already_marked += 1;
                continue;
            }

            let last_seen = self.ledger.last_seen(member.user_id).await;
            if !self.policy.is_inactive(last_seen, now) {
                continue;
            }

            if exempt.contains(&member.user_id) {
                tracing::debug!(
                    "User {} ({}) is inactive but exempt this sweep",
                    member.user_id,
                    member.tag
                );
                report.exempt.push(member.user_id);
                continue;
            }

            self.mark_member(&member, role.role_id, &mut report).await;
        }

        Ok(report)
    }

    /// Collects members who posted the exemption token in the recent exemption window.
    async fn exempt_users(&self) -> HashSet<UserId> {
        let channel_name = &self.policy.exemption_channel_name;

        let channel_id = match self.gateway.text_channel_by_name(channel_name).await {
            Ok(Some(channel_id)) => channel_id,
            Ok(None) => {
                tracing::debug!("Exemption channel #{} not found, nobody is exempt", channel_name);
                return HashSet::new();
            }
            Err(e) => {
                tracing::warn!("Failed to look up exemption channel #{}: {}", channel_name, e);
                return HashSet::new();
            }
        };

        match self
            .gateway
            .recent_messages(channel_id, EXEMPTION_WINDOW)
            .await
        {
            Ok(messages) => self.policy.exempt_users(&messages),
            Err(e) => {
                tracing::warn!(
                    "Failed to fetch messages from exemption channel #{}: {}",
                    channel_name,
                    e
                );
                HashSet::new()
            }
        }
    }

    /// Adds the marker role and notifies the member, recording the result in `report`.
    async fn mark_member(&self, member: &GuildMember, role_id: RoleId, report: &mut SweepReport) {
        if let Err(e) = self.gateway.add_role(member.user_id, role_id).await {
            tracing::error!(
                "Failed to add {} role to user {} ({}): {}",
                self.policy.marker_role_name,
                member.user_id,
                member.tag,
                e
            );
            report.failed.push(member.user_id);
            return;
        }

        tracing::info!(
            "Marked user {} ({}) as {}",
            member.user_id,
            member.tag,
            self.policy.marker_role_name
        );
        report.marked.push(member.user_id);

        if let Err(e) = self
            .gateway
            .direct_message(member.user_id, &notice::marked(self.policy))
            .await
        {
            tracing::warn!(
                "Failed to notify user {} ({}) about {} role: {}",
                member.user_id,
                member.tag,
                self.policy.marker_role_name,
                e
            );
            report.unnotified.push(member.user_id);
        }
    }
}
