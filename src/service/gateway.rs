//! Discord operations the services depend on.
//!
//! `GuildGateway` is the seam between the bot's decision logic and Discord. Services
//! are generic over it so sweeps and activity handling can be exercised against an
//! in-memory gateway in tests, while the running bot uses `SerenityGateway`.

use serenity::all::{
    Cache, ChannelId, ChannelType, CreateMessage, GetMessages, GuildChannel, GuildId, RoleId,
    UserId,
};
use serenity::async_trait;
use serenity::http::Http;
use std::sync::Arc;

use crate::error::AppError;
use crate::model::discord::{ChannelMessage, GuildMember, GuildRole};

/// Maximum number of members to fetch per API request.
///
/// Discord's API supports up to 1000 members per request. Using the maximum
/// reduces the number of API calls needed for large guilds.
const MEMBERS_PER_REQUEST: u64 = 1000;

/// Reason attached to role changes in the guild's audit log.
const AUDIT_LOG_REASON: &str = "Inactivity tracking";

/// Operations against a single guild.
#[async_trait]
pub trait GuildGateway: Send + Sync {
    /// Lists every member of the guild.
    async fn members(&self) -> Result<Vec<GuildMember>, AppError>;

    /// Fetches one member of the guild.
    async fn member(&self, user_id: UserId) -> Result<GuildMember, AppError>;

    /// Finds a role by exact name.
    async fn role_by_name(&self, name: &str) -> Result<Option<GuildRole>, AppError>;

    /// Finds a text channel by exact name.
    async fn text_channel_by_name(&self, name: &str) -> Result<Option<ChannelId>, AppError>;

    /// Name of the category the channel is nested under, if any.
    async fn parent_category_name(&self, channel_id: ChannelId)
        -> Result<Option<String>, AppError>;

    /// Fetches the most recent messages of a channel, newest first.
    async fn recent_messages(
        &self,
        channel_id: ChannelId,
        limit: u8,
    ) -> Result<Vec<ChannelMessage>, AppError>;

    async fn add_role(&self, user_id: UserId, role_id: RoleId) -> Result<(), AppError>;

    async fn remove_role(&self, user_id: UserId, role_id: RoleId) -> Result<(), AppError>;

    /// Sends a direct message to a user.
    async fn direct_message(&self, user_id: UserId, content: &str) -> Result<(), AppError>;

    /// Posts a message in a guild channel.
    async fn channel_message(&self, channel_id: ChannelId, content: &str) -> Result<(), AppError>;
}

/// `GuildGateway` backed by Serenity's HTTP client.
///
/// Reads prefer the gateway cache when one is attached and fall back to the REST API,
/// so per-event lookups (roles, channel layout, a member's roles) stay off the rate
/// limiter while the cache is warm. Member listing always goes to the API because the
/// cache only holds members Discord has pushed to the bot.
pub struct SerenityGateway {
    http: Arc<Http>,
    cache: Option<Arc<Cache>>,
    guild_id: GuildId,
}

impl SerenityGateway {
    pub fn new(http: Arc<Http>, guild_id: GuildId) -> Self {
        Self {
            http,
            cache: None,
            guild_id,
        }
    }

    pub fn with_cache(mut self, cache: Arc<Cache>) -> Self {
        self.cache = Some(cache);
        self
    }

    async fn guild_channels(&self) -> Result<Vec<GuildChannel>, AppError> {
        let cached: Option<Vec<GuildChannel>> = self.cache.as_ref().and_then(|cache| {
            cache
                .guild(self.guild_id)
                .map(|guild| guild.channels.values().cloned().collect())
        });
        if let Some(channels) = cached {
            return Ok(channels);
        }

        Ok(self.http.get_channels(self.guild_id).await?)
    }
}

#[async_trait]
impl GuildGateway for SerenityGateway {
    async fn members(&self) -> Result<Vec<GuildMember>, AppError> {
        let mut members = Vec::new();
        let mut after = None;

        loop {
            let page = self
                .http
                .get_guild_members(self.guild_id, Some(MEMBERS_PER_REQUEST), after)
                .await?;
            let page_len = page.len() as u64;

            after = page.last().map(|member| member.user.id.get());
            members.extend(page.iter().map(GuildMember::from_member));

            if page_len < MEMBERS_PER_REQUEST {
                break;
            }
        }

        tracing::debug!(
            "Fetched {} members from Discord API for guild {}",
            members.len(),
            self.guild_id
        );

        Ok(members)
    }

    async fn member(&self, user_id: UserId) -> Result<GuildMember, AppError> {
        let cached = self.cache.as_ref().and_then(|cache| {
            cache
                .member(self.guild_id, user_id)
                .map(|member| GuildMember::from_member(&member))
        });
        if let Some(member) = cached {
            return Ok(member);
        }

        let member = self.http.get_member(self.guild_id, user_id).await?;
        Ok(GuildMember::from_member(&member))
    }

    async fn role_by_name(&self, name: &str) -> Result<Option<GuildRole>, AppError> {
        let cached = self.cache.as_ref().and_then(|cache| {
            cache.guild(self.guild_id).map(|guild| {
                guild
                    .roles
                    .values()
                    .find(|role| role.name == name)
                    .map(GuildRole::from_role)
            })
        });
        if let Some(role) = cached {
            return Ok(role);
        }

        let roles = self.http.get_guild_roles(self.guild_id).await?;
        Ok(roles
            .iter()
            .find(|role| role.name == name)
            .map(GuildRole::from_role))
    }

    async fn text_channel_by_name(&self, name: &str) -> Result<Option<ChannelId>, AppError> {
        let channels = self.guild_channels().await?;
        Ok(channels
            .iter()
            .find(|channel| channel.kind == ChannelType::Text && channel.name == name)
            .map(|channel| channel.id))
    }

    async fn parent_category_name(
        &self,
        channel_id: ChannelId,
    ) -> Result<Option<String>, AppError> {
        let channels = self.guild_channels().await?;
        Ok(find_parent_category_name(&channels, channel_id))
    }

    async fn recent_messages(
        &self,
        channel_id: ChannelId,
        limit: u8,
    ) -> Result<Vec<ChannelMessage>, AppError> {
        let messages = channel_id
            .messages(&self.http, GetMessages::new().limit(limit))
            .await?;
        Ok(messages.iter().map(ChannelMessage::from_message).collect())
    }

    async fn add_role(&self, user_id: UserId, role_id: RoleId) -> Result<(), AppError> {
        self.http
            .add_member_role(self.guild_id, user_id, role_id, Some(AUDIT_LOG_REASON))
            .await?;
        Ok(())
    }

    async fn remove_role(&self, user_id: UserId, role_id: RoleId) -> Result<(), AppError> {
        self.http
            .remove_member_role(self.guild_id, user_id, role_id, Some(AUDIT_LOG_REASON))
            .await?;
        Ok(())
    }

    async fn direct_message(&self, user_id: UserId, content: &str) -> Result<(), AppError> {
        user_id
            .direct_message(&self.http, CreateMessage::new().content(content))
            .await?;
        Ok(())
    }

    async fn channel_message(&self, channel_id: ChannelId, content: &str) -> Result<(), AppError> {
        channel_id
            .send_message(&self.http, CreateMessage::new().content(content))
            .await?;
        Ok(())
    }
}

/// Resolves the name of the category a channel is nested under.
///
/// Returns `None` when the channel is unknown (threads and DMs are not part of the
/// guild channel list), has no parent, or its parent is not a category.
pub fn find_parent_category_name(
    channels: &[GuildChannel],
    channel_id: ChannelId,
) -> Option<String> {
    let parent_id = channels
        .iter()
        .find(|channel| channel.id == channel_id)?
        .parent_id?;

    channels
        .iter()
        .find(|channel| channel.id == parent_id && channel.kind == ChannelType::Category)
        .map(|category| category.name.clone())
}
