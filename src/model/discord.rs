//! Discord domain models.
//!
//! Narrow views of the Serenity structs the bot works with. Services only see these
//! types, which keeps sweep and activity logic independent of how Discord objects are
//! fetched and lets tests build members and messages without a gateway connection.

use serenity::all::{ChannelId, Member, Message, Role, RoleId, UserId};

/// A member of the active guild.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildMember {
    /// Discord user ID.
    pub user_id: UserId,
    /// Display tag used in stats replies (`name` or `name#1234`).
    pub tag: String,
    /// Whether the account is a bot; bots are never tracked or marked.
    pub bot: bool,
    /// Roles currently assigned to the member.
    pub roles: Vec<RoleId>,
}

impl GuildMember {
    /// Converts a Serenity member at the gateway boundary.
    pub fn from_member(member: &Member) -> Self {
        Self {
            user_id: member.user.id,
            tag: member.user.tag(),
            bot: member.user.bot,
            roles: member.roles.clone(),
        }
    }

    pub fn has_role(&self, role_id: RoleId) -> bool {
        self.roles.contains(&role_id)
    }
}

/// A guild role, resolved by name.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildRole {
    pub role_id: RoleId,
    pub name: String,
}

impl GuildRole {
    pub fn from_role(role: &Role) -> Self {
        Self {
            role_id: role.id,
            name: role.name.clone(),
        }
    }
}

/// A message fetched from a channel's history.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelMessage {
    pub channel_id: ChannelId,
    pub author_id: UserId,
    pub content: String,
}

impl ChannelMessage {
    pub fn from_message(message: &Message) -> Self {
        Self {
            channel_id: message.channel_id,
            author_id: message.author.id,
            content: message.content.clone(),
        }
    }
}
