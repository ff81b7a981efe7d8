//! Text of the messages the bot sends to members.

use chrono::Duration;

use crate::model::{discord::GuildMember, policy::InactivityPolicy};

/// Discord rejects messages longer than 2000 characters.
const MAX_MESSAGE_LENGTH: usize = 2000;

/// Direct message sent when a member receives the marker role.
pub fn marked(policy: &InactivityPolicy) -> String {
    format!(
        "Hey! You've been given the **{}** role because we haven't seen you around in {}. \
         Send a message or hop into a voice channel in one of our game categories and it \
         will be removed automatically. Going away for a while? Post `{}` in #{} so we know.",
        policy.marker_role_name,
        period_text(policy.inactive_period),
        policy.exemption_token,
        policy.exemption_channel_name,
    )
}

/// Human-readable inactive period: whole days when it divides evenly, hours otherwise.
fn period_text(period: Duration) -> String {
    let hours = period.num_hours();
    let (amount, unit) = if hours >= 24 && hours % 24 == 0 {
        (hours / 24, "day")
    } else {
        (hours, "hour")
    };

    if amount == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", amount, unit)
    }
}

/// Direct message sent when activity clears the marker role.
pub fn welcome_back(policy: &InactivityPolicy) -> String {
    format!(
        "Welcome back! Your **{}** role has been removed.",
        policy.marker_role_name
    )
}

/// Channel reply for the stats command.
///
/// Lists member tags until the reply would exceed Discord's message length limit, then
/// summarizes the remainder.
pub fn stats(role_name: &str, members: &[GuildMember]) -> String {
    if members.is_empty() {
        return format!("No members currently have the **{}** role.", role_name);
    }

    let mut reply = format!(
        "**{}** member(s) currently have the **{}** role:",
        members.len(),
        role_name
    );

    for (listed, member) in members.iter().enumerate() {
        let remaining = members.len() - listed;
        let suffix = format!("\n…and {} more", remaining);
        let line = format!("\n- {}", member.tag);

        // The last member needs no room for a remainder summary
        let reserved = if remaining == 1 {
            0
        } else {
            suffix.chars().count()
        };
        if reply.chars().count() + line.chars().count() + reserved > MAX_MESSAGE_LENGTH {
            reply.push_str(&suffix);
            return reply;
        }
        reply.push_str(&line);
    }

    reply
}

/// Channel reply for the stats command when the marker role does not exist.
pub fn role_not_found(role_name: &str) -> String {
    format!("Role **{}** not found.", role_name)
}
