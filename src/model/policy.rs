//! Inactivity policy: which activity counts, who is exempt and who is inactive.
//!
//! The policy is pure data plus decision functions. It holds no Discord handles, so
//! every rule here is evaluated the same way by the sweep, the activity dispatcher and
//! the tests.

use chrono::{DateTime, Duration, Utc};
use serenity::all::UserId;
use std::collections::HashSet;

use crate::model::discord::ChannelMessage;

pub const DEFAULT_MARKER_ROLE_NAME: &str = "MIA";
pub const DEFAULT_EXEMPTION_CHANNEL_NAME: &str = "leave-of-absence";
pub const DEFAULT_EXEMPTION_TOKEN: &str = "!onleave";
pub const DEFAULT_INACTIVE_PERIOD_HOURS: i64 = 7 * 24;
pub const DEFAULT_GAME_CATEGORIES: &[&str] = &["Games"];

/// Number of recent exemption-channel messages inspected per sweep.
///
/// Discord's message history endpoint returns at most 100 messages per request.
pub const EXEMPTION_WINDOW: u8 = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct InactivityPolicy {
    /// Name of the role applied to inactive members.
    pub marker_role_name: String,
    /// Name of the channel where members post the exemption token.
    pub exemption_channel_name: String,
    /// Substring that marks a message as an exemption request.
    pub exemption_token: String,
    /// Members idle for longer than this are marked.
    pub inactive_period: Duration,
    /// Category names whose channels count as qualifying activity. Case-sensitive.
    pub game_categories: HashSet<String>,
}

impl Default for InactivityPolicy {
    fn default() -> Self {
        Self {
            marker_role_name: DEFAULT_MARKER_ROLE_NAME.to_string(),
            exemption_channel_name: DEFAULT_EXEMPTION_CHANNEL_NAME.to_string(),
            exemption_token: DEFAULT_EXEMPTION_TOKEN.to_string(),
            inactive_period: Duration::hours(DEFAULT_INACTIVE_PERIOD_HOURS),
            game_categories: DEFAULT_GAME_CATEGORIES
                .iter()
                .map(|name| name.to_string())
                .collect(),
        }
    }
}

impl InactivityPolicy {
    /// Whether a channel whose parent category has the given name is a qualifying channel.
    ///
    /// Channels without a parent category never qualify.
    pub fn is_in_game_category(&self, parent_category: Option<&str>) -> bool {
        parent_category.is_some_and(|name| self.game_categories.contains(name))
    }

    /// Collects the authors of messages that contain the exemption token.
    pub fn exempt_users(&self, messages: &[ChannelMessage]) -> HashSet<UserId> {
        messages
            .iter()
            .filter(|message| message.content.contains(&self.exemption_token))
            .map(|message| message.author_id)
            .collect()
    }

    /// Whether a member last seen at `last_seen` is inactive at `now`.
    ///
    /// Members with no recorded activity are treated as last seen at the Unix epoch.
    /// The comparison is strict: a member idle for exactly the inactive period is
    /// still active.
    pub fn is_inactive(&self, last_seen: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
        let last_seen = last_seen.unwrap_or(DateTime::UNIX_EPOCH);
        now - last_seen > self.inactive_period
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serenity::all::ChannelId;

    fn message(author: u64, content: &str) -> ChannelMessage {
        ChannelMessage {
            channel_id: ChannelId::new(1),
            author_id: UserId::new(author),
            content: content.to_string(),
        }
    }

    /// Tests category matching against the allowlist.
    ///
    /// Verifies exact, case-sensitive matching and that channels without a parent
    /// category never qualify.
    ///
    /// Expected: only the exact allow-listed name qualifies
    #[test]
    fn matches_game_category_exactly() {
        let policy = InactivityPolicy::default();

        assert!(policy.is_in_game_category(Some("Games")));
        assert!(!policy.is_in_game_category(Some("games")));
        assert!(!policy.is_in_game_category(Some("Off Topic")));
        assert!(!policy.is_in_game_category(None));
    }

    /// Tests that the token may appear anywhere in the message.
    ///
    /// Expected: authors of matching messages only
    #[test]
    fn collects_exempt_authors_by_substring() {
        let policy = InactivityPolicy::default();
        let messages = vec![
            message(1, "!onleave"),
            message(2, "heading out, !onleave until june"),
            message(3, "onleave"),
            message(4, "see you all soon"),
        ];

        let exempt = policy.exempt_users(&messages);

        assert_eq!(exempt.len(), 2);
        assert!(exempt.contains(&UserId::new(1)));
        assert!(exempt.contains(&UserId::new(2)));
    }

    /// Tests the inactivity threshold boundary.
    ///
    /// Expected: inactive only strictly past the period
    #[test]
    fn inactive_only_past_threshold() {
        let policy = InactivityPolicy::default();
        let now = Utc::now();

        assert!(policy.is_inactive(Some(now - Duration::days(8)), now));
        assert!(!policy.is_inactive(Some(now - Duration::days(7)), now));
        assert!(!policy.is_inactive(Some(now - Duration::hours(1)), now));
    }

    /// Tests that unknown members count as never seen.
    ///
    /// Expected: inactive
    #[test]
    fn never_seen_is_inactive() {
        let policy = InactivityPolicy::default();

        assert!(policy.is_inactive(None, Utc::now()));
    }
}
