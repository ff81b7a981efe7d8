use chrono::Duration;
use serenity::all::GuildId;
use std::path::PathBuf;

use crate::error::{config::ConfigError, AppError};
use crate::model::policy::InactivityPolicy;

const DEFAULT_LEDGER_PATH: &str = "activity.json";
const DEFAULT_SWEEP_INTERVAL_MINUTES: u64 = 60;
const DEFAULT_PRESENCE_TEXT: &str = "Trying to figure out if AFK is a lifestyle or a mistake";
const DEFAULT_STATS_COMMAND: &str = "!mia-stats";

pub struct Config {
    pub discord_token: String,
    /// Guild to operate on. When unset the first guild from the ready event is used.
    pub guild_id: Option<GuildId>,

    pub ledger_path: PathBuf,
    pub sweep_interval: std::time::Duration,

    pub presence_text: String,
    pub stats_command: String,

    pub policy: InactivityPolicy,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from a variable lookup.
    ///
    /// `from_env` passes the process environment; tests pass a map so they never touch
    /// global state. Empty values are treated as unset.
    pub fn from_vars<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let defaults = InactivityPolicy::default();

        let guild_id = match var("GUILD_ID") {
            Some(value) => Some(GuildId::new(parse_positive("GUILD_ID", &value)?)),
            None => None,
        };

        let inactive_period = match var("INACTIVE_PERIOD_HOURS") {
            Some(value) => {
                let hours = parse_positive("INACTIVE_PERIOD_HOURS", &value)?;
                i64::try_from(hours)
                    .ok()
                    .and_then(Duration::try_hours)
                    .ok_or_else(|| ConfigError::InvalidEnvVar {
                        name: "INACTIVE_PERIOD_HOURS".to_string(),
                        value,
                        reason: "period is too long".to_string(),
                    })?
            }
            None => defaults.inactive_period,
        };

        let sweep_minutes = match var("SWEEP_INTERVAL_MINUTES") {
            Some(value) => parse_positive("SWEEP_INTERVAL_MINUTES", &value)?,
            None => DEFAULT_SWEEP_INTERVAL_MINUTES,
        };

        let game_categories = match var("GAME_CATEGORIES") {
            Some(value) => {
                let names: std::collections::HashSet<String> = value
                    .split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(str::to_string)
                    .collect();
                if names.is_empty() {
                    return Err(ConfigError::InvalidEnvVar {
                        name: "GAME_CATEGORIES".to_string(),
                        value,
                        reason: "expected at least one category name".to_string(),
                    }
                    .into());
                }
                names
            }
            None => defaults.game_categories,
        };

        Ok(Self {
            discord_token: var("DISCORD_TOKEN")
                .ok_or_else(|| ConfigError::MissingEnvVar("DISCORD_TOKEN".to_string()))?,
            guild_id,
            ledger_path: var("LEDGER_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LEDGER_PATH)),
            sweep_interval: std::time::Duration::from_secs(sweep_minutes.saturating_mul(60)),
            presence_text: var("PRESENCE_TEXT")
                .unwrap_or_else(|| DEFAULT_PRESENCE_TEXT.to_string()),
            stats_command: var("STATS_COMMAND")
                .unwrap_or_else(|| DEFAULT_STATS_COMMAND.to_string()),
            policy: InactivityPolicy {
                marker_role_name: var("MIA_ROLE_NAME").unwrap_or(defaults.marker_role_name),
                exemption_channel_name: var("EXEMPTION_CHANNEL_NAME")
                    .unwrap_or(defaults.exemption_channel_name),
                exemption_token: var("EXEMPTION_TOKEN").unwrap_or(defaults.exemption_token),
                inactive_period,
                game_categories,
            },
        })
    }
}

fn parse_positive(name: &str, value: &str) -> Result<u64, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(parsed) if parsed > 0 => Ok(parsed),
        Ok(_) => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
            reason: "must be greater than zero".to_string(),
        }),
        Err(e) => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
            reason: e.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, AppError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|name| vars.get(name).cloned())
    }

    /// Tests loading with only the token set.
    ///
    /// Verifies every optional setting falls back to its default.
    ///
    /// Expected: Ok with defaults
    #[test]
    fn loads_defaults() {
        let config = config_from(&[("DISCORD_TOKEN", "secret")]).unwrap();

        assert_eq!(config.discord_token, "secret");
        assert_eq!(config.guild_id, None);
        assert_eq!(config.ledger_path, PathBuf::from("activity.json"));
        assert_eq!(config.sweep_interval, std::time::Duration::from_secs(3600));
        assert_eq!(config.stats_command, "!mia-stats");
        assert_eq!(config.policy, InactivityPolicy::default());
    }

    /// Tests that the token is required.
    ///
    /// Expected: Err(MissingEnvVar)
    #[test]
    fn requires_token() {
        let result = config_from(&[("MIA_ROLE_NAME", "Away")]);

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(ref name))) if name == "DISCORD_TOKEN"
        ));
    }

    /// Tests overriding every setting.
    ///
    /// Expected: Ok with the provided values, category list trimmed
    #[test]
    fn loads_overrides() {
        let config = config_from(&[
            ("DISCORD_TOKEN", "secret"),
            ("GUILD_ID", "123456789"),
            ("LEDGER_PATH", "/var/lib/mia/activity.json"),
            ("SWEEP_INTERVAL_MINUTES", "15"),
            ("INACTIVE_PERIOD_HOURS", "48"),
            ("MIA_ROLE_NAME", "Away"),
            ("EXEMPTION_CHANNEL_NAME", "vacation"),
            ("EXEMPTION_TOKEN", "!away"),
            ("GAME_CATEGORIES", "Games, Shooters ,,Strategy"),
        ])
        .unwrap();

        assert_eq!(config.guild_id, Some(GuildId::new(123456789)));
        assert_eq!(config.ledger_path, PathBuf::from("/var/lib/mia/activity.json"));
        assert_eq!(config.sweep_interval, std::time::Duration::from_secs(900));
        assert_eq!(config.policy.inactive_period, Duration::hours(48));
        assert_eq!(config.policy.marker_role_name, "Away");
        assert_eq!(config.policy.exemption_channel_name, "vacation");
        assert_eq!(config.policy.exemption_token, "!away");
        assert_eq!(config.policy.game_categories.len(), 3);
        assert!(config.policy.game_categories.contains("Shooters"));
    }

    /// Tests rejecting malformed numeric values.
    ///
    /// Expected: Err(InvalidEnvVar) for non-numeric and zero values
    #[test]
    fn rejects_invalid_numbers() {
        let non_numeric = config_from(&[("DISCORD_TOKEN", "secret"), ("GUILD_ID", "abc")]);
        let zero = config_from(&[("DISCORD_TOKEN", "secret"), ("SWEEP_INTERVAL_MINUTES", "0")]);

        assert!(matches!(
            non_numeric,
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { .. }))
        ));
        assert!(matches!(
            zero,
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { .. }))
        ));
    }

    /// Tests rejecting an empty category list.
    ///
    /// Expected: Err(InvalidEnvVar)
    #[test]
    fn rejects_empty_category_list() {
        let result = config_from(&[("DISCORD_TOKEN", "secret"), ("GAME_CATEGORIES", " , ")]);

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { .. }))
        ));
    }
}
