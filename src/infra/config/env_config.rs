// Environment-backed configuration.
//
// `main` loads `.env` first (dotenv), so everything here only ever reads
// variables. The parsing is done over a lookup closure so tests can feed in
// a plain map instead of touching the process environment.

use crate::core::moderation::{ModerationConfig, DEFAULT_REDIRECT_CHANNEL_ID};
use std::num::NonZeroU64;
use thiserror::Error;

pub const TOKEN_VAR: &str = "BOT_TOKEN";
pub const CHANNELS_VAR: &str = "ENGLISH_ONLY_CHANNEL_IDS";
pub const REDIRECT_VAR: &str = "ARABIC_CHAT_CHANNEL_ID";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("No bot token found. Please set BOT_TOKEN in .env file")]
    MissingToken,

    #[error("No channel IDs found. Please set ENGLISH_ONLY_CHANNEL_IDS in .env file")]
    NoChannels,

    #[error("Invalid channel ID in ENGLISH_ONLY_CHANNEL_IDS: {value:?}")]
    InvalidChannelId { value: String },

    #[error("Invalid ARABIC_CHAT_CHANNEL_ID: {value:?}")]
    InvalidRedirectChannel { value: String },
}

/// Build the config from the process environment.
pub fn from_env() -> Result<ModerationConfig, ConfigError> {
    from_lookup(|key| std::env::var(key).ok())
}

/// Build the config from any key -> value source.
pub fn from_lookup<F>(lookup: F) -> Result<ModerationConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let token = lookup(TOKEN_VAR)
        .filter(|token| !token.trim().is_empty())
        .ok_or(ConfigError::MissingToken)?;

    let channels = parse_channel_ids(&lookup(CHANNELS_VAR).unwrap_or_default())?;
    if channels.is_empty() {
        return Err(ConfigError::NoChannels);
    }

    let redirect_channel = match lookup(REDIRECT_VAR) {
        Some(raw) if !raw.trim().is_empty() => parse_id(&raw)
            .ok_or_else(|| ConfigError::InvalidRedirectChannel { value: raw.clone() })?,
        _ => DEFAULT_REDIRECT_CHANNEL_ID,
    };

    Ok(ModerationConfig::new(token, channels, redirect_channel))
}

/// Parse `"1, 2,,3"` into `[1, 2, 3]`. Blank entries are skipped.
pub fn parse_channel_ids(raw: &str) -> Result<Vec<u64>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            parse_id(entry).ok_or_else(|| ConfigError::InvalidChannelId {
                value: entry.to_string(),
            })
        })
        .collect()
}

// Discord snowflakes are never zero, and serenity panics on a zero id.
fn parse_id(raw: &str) -> Option<u64> {
    raw.trim().parse::<NonZeroU64>().ok().map(NonZeroU64::get)
}
