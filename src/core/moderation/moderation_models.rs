// Moderation domain models.
//
// These are pure domain types with no Discord dependencies.
// The Discord layer converts serenity messages into `InboundMessage` and turns
// a `ModerationDecision` back into Discord actions.

use std::fmt;

/// Channel suggested to users who want to chat in Arabic.
pub const DEFAULT_REDIRECT_CHANNEL_ID: u64 = 1081691213612199987;

/// Process-lifetime configuration for the English-only policy.
///
/// Built once at startup and shared read-only between every event.
#[derive(Clone, PartialEq, Eq)]
pub struct ModerationConfig {
    /// Discord bot token. Never logged.
    pub token: String,
    /// Channels where English is enforced, in configuration order.
    pub monitored_channels: Vec<u64>,
    /// Channel that Arabic speakers get pointed to.
    pub redirect_channel: u64,
}

impl ModerationConfig {
    /// Create a config. Duplicate channel ids are dropped, keeping the first.
    pub fn new(token: String, monitored_channels: Vec<u64>, redirect_channel: u64) -> Self {
        let mut unique = Vec::with_capacity(monitored_channels.len());
        for channel_id in monitored_channels {
            if !unique.contains(&channel_id) {
                unique.push(channel_id);
            }
        }

        Self {
            token,
            monitored_channels: unique,
            redirect_channel,
        }
    }

    pub fn is_monitored(&self, channel_id: u64) -> bool {
        self.monitored_channels.contains(&channel_id)
    }
}

// Hand-written so the token can't leak through `{:?}` in a log line.
impl fmt::Debug for ModerationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModerationConfig")
            .field("token", &"<redacted>")
            .field("monitored_channels", &self.monitored_channels)
            .field("redirect_channel", &self.redirect_channel)
            .finish()
    }
}

/// The parts of a Discord message the policy looks at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    pub message_id: u64,
    pub channel_id: u64,
    pub author_id: u64,
    /// Set by Discord for bot and webhook accounts, including ourselves.
    pub author_is_bot: bool,
    /// Raw, untrimmed content.
    pub content: String,
}

impl InboundMessage {
    /// Mention string for the author, e.g. `<@1234>`.
    pub fn author_mention(&self) -> String {
        user_mention(self.author_id)
    }
}

/// Why a message was left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Sent by a bot (including our own warnings)
    BotAuthor,
    /// Channel is not on the English-only list
    UnmonitoredChannel,
    /// Nothing but whitespace
    EmptyContent,
    /// No listed Arabic letters in the content
    NoArabic,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::BotAuthor => write!(f, "Bot Author"),
            SkipReason::UnmonitoredChannel => write!(f, "Unmonitored Channel"),
            SkipReason::EmptyContent => write!(f, "Empty Content"),
            SkipReason::NoArabic => write!(f, "No Arabic"),
        }
    }
}

/// What should happen to a single message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModerationDecision {
    /// Leave the message alone
    NoAction(SkipReason),
    /// Delete the message and post `warning_text` in the same channel
    Delete { warning_text: String },
}

impl ModerationDecision {
    #[allow(dead_code)]
    pub fn should_delete(&self) -> bool {
        matches!(self, ModerationDecision::Delete { .. })
    }

    pub fn warning_text(&self) -> Option<&str> {
        match self {
            ModerationDecision::Delete { warning_text } => Some(warning_text),
            ModerationDecision::NoAction(_) => None,
        }
    }
}

/// `<@id>` - how Discord renders a user mention.
pub fn user_mention(user_id: u64) -> String {
    format!("<@{}>", user_id)
}

/// `<#id>` - how Discord renders a channel link.
pub fn channel_mention(channel_id: u64) -> String {
    format!("<#{}>", channel_id)
}
