// English-only policy - core business logic.
//
// Decides, for one message at a time, whether it has to go.
// Stateless: the same message and config always produce the same decision,
// so the service can be shared across concurrently handled events without locks.
//
// NO Discord dependencies here - just pure domain logic.

use super::channel_overview::ChannelOverview;
use super::language::contains_arabic_script;
use super::moderation_models::{
    channel_mention, InboundMessage, ModerationConfig, ModerationDecision, SkipReason,
};
use std::sync::Arc;

/// Evaluate `message` against the English-only policy.
///
/// Checks run in order and the first one that matches wins:
/// bot author, unmonitored channel, blank content, then the Arabic check on
/// the raw content.
pub fn decide(message: &InboundMessage, config: &ModerationConfig) -> ModerationDecision {
    if message.author_is_bot {
        return ModerationDecision::NoAction(SkipReason::BotAuthor);
    }

    if !config.is_monitored(message.channel_id) {
        return ModerationDecision::NoAction(SkipReason::UnmonitoredChannel);
    }

    if message.content.trim().is_empty() {
        return ModerationDecision::NoAction(SkipReason::EmptyContent);
    }

    if !contains_arabic_script(&message.content) {
        return ModerationDecision::NoAction(SkipReason::NoArabic);
    }

    ModerationDecision::Delete {
        warning_text: warning_text(&message.author_mention(), config.redirect_channel),
    }
}

/// The message posted (and later removed) after deleting an Arabic message.
pub fn warning_text(author_mention: &str, redirect_channel: u64) -> String {
    format!(
        "{}, English only in this channel please. For Arabic, please use {}",
        author_mention,
        channel_mention(redirect_channel)
    )
}

/// Service wrapper so the Discord layer can hold the policy and its config
/// behind one `Arc`, like every other service in `Data`.
pub struct ModerationService {
    config: Arc<ModerationConfig>,
}

impl ModerationService {
    pub fn new(config: Arc<ModerationConfig>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ModerationConfig {
        &self.config
    }

    /// Decide what to do with a message.
    pub fn evaluate(&self, message: &InboundMessage) -> ModerationDecision {
        decide(message, &self.config)
    }

    /// Text for the informational `/english-only` command.
    pub fn overview(&self) -> ChannelOverview {
        ChannelOverview::from_config(&self.config)
    }
}

// ============================================================================
// TESTS
// ============================================================================
