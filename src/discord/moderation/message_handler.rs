// Discord-specific message handling - translates serenity messages into the
// core policy's input and hands the decision to the enforcer.
//
// This layer is THIN - no policy here, just translation.

use super::SerenityActions;
use crate::core::moderation::{enforce, EnforcementOutcome, InboundMessage, ModerationDecision};
use crate::discord::Data;
use poise::serenity_prelude as serenity;
use std::sync::Arc;

/// Run the English-only policy on a freshly received message.
///
/// Never fails: problems talking to Discord are logged inside `enforce`.
pub async fn handle_message(ctx: &serenity::Context, msg: &serenity::Message, data: &Data) {
    let inbound = to_inbound(msg);
    if !inbound.author_is_bot && data.moderation.config().is_monitored(inbound.channel_id) {
        tracing::debug!(
            channel_id = inbound.channel_id,
            content = %inbound.content,
            "Processing message in monitored channel"
        );
    }

    let decision = data.moderation.evaluate(&inbound);

    if let ModerationDecision::NoAction(reason) = &decision {
        tracing::trace!(channel_id = inbound.channel_id, "Message left alone: {}", reason);
        return;
    }

    let actions = SerenityActions::new(Arc::clone(&ctx.http));
    match enforce(&actions, &inbound, &decision).await {
        EnforcementOutcome::Enforced { warning_id } => {
            tracing::debug!(
                channel_id = inbound.channel_id,
                warning_id,
                "Warning posted, removal scheduled"
            );
        }
        EnforcementOutcome::Failed { step } => {
            tracing::debug!(channel_id = inbound.channel_id, "Moderation stopped at: {}", step);
        }
        EnforcementOutcome::Skipped => {}
    }
}

fn to_inbound(msg: &serenity::Message) -> InboundMessage {
    InboundMessage {
        message_id: msg.id.get(),
        channel_id: msg.channel_id.get(),
        author_id: msg.author.id.get(),
        author_is_bot: msg.author.bot,
        content: msg.content.clone(),
    }
}
