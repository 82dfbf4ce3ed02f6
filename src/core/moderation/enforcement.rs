// Carrying out a moderation decision.
//
// The policy only decides. This file owns the order of the side effects
// (delete original -> post warning -> remove warning later) and the rule that
// a failure for one message is logged and dropped, never propagated.
//
// The actual Discord calls, including the delayed delete, sit behind the
// `ModerationActions` port so the sequence can be tested without a gateway
// connection. Nothing here sleeps or spawns.

use super::moderation_models::{InboundMessage, ModerationDecision};
use async_trait::async_trait;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// How long the warning stays in the channel.
pub const WARNING_LIFETIME: Duration = Duration::from_secs(10);

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Error)]
pub enum ActionError {
    #[error("Discord API error: {0}")]
    Platform(String),
}

// ============================================================================
// ACTIONS TRAIT (PORT)
// ============================================================================

/// Outbound calls needed to enforce a decision.
#[async_trait]
pub trait ModerationActions: Send + Sync {
    async fn delete_message(&self, channel_id: u64, message_id: u64) -> Result<(), ActionError>;

    /// Post `text` in the channel. Returns the new message's id.
    async fn send_message(&self, channel_id: u64, text: &str) -> Result<u64, ActionError>;

    /// Delete a message once `delay` has passed, without waiting for it.
    /// The implementation logs its own failures.
    fn schedule_delete(&self, channel_id: u64, message_id: u64, delay: Duration);
}

/// The step that failed while enforcing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnforcementStep {
    DeleteOriginal,
    SendWarning,
}

impl fmt::Display for EnforcementStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnforcementStep::DeleteOriginal => write!(f, "delete original message"),
            EnforcementStep::SendWarning => write!(f, "send warning"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnforcementOutcome {
    /// Decision was `NoAction`
    Skipped,
    /// Original deleted, warning posted and its removal scheduled
    Enforced { warning_id: u64 },
    /// Gave up at `step`; the error was already logged
    Failed { step: EnforcementStep },
}

/// Apply `decision` to `message`.
///
/// Never returns an error: whatever goes wrong is logged and the caller moves
/// on to the next event. Steps after the first failure are skipped.
pub async fn enforce<A>(
    actions: &A,
    message: &InboundMessage,
    decision: &ModerationDecision,
) -> EnforcementOutcome
where
    A: ModerationActions + ?Sized,
{
    let Some(warning_text) = decision.warning_text() else {
        return EnforcementOutcome::Skipped;
    };

    tracing::info!(
        channel_id = message.channel_id,
        message_id = message.message_id,
        author_id = message.author_id,
        "Deleting message with Arabic"
    );

    if let Err(e) = actions
        .delete_message(message.channel_id, message.message_id)
        .await
    {
        return failed(message, EnforcementStep::DeleteOriginal, &e);
    }

    let warning_id = match actions.send_message(message.channel_id, warning_text).await {
        Ok(id) => id,
        Err(e) => return failed(message, EnforcementStep::SendWarning, &e),
    };

    actions.schedule_delete(message.channel_id, warning_id, WARNING_LIFETIME);

    EnforcementOutcome::Enforced { warning_id }
}

fn failed(
    message: &InboundMessage,
    step: EnforcementStep,
    error: &ActionError,
) -> EnforcementOutcome {
    tracing::error!(
        channel_id = message.channel_id,
        message_id = message.message_id,
        "Failed to {}: {}",
        step,
        error
    );
    EnforcementOutcome::Failed { step }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::moderation::SkipReason;
    use dashmap::{DashMap, DashSet};
    use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

    /// In-memory stand-in for Discord that records every call.
    struct RecordingActions {
        /// message_id -> channel_id
        deleted: DashMap<u64, u64>,
        /// message_id -> (channel_id, text)
        sent: DashMap<u64, (u64, String)>,
        next_id: AtomicU64,
        /// message_id -> (channel_id, delay)
        scheduled: DashMap<u64, (u64, Duration)>,
        fail_deletes: DashSet<u64>,
        fail_send: AtomicBool,
    }

    impl RecordingActions {
        fn new() -> Self {
            Self {
                deleted: DashMap::new(),
                sent: DashMap::new(),
                scheduled: DashMap::new(),
                next_id: AtomicU64::new(5000),
                fail_deletes: DashSet::new(),
                fail_send: AtomicBool::new(false),
            }
        }
    }

    #[async_trait]
    impl ModerationActions for RecordingActions {
        async fn delete_message(
            &self,
            channel_id: u64,
            message_id: u64,
        ) -> Result<(), ActionError> {
            if self.fail_deletes.contains(&message_id) {
                return Err(ActionError::Platform("Unknown Message".to_string()));
            }
            self.deleted.insert(message_id, channel_id);
            Ok(())
        }

        async fn send_message(&self, channel_id: u64, text: &str) -> Result<u64, ActionError> {
            if self.fail_send.load(Ordering::SeqCst) {
                return Err(ActionError::Platform("Missing Permissions".to_string()));
            }
            let id = self.next_id.fetch_add(1, Ordering::SeqCst);
            self.sent.insert(id, (channel_id, text.to_string()));
            Ok(id)
        }

        fn schedule_delete(&self, channel_id: u64, message_id: u64, delay: Duration) {
            self.scheduled.insert(message_id, (channel_id, delay));
        }
    }

    fn arabic_message() -> InboundMessage {
        InboundMessage {
            message_id: 1,
            channel_id: 10,
            author_id: 42,
            author_is_bot: false,
            content: "مرحبا".to_string(),
        }
    }

    fn delete_decision() -> ModerationDecision {
        ModerationDecision::Delete {
            warning_text: "<@42>, English only in this channel please.".to_string(),
        }
    }

    #[tokio::test]
    async fn test_full_sequence() {
        let actions = RecordingActions::new();
        let outcome = enforce(&actions, &arabic_message(), &delete_decision()).await;

        let warning_id = match outcome {
            EnforcementOutcome::Enforced { warning_id } => warning_id,
            other => panic!("expected Enforced, got {:?}", other),
        };

        assert_eq!(actions.deleted.get(&1).map(|c| *c), Some(10));
        let (channel_id, text) = actions.sent.get(&warning_id).unwrap().clone();
        assert_eq!(channel_id, 10);
        assert!(text.starts_with("<@42>"));

        // Warning removal is handed off with a ten second delay, not done inline
        assert!(!actions.deleted.contains_key(&warning_id));
        assert_eq!(
            actions.scheduled.get(&warning_id).map(|s| *s),
            Some((10, Duration::from_secs(10)))
        );
        assert_eq!(actions.scheduled.len(), 1);
    }

    #[tokio::test]
    async fn test_no_action_touches_nothing() {
        let actions = RecordingActions::new();
        let decision = ModerationDecision::NoAction(SkipReason::NoArabic);

        let outcome = enforce(&actions, &arabic_message(), &decision).await;

        assert_eq!(outcome, EnforcementOutcome::Skipped);
        assert!(actions.deleted.is_empty());
        assert!(actions.sent.is_empty());
        assert!(actions.scheduled.is_empty());
    }

    #[tokio::test]
    async fn test_delete_failure_stops_sequence() {
        let actions = RecordingActions::new();
        actions.fail_deletes.insert(1);

        let outcome = enforce(&actions, &arabic_message(), &delete_decision()).await;

        assert_eq!(
            outcome,
            EnforcementOutcome::Failed {
                step: EnforcementStep::DeleteOriginal
            }
        );
        assert!(actions.sent.is_empty());
        assert!(actions.scheduled.is_empty());
    }

    #[tokio::test]
    async fn test_send_failure_is_contained() {
        let actions = RecordingActions::new();
        actions.fail_send.store(true, Ordering::SeqCst);

        let outcome = enforce(&actions, &arabic_message(), &delete_decision()).await;

        assert_eq!(
            outcome,
            EnforcementOutcome::Failed {
                step: EnforcementStep::SendWarning
            }
        );
        // Original is gone even though the warning never made it
        assert!(actions.deleted.contains_key(&1));
        assert!(actions.scheduled.is_empty());

        // Next message is handled normally
        actions.fail_send.store(false, Ordering::SeqCst);
        let mut next = arabic_message();
        next.message_id = 2;
        let outcome = enforce(&actions, &next, &delete_decision()).await;
        assert!(matches!(outcome, EnforcementOutcome::Enforced { .. }));
    }
}
