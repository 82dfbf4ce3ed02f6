// Serenity implementation of the `ModerationActions` port.

use crate::core::moderation::{ActionError, ModerationActions};
use async_trait::async_trait;
use poise::serenity_prelude as serenity;
use std::sync::Arc;
use std::time::Duration;

/// Issues moderation calls through serenity's HTTP client.
pub struct SerenityActions {
    http: Arc<serenity::Http>,
}

impl SerenityActions {
    pub fn new(http: Arc<serenity::Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ModerationActions for SerenityActions {
    async fn delete_message(&self, channel_id: u64, message_id: u64) -> Result<(), ActionError> {
        serenity::ChannelId::new(channel_id)
            .delete_message(&self.http, serenity::MessageId::new(message_id))
            .await
            .map_err(|e| ActionError::Platform(e.to_string()))
    }

    async fn send_message(&self, channel_id: u64, text: &str) -> Result<u64, ActionError> {
        let sent = serenity::ChannelId::new(channel_id)
            .say(&self.http, text)
            .await
            .map_err(|e| ActionError::Platform(e.to_string()))?;

        Ok(sent.id.get())
    }

    fn schedule_delete(&self, channel_id: u64, message_id: u64, delay: Duration) {
        let http = Arc::clone(&self.http);

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            if let Err(e) = serenity::ChannelId::new(channel_id)
                .delete_message(&http, serenity::MessageId::new(message_id))
                .await
            {
                tracing::warn!(channel_id, message_id, "Failed to remove warning: {}", e);
            }
        });
    }
}
