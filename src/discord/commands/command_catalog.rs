// Discord commands module.
// Each command gets its own file.

use crate::core::moderation::ModerationService;
use std::sync::Arc;

pub mod english_only;

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Context<'a> = poise::Context<'a, Data, Error>;

/// Data that's shared across all commands and events.
pub struct Data {
    pub moderation: Arc<ModerationService>,
}
