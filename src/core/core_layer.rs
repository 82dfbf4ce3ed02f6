// The core module contains all business logic.
// Nothing in here knows about Discord; the discord layer adapts to it.

#[path = "moderation/mod.rs"]
pub mod moderation;
