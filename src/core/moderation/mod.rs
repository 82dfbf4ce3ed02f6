// Core moderation module - the English-only channel policy.
// Same layout as the other core features: models, the service, and the
// port the Discord layer implements.

pub mod channel_overview;
pub mod enforcement;
pub mod language;
pub mod moderation_models;
pub mod moderation_service;

pub use channel_overview::*;
pub use enforcement::*;
pub use moderation_models::*;
pub use moderation_service::*;
