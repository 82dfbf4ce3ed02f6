// Discord side of the English-only policy.

pub mod message_handler;
pub mod serenity_actions;

pub use message_handler::handle_message;
pub use serenity_actions::SerenityActions;
