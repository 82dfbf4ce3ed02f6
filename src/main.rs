// This is the entry point of the English-only moderation bot.
//
// **Architecture Overview:**
// - `core/` = Business logic (platform-agnostic): the Arabic check and the policy
// - `infra/` = Talking to the outside world (environment configuration)
// - `discord/` = Discord-specific adapters (commands, events)
//
// This file's job is to:
// 1. Load configuration (and refuse to start without it)
// 2. Initialize services (dependency injection)
// 3. Set up the Discord framework
// 4. Register commands and event handlers

// These attrs point each module declaration at a more descriptive root file
// so we don't end up with half a dozen mod.rs files that all look the same.
#[path = "core/core_layer.rs"]
mod core;
#[path = "discord/discord_layer.rs"]
mod discord;
#[path = "infra/infra_layer.rs"]
mod infra;

use crate::core::moderation::ModerationService;
use crate::discord::moderation::handle_message;
use crate::discord::{Data, Error};
use poise::serenity_prelude as serenity;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Event handler for non-command Discord events.
/// Every message goes through the English-only policy; commands are picked up
/// by poise separately, so unmonitored channels still get `!english-only`.
async fn event_handler(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, Data, Error>,
    data: &Data,
) -> Result<(), Error> {
    match event {
        serenity::FullEvent::Message { new_message } => {
            handle_message(ctx, new_message, data).await;
        }

        _ => {}
    }

    Ok(())
}

/// Log every framework error instead of letting it bubble up.
async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            tracing::error!("Error during setup: {}", error);
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            tracing::error!("Error in command `{}`: {}", ctx.command().name, error);
        }
        poise::FrameworkError::EventHandler { error, event, .. } => {
            tracing::error!("Error in {}: {}", event.snake_case_name(), error);
        }
        other => {
            if let Err(e) = poise::builtins::on_error(other).await {
                tracing::error!("Error while handling error: {}", e);
            }
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging so we can see what's happening (RUST_LOG overrides)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load environment variables from .env file (if it exists)
    dotenv::dotenv().ok();

    let config = match infra::config::from_env() {
        Ok(config) => Arc::new(config),
        Err(e) => {
            tracing::error!("{}", e);
            return Err(e.into());
        }
    };

    // ========================================================================
    // DEPENDENCY INJECTION
    // ========================================================================

    let moderation_service = Arc::new(ModerationService::new(Arc::clone(&config)));

    let data = Data {
        moderation: Arc::clone(&moderation_service),
    };

    // ========================================================================
    // DISCORD FRAMEWORK SETUP
    // ========================================================================

    let intents = serenity::GatewayIntents::GUILD_MESSAGES
        | serenity::GatewayIntents::MESSAGE_CONTENT // Required to read message content
        | serenity::GatewayIntents::GUILDS
        | serenity::GatewayIntents::GUILD_MEMBERS;

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![discord::commands::english_only::english_only()],
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some("!".into()),
                ..Default::default()
            },
            event_handler: |ctx, event, framework, data| {
                Box::pin(event_handler(ctx, event, framework, data))
            },
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(|ctx, ready, framework| {
            Box::pin(async move {
                // Global registration can take a while to show up in clients
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                tracing::info!("Slash commands synced!");

                let config = data.moderation.config();
                tracing::info!("{} has connected to Discord!", ready.user.name);
                tracing::info!("Monitoring channels: {:?}", config.monitored_channels);
                tracing::info!("Arabic chat channel: {}", config.redirect_channel);

                Ok(data)
            })
        })
        .build();

    tracing::info!("Starting bot...");

    let mut client = serenity::ClientBuilder::new(&config.token, intents)
        .framework(framework)
        .await?;

    client.start().await?;

    Ok(())
}
