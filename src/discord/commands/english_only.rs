use crate::core::moderation::ChannelOverview;
use crate::discord::commands::Context;
use crate::discord::Error;
use poise::serenity_prelude as serenity;

/// Get information about English-only channels
#[poise::command(slash_command, prefix_command, rename = "english-only")]
pub async fn english_only(ctx: Context<'_>) -> Result<(), Error> {
    let overview = ctx.data().moderation.overview();
    let embed = build_overview_embed(&overview);

    // Only the person who asked sees the reply
    ctx.send(poise::CreateReply::default().embed(embed).ephemeral(true)).await?;

    Ok(())
}

pub fn build_overview_embed(overview: &ChannelOverview) -> serenity::CreateEmbed {
    serenity::CreateEmbed::new()
        .title("English-Only Channels Information")
        .description("Here are the channels where English is enforced:")
        .color(serenity::Color::BLUE)
        .field("English-Only Channels", overview.monitored.as_str(), false)
        .field("Arabic Chat Channel", overview.redirect.as_str(), false)
        .footer(serenity::CreateEmbedFooter::new(
            "Use /english-only to see this information again",
        ))
}
