// Text for the informational command. The Discord layer wraps it in an embed.

use super::moderation_models::{channel_mention, ModerationConfig};

/// Shown instead of an empty list.
pub const NO_CHANNELS_CONFIGURED: &str = "No channels configured";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelOverview {
    /// One `<#id>` per line
    pub monitored: String,
    pub redirect: String,
}

impl ChannelOverview {
    pub fn from_config(config: &ModerationConfig) -> Self {
        let monitored = if config.monitored_channels.is_empty() {
            NO_CHANNELS_CONFIGURED.to_string()
        } else {
            config
                .monitored_channels
                .iter()
                .map(|id| channel_mention(*id))
                .collect::<Vec<_>>()
                .join("\n")
        };

        Self {
            monitored,
            redirect: channel_mention(config.redirect_channel),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_channels_in_order() {
        let config = ModerationConfig::new("t".to_string(), vec![30, 10, 20], 99);
        let overview = ChannelOverview::from_config(&config);

        assert_eq!(overview.monitored, "<#30>\n<#10>\n<#20>");
        assert_eq!(overview.redirect, "<#99>");
    }

    #[test]
    fn test_empty_list_placeholder() {
        let config = ModerationConfig::new("t".to_string(), vec![], 99);
        let overview = ChannelOverview::from_config(&config);

        assert_eq!(overview.monitored, NO_CHANNELS_CONFIGURED);
    }
}
