use anyhow::{Context, Result};
use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Telegram bot token
    pub telegram_bot_token: String,

    /// JSON-RPC endpoint acting as the injected Ethereum provider
    #[serde(default)]
    pub ethereum_rpc_url: Option<String>,

    /// Base58 secret of the keypair acting as the injected Solana wallet
    #[serde(default)]
    pub solana_keypair: Option<String>,

    /// Only this Telegram user may drive the bot, when set
    #[serde(default)]
    pub owner_telegram_id: Option<i64>,
}

impl Config {
    /// Creates the configuration from environment variables (and `.env`, loaded by the caller)
    pub fn from_env() -> Result<Self> {
        let settings = ::config::Config::builder()
            .add_source(::config::Environment::default().try_parsing(true))
            .build()
            .context("Failed to read environment")?;

        Self::from_settings(settings)
    }

    pub fn from_settings(settings: ::config::Config) -> Result<Self> {
        let mut config: Self = settings
            .try_deserialize()
            .context("Invalid configuration (TELEGRAM_BOT_TOKEN must be set in environment variables)")?;

        // Empty variables mean "not installed"
        config.ethereum_rpc_url = config.ethereum_rpc_url.filter(|url| !url.trim().is_empty());
        config.solana_keypair = config.solana_keypair.filter(|key| !key.trim().is_empty());

        Ok(config)
    }

    pub fn is_authorized(&self, telegram_id: Option<i64>) -> bool {
        match self.owner_telegram_id {
            Some(owner) => telegram_id == Some(owner),
            None => true,
        }
    }
}
