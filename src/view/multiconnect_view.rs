use anyhow::Result;
use async_trait::async_trait;
use teloxide::{prelude::*, types::ParseMode, utils::html, Bot};

use crate::commands::ui;
use crate::entity::{Blockchain, Dashboard, TradeRecord};
use crate::utils;

#[async_trait]
pub trait MultiConnectView: Send + Sync {
    async fn display_dashboard(&self, dashboard: &Dashboard) -> Result<()>;
    async fn display_wallet_connected(&self, blockchain: Blockchain, address: &str) -> Result<()>;
    async fn display_provider_missing(&self, blockchain: Blockchain) -> Result<()>;
    async fn display_connection_failed(&self, blockchain: Blockchain) -> Result<()>;
    async fn prompt_for_trade_address(&self) -> Result<()>;
    async fn display_trade_status(&self, status: &str) -> Result<()>;
    async fn display_trade_history(&self, history: &[TradeRecord]) -> Result<()>;
}

pub struct TelegramMultiConnectView {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramMultiConnectView {
    pub fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self { bot, chat_id }
    }

    async fn send_html(&self, text: String) -> Result<()> {
        self.bot
            .send_message(self.chat_id, text)
            .parse_mode(ParseMode::Html)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl MultiConnectView for TelegramMultiConnectView {
    async fn display_dashboard(&self, dashboard: &Dashboard) -> Result<()> {
        self.bot
            .send_message(self.chat_id, render_dashboard(dashboard))
            .parse_mode(ParseMode::Html)
            .reply_markup(ui::dashboard_keyboard(dashboard))
            .await?;
        Ok(())
    }

    async fn display_wallet_connected(&self, blockchain: Blockchain, address: &str) -> Result<()> {
        self.send_html(format!(
            "{} Wallet ({})\nConnected Address: <code>{}</code>",
            blockchain,
            blockchain.wallet_name(),
            html::escape(address)
        ))
        .await
    }

    async fn display_provider_missing(&self, blockchain: Blockchain) -> Result<()> {
        self.send_html(format!(
            "{} is not installed. No {} wallet is available to connect.",
            blockchain.wallet_name(),
            blockchain
        ))
        .await
    }

    async fn display_connection_failed(&self, blockchain: Blockchain) -> Result<()> {
        self.send_html(format!(
            "Could not connect to the {} wallet. Please try again.",
            blockchain
        ))
        .await
    }

    async fn prompt_for_trade_address(&self) -> Result<()> {
        self.bot
            .send_message(self.chat_id, "Enter Ethereum or Solana address:")
            .await?;
        Ok(())
    }

    async fn display_trade_status(&self, status: &str) -> Result<()> {
        self.send_html(format!("<i>{}</i>", html::escape(status)))
            .await
    }

    async fn display_trade_history(&self, history: &[TradeRecord]) -> Result<()> {
        self.send_html(render_trade_history(history)).await
    }
}

/// One history line: chain, address, local time and transaction id
pub fn render_trade_line(record: &TradeRecord) -> String {
    format!(
        "{}: {} - {} - Tx: {}",
        record.blockchain,
        record.address,
        utils::format_timestamp(record.timestamp),
        record.transaction_signature
    )
}

pub fn render_trade_history(history: &[TradeRecord]) -> String {
    let mut text = String::from("<b>Trade History</b>\n");

    if history.is_empty() {
        text.push_str("No trades yet.");
        return text;
    }

    for (index, record) in history.iter().enumerate() {
        text.push_str(&format!(
            "{}. {}\n",
            index + 1,
            html::escape(&render_trade_line(record))
        ));
    }

    text
}

fn render_wallet_section(dashboard: &Dashboard, blockchain: Blockchain) -> String {
    let state = match dashboard.address(blockchain) {
        Some(address) => format!("Connected Address: <code>{}</code>", html::escape(address)),
        None => "Not connected".to_string(),
    };

    format!(
        "<b>{} Wallet ({})</b>\n{}\n",
        blockchain,
        blockchain.wallet_name(),
        state
    )
}

/// Full multi-connect card: both wallets, latest status, trade history
pub fn render_dashboard(dashboard: &Dashboard) -> String {
    let mut text = String::from("<b>Multi-Connect Trading Bot</b>\n\n");

    text.push_str(&render_wallet_section(dashboard, Blockchain::Ethereum));
    text.push('\n');
    text.push_str(&render_wallet_section(dashboard, Blockchain::Solana));
    text.push('\n');

    if !dashboard.trade_status.is_empty() {
        text.push_str(&format!("<i>{}</i>\n\n", html::escape(&dashboard.trade_status)));
    }

    text.push_str(&render_trade_history(&dashboard.trade_history));

    text
}
