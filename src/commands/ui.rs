use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::entity::{Blockchain, Dashboard};

pub const CONNECT_ETHEREUM: &str = "connect_ethereum";
pub const CONNECT_SOLANA: &str = "connect_solana";
pub const TRADE: &str = "trade";
pub const HISTORY: &str = "history";
pub const REFRESH: &str = "refresh";

/// Connect buttons only appear for wallets that are not connected yet
pub fn dashboard_keyboard(dashboard: &Dashboard) -> InlineKeyboardMarkup {
    let mut connect_row = Vec::new();
    if dashboard.address(Blockchain::Ethereum).is_none() {
        connect_row.push(InlineKeyboardButton::callback(
            "Connect Ethereum (MetaMask)",
            CONNECT_ETHEREUM,
        ));
    }
    if dashboard.address(Blockchain::Solana).is_none() {
        connect_row.push(InlineKeyboardButton::callback(
            "Connect Solana (Phantom)",
            CONNECT_SOLANA,
        ));
    }

    let mut rows = Vec::new();
    if !connect_row.is_empty() {
        rows.push(connect_row);
    }
    rows.push(vec![
        InlineKeyboardButton::callback("Start Trade", TRADE),
        InlineKeyboardButton::callback("Trade History", HISTORY),
        InlineKeyboardButton::callback("🔄 Refresh", REFRESH),
    ]);

    InlineKeyboardMarkup::new(rows)
}
