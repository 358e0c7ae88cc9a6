use chrono::Utc;

use super::Blockchain;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeRecord {
    pub address: String,
    pub timestamp: i64, // ms since epoch
    pub blockchain: Blockchain,
    pub transaction_signature: String,
}

impl TradeRecord {
    /// Record a confirmed transfer, stamped with the current time
    pub fn confirmed(address: &str, blockchain: Blockchain, transaction_signature: String) -> Self {
        Self {
            address: address.to_string(),
            timestamp: Utc::now().timestamp_millis(),
            blockchain,
            transaction_signature,
        }
    }
}
