use super::{Blockchain, Connections, TradeRecord};

/// State owned by one chat's multi-connect component
#[derive(Clone, Default)]
pub struct Session {
    pub connections: Connections,
    pub trade_status: String,
    trade_history: Vec<TradeRecord>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_trade(&mut self, record: TradeRecord) {
        self.trade_history.push(record);
    }

    pub fn trade_history(&self) -> &[TradeRecord] {
        &self.trade_history
    }

    pub fn dashboard(&self) -> Dashboard {
        Dashboard {
            ethereum_address: self.connections.address(Blockchain::Ethereum),
            solana_address: self.connections.address(Blockchain::Solana),
            trade_status: self.trade_status.clone(),
            trade_history: self.trade_history.clone(),
        }
    }
}

/// Read-only copy of a session for rendering
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dashboard {
    pub ethereum_address: Option<String>,
    pub solana_address: Option<String>,
    pub trade_status: String,
    pub trade_history: Vec<TradeRecord>,
}

impl Dashboard {
    pub fn address(&self, blockchain: Blockchain) -> Option<&str> {
        match blockchain {
            Blockchain::Ethereum => self.ethereum_address.as_deref(),
            Blockchain::Solana => self.solana_address.as_deref(),
        }
    }
}
