use ethers::types::Address;
use ethers::utils::to_checksum;
use solana_sdk::pubkey::Pubkey;
use std::sync::Arc;

use super::Blockchain;
use crate::provider::{EthereumProvider, SolanaCluster, SolanaWalletProvider};

/// Connected MetaMask account and the provider it was granted through
#[derive(Clone)]
pub struct EthereumConnection {
    pub address: Address,
    pub provider: Arc<dyn EthereumProvider>,
}

/// Connected Phantom account plus the cluster connection opened for it
#[derive(Clone)]
pub struct SolanaConnection {
    pub address: Pubkey,
    pub wallet: Arc<dyn SolanaWalletProvider>,
    pub cluster: Arc<dyn SolanaCluster>,
}

#[derive(Clone)]
pub enum Connection {
    Ethereum(EthereumConnection),
    Solana(SolanaConnection),
}

impl Connection {
    pub fn blockchain(&self) -> Blockchain {
        match self {
            Connection::Ethereum(_) => Blockchain::Ethereum,
            Connection::Solana(_) => Blockchain::Solana,
        }
    }

    pub fn address(&self) -> String {
        match self {
            Connection::Ethereum(connection) => to_checksum(&connection.address, None),
            Connection::Solana(connection) => connection.address.to_string(),
        }
    }
}

/// Per-chain connection slots of one session
#[derive(Clone, Default)]
pub struct Connections {
    pub ethereum: Option<EthereumConnection>,
    pub solana: Option<SolanaConnection>,
}

impl Connections {
    pub fn is_connected(&self, blockchain: Blockchain) -> bool {
        self.address(blockchain).is_some()
    }

    pub fn address(&self, blockchain: Blockchain) -> Option<String> {
        match blockchain {
            Blockchain::Ethereum => self
                .ethereum
                .as_ref()
                .map(|c| to_checksum(&c.address, None)),
            Blockchain::Solana => self.solana.as_ref().map(|c| c.address.to_string()),
        }
    }

    /// Fill the slot for the connection's chain. An occupied slot is kept,
    /// so a chain only ever has one handle. Returns whether the slot was filled.
    pub fn attach(&mut self, connection: Connection) -> bool {
        match connection {
            Connection::Ethereum(c) if self.ethereum.is_none() => {
                self.ethereum = Some(c);
                true
            }
            Connection::Solana(c) if self.solana.is_none() => {
                self.solana = Some(c);
                true
            }
            _ => false,
        }
    }
}
