//! Wallet and network capabilities handed to the bot at startup.
//!
//! Each capability mirrors what a browser wallet extension would inject into
//! the page. The bot never looks them up itself; they arrive through
//! [`ProviderEnvironment`], which makes every flow testable with fakes.
use anyhow::Result;
use async_trait::async_trait;
use ethers::types::{Address, TransactionRequest, H256};
use solana_sdk::{hash::Hash, pubkey::Pubkey, signature::Signature, transaction::Transaction};
use std::sync::Arc;

/// MetaMask-style account access and transaction submission
#[async_trait]
pub trait EthereumProvider: Send + Sync {
    /// `eth_requestAccounts`, may prompt the wallet owner
    async fn request_accounts(&self) -> Result<Vec<Address>>;

    /// `eth_accounts`
    async fn accounts(&self) -> Result<Vec<Address>>;

    /// Submit a transaction and wait until it is mined, returning its hash
    async fn send_transaction(&self, transaction: TransactionRequest) -> Result<H256>;
}

/// Phantom-style Solana wallet
#[async_trait]
pub trait SolanaWalletProvider: Send + Sync {
    fn is_phantom(&self) -> bool;

    async fn connect(&self) -> Result<()>;

    /// Public key of the connected account, `None` before `connect`
    fn public_key(&self) -> Option<Pubkey>;

    async fn sign_transaction(&self, transaction: Transaction) -> Result<Transaction>;
}

/// Connection to a Solana cluster
#[async_trait]
pub trait SolanaCluster: Send + Sync {
    async fn get_latest_blockhash(&self) -> Result<Hash>;

    /// Broadcast a bincode-serialized signed transaction
    async fn send_raw_transaction(&self, wire_transaction: &[u8]) -> Result<Signature>;

    /// Wait until the signature reaches confirmed commitment
    async fn confirm_transaction(&self, signature: &Signature) -> Result<()>;
}

/// Opens a cluster connection for an RPC endpoint
pub type ClusterFactory = Arc<dyn Fn(&str) -> Arc<dyn SolanaCluster> + Send + Sync>;

/// What a wallet slot holds: nothing, or one chain's provider
#[derive(Clone, Default)]
pub enum InjectedProvider {
    #[default]
    Absent,
    Ethereum(Arc<dyn EthereumProvider>),
    Solana(Arc<dyn SolanaWalletProvider>),
}

/// The `window.ethereum` / `window.solana` pair for one bot instance
#[derive(Clone, Default)]
pub struct ProviderEnvironment {
    ethereum: InjectedProvider,
    solana: InjectedProvider,
}

impl ProviderEnvironment {
    pub fn new(ethereum: InjectedProvider, solana: InjectedProvider) -> Self {
        Self { ethereum, solana }
    }

    pub fn with_ethereum(mut self, provider: Arc<dyn EthereumProvider>) -> Self {
        self.ethereum = InjectedProvider::Ethereum(provider);
        self
    }

    pub fn with_solana(mut self, provider: Arc<dyn SolanaWalletProvider>) -> Self {
        self.solana = InjectedProvider::Solana(provider);
        self
    }

    pub fn ethereum(&self) -> Option<Arc<dyn EthereumProvider>> {
        match &self.ethereum {
            InjectedProvider::Ethereum(provider) => Some(provider.clone()),
            _ => None,
        }
    }

    pub fn solana(&self) -> Option<Arc<dyn SolanaWalletProvider>> {
        match &self.solana {
            InjectedProvider::Solana(provider) => Some(provider.clone()),
            _ => None,
        }
    }
}
