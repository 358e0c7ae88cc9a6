use anyhow::Result;
use async_trait::async_trait;
use ethers::types::Address;
use log::{debug, error, info};
use std::str::FromStr;

use crate::entity::{Blockchain, BotError, Connections, EthereumConnection, SolanaConnection, TradeRecord};
use crate::ethereum::build_eth_transfer;
use crate::solana::{build_sol_transfer, parse_pubkey, TRANSFER_LAMPORTS};
use crate::utils;

pub const NO_ROUTE_MESSAGE: &str = "Please connect your wallet first or enter a valid address.";

/// Result of one trade attempt
#[derive(Debug, Clone, PartialEq)]
pub enum TradeOutcome {
    Completed(TradeRecord),
    Failed(Blockchain),
    /// No connected wallet accepted the address; nothing was sent
    NoRoute,
}

impl TradeOutcome {
    pub fn status_message(&self) -> String {
        match self {
            TradeOutcome::Completed(record) => format!(
                "{} trade successful! Tx: {}",
                record.blockchain, record.transaction_signature
            ),
            TradeOutcome::Failed(blockchain) => format!("Error executing {} trade", blockchain),
            TradeOutcome::NoRoute => NO_ROUTE_MESSAGE.to_string(),
        }
    }

    pub fn record(&self) -> Option<&TradeRecord> {
        match self {
            TradeOutcome::Completed(record) => Some(record),
            _ => None,
        }
    }
}

#[async_trait]
pub trait TradeInteractor: Send + Sync {
    /// Pick a chain for `address` and send the fixed transfer over it.
    /// Failures are logged and reported through the outcome, never retried.
    async fn execute_trade(&self, address: &str, connections: &Connections) -> TradeOutcome;
}

#[derive(Default)]
pub struct TradeInteractorImpl;

impl TradeInteractorImpl {
    pub fn new() -> Self {
        Self
    }

    async fn send_ethereum(&self, connection: &EthereumConnection, address: &str) -> Result<String> {
        let digits = address
            .strip_prefix("0x")
            .or_else(|| address.strip_prefix("0X"))
            .unwrap_or(address);
        let to = Address::from_str(&format!("0x{}", digits))
            .map_err(|e| BotError::InvalidAddress(format!("{}: {}", address, e)))?;
        let transaction = build_eth_transfer(connection.address, to);

        let hash = connection.provider.send_transaction(transaction).await?;

        Ok(format!("{:#x}", hash))
    }

    async fn send_solana(&self, connection: &SolanaConnection, address: &str) -> Result<String> {
        let from = connection.address;
        let to = parse_pubkey(address)?;

        let recent_blockhash = connection.cluster.get_latest_blockhash().await?;
        let transaction = build_sol_transfer(&from, &to, TRANSFER_LAMPORTS, recent_blockhash);
        debug!("Transaction prepared: {:?}", transaction);

        let signed = connection.wallet.sign_transaction(transaction).await?;
        debug!("Transaction signed: {:?}", signed.signatures);

        let wire_transaction = bincode::serialize(&signed)
            .map_err(|e| BotError::Solana(format!("Failed to serialize transaction: {}", e)))?;
        let signature = connection.cluster.send_raw_transaction(&wire_transaction).await?;
        info!("Transaction sent, signature: {}", signature);

        connection.cluster.confirm_transaction(&signature).await?;

        Ok(signature.to_string())
    }
}

#[async_trait]
impl TradeInteractor for TradeInteractorImpl {
    async fn execute_trade(&self, address: &str, connections: &Connections) -> TradeOutcome {
        match (&connections.ethereum, &connections.solana) {
            (Some(ethereum), _) if utils::validate_ethereum_address(address) => {
                info!("Sending Ethereum trade to {}", address);
                match self.send_ethereum(ethereum, address).await {
                    Ok(hash) => TradeOutcome::Completed(TradeRecord::confirmed(
                        address,
                        Blockchain::Ethereum,
                        hash,
                    )),
                    Err(e) => {
                        error!("Error sending Ethereum transaction: {:#}", e);
                        TradeOutcome::Failed(Blockchain::Ethereum)
                    }
                }
            }
            (_, Some(solana)) if utils::validate_solana_address(address) => {
                info!("Sending Solana trade to {}", address);
                match self.send_solana(solana, address).await {
                    Ok(signature) => TradeOutcome::Completed(TradeRecord::confirmed(
                        address,
                        Blockchain::Solana,
                        signature,
                    )),
                    Err(e) => {
                        error!("Error sending Solana transaction: {:#}", e);
                        TradeOutcome::Failed(Blockchain::Solana)
                    }
                }
            }
            _ => {
                info!("No connected wallet accepts address {:?}", address);
                TradeOutcome::NoRoute
            }
        }
    }
}
