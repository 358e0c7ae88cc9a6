use anyhow::{anyhow, Result};
use async_trait::async_trait;
use log::info;
use solana_sdk::{pubkey::Pubkey, signature::Keypair, signer::Signer, transaction::Transaction};
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::entity::{Blockchain, BotError};
use crate::provider::SolanaWalletProvider;

/// Phantom-compatible wallet holding a local keypair.
///
/// Behaves like the extension: the public key is hidden until `connect`
/// succeeds, and signing is refused before that.
pub struct KeypairWallet {
    keypair: Keypair,
    connected: AtomicBool,
}

impl KeypairWallet {
    pub fn new(keypair: Keypair) -> Self {
        Self {
            keypair,
            connected: AtomicBool::new(false),
        }
    }

    /// Load the wallet from a base58 encoded 64-byte secret
    pub fn from_base58(keypair_base58: &str) -> Result<Self> {
        Ok(Self::new(keypair_from_base58(keypair_base58)?))
    }

    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SolanaWalletProvider for KeypairWallet {
    fn is_phantom(&self) -> bool {
        true
    }

    async fn connect(&self) -> Result<()> {
        self.connected.store(true, Ordering::SeqCst);
        info!("Keypair wallet connected: {}", self.keypair.pubkey());
        Ok(())
    }

    fn public_key(&self) -> Option<Pubkey> {
        self.is_connected().then(|| self.keypair.pubkey())
    }

    async fn sign_transaction(&self, mut transaction: Transaction) -> Result<Transaction> {
        if !self.is_connected() {
            return Err(BotError::NotConnected(Blockchain::Solana).into());
        }

        let recent_blockhash = transaction.message.recent_blockhash;
        transaction
            .try_sign(&[&self.keypair], recent_blockhash)
            .map_err(|e| BotError::Signing(e.to_string()))?;

        Ok(transaction)
    }
}

/// Restore Keypair from base58 string (64 bytes).
pub fn keypair_from_base58(keypair_base58: &str) -> Result<Keypair> {
    let keypair_bytes = bs58::decode(keypair_base58)
        .into_vec()
        .map_err(|e| anyhow!("Failed to decode base58 keypair: {}", e))?;

    if keypair_bytes.len() != 64 {
        return Err(anyhow!("Invalid keypair length: {}", keypair_bytes.len()));
    }

    let keypair = Keypair::from_bytes(&keypair_bytes)
        .map_err(|e| anyhow!("Failed to create keypair from bytes: {}", e))?;

    Ok(keypair)
}

/// Convert base58 string to Solana `Pubkey`.
pub fn parse_pubkey(address: &str) -> Result<Pubkey> {
    Pubkey::from_str(address).map_err(|e| BotError::InvalidAddress(format!("{}: {}", address, e)).into())
}
