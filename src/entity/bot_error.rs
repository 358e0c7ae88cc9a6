use super::Blockchain;

#[derive(Debug, thiserror::Error)]
pub enum BotError {
    #[error("{} is not installed", .0.wallet_name())]
    ProviderNotInstalled(Blockchain),

    #[error("{0} wallet returned no accounts")]
    NoAccounts(Blockchain),

    #[error("{0} wallet is not connected")]
    NotConnected(Blockchain),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Ethereum provider error: {0}")]
    Ethereum(String),

    #[error("Solana client error: {0}")]
    Solana(String),

    #[error("Failed to sign transaction: {0}")]
    Signing(String),

    #[error("Transaction was not confirmed: {0}")]
    Confirmation(String),
}
