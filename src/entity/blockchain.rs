use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Blockchain {
    Ethereum,
    Solana,
}

impl Blockchain {
    /// Name of the browser-style wallet this chain is connected through
    pub fn wallet_name(&self) -> &'static str {
        match self {
            Blockchain::Ethereum => "MetaMask",
            Blockchain::Solana => "Phantom",
        }
    }
}

impl fmt::Display for Blockchain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Blockchain::Ethereum => write!(f, "Ethereum"),
            Blockchain::Solana => write!(f, "Solana"),
        }
    }
}
