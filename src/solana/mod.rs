// Re-export everything from submodules
pub mod client;
pub mod transfer;
pub mod utils;
pub mod wallet;

// Re-export commonly used items
pub use client::{rpc_cluster_factory, RpcCluster, DEVNET_URL};
pub use transfer::{build_sol_transfer, TRANSFER_LAMPORTS};
pub use utils::{lamports_to_sol, LAMPORTS_PER_SOL};
pub use wallet::{keypair_from_base58, parse_pubkey, KeypairWallet};
