//! Transaction building for the fixed SOL transfer.

use solana_sdk::hash::Hash;
use solana_sdk::message::Message;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::system_instruction;
use solana_sdk::transaction::Transaction;

/// Every Solana trade moves exactly one SOL
pub const TRANSFER_LAMPORTS: u64 = 1_000_000_000;

/// Builds an unsigned SOL transfer with `from` as fee payer, anchored to
/// `recent_blockhash`. The wallet signs it afterwards.
pub fn build_sol_transfer(
    from: &Pubkey,
    to: &Pubkey,
    lamports: u64,
    recent_blockhash: Hash,
) -> Transaction {
    let instruction = system_instruction::transfer(from, to, lamports);
    let message = Message::new_with_blockhash(&[instruction], Some(from), &recent_blockhash);
    Transaction::new_unsigned(message)
}
