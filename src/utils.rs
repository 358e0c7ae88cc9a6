use chrono::{DateTime, Local};
use ethers::types::Address;
use ethers::utils::to_checksum;
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use std::str::FromStr;

// Validate Solana address: anything that decodes as base58 is accepted
pub fn validate_solana_address(address: &str) -> bool {
    bs58::decode(address).into_vec().is_ok()
}

// Validate Ethereum address (hex form, EIP-55 checksum when mixed case)
pub fn validate_ethereum_address(address: &str) -> bool {
    lazy_static! {
        static ref RE: Regex = Regex::new(r"^(?:0[xX])?([0-9a-fA-F]{40})$").unwrap();
    }

    let digits = match RE.captures(address).and_then(|cap| cap.get(1)) {
        Some(digits) => digits.as_str(),
        None => return false,
    };

    let has_lower = digits.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = digits.chars().any(|c| c.is_ascii_uppercase());
    if !(has_lower && has_upper) {
        return true;
    }

    match Address::from_str(&format!("0x{}", digits)) {
        Ok(parsed) => {
            let checksummed = to_checksum(&parsed, None);
            let valid = checksummed[2..] == *digits;
            if !valid {
                debug!("Checksum mismatch for {}, expected {}", address, checksummed);
            }
            valid
        }
        Err(_) => false,
    }
}

// Format a ms-since-epoch timestamp in the local time zone
pub fn format_timestamp(timestamp_ms: i64) -> String {
    match DateTime::from_timestamp_millis(timestamp_ms) {
        Some(utc) => utc
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        None => timestamp_ms.to_string(),
    }
}
