use rental_core::AssetId;
use soroban_sdk::{contracttype, Address};

/// Marketplace record for a lent asset. The escrow slot bound to it lives
/// under the same asset key.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Order {
    pub lender: Address,
    pub asset: AssetId,
    pub create_time: u64,
    pub min_duration: u64,
    pub max_duration: u64,
    pub share_ratio: u32,   // lender's share of rent, settled off-chain
    pub payment_token: Address,
    pub valid_until: u64,
}
