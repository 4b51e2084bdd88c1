use soroban_sdk::{contracttype, Address};

/// One rentable unit: a token inside an NFT collection.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssetId {
    pub collection: Address,
    pub token_id: u32,
}

/// Custody held by an escrow slot. The custodian gets the asset back on redeem.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Custody {
    pub custodian: Address,
    pub asset: AssetId,
}

/// An outstanding or finished rental; `end` decides whether it is still active.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Rental {
    pub start: u64,
    pub end: u64,
    pub user: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Terms {
    pub price_per_day: i128,
    pub max_rent_duration: u64, // seconds
    pub payment_token: Address,
}

/// Rental window as reported to readers; zeroed when nothing was rented.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserInfo {
    pub start: u64,
    pub end: u64,
    pub user: Option<Address>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RentalInfo {
    pub user_info: UserInfo,
    pub payment_token: Address,
    pub price_per_day: i128,
}
