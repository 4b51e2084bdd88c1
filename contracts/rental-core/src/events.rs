//! Escrow-level events. Topics are `(name, collection, token_id)`.

use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::types::{AssetId, Rental};

pub const STAKE: Symbol = symbol_short!("stake");
pub const REDEEM: Symbol = symbol_short!("redeem");
pub const USER_INFO: Symbol = symbol_short!("user_info");
pub const PRICE_PER_DAY: Symbol = symbol_short!("price_day");
pub const MAX_DURATION: Symbol = symbol_short!("max_dur");

pub fn stake(e: &Env, asset: &AssetId, custodian: &Address) {
    e.events()
        .publish((STAKE, asset.collection.clone(), asset.token_id), custodian.clone());
}

pub fn redeem(e: &Env, asset: &AssetId, recipient: &Address) {
    e.events()
        .publish((REDEEM, asset.collection.clone(), asset.token_id), recipient.clone());
}

pub fn user_info(e: &Env, asset: &AssetId, rental: &Rental) {
    e.events().publish(
        (USER_INFO, asset.collection.clone(), asset.token_id),
        (rental.start, rental.end, rental.user.clone()),
    );
}

pub fn price_per_day(e: &Env, asset: &AssetId, price_per_day: i128) {
    e.events()
        .publish((PRICE_PER_DAY, asset.collection.clone(), asset.token_id), price_per_day);
}

pub fn max_duration(e: &Env, asset: &AssetId, max_rent_duration: u64) {
    e.events()
        .publish((MAX_DURATION, asset.collection.clone(), asset.token_id), max_rent_duration);
}
