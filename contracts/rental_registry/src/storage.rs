use rental_core::{AssetId, EscrowSlot};
use soroban_sdk::{contracttype, Env};

use crate::types::Order;

pub(crate) const DAY_IN_LEDGERS: u32 = 17280;
pub(crate) const LEND_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const LEND_LIFETIME_THRESHOLD: u32 = LEND_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Order(AssetId),
    Escrow(AssetId), // slot bound to the order of the same asset
}

fn bump(e: &Env, key: &DataKey) {
    e.storage()
        .persistent()
        .extend_ttl(key, LEND_LIFETIME_THRESHOLD, LEND_BUMP_AMOUNT);
}

pub fn has_order(e: &Env, asset: &AssetId) -> bool {
    e.storage().persistent().has(&DataKey::Order(asset.clone()))
}

pub fn read_order(e: &Env, asset: &AssetId) -> Option<Order> {
    let key = DataKey::Order(asset.clone());
    let order = e.storage().persistent().get(&key);
    if order.is_some() {
        bump(e, &key);
    }
    order
}

pub fn read_escrow(e: &Env, asset: &AssetId) -> Option<EscrowSlot> {
    let key = DataKey::Escrow(asset.clone());
    let slot = e.storage().persistent().get(&key);
    if slot.is_some() {
        bump(e, &key);
    }
    slot
}

pub fn write_order(e: &Env, order: &Order) {
    let key = DataKey::Order(order.asset.clone());
    e.storage().persistent().set(&key, order);
    bump(e, &key);
}

pub fn write_escrow(e: &Env, asset: &AssetId, slot: &EscrowSlot) {
    let key = DataKey::Escrow(asset.clone());
    e.storage().persistent().set(&key, slot);
    bump(e, &key);
}

/// Drops the order and its slot together.
pub fn remove_lend(e: &Env, asset: &AssetId) {
    e.storage().persistent().remove(&DataKey::Order(asset.clone()));
    e.storage().persistent().remove(&DataKey::Escrow(asset.clone()));
}
