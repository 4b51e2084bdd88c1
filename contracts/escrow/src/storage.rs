use rental_core::EscrowSlot;
use soroban_sdk::{symbol_short, Env, Symbol};

pub(crate) const DAY_IN_LEDGERS: u32 = 17280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

fn k_slot() -> Symbol { symbol_short!("slot") }

pub fn read_slot(e: &Env) -> EscrowSlot {
    e.storage()
        .instance()
        .get(&k_slot())
        .expect("slot is written by the constructor")
}

pub fn write_slot(e: &Env, slot: &EscrowSlot) {
    e.storage().instance().set(&k_slot(), slot);
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}
