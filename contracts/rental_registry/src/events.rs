use rental_core::{AssetId, Rental};
use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::types::Order;

pub const CREATED: Symbol = symbol_short!("created");
pub const CANCELLED: Symbol = symbol_short!("cancelled");
pub const FULFILLED: Symbol = symbol_short!("fulfilled");

pub fn created(e: &Env, order: &Order) {
    e.events().publish(
        (CREATED, order.asset.collection.clone(), order.asset.token_id),
        (
            order.lender.clone(),
            order.min_duration,
            order.max_duration,
            order.share_ratio,
            order.payment_token.clone(),
            order.valid_until,
        ),
    );
}

pub fn cancelled(e: &Env, asset: &AssetId, lender: &Address) {
    e.events()
        .publish((CANCELLED, asset.collection.clone(), asset.token_id), lender.clone());
}

pub fn fulfilled(e: &Env, order: &Order, taker: &Address, rental: &Rental) {
    e.events().publish(
        (FULFILLED, order.asset.collection.clone(), order.asset.token_id),
        (
            order.lender.clone(),
            taker.clone(),
            rental.user.clone(),
            rental.start,
            rental.end,
            order.share_ratio,
            order.payment_token.clone(),
        ),
    );
}
