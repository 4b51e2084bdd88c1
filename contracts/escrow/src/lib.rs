#![no_std]
use rental_core::{custody, events, AssetId, EscrowSlot, RentalError, RentalInfo, Terms, UserInfo};
use soroban_sdk::{contract, contractimpl, log, Address, Env};
use stellar_access::ownable::{self as ownable, Ownable};
use stellar_macros::{default_impl, only_owner};

mod storage;


/// Custody and rental state for one asset slot.
///
/// Every mutating entry point is restricted to the owner set at construction
/// (normally the marketplace that created the escrow). Ownership moves with
/// the two-step `transfer_ownership` / `accept_ownership` pair.
#[contract]
pub struct Escrow;

#[contractimpl]
impl Escrow {
    pub fn __constructor(
        e: &Env,
        owner: Address,
        price_per_day: i128,
        payment_token: Address,
        valid_until: u64,
        max_rent_duration: u64,
    ) {
        ownable::set_owner(e, &owner);
        let terms = Terms {
            price_per_day,
            max_rent_duration,
            payment_token,
        };
        storage::write_slot(e, &EscrowSlot::new(terms, valid_until));
    }

    /// Pulls the token into the escrow. The escrow must be approved for it;
    /// its current holder becomes the custodian.
    #[only_owner]
    pub fn stake(e: &Env, collection: Address, token_id: u32) -> Result<(), RentalError> {
        let asset = AssetId { collection, token_id };
        let me = e.current_contract_address();

        let mut slot = storage::read_slot(e);
        let holder = custody::holder_of(e, &asset);
        slot.stake(holder.clone(), asset.clone())?;
        if !custody::is_approved_or_owner(e, &asset, &me) {
            return Err(RentalError::NotApprovedOrOwner);
        }

        storage::write_slot(e, &slot);
        events::stake(e, &asset, &holder);
        log!(e, "escrow staked", asset.token_id, holder);

        custody::take(e, &asset, &me, &holder);
        Ok(())
    }

    /// Returns the token to its custodian once no rental is running.
    #[only_owner]
    pub fn redeem(e: &Env) -> Result<(), RentalError> {
        let mut slot = storage::read_slot(e);
        let released = slot.redeem(e.ledger().timestamp())?;

        storage::write_slot(e, &slot);
        events::redeem(e, &released.asset, &released.custodian);
        log!(e, "escrow redeemed", released.asset.token_id);

        custody::give_back(e, &released.asset, &released.custodian);
        Ok(())
    }

    #[only_owner]
    pub fn rent(e: &Env, duration: u64, user: Address) -> Result<(), RentalError> {
        let mut slot = storage::read_slot(e);
        let rental = slot.rent(e.ledger().timestamp(), duration, user)?;
        let asset = slot.asset().ok_or(RentalError::NotYetStaking)?;

        storage::write_slot(e, &slot);
        events::user_info(e, &asset, &rental);
        Ok(())
    }

    #[only_owner]
    pub fn set_price_per_day(e: &Env, price_per_day: i128) -> Result<(), RentalError> {
        let mut slot = storage::read_slot(e);
        slot.set_price_per_day(e.ledger().timestamp(), price_per_day)?;
        let asset = slot.asset().ok_or(RentalError::NotYetStaking)?;

        storage::write_slot(e, &slot);
        events::price_per_day(e, &asset, price_per_day);
        Ok(())
    }

    #[only_owner]
    pub fn set_max_rent_duration(e: &Env, max_rent_duration: u64) -> Result<(), RentalError> {
        let mut slot = storage::read_slot(e);
        slot.set_max_rent_duration(e.ledger().timestamp(), max_rent_duration)?;
        let asset = slot.asset().ok_or(RentalError::NotYetStaking)?;

        storage::write_slot(e, &slot);
        events::max_duration(e, &asset, max_rent_duration);
        Ok(())
    }

    pub fn could_rent(e: &Env) -> Result<bool, RentalError> {
        storage::read_slot(e).could_rent(e.ledger().timestamp())
    }

    pub fn could_redeem(e: &Env) -> Result<bool, RentalError> {
        storage::read_slot(e).could_redeem(e.ledger().timestamp())
    }

    pub fn is_valid(e: &Env) -> bool {
        storage::read_slot(e).is_valid(e.ledger().timestamp())
    }

    pub fn get_asset(e: &Env) -> Option<AssetId> {
        storage::read_slot(e).asset()
    }

    pub fn get_custodian(e: &Env) -> Option<Address> {
        storage::read_slot(e).custodian()
    }

    /// Current user; `None` once the rental window has closed.
    pub fn get_user(e: &Env) -> Option<Address> {
        storage::read_slot(e).current_user(e.ledger().timestamp())
    }

    pub fn get_user_info(e: &Env) -> UserInfo {
        storage::read_slot(e).user_info()
    }

    pub fn get_rental_info(e: &Env) -> RentalInfo {
        storage::read_slot(e).rental_info()
    }

    pub fn get_terms(e: &Env) -> Terms {
        storage::read_slot(e).terms
    }

    pub fn get_valid_until(e: &Env) -> u64 {
        storage::read_slot(e).valid_until
    }
}

#[default_impl]
#[contractimpl]
impl Ownable for Escrow {}
