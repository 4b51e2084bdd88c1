#![no_std]
use rental_core::{custody, events as escrow_events, AssetId, EscrowSlot, RentalError, Terms};
use soroban_sdk::{contract, contractimpl, log, Address, Env};

mod events;
mod storage;
mod types;


pub use types::Order;

#[contract]
pub struct RentalRegistry;

#[contractimpl]
impl RentalRegistry {
    /// Lend an NFT. The lender must own the token or be approved for it.
    /// A fresh escrow slot takes custody and the order is recorded under
    /// the asset key. Slots start at a price of zero per day; the lender
    /// sets it with `set_price_per_day`.
    ///
    /// `min_duration` and `share_ratio` are recorded on the order for
    /// off-chain settlement and are not enforced here. `max_duration`
    /// becomes the slot's `max_rent_duration`.
    pub fn create_order(
        e: Env,
        lender: Address,
        asset: AssetId,
        valid_until: u64,
        min_duration: u64,
        max_duration: u64,
        share_ratio: u32,
        payment_token: Address,
    ) -> Result<(), RentalError> {
        lender.require_auth();

        if storage::has_order(&e, &asset) {
            return Err(RentalError::AlreadyLent);
        }
        if !custody::is_approved_or_owner(&e, &asset, &lender) {
            return Err(RentalError::NotApprovedOrOwner);
        }

        let holder = custody::holder_of(&e, &asset);
        let terms = Terms {
            price_per_day: 0,
            max_rent_duration: max_duration,
            payment_token: payment_token.clone(),
        };
        let mut slot = EscrowSlot::new(terms, valid_until);
        slot.stake(lender.clone(), asset.clone())?;

        let order = Order {
            lender: lender.clone(),
            asset: asset.clone(),
            create_time: e.ledger().timestamp(),
            min_duration,
            max_duration,
            share_ratio,
            payment_token,
            valid_until,
        };
        storage::write_escrow(&e, &asset, &slot);
        storage::write_order(&e, &order);

        escrow_events::stake(&e, &asset, &lender);
        events::created(&e, &order);
        log!(&e, "order created", asset.token_id, lender);

        custody::take(&e, &asset, &lender, &holder);
        Ok(())
    }

    /// Withdraw a lent NFT. Only possible while nobody is renting it.
    ///
    /// The token goes back to the lender recorded as custodian. When an
    /// approved operator created the order, that is the operator and not
    /// the account that owned the token before lending.
    pub fn cancel_order(e: Env, lender: Address, asset: AssetId) -> Result<(), RentalError> {
        lender.require_auth();

        let (order, mut slot) = Self::load(&e, &asset)?;
        if order.lender != lender {
            return Err(RentalError::NotLender);
        }
        let released = slot.redeem(e.ledger().timestamp())?;

        storage::remove_lend(&e, &asset);

        escrow_events::redeem(&e, &asset, &released.custodian);
        events::cancelled(&e, &asset, &lender);
        log!(&e, "order cancelled", asset.token_id);

        custody::give_back(&e, &released.asset, &released.custodian);
        Ok(())
    }

    /// Rent a lent NFT on behalf of `renter` for `duration` seconds.
    /// Settlement of the rent happens outside this contract.
    pub fn fulfill_order(
        e: Env,
        taker: Address,
        asset: AssetId,
        duration: u64,
        renter: Address,
    ) -> Result<(), RentalError> {
        taker.require_auth();

        let (order, mut slot) = Self::load(&e, &asset)?;
        let rental = slot.rent(e.ledger().timestamp(), duration, renter)?;

        storage::write_escrow(&e, &asset, &slot);

        escrow_events::user_info(&e, &asset, &rental);
        events::fulfilled(&e, &order, &taker, &rental);
        Ok(())
    }

    pub fn set_price_per_day(
        e: Env,
        lender: Address,
        asset: AssetId,
        price_per_day: i128,
    ) -> Result<(), RentalError> {
        lender.require_auth();

        let (_, mut slot) = Self::load_as_lender(&e, &lender, &asset)?;
        slot.set_price_per_day(e.ledger().timestamp(), price_per_day)?;

        storage::write_escrow(&e, &asset, &slot);
        escrow_events::price_per_day(&e, &asset, price_per_day);
        Ok(())
    }

    /// Changes the longest rental accepted for this order. Kept in step
    /// with the slot's `max_rent_duration`.
    pub fn set_max_duration(
        e: Env,
        lender: Address,
        asset: AssetId,
        max_duration: u64,
    ) -> Result<(), RentalError> {
        lender.require_auth();

        let (mut order, mut slot) = Self::load_as_lender(&e, &lender, &asset)?;
        slot.set_max_rent_duration(e.ledger().timestamp(), max_duration)?;
        order.max_duration = max_duration;

        storage::write_escrow(&e, &asset, &slot);
        storage::write_order(&e, &order);
        escrow_events::max_duration(&e, &asset, max_duration);
        Ok(())
    }

    pub fn get_order(e: Env, asset: AssetId) -> Option<Order> {
        storage::read_order(&e, &asset)
    }

    pub fn get_escrow(e: Env, asset: AssetId) -> Option<EscrowSlot> {
        storage::read_escrow(&e, &asset)
    }

    /// Who may use the asset right now.
    pub fn get_user(e: Env, asset: AssetId) -> Option<Address> {
        storage::read_escrow(&e, &asset).and_then(|slot| slot.current_user(e.ledger().timestamp()))
    }

    pub fn could_rent(e: Env, asset: AssetId) -> bool {
        match storage::read_escrow(&e, &asset) {
            Some(slot) => matches!(slot.could_rent(e.ledger().timestamp()), Ok(true)),
            None => false,
        }
    }

    pub fn could_redeem(e: Env, asset: AssetId) -> bool {
        match storage::read_escrow(&e, &asset) {
            Some(slot) => matches!(slot.could_redeem(e.ledger().timestamp()), Ok(true)),
            None => false,
        }
    }
}

impl RentalRegistry {
    fn load(e: &Env, asset: &AssetId) -> Result<(Order, EscrowSlot), RentalError> {
        let order = storage::read_order(e, asset).ok_or(RentalError::NotYetLent)?;
        let slot = storage::read_escrow(e, asset).ok_or(RentalError::NotYetLent)?;
        Ok((order, slot))
    }

    fn load_as_lender(
        e: &Env,
        lender: &Address,
        asset: &AssetId,
    ) -> Result<(Order, EscrowSlot), RentalError> {
        let (order, slot) = Self::load(e, asset)?;
        if order.lender != *lender {
            return Err(RentalError::NotLender);
        }
        Ok((order, slot))
    }
}
