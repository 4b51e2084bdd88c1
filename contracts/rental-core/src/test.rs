#![cfg(test)]
extern crate std;

use proptest::prelude::*;
use soroban_sdk::{testutils::Address as _, Address, Env};

use crate::{AssetId, CustodyState, EscrowSlot, Rental, RentalError, RentalState, Terms};

const VALID_UNTIL: u64 = 10_000_000;
const MAX_RENT_DURATION: u64 = 100_000;
const RENT_DURATION: u64 = 1_000;
const PRICE_PER_DAY: i128 = 10;

fn empty_slot(env: &Env) -> EscrowSlot {
    let terms = Terms {
        price_per_day: PRICE_PER_DAY,
        max_rent_duration: MAX_RENT_DURATION,
        payment_token: Address::generate(env),
    };
    EscrowSlot::new(terms, VALID_UNTIL)
}

fn asset(env: &Env) -> AssetId {
    AssetId {
        collection: Address::generate(env),
        token_id: 0,
    }
}

fn staked_slot(env: &Env) -> (EscrowSlot, Address, AssetId) {
    let mut slot = empty_slot(env);
    let custodian = Address::generate(env);
    let asset = asset(env);
    slot.stake(custodian.clone(), asset.clone()).unwrap();
    (slot, custodian, asset)
}

#[test]
fn test_stake_records_custody() {
    let env = Env::default();
    let (slot, custodian, asset) = staked_slot(&env);

    assert!(slot.is_staked());
    assert_eq!(slot.asset(), Some(asset));
    assert_eq!(slot.custodian(), Some(custodian));
    assert_eq!(slot.rental, RentalState::Idle);
}

#[test]
fn test_stake_twice_fails() {
    let env = Env::default();
    let (mut slot, custodian, asset) = staked_slot(&env);

    assert_eq!(slot.stake(custodian, asset), Err(RentalError::AlreadyStaked));
}

#[test]
fn test_empty_slot_guards_predicates() {
    let env = Env::default();
    let mut slot = empty_slot(&env);
    let user = Address::generate(&env);

    assert_eq!(slot.could_rent(0), Err(RentalError::NotYetStaking));
    assert_eq!(slot.could_redeem(0), Err(RentalError::NotYetStaking));
    assert_eq!(slot.rent(0, RENT_DURATION, user), Err(RentalError::NotYetStaking));
    assert_eq!(slot.redeem(0), Err(RentalError::NotYetStaking));
    assert_eq!(slot.set_price_per_day(0, 15), Err(RentalError::NotYetStaking));
    assert!(slot.is_valid(0));
}

#[test]
fn test_empty_slot_queries_return_defaults() {
    let env = Env::default();
    let slot = empty_slot(&env);

    assert_eq!(slot.asset(), None);
    assert_eq!(slot.custodian(), None);
    assert_eq!(slot.current_user(0), None);
    let info = slot.user_info();
    assert_eq!((info.start, info.end, info.user), (0, 0, None));
    let rental_info = slot.rental_info();
    assert_eq!(rental_info.price_per_day, PRICE_PER_DAY);
    assert_eq!(rental_info.payment_token, slot.terms.payment_token);
}

#[test]
fn test_rent_sets_window() {
    let env = Env::default();
    let (mut slot, _, _) = staked_slot(&env);
    let user = Address::generate(&env);

    let rental = slot.rent(500, RENT_DURATION, user.clone()).unwrap();

    assert_eq!(
        rental,
        Rental {
            start: 500,
            end: 500 + RENT_DURATION,
            user: user.clone(),
        }
    );
    assert_eq!(slot.rental, RentalState::Granted(rental));
    assert_eq!(slot.current_user(500), Some(user.clone()));
    assert_eq!(slot.current_user(500 + RENT_DURATION), None);
    assert_eq!(slot.user_info().user, Some(user));
}

#[test]
fn test_rent_while_rented_fails() {
    let env = Env::default();
    let (mut slot, _, _) = staked_slot(&env);
    let user = Address::generate(&env);

    slot.rent(0, RENT_DURATION, user.clone()).unwrap();

    assert_eq!(slot.rent(10, RENT_DURATION, user.clone()), Err(RentalError::CannotRent));
    // the window is half-open, so the next rental may start at `end`
    assert!(slot.rent(RENT_DURATION, RENT_DURATION, user).is_ok());
}

#[test]
fn test_rent_over_max_duration_fails() {
    let env = Env::default();
    let (mut slot, _, _) = staked_slot(&env);
    let user = Address::generate(&env);

    assert_eq!(
        slot.rent(0, MAX_RENT_DURATION + RENT_DURATION, user.clone()),
        Err(RentalError::OverMaxDuration)
    );
    assert!(slot.rent(0, MAX_RENT_DURATION, user).is_ok());
}

#[test]
fn test_rent_after_validity_window_fails() {
    let env = Env::default();
    let (mut slot, _, _) = staked_slot(&env);
    let user = Address::generate(&env);

    assert_eq!(slot.rent(VALID_UNTIL, RENT_DURATION, user), Err(RentalError::ExpiredLend));
    assert!(!slot.is_valid(VALID_UNTIL));
    assert_eq!(slot.could_rent(VALID_UNTIL), Ok(false));
}

#[test]
fn test_redeem_after_rental_expires() {
    let env = Env::default();
    let (mut slot, custodian, asset) = staked_slot(&env);
    let user = Address::generate(&env);

    slot.rent(0, RENT_DURATION, user).unwrap();
    assert_eq!(slot.could_redeem(0), Ok(false));
    assert_eq!(slot.redeem(0), Err(RentalError::CannotRedeem));

    let later = RENT_DURATION + 1_000;
    assert_eq!(slot.could_redeem(later), Ok(true));
    let custody = slot.redeem(later).unwrap();

    assert_eq!(custody.custodian, custodian);
    assert_eq!(custody.asset, asset);
    assert_eq!(slot.custody, CustodyState::Empty);
    assert_eq!(slot.rental, RentalState::Idle);
    assert_eq!(slot.asset(), None);
}

#[test]
fn test_slot_is_reusable_after_redeem() {
    let env = Env::default();
    let (mut slot, custodian, asset) = staked_slot(&env);

    slot.redeem(0).unwrap();
    assert!(slot.stake(custodian, asset).is_ok());
}

#[test]
fn test_terms_locked_while_rented() {
    let env = Env::default();
    let (mut slot, _, _) = staked_slot(&env);
    let user = Address::generate(&env);

    slot.set_price_per_day(0, 15).unwrap();
    slot.set_max_rent_duration(0, 1_234).unwrap();
    assert_eq!(slot.terms.price_per_day, 15);
    assert_eq!(slot.terms.max_rent_duration, 1_234);

    slot.rent(0, RENT_DURATION, user).unwrap();
    assert_eq!(slot.set_price_per_day(1, 20), Err(RentalError::CannotSetPricePerDay));
    assert_eq!(slot.set_max_rent_duration(1, 2_000), Err(RentalError::CannotSetMaxDuration));

    assert!(slot.set_price_per_day(RENT_DURATION, 20).is_ok());
}

#[test]
fn test_expired_rental_stays_recorded() {
    let env = Env::default();
    let (mut slot, _, _) = staked_slot(&env);
    let user = Address::generate(&env);

    let rental = slot.rent(0, RENT_DURATION, user.clone()).unwrap();
    let later = RENT_DURATION + 1;

    assert!(!slot.is_rented(later));
    assert_eq!(slot.rental(), Some(&rental));
    assert_eq!(slot.current_user(later), None);
    assert_eq!(slot.user_info().user, Some(user));
}

#[test]
fn test_error_reasons() {
    assert_eq!(RentalError::AlreadyStaked.reason(), "already staking");
    assert_eq!(RentalError::OverMaxDuration.reason(), "over maxRentDuration");
    assert_eq!(RentalError::CannotSetPricePerDay.reason(), "cannot set pricePerDay");
    assert_eq!(RentalError::CannotSetMaxDuration.reason(), "cannot set maxDuration");
    assert_eq!(RentalError::AlreadyLent.reason(), "already lend");
    assert_eq!(RentalError::NotApprovedOrOwner.reason(), "only approved or owner");
    assert_eq!(RentalError::NotYetLent.reason(), "not yet lend");
    assert_eq!(RentalError::NotLender.reason(), "not lender");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_could_rent_matches_predicate(
        valid_until in 0u64..20_000,
        start in 0u64..20_000,
        duration in 0u64..5_000,
        now in 0u64..30_000,
        rented in any::<bool>(),
    ) {
        let env = Env::default();
        let (mut slot, _, _) = staked_slot(&env);
        slot.valid_until = valid_until;
        if rented {
            slot.rental = RentalState::Granted(Rental { start, end: start + duration, user: Address::generate(&env) });
        }

        let free = !rented || start + duration <= now;
        prop_assert_eq!(slot.could_rent(now), Ok(now < valid_until && free));
        prop_assert_eq!(slot.could_redeem(now), Ok(free));
    }

    #[test]
    fn prop_rent_records_requested_window(
        now in 0u64..VALID_UNTIL,
        duration in 0u64..=MAX_RENT_DURATION,
    ) {
        let env = Env::default();
        let (mut slot, _, _) = staked_slot(&env);
        let user = Address::generate(&env);

        let rental = slot.rent(now, duration, user.clone()).unwrap();

        prop_assert_eq!(rental, Rental { start: now, end: now + duration, user });
        prop_assert!(slot.rental().map_or(false, |r| r.start <= r.end));
    }
}
