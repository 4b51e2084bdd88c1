use soroban_sdk::{contracttype, Address};

use crate::error::RentalError;
use crate::types::{AssetId, Custody, Rental, RentalInfo, Terms, UserInfo};

/// Who holds the staked asset, if anyone.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CustodyState {
    Empty,
    Held(Custody),
}

/// Last rental granted on a staked slot. A `Granted` record whose window
/// has closed stays here until the slot is restaked or redeemed.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RentalState {
    Idle,
    Granted(Rental),
}

/// Custody and rental state for one asset slot.
///
/// A slot is Empty (`CustodyState::Empty`) or Staked. Whether a staked slot
/// is currently rented is derived from the rental's `end` against the
/// caller-supplied `now`; there is no stored flag. Slots are reusable across
/// stake/redeem cycles.
///
/// Every method takes the current ledger time explicitly, so the caller
/// decides what "now" is and the transitions stay deterministic.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EscrowSlot {
    pub custody: CustodyState,
    pub terms: Terms,
    pub valid_until: u64,
    pub rental: RentalState,
}

impl EscrowSlot {
    pub fn new(terms: Terms, valid_until: u64) -> Self {
        EscrowSlot {
            custody: CustodyState::Empty,
            terms,
            valid_until,
            rental: RentalState::Idle,
        }
    }

    pub fn is_staked(&self) -> bool {
        matches!(self.custody, CustodyState::Held(_))
    }

    /// `now` lies inside the validity window `[.., valid_until)`.
    pub fn is_valid(&self, now: u64) -> bool {
        now < self.valid_until
    }

    /// A rental exists and its window has not closed yet.
    pub fn is_rented(&self, now: u64) -> bool {
        matches!(self.rental(), Some(r) if now < r.end)
    }

    /// The rental record, expired or not.
    pub fn rental(&self) -> Option<&Rental> {
        match &self.rental {
            RentalState::Granted(r) => Some(r),
            RentalState::Idle => None,
        }
    }

    fn custody(&self) -> Result<&Custody, RentalError> {
        match &self.custody {
            CustodyState::Held(c) => Ok(c),
            CustodyState::Empty => Err(RentalError::NotYetStaking),
        }
    }

    pub fn could_rent(&self, now: u64) -> Result<bool, RentalError> {
        self.custody()?;
        Ok(self.is_valid(now) && !self.is_rented(now))
    }

    pub fn could_redeem(&self, now: u64) -> Result<bool, RentalError> {
        self.custody()?;
        Ok(!self.is_rented(now))
    }

    pub fn stake(&mut self, custodian: Address, asset: AssetId) -> Result<(), RentalError> {
        if self.is_staked() {
            return Err(RentalError::AlreadyStaked);
        }
        self.custody = CustodyState::Held(Custody { custodian, asset });
        self.rental = RentalState::Idle;
        Ok(())
    }

    /// Opens a rental window `[now, now + duration)` for `user`.
    pub fn rent(&mut self, now: u64, duration: u64, user: Address) -> Result<Rental, RentalError> {
        self.custody()?;
        if !self.is_valid(now) {
            return Err(RentalError::ExpiredLend);
        }
        if self.is_rented(now) {
            return Err(RentalError::CannotRent);
        }
        if duration > self.terms.max_rent_duration {
            return Err(RentalError::OverMaxDuration);
        }
        let end = now
            .checked_add(duration)
            .ok_or(RentalError::OverMaxDuration)?;

        let rental = Rental {
            start: now,
            end,
            user,
        };
        self.rental = RentalState::Granted(rental.clone());
        Ok(rental)
    }

    /// Releases custody. The returned record says who gets the asset back.
    pub fn redeem(&mut self, now: u64) -> Result<Custody, RentalError> {
        if !self.could_redeem(now)? {
            return Err(RentalError::CannotRedeem);
        }
        match core::mem::replace(&mut self.custody, CustodyState::Empty) {
            CustodyState::Held(custody) => {
                self.rental = RentalState::Idle;
                Ok(custody)
            }
            CustodyState::Empty => Err(RentalError::NotYetStaking),
        }
    }

    pub fn set_price_per_day(&mut self, now: u64, price_per_day: i128) -> Result<(), RentalError> {
        if !self.could_redeem(now)? {
            return Err(RentalError::CannotSetPricePerDay);
        }
        self.terms.price_per_day = price_per_day;
        Ok(())
    }

    pub fn set_max_rent_duration(&mut self, now: u64, max_rent_duration: u64) -> Result<(), RentalError> {
        if !self.could_redeem(now)? {
            return Err(RentalError::CannotSetMaxDuration);
        }
        self.terms.max_rent_duration = max_rent_duration;
        Ok(())
    }

    pub fn asset(&self) -> Option<AssetId> {
        self.custody().ok().map(|c| c.asset.clone())
    }

    pub fn custodian(&self) -> Option<Address> {
        self.custody().ok().map(|c| c.custodian.clone())
    }

    /// User holding usage rights at `now`, if any.
    pub fn current_user(&self, now: u64) -> Option<Address> {
        match self.rental() {
            Some(r) if now < r.end => Some(r.user.clone()),
            _ => None,
        }
    }

    pub fn user_info(&self) -> UserInfo {
        match self.rental() {
            Some(r) => UserInfo {
                start: r.start,
                end: r.end,
                user: Some(r.user.clone()),
            },
            None => UserInfo {
                start: 0,
                end: 0,
                user: None,
            },
        }
    }

    pub fn rental_info(&self) -> RentalInfo {
        RentalInfo {
            user_info: self.user_info(),
            payment_token: self.terms.payment_token.clone(),
            price_per_day: self.terms.price_per_day,
        }
    }
}
