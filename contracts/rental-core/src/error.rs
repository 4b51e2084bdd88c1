use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RentalError {
    // escrow slot
    AlreadyStaked = 1,
    CannotRedeem = 2,
    CannotRent = 3,
    OverMaxDuration = 4,
    ExpiredLend = 5,
    NotYetStaking = 6,
    CannotSetPricePerDay = 7,
    CannotSetMaxDuration = 8,
    // registry
    AlreadyLent = 20,
    NotApprovedOrOwner = 21,
    NotYetLent = 22,
    NotLender = 23,
}

impl RentalError {
    /// Failure reason as surfaced to off-chain callers.
    pub const fn reason(&self) -> &'static str {
        match self {
            RentalError::AlreadyStaked => "already staking",
            RentalError::CannotRedeem => "cannot redeem",
            RentalError::CannotRent => "cannot rent",
            RentalError::OverMaxDuration => "over maxRentDuration",
            RentalError::ExpiredLend => "expired lend",
            RentalError::NotYetStaking => "not yet staking",
            RentalError::CannotSetPricePerDay => "cannot set pricePerDay",
            RentalError::CannotSetMaxDuration => "cannot set maxDuration",
            RentalError::AlreadyLent => "already lend",
            RentalError::NotApprovedOrOwner => "only approved or owner",
            RentalError::NotYetLent => "not yet lend",
            RentalError::NotLender => "not lender",
        }
    }
}
