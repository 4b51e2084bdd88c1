#![no_std]
//! Shared pieces of the rental contracts: asset and term types, the
//! escrow slot state machine, NFT custody calls and escrow-level events.

pub mod custody;
pub mod error;
pub mod escrow;
pub mod events;
pub mod types;

#[cfg(test)]
mod test;

pub use error::RentalError;
pub use escrow::{CustodyState, EscrowSlot, RentalState};
pub use types::{AssetId, Custody, Rental, RentalInfo, Terms, UserInfo};
