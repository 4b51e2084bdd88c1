#![no_std]
//! Enumerable non-fungible collection. Minting is reserved to the
//! collection owner; transfers and approvals follow the standard
//! non-fungible token interface that the rental escrows call into.

use soroban_sdk::{contract, contractimpl, Address, Env, String};
use stellar_access::ownable::{self as ownable, Ownable};
use stellar_macros::{default_impl, only_owner};
use stellar_tokens::non_fungible::{
    enumerable::{Enumerable, NonFungibleEnumerable},
    Base, NonFungibleToken,
};


#[contract]
pub struct EnumerableCollection;

#[contractimpl]
impl EnumerableCollection {
    pub fn __constructor(e: &Env, owner: Address, base_uri: String, name: String, symbol: String) {
        ownable::set_owner(e, &owner);
        Base::set_metadata(e, base_uri, name, symbol);
    }

    #[only_owner]
    pub fn mint(e: &Env, to: Address) -> u32 {
        Enumerable::sequential_mint(e, &to)
    }
}

#[default_impl]
#[contractimpl]
impl NonFungibleToken for EnumerableCollection {
    type ContractType = Enumerable;
}

#[default_impl]
#[contractimpl]
impl NonFungibleEnumerable for EnumerableCollection {}

#[default_impl]
#[contractimpl]
impl Ownable for EnumerableCollection {}
