//! Calls into the NFT collection that owns a staked asset.

use soroban_sdk::{contractclient, Address, Env};

use crate::types::AssetId;

/// The part of the non-fungible token interface the escrow relies on.
#[contractclient(name = "NonFungibleClient")]
pub trait NonFungible {
    fn owner_of(e: Env, token_id: u32) -> Address;
    fn get_approved(e: Env, token_id: u32) -> Option<Address>;
    fn is_approved_for_all(e: Env, owner: Address, operator: Address) -> bool;
    fn transfer(e: Env, from: Address, to: Address, token_id: u32);
    fn transfer_from(e: Env, spender: Address, from: Address, to: Address, token_id: u32);
}

pub fn holder_of(e: &Env, asset: &AssetId) -> Address {
    NonFungibleClient::new(e, &asset.collection).owner_of(&asset.token_id)
}

/// `spender` owns the token or was approved for it (directly or as operator).
pub fn is_approved_or_owner(e: &Env, asset: &AssetId, spender: &Address) -> bool {
    let nft = NonFungibleClient::new(e, &asset.collection);
    let owner = nft.owner_of(&asset.token_id);
    if *spender == owner {
        return true;
    }
    if nft.get_approved(&asset.token_id).as_ref() == Some(spender) {
        return true;
    }
    nft.is_approved_for_all(&owner, spender)
}

/// Moves the asset from `holder` into this contract, spending `spender`'s authority.
pub fn take(e: &Env, asset: &AssetId, spender: &Address, holder: &Address) {
    let nft = NonFungibleClient::new(e, &asset.collection);
    nft.transfer_from(spender, holder, &e.current_contract_address(), &asset.token_id);
}

/// Sends the asset held by this contract to `to`.
pub fn give_back(e: &Env, asset: &AssetId, to: &Address) {
    let nft = NonFungibleClient::new(e, &asset.collection);
    nft.transfer(&e.current_contract_address(), to, &asset.token_id);
}
