//! Canonical events emitted by the drop contract.
//!
//! Every state mutation publishes exactly one event (mint publishes one per
//! item plus one payment event when funds move), keyed by a short topic
//! symbol with the affected entity in the second topic slot. The off-chain
//! indexer decodes these shapes; keep the two in sync.

use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

use crate::rbac::Role;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ItemMinted {
    pub id: u64,
    pub owner: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ItemBurned {
    pub id: u64,
    pub owner: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PaymentCollected {
    pub payer: Address,
    pub amount: i128,
    /// `native` or `asset`.
    pub method: Symbol,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TreasuryWithdrawn {
    pub to: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoleGranted {
    pub target: Address,
    pub role: Role,
    pub by: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoleRevoked {
    pub target: Address,
    pub role: Role,
    pub by: Address,
}

pub fn initialized(env: &Env, owner: &Address) {
    env.events()
        .publish((symbol_short!("init"),), owner.clone());
}

pub fn item_minted(env: &Env, id: u64, owner: &Address) {
    env.events().publish(
        (symbol_short!("minted"), id),
        ItemMinted {
            id,
            owner: owner.clone(),
        },
    );
}

pub fn item_burned(env: &Env, id: u64, owner: &Address) {
    env.events().publish(
        (symbol_short!("burned"), id),
        ItemBurned {
            id,
            owner: owner.clone(),
        },
    );
}

pub fn payment_collected(env: &Env, payer: &Address, amount: i128, method: Symbol) {
    env.events().publish(
        (symbol_short!("paid"), payer.clone()),
        PaymentCollected {
            payer: payer.clone(),
            amount,
            method,
        },
    );
}

pub fn treasury_withdrawn(env: &Env, to: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("withdrawn"),),
        TreasuryWithdrawn {
            to: to.clone(),
            amount,
        },
    );
}

pub fn role_granted(env: &Env, target: &Address, role: &Role, by: &Address) {
    env.events().publish(
        (symbol_short!("role_set"), target.clone()),
        RoleGranted {
            target: target.clone(),
            role: role.clone(),
            by: by.clone(),
        },
    );
}

pub fn role_revoked(env: &Env, target: &Address, role: &Role, by: &Address) {
    env.events().publish(
        (symbol_short!("role_del"), target.clone()),
        RoleRevoked {
            target: target.clone(),
            role: role.clone(),
            by: by.clone(),
        },
    );
}

pub fn whitelist_added(env: &Env, who: &Address, by: &Address) {
    env.events()
        .publish((symbol_short!("wl_add"), who.clone()), by.clone());
}

pub fn whitelist_removed(env: &Env, who: &Address, by: &Address) {
    env.events()
        .publish((symbol_short!("wl_del"), who.clone()), by.clone());
}

pub fn config_updated(env: &Env, field: Symbol, by: &Address) {
    env.events()
        .publish((symbol_short!("cfg_set"), field), by.clone());
}

pub fn revealed(env: &Env, by: &Address) {
    env.events()
        .publish((symbol_short!("revealed"),), by.clone());
}
