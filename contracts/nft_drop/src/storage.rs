//! # Storage
//!
//! Typed helpers over Soroban's two storage tiers used by the drop contract:
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key              | Type         | Description                               |
//! |------------------|--------------|-------------------------------------------|
//! | `Collection`     | `Collection` | Name/symbol, written once at init         |
//! | `Config`         | `SaleConfig` | Mutable sale parameters                   |
//! | `NativeLedger`   | `Address`    | Token contract for the native rail        |
//! | `MintedEver`     | `u64`        | Monotonic id sequence counter             |
//! | `CircSupply`     | `u64`        | Minted minus burned                       |
//! | `Treasury`       | `i128`       | Collected native payments awaiting withdrawal |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                  | Type       | Description                        |
//! |----------------------|------------|------------------------------------|
//! | `ItemOwner(id)`      | `Address`  | Current owner; absent once burned  |
//! | `Balance(address)`   | `u32`      | Count of currently-owned items     |
//! | `Wallet(address)`    | `Vec<u64>` | Owned ids in allocation order      |
//! | `Whitelist(address)` | `bool`     | Presale allow-list membership      |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days
//! remaining.
//!
//! `Balance` and `Wallet` are written in lockstep on every allocate/burn;
//! ids are only ever appended in allocation order, so a wallet vector is
//! always ascending.

use soroban_sdk::{contracttype, vec, Address, Env, Vec};

use crate::types::{Collection, SaleConfig};

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 7 days when below 1 day remaining.
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// Persistent storage: bump by 30 days when below 7 days remaining.
const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

/// All contract storage keys outside the RBAC key space.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Collection name/symbol (Instance).
    Collection,
    /// Mutable sale configuration (Instance).
    Config,
    /// Token contract used for native-rail payments (Instance).
    NativeLedger,
    /// Ids ever minted; the next id is `MintedEver + 1` (Instance).
    MintedEver,
    /// Circulating supply: minted minus burned (Instance).
    CircSupply,
    /// Collected native payments awaiting withdrawal (Instance).
    Treasury,
    /// Current owner of an item (Persistent).
    ItemOwner(u64),
    /// Currently-owned item count per principal (Persistent).
    Balance(Address),
    /// Owned ids per principal, ascending (Persistent).
    Wallet(Address),
    /// Presale allow-list membership (Persistent).
    Whitelist(Address),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

/// Extend instance storage TTL if it falls below the threshold.
pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn set_collection(env: &Env, collection: &Collection) {
    env.storage().instance().set(&DataKey::Collection, collection);
    bump_instance(env);
}

pub fn get_collection(env: &Env) -> Collection {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Collection)
        .expect("not initialized")
}

pub fn set_config(env: &Env, config: &SaleConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance(env);
}

pub fn get_config(env: &Env) -> SaleConfig {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .expect("not initialized")
}

pub fn set_native_ledger(env: &Env, ledger: &Address) {
    env.storage().instance().set(&DataKey::NativeLedger, ledger);
}

pub fn get_native_ledger(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::NativeLedger)
        .expect("not initialized")
}

pub fn get_minted_ever(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::MintedEver)
        .unwrap_or(0)
}

pub fn set_minted_ever(env: &Env, value: u64) {
    env.storage().instance().set(&DataKey::MintedEver, &value);
}

pub fn get_circulating(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::CircSupply)
        .unwrap_or(0)
}

pub fn set_circulating(env: &Env, value: u64) {
    env.storage().instance().set(&DataKey::CircSupply, &value);
}

pub fn get_treasury(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::Treasury)
        .unwrap_or(0)
}

pub fn set_treasury(env: &Env, value: i128) {
    env.storage().instance().set(&DataKey::Treasury, &value);
}

// ── Persistent Storage Helpers ───────────────────────────────────────

/// Extend the TTL for a persistent storage key.
fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Current owner of `id`, or `None` when the id was never allocated or has
/// been burned. The two cases are indistinguishable on purpose: a burned id
/// behaves exactly like one that never existed.
pub fn get_item_owner(env: &Env, id: u64) -> Option<Address> {
    let key = DataKey::ItemOwner(id);
    let owner: Option<Address> = env.storage().persistent().get(&key);
    if owner.is_some() {
        bump_persistent(env, &key);
    }
    owner
}

pub fn set_item_owner(env: &Env, id: u64, owner: &Address) {
    let key = DataKey::ItemOwner(id);
    env.storage().persistent().set(&key, owner);
    bump_persistent(env, &key);
}

pub fn remove_item_owner(env: &Env, id: u64) {
    env.storage().persistent().remove(&DataKey::ItemOwner(id));
}

pub fn get_balance(env: &Env, who: &Address) -> u32 {
    let key = DataKey::Balance(who.clone());
    let balance: Option<u32> = env.storage().persistent().get(&key);
    match balance {
        Some(b) => {
            bump_persistent(env, &key);
            b
        }
        None => 0,
    }
}

pub fn set_balance(env: &Env, who: &Address, balance: u32) {
    let key = DataKey::Balance(who.clone());
    if balance == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &balance);
        bump_persistent(env, &key);
    }
}

pub fn get_wallet(env: &Env, who: &Address) -> Vec<u64> {
    let key = DataKey::Wallet(who.clone());
    match env.storage().persistent().get(&key) {
        Some(wallet) => {
            bump_persistent(env, &key);
            wallet
        }
        None => vec![env],
    }
}

pub fn set_wallet(env: &Env, who: &Address, wallet: &Vec<u64>) {
    let key = DataKey::Wallet(who.clone());
    if wallet.is_empty() {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, wallet);
        bump_persistent(env, &key);
    }
}

pub fn add_to_whitelist(env: &Env, who: &Address) {
    let key = DataKey::Whitelist(who.clone());
    env.storage().persistent().set(&key, &true);
    bump_persistent(env, &key);
}

pub fn remove_from_whitelist(env: &Env, who: &Address) {
    env.storage().persistent().remove(&DataKey::Whitelist(who.clone()));
}

pub fn is_whitelisted(env: &Env, who: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Whitelist(who.clone()))
        .unwrap_or(false)
}
