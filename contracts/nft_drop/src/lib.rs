//! # NFT Drop Contract
//!
//! This is the root crate of a capped-supply NFT drop: a registry that
//! mints, tracks ownership of, and burns uniquely numbered items, gated by
//! role-based permissions, a pausable sale, an allow-list presale, and two
//! payment rails (the native asset or a configured external token).
//!
//! | Concern        | Entry Point(s)                                           |
//! |----------------|----------------------------------------------------------|
//! | Bootstrap      | [`NftDrop::init`]                                        |
//! | Role admin     | `grant_role`, `revoke_role`, `has_role`, `roles_of`      |
//! | Sale config    | `set_cost`, `set_asset_cost`, `set_max_per_tx`, `set_max_supply`, `set_base_uri`, `set_not_revealed_uri`, `set_uri_extension`, `set_paused`, `set_whitelist_active`, `set_asset_ledger`, `reveal` |
//! | Presale list   | `add_to_whitelist`, `remove_from_whitelist`, `is_whitelisted` |
//! | Issuance       | [`NftDrop::mint`], [`NftDrop::burn`]                     |
//! | Treasury       | [`NftDrop::withdraw`], `treasury_balance`                |
//! | Queries        | `owner_of`, `balance_of`, `wallet_of`, `token_uri`, `total_supply`, `minted_ever`, `get_config`, `name`, `symbol`, `owner` |
//!
//! ## Architecture
//!
//! Authorization is delegated to [`rbac`], the mint precondition chain to
//! [`sale`], funds custody to [`treasury`], and item bookkeeping to
//! [`registry`]; this file holds the public entry points and their event
//! emissions, nothing else.
//!
//! Every failure is raised through `panic_with_error!`, so the host
//! discards all of a failed invocation's effects: a request either applies
//! fully or not at all.

#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, symbol_short, Address, Env, String, Vec,
};

mod registry;
mod sale;
mod storage;
mod treasury;
mod types;
pub mod events;
pub mod rbac;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_burn;
#[cfg(test)]
mod test_mint;

pub use rbac::Role;
pub use types::{Collection, Payment, SaleConfig};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    Unauthorized       = 2,
    InvalidAmount      = 3,
    ExceedsPerTxLimit  = 4,
    SupplyExhausted    = 5,
    SaleClosed         = 6,
    NotWhitelisted     = 7,
    InsufficientPayment = 8,
    AssetNotConfigured = 9,
    NotFound           = 10,
    NotOwner           = 11,
}

/// Per-transaction mint cap seeded at init; retunable via `set_max_per_tx`.
const DEFAULT_MAX_PER_TX: u32 = 10;
/// Collection size seeded at init; retunable via `set_max_supply`.
const DEFAULT_MAX_SUPPLY: u64 = 10_000;

#[contract]
pub struct NftDrop;

#[contractimpl]
impl NftDrop {
    // ─────────────────────────────────────────────────────────
    // Bootstrap
    // ─────────────────────────────────────────────────────────

    /// Initialise the drop and set the immutable OWNER.
    ///
    /// Must be called exactly once immediately after deployment; subsequent
    /// calls panic with `Error::AlreadyInitialized`. The sale starts paused,
    /// unrevealed, with an empty whitelist, zero costs and no asset ledger.
    ///
    /// - `native_asset` is the token contract used for native-rail payments
    ///   and treasury withdrawal.
    pub fn init(
        env: Env,
        owner: Address,
        name: String,
        symbol: String,
        base_uri: String,
        not_revealed_uri: String,
        native_asset: Address,
    ) {
        owner.require_auth();
        rbac::init_owner(&env, &owner);
        storage::set_collection(&env, &Collection { name, symbol });
        storage::set_native_ledger(&env, &native_asset);
        storage::set_config(
            &env,
            &SaleConfig {
                cost_native: 0,
                cost_asset: 0,
                max_per_tx: DEFAULT_MAX_PER_TX,
                max_supply: DEFAULT_MAX_SUPPLY,
                paused: true,
                whitelist_active: false,
                revealed: false,
                base_uri,
                not_revealed_uri,
                uri_extension: String::from_str(&env, ".json"),
                asset_ledger: None,
            },
        );
        events::initialized(&env, &owner);
    }

    // ─────────────────────────────────────────────────────────
    // Role management
    // ─────────────────────────────────────────────────────────

    /// Grant `role` to `target`. Caller must be OWNER or ADMIN.
    /// The OWNER slot is not a grantable role and cannot be reached here.
    pub fn grant_role(env: Env, caller: Address, target: Address, role: Role) {
        caller.require_auth();
        rbac::grant_role(&env, &caller, &target, &role);
        events::role_granted(&env, &target, &role, &caller);
    }

    /// Revoke `role` from `target`. Caller must be OWNER or ADMIN.
    pub fn revoke_role(env: Env, caller: Address, target: Address, role: Role) {
        caller.require_auth();
        rbac::revoke_role(&env, &caller, &target, &role);
        events::role_revoked(&env, &target, &role, &caller);
    }

    pub fn has_role(env: Env, who: Address, role: Role) -> bool {
        rbac::has_role(&env, &who, &role)
    }

    pub fn roles_of(env: Env, who: Address) -> Vec<Role> {
        rbac::roles_of(&env, &who)
    }

    pub fn owner(env: Env) -> Address {
        rbac::owner(&env)
    }

    // ─────────────────────────────────────────────────────────
    // Issuance
    // ─────────────────────────────────────────────────────────

    /// Mint `count` fresh items to `caller`, returning their ids.
    ///
    /// The precondition chain runs in a fixed order (amount, per-tx cap,
    /// supply cap, phase gate — see [`sale`]), then payment is collected in
    /// full before any id is allocated. OWNER bypasses the per-tx cap;
    /// OWNER/ADMIN skip the phase gate; OWNER/ADMIN/MINTER mint free of
    /// charge. Native overpayment is kept without change-giving; external
    /// asset-ledger failures propagate untranslated.
    pub fn mint(env: Env, caller: Address, count: u32, payment: Payment) -> Vec<u64> {
        caller.require_auth();
        let cfg = storage::get_config(&env);

        sale::require_mint_allowed(&env, &caller, count, &cfg);

        if !sale::is_fee_exempt(&env, &caller) {
            let method = match &payment {
                Payment::Native(_) => symbol_short!("native"),
                Payment::Asset => symbol_short!("asset"),
            };
            let amount = treasury::collect(&env, &caller, count, &cfg, &payment);
            if amount > 0 {
                events::payment_collected(&env, &caller, amount, method);
            }
        }

        let ids = registry::allocate(&env, &caller, count);
        for id in ids.iter() {
            events::item_minted(&env, id, &caller);
        }
        ids
    }

    /// Destroy `id`. Only its current owner may burn it; the id is
    /// permanently retired and never reassigned.
    pub fn burn(env: Env, caller: Address, id: u64) {
        caller.require_auth();
        registry::burn(&env, &caller, id);
        events::item_burned(&env, id, &caller);
    }

    // ─────────────────────────────────────────────────────────
    // Treasury
    // ─────────────────────────────────────────────────────────

    /// Transfer the entire accumulated native balance to OWNER.
    /// Owner-only; an empty treasury is a no-op success.
    pub fn withdraw(env: Env, caller: Address) {
        caller.require_auth();
        let amount = treasury::withdraw(&env, &caller);
        if amount > 0 {
            events::treasury_withdrawn(&env, &caller, amount);
        }
    }

    pub fn treasury_balance(env: Env) -> i128 {
        treasury::balance(&env)
    }

    // ─────────────────────────────────────────────────────────
    // Sale configuration (OWNER or ADMIN)
    // ─────────────────────────────────────────────────────────

    pub fn set_cost(env: Env, caller: Address, cost: i128) {
        Self::update_config(&env, &caller, symbol_short!("cost"), |cfg| {
            cfg.cost_native = cost;
        });
    }

    pub fn set_asset_cost(env: Env, caller: Address, cost: i128) {
        Self::update_config(&env, &caller, symbol_short!("a_cost"), |cfg| {
            cfg.cost_asset = cost;
        });
    }

    pub fn set_max_per_tx(env: Env, caller: Address, max: u32) {
        Self::update_config(&env, &caller, symbol_short!("max_tx"), |cfg| {
            cfg.max_per_tx = max;
        });
    }

    pub fn set_max_supply(env: Env, caller: Address, max: u64) {
        Self::update_config(&env, &caller, symbol_short!("max_sup"), |cfg| {
            cfg.max_supply = max;
        });
    }

    pub fn set_base_uri(env: Env, caller: Address, uri: String) {
        Self::update_config(&env, &caller, symbol_short!("base_uri"), |cfg| {
            cfg.base_uri = uri;
        });
    }

    pub fn set_not_revealed_uri(env: Env, caller: Address, uri: String) {
        Self::update_config(&env, &caller, symbol_short!("hide_uri"), |cfg| {
            cfg.not_revealed_uri = uri;
        });
    }

    pub fn set_uri_extension(env: Env, caller: Address, extension: String) {
        Self::update_config(&env, &caller, symbol_short!("uri_ext"), |cfg| {
            cfg.uri_extension = extension;
        });
    }

    pub fn set_paused(env: Env, caller: Address, paused: bool) {
        Self::update_config(&env, &caller, symbol_short!("paused"), |cfg| {
            cfg.paused = paused;
        });
    }

    pub fn set_whitelist_active(env: Env, caller: Address, active: bool) {
        Self::update_config(&env, &caller, symbol_short!("wl_on"), |cfg| {
            cfg.whitelist_active = active;
        });
    }

    pub fn set_asset_ledger(env: Env, caller: Address, ledger: Address) {
        Self::update_config(&env, &caller, symbol_short!("asset"), |cfg| {
            cfg.asset_ledger = Some(ledger.clone());
        });
    }

    /// One-way transition exposing final per-item URIs. There is no unreveal.
    pub fn reveal(env: Env, caller: Address) {
        caller.require_auth();
        rbac::require_admin(&env, &caller);
        let mut cfg = storage::get_config(&env);
        cfg.revealed = true;
        storage::set_config(&env, &cfg);
        events::revealed(&env, &caller);
    }

    // ─────────────────────────────────────────────────────────
    // Presale allow-list (OWNER or ADMIN)
    // ─────────────────────────────────────────────────────────

    pub fn add_to_whitelist(env: Env, caller: Address, who: Address) {
        caller.require_auth();
        rbac::require_admin(&env, &caller);
        storage::add_to_whitelist(&env, &who);
        events::whitelist_added(&env, &who, &caller);
    }

    pub fn remove_from_whitelist(env: Env, caller: Address, who: Address) {
        caller.require_auth();
        rbac::require_admin(&env, &caller);
        storage::remove_from_whitelist(&env, &who);
        events::whitelist_removed(&env, &who, &caller);
    }

    pub fn is_whitelisted(env: Env, who: Address) -> bool {
        storage::is_whitelisted(&env, &who)
    }

    // ─────────────────────────────────────────────────────────
    // Registry queries
    // ─────────────────────────────────────────────────────────

    /// Current owner of `id`. Panics with `NotFound` for unallocated or
    /// burned ids.
    pub fn owner_of(env: Env, id: u64) -> Address {
        registry::owner_of(&env, id)
    }

    pub fn balance_of(env: Env, who: Address) -> u32 {
        registry::balance_of(&env, &who)
    }

    /// Ids currently owned by `who`, ascending. Empty when none.
    pub fn wallet_of(env: Env, who: Address) -> Vec<u64> {
        registry::wallet_of(&env, &who)
    }

    /// Metadata URI for `id`: the placeholder before reveal, otherwise
    /// `base_uri + id + uri_extension`.
    pub fn token_uri(env: Env, id: u64) -> String {
        let cfg = storage::get_config(&env);
        registry::token_uri(&env, &cfg, id)
    }

    /// Circulating supply: items minted minus items burned.
    pub fn total_supply(env: Env) -> u64 {
        storage::get_circulating(&env)
    }

    /// Monotonic sequence counter: ids ever minted, burns included.
    pub fn minted_ever(env: Env) -> u64 {
        storage::get_minted_ever(&env)
    }

    pub fn get_config(env: Env) -> SaleConfig {
        storage::get_config(&env)
    }

    pub fn name(env: Env) -> String {
        storage::get_collection(&env).name
    }

    pub fn symbol(env: Env) -> String {
        storage::get_collection(&env).symbol
    }
}

impl NftDrop {
    /// Shared guard + load/mutate/store + event for every sale setter.
    fn update_config(
        env: &Env,
        caller: &Address,
        field: soroban_sdk::Symbol,
        apply: impl FnOnce(&mut SaleConfig),
    ) {
        caller.require_auth();
        rbac::require_admin(env, caller);
        let mut cfg = storage::get_config(env);
        apply(&mut cfg);
        storage::set_config(env, &cfg);
        events::config_updated(env, field, caller);
    }
}
