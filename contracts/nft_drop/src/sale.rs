//! # Sale gate
//!
//! The mint precondition chain, evaluated in a fixed order so every branch
//! is independently testable and the precedence is unambiguous:
//!
//! | # | Check           | Applies to            | Failure              |
//! |---|-----------------|-----------------------|----------------------|
//! | 1 | `count >= 1`    | everyone              | `InvalidAmount`      |
//! | 2 | per-tx cap      | everyone except OWNER | `ExceedsPerTxLimit`  |
//! | 3 | supply cap      | everyone              | `SupplyExhausted`    |
//! | 4 | phase gate      | non-OWNER, non-ADMIN  | see below            |
//!
//! Phase gate: while `paused`, MINTER holders always pass; with
//! `whitelist_active` the allow-list is consulted next (`NotWhitelisted`
//! when absent); without it the sale is simply closed (`SaleClosed` —
//! whitelist membership alone does not reopen it). An unpaused sale is open
//! to any caller, subject to payment.
//!
//! The per-tx cap is checked before any role shortcut so that it binds on
//! both payment rails and for ADMIN/MINTER holders alike.

use soroban_sdk::{panic_with_error, Address, Env};

use crate::rbac::{self, Role};
use crate::storage;
use crate::types::SaleConfig;
use crate::Error;

/// Run the full mint gate for `caller` requesting `count` items.
pub fn require_mint_allowed(env: &Env, caller: &Address, count: u32, cfg: &SaleConfig) {
    if count < 1 {
        panic_with_error!(env, Error::InvalidAmount);
    }

    let caller_is_owner = rbac::is_owner(env, caller);
    if !caller_is_owner && count > cfg.max_per_tx {
        panic_with_error!(env, Error::ExceedsPerTxLimit);
    }

    if storage::get_minted_ever(env) + u64::from(count) > cfg.max_supply {
        panic_with_error!(env, Error::SupplyExhausted);
    }

    if caller_is_owner || rbac::has_role(env, caller, &Role::Admin) {
        return;
    }
    if !cfg.paused {
        return;
    }
    if rbac::has_role(env, caller, &Role::Minter) {
        return;
    }
    if cfg.whitelist_active {
        if storage::is_whitelisted(env, caller) {
            return;
        }
        panic_with_error!(env, Error::NotWhitelisted);
    }
    panic_with_error!(env, Error::SaleClosed);
}

/// OWNER, ADMIN and MINTER holders mint free of charge: no payment is
/// required and no funds move.
pub fn is_fee_exempt(env: &Env, caller: &Address) -> bool {
    rbac::is_owner(env, caller)
        || rbac::has_role(env, caller, &Role::Admin)
        || rbac::has_role(env, caller, &Role::Minter)
}
