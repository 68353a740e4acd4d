//! # Treasury
//!
//! Custody of collected payments. Native-rail payments accumulate in an
//! internal balance backed by real token transfers to the contract address;
//! the only way out is the owner-gated full withdrawal. Asset-rail payments
//! pass straight through `transfer_from` on the configured external token —
//! its failures (insufficient balance or allowance) abort the enclosing
//! mint unchanged, with nothing caught or translated here.

use soroban_sdk::{panic_with_error, token, Address, Env};

use crate::rbac;
use crate::storage;
use crate::types::{Payment, SaleConfig};
use crate::Error;

/// Collect payment for `count` items from `payer`. Returns the amount moved.
///
/// Must run before any registry mutation: a payment failure aborts the whole
/// request with no ids allocated.
pub fn collect(env: &Env, payer: &Address, count: u32, cfg: &SaleConfig, payment: &Payment) -> i128 {
    match payment {
        Payment::Native(attached) => {
            let required = cfg.cost_native * i128::from(count);
            if *attached < required {
                panic_with_error!(env, Error::InsufficientPayment);
            }
            // The full attached amount is kept; there is no change-giving.
            if *attached > 0 {
                let native = token::Client::new(env, &storage::get_native_ledger(env));
                native.transfer(payer, &env.current_contract_address(), attached);
                storage::set_treasury(env, storage::get_treasury(env) + *attached);
            }
            *attached
        }
        Payment::Asset => {
            let ledger = match &cfg.asset_ledger {
                Some(ledger) => ledger.clone(),
                None => panic_with_error!(env, Error::AssetNotConfigured),
            };
            let amount = cfg.cost_asset * i128::from(count);
            if amount > 0 {
                let asset = token::Client::new(env, &ledger);
                asset.transfer_from(
                    &env.current_contract_address(),
                    payer,
                    &env.current_contract_address(),
                    &amount,
                );
            }
            amount
        }
    }
}

/// Transfer the entire accumulated native balance to OWNER and zero it.
/// Owner-only; an empty treasury is a no-op success. Returns the amount moved.
pub fn withdraw(env: &Env, caller: &Address) -> i128 {
    rbac::require_owner(env, caller);
    let amount = storage::get_treasury(env);
    if amount == 0 {
        return 0;
    }
    let native = token::Client::new(env, &storage::get_native_ledger(env));
    native.transfer(&env.current_contract_address(), &rbac::owner(env), &amount);
    storage::set_treasury(env, 0);
    amount
}

pub fn balance(env: &Env) -> i128 {
    storage::get_treasury(env)
}
