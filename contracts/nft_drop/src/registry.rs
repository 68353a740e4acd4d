//! # Registry
//!
//! Owns the item/owner map, per-principal balances and wallet vectors, and
//! the id sequence. Ids start at 1, are assigned consecutively in allocation
//! order, and are never reused: burning removes the owner entry but the
//! sequence counter only moves forward, so gaps from burns stay gaps.
//!
//! `Balance(p)` and `Wallet(p)` are mutated together in every operation;
//! `balance == wallet.len()` is an invariant the test suite asserts after
//! every lifecycle step.

use soroban_sdk::{panic_with_error, vec, Address, Env, String, Vec};

use crate::storage;
use crate::types::SaleConfig;
use crate::Error;

/// Upper bound for a composed URI: prefix + 20 decimal digits + suffix.
const URI_BUF_LEN: usize = 512;

/// Assign `count` consecutive fresh ids to `owner`.
///
/// Appends to the owner's wallet in allocation order (which is ascending id
/// order), increments the balance by `count`, and advances both the
/// monotonic sequence counter and the circulating supply.
pub fn allocate(env: &Env, owner: &Address, count: u32) -> Vec<u64> {
    let minted_ever = storage::get_minted_ever(env);
    let mut wallet = storage::get_wallet(env, owner);
    let mut ids = vec![env];

    for offset in 1..=u64::from(count) {
        let id = minted_ever + offset;
        storage::set_item_owner(env, id, owner);
        wallet.push_back(id);
        ids.push_back(id);
    }

    storage::set_wallet(env, owner, &wallet);
    storage::set_balance(env, owner, storage::get_balance(env, owner) + count);
    storage::set_minted_ever(env, minted_ever + u64::from(count));
    storage::set_circulating(env, storage::get_circulating(env) + u64::from(count));

    ids
}

/// Destroy `id`. Only the current owner may burn; a burned id is permanently
/// gone and indistinguishable from one that never existed.
pub fn burn(env: &Env, requester: &Address, id: u64) {
    let owner = match storage::get_item_owner(env, id) {
        Some(owner) => owner,
        None => panic_with_error!(env, Error::NotFound),
    };
    if owner != *requester {
        panic_with_error!(env, Error::NotOwner);
    }

    storage::remove_item_owner(env, id);

    let mut wallet = storage::get_wallet(env, &owner);
    if let Some(idx) = wallet.first_index_of(id) {
        wallet.remove(idx);
    }
    storage::set_wallet(env, &owner, &wallet);
    storage::set_balance(env, &owner, storage::get_balance(env, &owner) - 1);

    // Circulating supply shrinks; the id sequence counter never does.
    storage::set_circulating(env, storage::get_circulating(env) - 1);
}

pub fn owner_of(env: &Env, id: u64) -> Address {
    match storage::get_item_owner(env, id) {
        Some(owner) => owner,
        None => panic_with_error!(env, Error::NotFound),
    }
}

/// Ids currently owned by `owner`, ascending. Empty vec when none.
pub fn wallet_of(env: &Env, owner: &Address) -> Vec<u64> {
    storage::get_wallet(env, owner)
}

pub fn balance_of(env: &Env, owner: &Address) -> u32 {
    storage::get_balance(env, owner)
}

/// Metadata URI for `id`: the placeholder verbatim before reveal, otherwise
/// `base_uri + id + uri_extension`. An empty `base_uri` yields `id + extension`.
pub fn token_uri(env: &Env, cfg: &SaleConfig, id: u64) -> String {
    if storage::get_item_owner(env, id).is_none() {
        panic_with_error!(env, Error::NotFound);
    }
    if !cfg.revealed {
        return cfg.not_revealed_uri.clone();
    }

    let mut buf = [0u8; URI_BUF_LEN];
    let mut pos = 0usize;

    let base_len = cfg.base_uri.len() as usize;
    cfg.base_uri.copy_into_slice(&mut buf[..base_len]);
    pos += base_len;

    pos += write_decimal(&mut buf[pos..], id);

    let ext_len = cfg.uri_extension.len() as usize;
    cfg.uri_extension
        .copy_into_slice(&mut buf[pos..pos + ext_len]);
    pos += ext_len;

    String::from_bytes(env, &buf[..pos])
}

/// Write `value` as ASCII decimal digits into `buf`, returning the length.
fn write_decimal(buf: &mut [u8], value: u64) -> usize {
    let mut digits = [0u8; 20];
    let mut n = value;
    let mut len = 0usize;
    loop {
        digits[len] = b'0' + (n % 10) as u8;
        n /= 10;
        len += 1;
        if n == 0 {
            break;
        }
    }
    for i in 0..len {
        buf[i] = digits[len - 1 - i];
    }
    len
}
