//! # Types
//!
//! Shared data structures used across all modules of the drop contract.
//!
//! ## Design decisions
//!
//! ### Config / registry split
//!
//! Everything an admin can retune mid-drop lives in a single [`SaleConfig`]
//! instance entry; the registry's per-item and per-wallet entries are written
//! on mint/burn only. Mint-gate checks therefore read one config entry, and
//! config updates never touch registry state.
//!
//! ### Payment as a tagged union
//!
//! [`Payment`] carries the rail choice into a single collection step so that
//! the mint path stays payment-method-agnostic:
//!
//! - `Native(attached)` — the amount of the native asset the caller attaches.
//!   Underpayment is rejected; overpayment is kept in the treasury without
//!   change-giving.
//! - `Asset` — the exact price is pulled from the configured external token
//!   contract via `transfer_from`; that contract's failures (balance,
//!   allowance) abort the mint unchanged.

use soroban_sdk::{contracttype, Address, String};

/// Mutable sale parameters, retunable by OWNER/ADMIN between (or during) phases.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleConfig {
    /// Price per item on the native rail.
    pub cost_native: i128,
    /// Price per item on the external-asset rail.
    pub cost_asset: i128,
    /// Per-transaction mint cap; OWNER bypasses it.
    pub max_per_tx: u32,
    /// Hard cap on ids ever minted. Burns never reopen headroom.
    pub max_supply: u64,
    /// While `true`, minting is restricted to MINTER holders (and, with
    /// `whitelist_active`, whitelist members).
    pub paused: bool,
    /// Enables the presale allow-list while paused.
    pub whitelist_active: bool,
    /// One-way flag; before reveal every item resolves to `not_revealed_uri`.
    pub revealed: bool,
    /// Metadata URI prefix. Empty is a valid, deliberate configuration.
    pub base_uri: String,
    /// Placeholder URI returned verbatim pre-reveal.
    pub not_revealed_uri: String,
    /// Suffix appended after the item id, e.g. `.json`.
    pub uri_extension: String,
    /// External fungible token accepted as the second payment rail.
    pub asset_ledger: Option<Address>,
}

/// Payment rail selected by the minter.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Payment {
    /// Attached amount of the native asset.
    Native(i128),
    /// Pull `count * cost_asset` from the configured asset ledger.
    Asset,
}

/// Immutable collection metadata, written once at init.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Collection {
    pub name: String,
    pub symbol: String,
}
