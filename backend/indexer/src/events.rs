//! Canonical event types emitted by the drop contract.
//!
//! These mirror the Soroban contract events defined in
//! `contracts/nft_drop/src/events.rs` — keep the topic symbols in sync.

use serde::{Deserialize, Serialize};

/// All recognised event kinds from the drop contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Contract initialised (`init` topic).
    Initialized,
    /// An item was minted (`minted` topic, item id in the second topic slot).
    ItemMinted,
    /// An item was burned (`burned` topic, item id in the second topic slot).
    ItemBurned,
    /// A mint payment was collected (`paid` topic).
    PaymentCollected,
    /// The treasury was swept to the owner (`withdrawn` topic).
    TreasuryWithdrawn,
    /// A role was granted (`role_set` topic).
    RoleGranted,
    /// A role was revoked (`role_del` topic).
    RoleRevoked,
    /// An address joined the presale allow-list (`wl_add` topic).
    WhitelistAdded,
    /// An address left the presale allow-list (`wl_del` topic).
    WhitelistRemoved,
    /// A sale parameter changed (`cfg_set` topic).
    ConfigUpdated,
    /// Metadata was revealed (`revealed` topic).
    Revealed,
    /// An event from this contract that we don't recognise yet.
    Unknown,
}

impl EventKind {
    /// Parse the leading topic symbol string produced by Soroban.
    pub fn from_topic(topic: &str) -> Self {
        match topic {
            "init" => Self::Initialized,
            "minted" => Self::ItemMinted,
            "burned" => Self::ItemBurned,
            "paid" => Self::PaymentCollected,
            "withdrawn" => Self::TreasuryWithdrawn,
            "role_set" => Self::RoleGranted,
            "role_del" => Self::RoleRevoked,
            "wl_add" => Self::WhitelistAdded,
            "wl_del" => Self::WhitelistRemoved,
            "cfg_set" => Self::ConfigUpdated,
            "revealed" => Self::Revealed,
            _ => Self::Unknown,
        }
    }

    /// Short identifier string suitable for storage in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Initialized => "initialized",
            Self::ItemMinted => "item_minted",
            Self::ItemBurned => "item_burned",
            Self::PaymentCollected => "payment_collected",
            Self::TreasuryWithdrawn => "treasury_withdrawn",
            Self::RoleGranted => "role_granted",
            Self::RoleRevoked => "role_revoked",
            Self::WhitelistAdded => "whitelist_added",
            Self::WhitelistRemoved => "whitelist_removed",
            Self::ConfigUpdated => "config_updated",
            Self::Revealed => "revealed",
            Self::Unknown => "unknown",
        }
    }

    /// Whether the second topic slot carries an item id for this kind.
    pub fn has_item_topic(&self) -> bool {
        matches!(self, Self::ItemMinted | Self::ItemBurned)
    }
}

/// A fully decoded drop event, ready to be stored in the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DropEvent {
    pub event_type: String,
    pub token_id: Option<String>,
    pub actor: Option<String>,
    pub amount: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
}

/// A raw event record as stored in / read from the database.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct EventRecord {
    pub id: i64,
    pub event_type: String,
    pub token_id: Option<String>,
    pub actor: Option<String>,
    pub amount: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
    pub created_at: i64,
}
