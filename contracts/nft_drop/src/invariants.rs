#![allow(dead_code)]

extern crate std;

use soroban_sdk::{Address, Vec};

use crate::NftDropClient;

/// INV-1: a principal's balance always equals the number of items currently
/// in their wallet.
pub fn assert_balance_matches_wallet(client: &NftDropClient<'_>, who: &Address) {
    let wallet = client.wallet_of(who);
    let balance = client.balance_of(who);
    assert_eq!(
        balance,
        wallet.len(),
        "INV-1 violated: balance {} != wallet size {}",
        balance,
        wallet.len()
    );
}

/// INV-2: wallet ids are strictly ascending (allocation order is id order,
/// and burns only remove entries).
pub fn assert_wallet_ascending(wallet: &Vec<u64>) {
    let mut prev: Option<u64> = None;
    for id in wallet.iter() {
        if let Some(p) = prev {
            assert!(
                id > p,
                "INV-2 violated: wallet not ascending ({} after {})",
                id,
                p
            );
        }
        prev = Some(id);
    }
}

/// INV-3: circulating supply equals the holdings of the given principals
/// (callers pass every address that ever held an item).
pub fn assert_supply_matches_holdings(client: &NftDropClient<'_>, holders: &[Address]) {
    let total: u64 = holders
        .iter()
        .map(|h| u64::from(client.balance_of(h)))
        .sum();
    assert_eq!(
        client.total_supply(),
        total,
        "INV-3 violated: circulating supply {} != summed holdings {}",
        client.total_supply(),
        total
    );
}

/// INV-4: freshly allocated ids are strictly increasing and start past the
/// previous high-water mark — burned ids never reappear.
pub fn assert_ids_fresh(prev_minted_ever: u64, ids: &Vec<u64>) {
    let mut expected = prev_minted_ever + 1;
    for id in ids.iter() {
        assert_eq!(
            id, expected,
            "INV-4 violated: expected id {}, got {}",
            expected, id
        );
        expected += 1;
    }
}

/// INV-5: the sequence counter never decreases and always dominates the
/// circulating supply.
pub fn assert_counters_consistent(client: &NftDropClient<'_>) {
    assert!(
        client.minted_ever() >= client.total_supply(),
        "INV-5 violated: minted_ever {} < circulating supply {}",
        client.minted_ever(),
        client.total_supply()
    );
}
