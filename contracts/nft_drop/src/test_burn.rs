extern crate std;

use soroban_sdk::{testutils::Address as _, vec, Address, Env, String};

use crate::invariants;
use crate::{Error, NftDrop, NftDropClient, Payment};

fn setup() -> (Env, NftDropClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(NftDrop, ());
    let client = NftDropClient::new(&env, &contract_id);

    let owner = Address::generate(&env);
    let native_admin = Address::generate(&env);
    let native_addr = env
        .register_stellar_asset_contract_v2(native_admin.clone())
        .address();

    client.init(
        &owner,
        &String::from_str(&env, "Meteor Shards"),
        &String::from_str(&env, "MSH"),
        &String::from_str(&env, ""),
        &String::from_str(&env, ""),
        &native_addr,
    );
    client.set_paused(&owner, &false);
    (env, client, owner)
}

#[test]
fn test_burn_removes_item() {
    let (env, client, _owner) = setup();
    let holder = Address::generate(&env);
    client.mint(&holder, &3u32, &Payment::Native(0));

    client.burn(&holder, &2);

    assert_eq!(client.balance_of(&holder), 2);
    assert_eq!(client.total_supply(), 2);
    assert_eq!(client.minted_ever(), 3);
    assert_eq!(client.wallet_of(&holder), vec![&env, 1u64, 3u64]);
    invariants::assert_balance_matches_wallet(&client, &holder);
}

#[test]
fn test_burn_twice_fails() {
    let (env, client, _owner) = setup();
    let holder = Address::generate(&env);
    client.mint(&holder, &2u32, &Payment::Native(0));

    client.burn(&holder, &1);
    assert_eq!(client.try_burn(&holder, &1), Err(Ok(Error::NotFound.into())));

    // The first burn stuck; nothing else changed.
    assert_eq!(client.balance_of(&holder), 1);
    assert_eq!(client.total_supply(), 1);
}

#[test]
fn test_burn_requires_current_owner() {
    let (env, client, _owner) = setup();
    let holder = Address::generate(&env);
    let intruder = Address::generate(&env);
    client.mint(&holder, &1u32, &Payment::Native(0));

    assert_eq!(client.try_burn(&intruder, &1), Err(Ok(Error::NotOwner.into())));
    assert_eq!(client.owner_of(&1), holder);
    assert_eq!(client.balance_of(&holder), 1);
}

#[test]
fn test_burn_unminted_id_fails() {
    let (env, client, _owner) = setup();
    let anyone = Address::generate(&env);

    assert_eq!(client.try_burn(&anyone, &99), Err(Ok(Error::NotFound.into())));
}

#[test]
fn test_burned_id_is_gone_from_queries() {
    let (env, client, _owner) = setup();
    let holder = Address::generate(&env);
    client.mint(&holder, &1u32, &Payment::Native(0));

    client.burn(&holder, &1);

    assert_eq!(client.try_owner_of(&1), Err(Ok(Error::NotFound.into())));
    assert_eq!(client.try_token_uri(&1), Err(Ok(Error::NotFound.into())));
}

#[test]
fn test_burned_id_never_resurfaces() {
    let (env, client, _owner) = setup();
    let holder = Address::generate(&env);
    client.mint(&holder, &4u32, &Payment::Native(0));

    client.burn(&holder, &2);
    client.burn(&holder, &4);
    client.mint(&holder, &2u32, &Payment::Native(0));

    let wallet = client.wallet_of(&holder);
    assert_eq!(wallet, vec![&env, 1u64, 3u64, 5u64, 6u64]);
    invariants::assert_wallet_ascending(&wallet);
    invariants::assert_counters_consistent(&client);
}
