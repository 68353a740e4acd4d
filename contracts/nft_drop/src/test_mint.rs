extern crate std;

use soroban_sdk::{testutils::Address as _, token, vec, Address, Env, String};

use crate::invariants;
use crate::{Error, NftDrop, NftDropClient, Payment, Role};

fn setup() -> (Env, NftDropClient<'static>, Address, token::Client<'static>) {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(NftDrop, ());
    let client = NftDropClient::new(&env, &contract_id);

    let owner = Address::generate(&env);
    let native_admin = Address::generate(&env);
    let native = create_token(&env, &native_admin);

    client.init(
        &owner,
        &String::from_str(&env, "Meteor Shards"),
        &String::from_str(&env, "MSH"),
        &String::from_str(&env, "shards/"),
        &String::from_str(&env, "shards/hidden"),
        &native.address,
    );
    (env, client, owner, native)
}

fn create_token<'a>(env: &Env, admin: &Address) -> token::Client<'a> {
    let addr = env.register_stellar_asset_contract_v2(admin.clone());
    token::Client::new(env, &addr.address())
}

/// Free mint: costs stay at the zero default so the gate is what's under test.
fn free(count: u32) -> (u32, Payment) {
    (count, Payment::Native(0))
}

#[test]
fn test_paused_sale_rejects_stranger() {
    let (env, client, _owner, _native) = setup();
    let stranger = Address::generate(&env);
    let (count, payment) = free(1);

    assert_eq!(
        client.try_mint(&stranger, &count, &payment),
        Err(Ok(Error::SaleClosed.into()))
    );
    assert_eq!(client.total_supply(), 0);
    assert_eq!(client.balance_of(&stranger), 0);
    assert_eq!(client.treasury_balance(), 0);
}

#[test]
fn test_presale_rejects_non_member() {
    let (env, client, owner, _native) = setup();
    let stranger = Address::generate(&env);
    client.set_whitelist_active(&owner, &true);

    let (count, payment) = free(1);
    assert_eq!(
        client.try_mint(&stranger, &count, &payment),
        Err(Ok(Error::NotWhitelisted.into()))
    );
    assert_eq!(client.total_supply(), 0);
}

#[test]
fn test_presale_admits_whitelist_member() {
    let (env, client, owner, _native) = setup();
    let member = Address::generate(&env);
    client.set_whitelist_active(&owner, &true);
    client.add_to_whitelist(&owner, &member);

    let (count, payment) = free(2);
    let ids = client.mint(&member, &count, &payment);
    assert_eq!(ids, vec![&env, 1u64, 2u64]);
    assert_eq!(client.balance_of(&member), 2);
}

#[test]
fn test_whitelist_membership_alone_does_not_reopen_closed_sale() {
    // Whitelist is only consulted while whitelist_active is set; a paused
    // sale without an active presale stays closed to members.
    let (env, client, owner, _native) = setup();
    let member = Address::generate(&env);
    client.add_to_whitelist(&owner, &member);

    let (count, payment) = free(1);
    assert_eq!(
        client.try_mint(&member, &count, &payment),
        Err(Ok(Error::SaleClosed.into()))
    );
}

#[test]
fn test_minter_role_mints_while_paused() {
    let (env, client, owner, _native) = setup();
    let minter = Address::generate(&env);
    client.grant_role(&owner, &minter, &Role::Minter);

    let (count, payment) = free(1);
    let ids = client.mint(&minter, &count, &payment);
    assert_eq!(ids, vec![&env, 1u64]);
}

#[test]
fn test_minter_role_mints_during_presale_without_membership() {
    let (env, client, owner, _native) = setup();
    let minter = Address::generate(&env);
    client.set_whitelist_active(&owner, &true);
    client.grant_role(&owner, &minter, &Role::Minter);

    let (count, payment) = free(1);
    let ids = client.mint(&minter, &count, &payment);
    assert_eq!(ids.len(), 1);
}

#[test]
fn test_open_sale_admits_anyone() {
    let (env, client, owner, _native) = setup();
    let buyer = Address::generate(&env);
    client.set_paused(&owner, &false);

    let (count, payment) = free(3);
    let ids = client.mint(&buyer, &count, &payment);
    assert_eq!(ids, vec![&env, 1u64, 2u64, 3u64]);
    assert_eq!(client.total_supply(), 3);
    invariants::assert_balance_matches_wallet(&client, &buyer);
}

#[test]
fn test_zero_count_rejected() {
    let (env, client, owner, _native) = setup();
    let buyer = Address::generate(&env);
    client.set_paused(&owner, &false);

    let (count, payment) = free(0);
    assert_eq!(
        client.try_mint(&buyer, &count, &payment),
        Err(Ok(Error::InvalidAmount.into()))
    );
    assert_eq!(client.total_supply(), 0);
    assert_eq!(client.treasury_balance(), 0);
}

#[test]
fn test_per_tx_cap_binds_regular_caller() {
    let (env, client, owner, _native) = setup();
    let buyer = Address::generate(&env);
    client.set_paused(&owner, &false);

    let (count, payment) = free(15);
    assert_eq!(
        client.try_mint(&buyer, &count, &payment),
        Err(Ok(Error::ExceedsPerTxLimit.into()))
    );
    assert_eq!(client.total_supply(), 0);
}

#[test]
fn test_per_tx_cap_binds_admin() {
    let (env, client, owner, _native) = setup();
    let admin = Address::generate(&env);
    client.grant_role(&owner, &admin, &Role::Admin);

    let (count, payment) = free(15);
    assert_eq!(
        client.try_mint(&admin, &count, &payment),
        Err(Ok(Error::ExceedsPerTxLimit.into()))
    );
}

#[test]
fn test_owner_bypasses_per_tx_cap() {
    let (_env, client, owner, _native) = setup();

    // Reserve mint: 15 in one call against a cap of 10.
    let (count, payment) = free(15);
    let ids = client.mint(&owner, &count, &payment);
    assert_eq!(ids.len(), 15);
    assert_eq!(ids.get(0), Some(1u64));
    assert_eq!(ids.get(14), Some(15u64));
    assert_eq!(client.total_supply(), 15);
    invariants::assert_balance_matches_wallet(&client, &owner);
}

#[test]
fn test_admin_skips_phase_gate() {
    let (env, client, owner, _native) = setup();
    let admin = Address::generate(&env);
    client.grant_role(&owner, &admin, &Role::Admin);

    // Paused + presale, admin is neither whitelisted nor a MINTER.
    client.set_whitelist_active(&owner, &true);
    let (count, payment) = free(2);
    let ids = client.mint(&admin, &count, &payment);
    assert_eq!(ids.len(), 2);
}

#[test]
fn test_supply_cap_exhausts() {
    let (env, client, owner, _native) = setup();
    let buyer = Address::generate(&env);
    client.set_paused(&owner, &false);
    client.set_max_supply(&owner, &4);

    let (count, payment) = free(3);
    client.mint(&buyer, &count, &payment);

    let (count, payment) = free(2);
    assert_eq!(
        client.try_mint(&buyer, &count, &payment),
        Err(Ok(Error::SupplyExhausted.into()))
    );

    // The last slot is still mintable.
    let (count, payment) = free(1);
    client.mint(&buyer, &count, &payment);
    assert_eq!(client.minted_ever(), 4);
}

#[test]
fn test_supply_cap_binds_owner_too() {
    let (_env, client, owner, _native) = setup();
    client.set_max_supply(&owner, &2);

    let (count, payment) = free(3);
    assert_eq!(
        client.try_mint(&owner, &count, &payment),
        Err(Ok(Error::SupplyExhausted.into()))
    );
}

#[test]
fn test_burn_gaps_are_never_reallocated() {
    let (env, client, owner, _native) = setup();
    client.set_paused(&owner, &false);
    let buyer = Address::generate(&env);

    let (count, payment) = free(3);
    let first = client.mint(&buyer, &count, &payment);
    invariants::assert_ids_fresh(0, &first);

    client.burn(&buyer, &2);

    let (count, payment) = free(2);
    let second = client.mint(&buyer, &count, &payment);
    invariants::assert_ids_fresh(3, &second);

    let wallet = client.wallet_of(&buyer);
    assert_eq!(wallet, vec![&env, 1u64, 3u64, 4u64, 5u64]);
    invariants::assert_wallet_ascending(&wallet);
    invariants::assert_balance_matches_wallet(&client, &buyer);
    invariants::assert_counters_consistent(&client);
}

#[test]
fn test_wallet_of_empty_holder() {
    let (env, client, _owner, _native) = setup();
    let nobody = Address::generate(&env);

    assert_eq!(client.wallet_of(&nobody), vec![&env]);
    assert_eq!(client.balance_of(&nobody), 0);
}

#[test]
fn test_supply_spread_across_holders() {
    let (env, client, owner, _native) = setup();
    client.set_paused(&owner, &false);
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);

    let (count, payment) = free(2);
    client.mint(&alice, &count, &payment);
    let (count, payment) = free(3);
    client.mint(&bob, &count, &payment);
    client.burn(&alice, &1);

    invariants::assert_supply_matches_holdings(
        &client,
        &[owner.clone(), alice.clone(), bob.clone()],
    );
}
