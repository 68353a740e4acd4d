//! # Role-Based Access Control
//!
//! OWNER is a distinguished singleton written once at init and kept outside
//! the grantable role table, so no revocation path can ever remove it.
//! ADMIN and MINTER are multi-membership grants stored as a capability list
//! per principal; one address may hold both.
//!
//! | Capability            | OWNER | ADMIN | MINTER |
//! |-----------------------|-------|-------|--------|
//! | grant / revoke roles  |   ✔   |   ✔   |        |
//! | sale configuration    |   ✔   |   ✔   |        |
//! | mint while paused     |   ✔   |   ✔   |   ✔    |
//! | mint free of charge   |   ✔   |   ✔   |   ✔    |
//! | bypass per-tx cap     |   ✔   |       |        |
//! | withdraw treasury     |   ✔   |       |        |

use soroban_sdk::{contracttype, panic_with_error, vec, Address, Env, Vec};

use crate::Error;

/// Grantable role tags. OWNER is deliberately not representable here.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Role {
    Admin,
    Minter,
}

/// Role storage lives in its own key space, separate from sale/registry keys.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
enum RbacKey {
    /// The singular contract owner (Instance).
    Owner,
    /// Granted role tags per principal (Persistent).
    Roles(Address),
}

/// Record the contract owner. Callable once; the owner slot is immutable.
pub fn init_owner(env: &Env, owner: &Address) {
    if env.storage().instance().has(&RbacKey::Owner) {
        panic_with_error!(env, Error::AlreadyInitialized);
    }
    env.storage().instance().set(&RbacKey::Owner, owner);
}

/// The contract owner. An uninitialized contract has no owner, so every
/// gated path fails closed with `Unauthorized`.
pub fn owner(env: &Env) -> Address {
    match env.storage().instance().get(&RbacKey::Owner) {
        Some(o) => o,
        None => panic_with_error!(env, Error::Unauthorized),
    }
}

pub fn is_owner(env: &Env, who: &Address) -> bool {
    owner(env) == *who
}

/// All role tags granted to `who`. Empty when none.
pub fn roles_of(env: &Env, who: &Address) -> Vec<Role> {
    env.storage()
        .persistent()
        .get(&RbacKey::Roles(who.clone()))
        .unwrap_or_else(|| vec![env])
}

pub fn has_role(env: &Env, who: &Address, role: &Role) -> bool {
    roles_of(env, who).contains(role.clone())
}

/// Grant `role` to `target`. Caller must be OWNER or ADMIN.
/// Granting an already-held role is a no-op.
pub fn grant_role(env: &Env, caller: &Address, target: &Address, role: &Role) {
    require_admin(env, caller);
    let key = RbacKey::Roles(target.clone());
    let mut roles = roles_of(env, target);
    if !roles.contains(role.clone()) {
        roles.push_back(role.clone());
        env.storage().persistent().set(&key, &roles);
    }
}

/// Revoke `role` from `target`. Caller must be OWNER or ADMIN.
/// Revoking a role that was never granted is a no-op. The OWNER slot is
/// unreachable from here: it is not stored in the role table at all.
pub fn revoke_role(env: &Env, caller: &Address, target: &Address, role: &Role) {
    require_admin(env, caller);
    let key = RbacKey::Roles(target.clone());
    let mut roles = roles_of(env, target);
    if let Some(idx) = roles.first_index_of(role.clone()) {
        roles.remove(idx);
        if roles.is_empty() {
            env.storage().persistent().remove(&key);
        } else {
            env.storage().persistent().set(&key, &roles);
        }
    }
}

/// Gate for admin-only operations: OWNER or any ADMIN holder.
pub fn require_admin(env: &Env, caller: &Address) {
    if !is_owner(env, caller) && !has_role(env, caller, &Role::Admin) {
        panic_with_error!(env, Error::Unauthorized);
    }
}

/// Gate for owner-only operations (treasury withdrawal).
pub fn require_owner(env: &Env, caller: &Address) {
    if !is_owner(env, caller) {
        panic_with_error!(env, Error::Unauthorized);
    }
}
