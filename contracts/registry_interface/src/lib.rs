#![no_std]

use soroban_sdk::{contractclient, Address, Env};

/// Authorization Registry Interface.
/// A registry instance is shared by many vendors and owns its own mutation
/// discipline; vendors only ever read from it. Every gated vendor operation
/// re-queries the registry, so approval or upgrader changes take effect on
/// the next call.
#[contractclient(name = "AuthorizationRegistryClient")]
pub trait AuthorizationRegistry {
    /// Returns true if `contract` is approved to act in a sensitive role,
    /// such as becoming a vendor's keep factory.
    fn is_approved(env: Env, contract: Address) -> bool;

    /// Returns the identity allowed to swap out `vendor`'s factory and
    /// contract code, or None if no upgrader has been assigned.
    fn upgrader_of(env: Env, vendor: Address) -> Option<Address>;
}
