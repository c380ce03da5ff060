#![cfg_attr(not(test), no_std)]

#[cfg(test)]
extern crate std;

mod errors;
mod events;
mod storage;


use soroban_sdk::{contract, contractimpl, Address, Env, Vec};

use keep_factory_interface::KeepFactoryClient;

use errors::VendorError;
use events::VendorEvents;

/// Multi-factory keep vendor.
///
/// Keeps the full registration history as an ordered list; the most
/// recently appended factory is the active one. Registering a new factory
/// supersedes the old one without removing it, and re-registering an
/// earlier address is rejected as a duplicate. Registration is owner-gated.
#[contract]
pub struct MultiKeepVendor;

#[contractimpl]
impl MultiKeepVendor {
    /// One-time wiring of the owner identity allowed to register factories.
    pub fn initialize(env: Env, owner: Address) -> Result<(), VendorError> {
        if storage::has_owner(&env) {
            return Err(VendorError::AlreadyInitialized);
        }

        storage::set_owner(&env, &owner);
        storage::extend_instance_ttl(&env);
        Ok(())
    }

    pub fn owner(env: Env) -> Option<Address> {
        storage::get_owner(&env)
    }

    /// Appends `factory` to the registration history, making it the active
    /// factory.
    ///
    /// Any address is a legal entry, including ones without contract code
    /// behind them; this vendor's trust model is the owner gate alone.
    ///
    /// # Errors
    /// | Error            | Condition                          |
    /// |------------------|------------------------------------|
    /// | `NotInitialized` | `initialize` has not run           |
    /// | `NotAuthorized`  | `caller` is not the owner          |
    /// | `DuplicateEntry` | `factory` is already in the list   |
    pub fn register_factory(
        env: Env,
        caller: Address,
        factory: Address,
    ) -> Result<(), VendorError> {
        caller.require_auth();

        let owner = storage::get_owner(&env).ok_or(VendorError::NotInitialized)?;
        if caller != owner {
            return Err(VendorError::NotAuthorized);
        }

        let mut factories = storage::get_factories(&env);
        if factories.contains(&factory) {
            return Err(VendorError::DuplicateEntry);
        }

        let factory_index = factories.len();
        factories.push_back(factory.clone());
        storage::set_factories(&env, &factories);
        storage::extend_instance_ttl(&env);

        VendorEvents::factory_registered(&env, &factory, factory_index);
        Ok(())
    }

    /// Returns the full registration history in insertion order.
    pub fn get_factories(env: Env) -> Vec<Address> {
        storage::get_factories(&env)
    }

    /// Returns the most recently registered factory.
    ///
    /// "Most recent wins" gives deployers a predictable upgrade path:
    /// register a new factory and it is immediately active, with no removal
    /// step for the old one.
    pub fn select_factory(env: Env) -> Result<Address, VendorError> {
        storage::get_factories(&env)
            .last()
            .ok_or(VendorError::EmptyRegistry)
    }

    /// Opens a keep through the active factory, forwarding the creation
    /// parameters untouched and returning the factory's result verbatim.
    pub fn open_keep(
        env: Env,
        group_size: u32,
        honest_threshold: u32,
        owner: Address,
    ) -> Result<Address, VendorError> {
        let factory = storage::get_factories(&env)
            .last()
            .ok_or(VendorError::EmptyRegistry)?;
        storage::extend_instance_ttl(&env);

        // All reads are done before the cross-contract call; nothing below
        // writes vendor state, so a reentrant registration from the factory
        // observes only consistent storage.
        let keep = KeepFactoryClient::new(&env, &factory).create_keep(
            &group_size,
            &honest_threshold,
            &owner,
        );

        VendorEvents::keep_opened(&env, &factory, &keep, &owner);
        Ok(keep)
    }
}
