#![no_std]

use soroban_sdk::{contractclient, Address, Env};

/// Keep Factory Interface.
/// A factory materializes keeps: threshold-custody units backed by a group
/// of operators. The vendor forwards creation requests to whichever factory
/// is currently selected; a factory failure aborts the whole vendor call.
#[contractclient(name = "KeepFactoryClient")]
pub trait KeepFactory {
    /// Creates a keep with `group_size` members, of which `honest_threshold`
    /// must behave honestly, owned by `owner`. Returns the new keep address.
    fn create_keep(
        env: Env,
        group_size: u32,
        honest_threshold: u32,
        owner: Address,
    ) -> Address;
}
