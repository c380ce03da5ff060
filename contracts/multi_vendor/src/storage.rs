use soroban_sdk::{contracttype, Address, Env, Vec};

const INSTANCE_LIFETIME_THRESHOLD: u32 = 17280; // ~1 day in 5s ledgers
const INSTANCE_BUMP_AMOUNT: u32 = 518400; // ~30 days in 5s ledgers

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    Owner,
    Factories,
}

pub fn get_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Owner)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn has_owner(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

/// Registration history, insertion order preserved. Absent key reads as an
/// empty list.
pub fn get_factories(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&DataKey::Factories)
        .unwrap_or_else(|| Vec::new(env))
}

pub fn set_factories(env: &Env, factories: &Vec<Address>) {
    env.storage().instance().set(&DataKey::Factories, factories);
}

/// Extend instance storage TTL to keep contract alive.
pub fn extend_instance_ttl(env: &Env) {
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}
