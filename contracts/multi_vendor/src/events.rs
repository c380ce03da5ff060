use soroban_sdk::{Address, Env, Symbol};

pub struct VendorEvents;

impl VendorEvents {
    /// Emits a `registered` event after a factory is appended.
    ///
    /// Topics: `("registered", factory)`
    /// Data:   `factory_index`
    pub fn factory_registered(env: &Env, factory: &Address, factory_index: u32) {
        env.events().publish(
            (Symbol::new(env, "registered"), factory.clone()),
            factory_index,
        );
    }

    /// Emits a `keep_opened` event after the selected factory creates a keep.
    ///
    /// Topics: `("keep_opened", factory)`
    /// Data:   `(keep, owner)`
    pub fn keep_opened(env: &Env, factory: &Address, keep: &Address, owner: &Address) {
        env.events().publish(
            (Symbol::new(env, "keep_opened"), factory.clone()),
            (keep.clone(), owner.clone()),
        );
    }
}
