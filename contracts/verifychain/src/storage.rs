//! Storage lifetime management.
//!
//! Persistent entries and the contract instance are archived once their TTL
//! runs out. Every write and every read of a live record pushes its TTL
//! forward; every entry point does the same for the instance.

use soroban_sdk::{Env, IntoVal, TryFromVal, Val};

use crate::DataKey;

/// Ledgers closed per day at ~5s per ledger.
pub const DAY_IN_LEDGERS: u32 = 17_280;

pub const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const PERSISTENT_BUMP_AMOUNT: u32 = 120 * DAY_IN_LEDGERS;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - 7 * DAY_IN_LEDGERS;

pub fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn extend_persistent(e: &Env, key: &DataKey) {
    e.storage().persistent().extend_ttl(
        key,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

/// Read a persistent record, extending its TTL when present.
pub fn get<V>(e: &Env, key: &DataKey) -> Option<V>
where
    V: TryFromVal<Env, Val>,
{
    let value = e.storage().persistent().get(key);
    if value.is_some() {
        extend_persistent(e, key);
    }
    value
}

/// Write a persistent record and extend its TTL.
pub fn set<V>(e: &Env, key: &DataKey, value: &V)
where
    V: IntoVal<Env, Val>,
{
    e.storage().persistent().set(key, value);
    extend_persistent(e, key);
}

pub fn has(e: &Env, key: &DataKey) -> bool {
    e.storage().persistent().has(key)
}
