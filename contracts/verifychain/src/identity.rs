//! Identity registry.
//!
//! Owns the principal -> identity record mapping and is the single source of
//! truth for verification status, tier and reputation. Attestations and
//! disputes call [`require_verified`] at call time rather than caching status.
//!
//! Lifecycle: unregistered -> registered (unverified) -> verified (tier) ->
//! revoked (unverified). A verification also lapses once `expires_at` passes;
//! the owner can push it forward with [`renew`].

use soroban_sdk::{contracttype, Address, Env, String};

use crate::{config, events, storage, DataKey, Error};

/// Tier of an identity that has never been verified.
pub const TIER_NONE: u32 = 0;
/// Tier assigned when the authority verifies without naming one.
pub const TIER_BASIC: u32 = 1;

/// Identity record for one principal.
///
/// # Fields
/// * `name`, `email` - Self-asserted at registration; email is owner-updatable.
/// * `verified` - Set by the authority, cleared on revocation.
/// * `tier` - Verification level. Only written by verification; survives revocation.
/// * `reputation` - Authority-managed score, never below zero.
/// * `registered_at` - Ledger timestamp of registration.
/// * `verified_at` - Ledger timestamp of the last verification (0 if never).
/// * `expires_at` - End of the verification validity window (0 if never verified).
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Identity {
    pub name: String,
    pub email: String,
    pub verified: bool,
    pub tier: u32,
    pub reputation: u64,
    pub registered_at: u64,
    pub verified_at: u64,
    pub expires_at: u64,
}

impl Identity {
    /// Verified and still inside the validity window at `now`.
    #[must_use]
    #[inline]
    pub fn is_verified_at(&self, now: u64) -> bool {
        self.verified && now < self.expires_at
    }
}

/// Running reputation clamp: `max(0, current + delta)`, saturating at `u64::MAX`.
#[must_use]
pub fn apply_reputation_delta(current: u64, delta: i64) -> u64 {
    if delta < 0 {
        current.saturating_sub(delta.unsigned_abs())
    } else {
        current.saturating_add(delta.unsigned_abs())
    }
}

fn load(e: &Env, principal: &Address) -> Option<Identity> {
    storage::get(e, &DataKey::Identity(principal.clone()))
}

fn store(e: &Env, principal: &Address, identity: &Identity) {
    storage::set(e, &DataKey::Identity(principal.clone()), identity);
}

fn require_registered(e: &Env, principal: &Address) -> Result<Identity, Error> {
    load(e, principal).ok_or(Error::NotRegistered)
}

/// Fails with `NotVerified` unless `principal` is currently verified.
pub fn require_verified(e: &Env, principal: &Address) -> Result<(), Error> {
    if !is_verified(e, principal) {
        return Err(Error::NotVerified);
    }
    Ok(())
}

pub fn register(e: &Env, principal: &Address, name: String, email: String) -> Result<(), Error> {
    if storage::has(e, &DataKey::Identity(principal.clone())) {
        return Err(Error::AlreadyRegistered);
    }

    let identity = Identity {
        name,
        email,
        verified: false,
        tier: TIER_NONE,
        reputation: 0,
        registered_at: e.ledger().timestamp(),
        verified_at: 0,
        expires_at: 0,
    };
    store(e, principal, &identity);

    let next = count(e).saturating_add(1);
    e.storage().instance().set(&DataKey::IdentityCount, &next);

    events::identity_registered(e, principal, &identity.name, &identity.email);
    Ok(())
}

/// Mark `target` verified at `tier` and open a fresh validity window.
/// A lapsed verification may be verified again without revoking first.
pub fn verify(e: &Env, target: &Address, tier: u32) -> Result<(), Error> {
    let mut identity = require_registered(e, target)?;
    let now = e.ledger().timestamp();
    if identity.is_verified_at(now) {
        return Err(Error::AlreadyVerified);
    }

    let period = config::get(e).verification_period;
    identity.verified = true;
    identity.tier = tier;
    identity.verified_at = now;
    identity.expires_at = now.saturating_add(period);
    store(e, target, &identity);

    events::identity_verified(e, target, tier, identity.expires_at);
    Ok(())
}

pub fn revoke(e: &Env, target: &Address) -> Result<(), Error> {
    let mut identity = require_registered(e, target)?;
    identity.verified = false;
    store(e, target, &identity);

    events::identity_revoked(e, target);
    Ok(())
}

/// Restart the validity window. Does not restore a revoked verification.
pub fn renew(e: &Env, principal: &Address) -> Result<(), Error> {
    let mut identity = require_registered(e, principal)?;
    let period = config::get(e).verification_period;
    identity.expires_at = e.ledger().timestamp().saturating_add(period);
    store(e, principal, &identity);

    events::verification_renewed(e, principal, identity.expires_at);
    Ok(())
}

pub fn update_email(e: &Env, principal: &Address, email: String) -> Result<(), Error> {
    let mut identity = require_registered(e, principal)?;
    identity.email = email;
    store(e, principal, &identity);

    events::email_updated(e, principal, &identity.email);
    Ok(())
}

pub fn set_attribute(e: &Env, principal: &Address, key: String, value: String) -> Result<(), Error> {
    require_registered(e, principal)?;
    storage::set(e, &DataKey::Attribute(principal.clone(), key.clone()), &value);

    events::attribute_set(e, principal, &key, &value);
    Ok(())
}

pub fn get_attribute(e: &Env, principal: &Address, key: String) -> Option<String> {
    storage::get(e, &DataKey::Attribute(principal.clone(), key))
}

pub fn update_reputation(e: &Env, target: &Address, delta: i64) -> Result<(), Error> {
    let mut identity = require_registered(e, target)?;
    identity.reputation = apply_reputation_delta(identity.reputation, delta);
    store(e, target, &identity);

    events::reputation_updated(e, target, delta, identity.reputation);
    Ok(())
}

pub fn get(e: &Env, principal: &Address) -> Option<Identity> {
    load(e, principal)
}

pub fn is_verified(e: &Env, principal: &Address) -> bool {
    let now = e.ledger().timestamp();
    load(e, principal).map_or(false, |identity| identity.is_verified_at(now))
}

pub fn count(e: &Env) -> u64 {
    e.storage()
        .instance()
        .get(&DataKey::IdentityCount)
        .unwrap_or(0)
}

pub fn reputation(e: &Env, principal: &Address) -> u64 {
    load(e, principal).map_or(0, |identity| identity.reputation)
}
