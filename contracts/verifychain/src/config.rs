//! Deployment-time configuration: the registry authority and registry settings.
//!
//! Both are written once by the constructor and never change afterwards.

use soroban_sdk::{contracttype, Address, Env};

use crate::{events, DataKey, Error};

/// Default verification validity window: 365 days, in seconds.
pub const DEFAULT_VERIFICATION_PERIOD: u64 = 365 * 24 * 60 * 60;

/// Registry settings supplied at deployment.
///
/// # Fields
/// * `verification_period` - Seconds a verification (or renewal) stays valid. Must be non-zero.
/// * `allow_self_attestation` - Whether a principal may attest to itself.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegistryConfig {
    pub verification_period: u64,
    pub allow_self_attestation: bool,
}

impl RegistryConfig {
    /// One-year verification window, self-attestation permitted.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            verification_period: DEFAULT_VERIFICATION_PERIOD,
            allow_self_attestation: true,
        }
    }
}

pub fn initialize(e: &Env, admin: &Address, config: &RegistryConfig) {
    if e.storage().instance().has(&DataKey::Admin) {
        panic!("already initialized");
    }
    if config.verification_period == 0 {
        panic!("verification period must be positive");
    }
    e.storage().instance().set(&DataKey::Admin, admin);
    e.storage().instance().set(&DataKey::Config, config);
    e.storage().instance().set(&DataKey::IdentityCount, &0_u64);
    events::initialized(e, admin);
}

pub fn admin(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&DataKey::Admin)
        .unwrap_or_else(|| panic!("not initialized"))
}

pub fn get(e: &Env) -> RegistryConfig {
    e.storage()
        .instance()
        .get(&DataKey::Config)
        .unwrap_or_else(|| panic!("not initialized"))
}

/// Fails with `NotOwner` unless `caller` is the registry authority.
/// The caller's signature must already have been checked.
pub fn require_admin(e: &Env, caller: &Address) -> Result<(), Error> {
    if *caller != admin(e) {
        return Err(Error::NotOwner);
    }
    Ok(())
}
